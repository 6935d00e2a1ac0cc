// crates/citydb-core/src/text.rs

//! Text helpers shared by the loader and the query engine.
//!
//! Exact name comparisons (descriptor lookups of cities, countries, state
//! names) go through [`fold_case`]: case-insensitive, accents significant.
//! Substring search uses the looser [`fold_key`]. ASCII identifiers such as
//! ISO country codes and state codes are compared with
//! `eq_ignore_ascii_case`.

use serde::{Deserialize, Serialize};

/// Accent-insensitive key used by substring search.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use citydb_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("NEW YORK"), "new york");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Case-only key: trimmed and lowercased, accents and script untouched.
///
/// ```rust
/// use citydb_core::text::fold_case;
///
/// assert_eq!(fold_case(" ZÜRICH "), "zürich");
/// assert_ne!(fold_case("Córdoba"), fold_case("Cordoba"));
/// ```
pub fn fold_case(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Equality under [`fold_case`].
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    fold_case(a) == fold_case(b)
}

/// Character subset city names are reduced to before display.
///
/// Characters outside the subset are dropped, mirroring an "encode with
/// ignore" round trip through the terminal encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCharset {
    /// Any printable Unicode; only control characters are removed.
    #[default]
    Utf8,
    /// Code points up to U+00FF.
    Latin1,
    /// 7-bit ASCII.
    Ascii,
}

impl DisplayCharset {
    fn keeps(self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self {
            DisplayCharset::Utf8 => true,
            DisplayCharset::Latin1 => (ch as u32) <= 0xFF,
            DisplayCharset::Ascii => ch.is_ascii(),
        }
    }
}

/// Drops every character the given charset cannot display.
pub fn sanitize_display(s: &str, charset: DisplayCharset) -> String {
    s.chars().filter(|&ch| charset.keeps(ch)).collect()
}

/// Byte encoding of an input file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
}

impl InputEncoding {
    /// Decodes one field. Returns `None` when the bytes are not valid in this
    /// encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            InputEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            InputEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}
