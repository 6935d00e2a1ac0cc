// crates/citydb-core/src/traits.rs
use crate::model::City;
use crate::text::{fold_case, fold_key};

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Exact matches ([`NameMatch::is_named`]) ignore case only, via
/// [`fold_case`]. Substring matches ([`NameMatch::name_contains`]) also
/// ignore accents, via [`fold_key`]. Implementors provide a `&str` view of
/// their canonical name via [`NameMatch::name_str`].
///
/// # Examples
/// ```rust
/// use citydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Łódź").is_named("ŁÓDŹ"));
/// assert!(!Place("Łódź").is_named("lodz"));
/// assert!(Place("Zürich").name_contains("zuri"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-folded key of the canonical name, as used by the name index.
    #[inline]
    fn name_key(&self) -> String {
        fold_case(self.name_str())
    }

    /// Case-insensitive exact name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_key() == fold_case(q)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}
