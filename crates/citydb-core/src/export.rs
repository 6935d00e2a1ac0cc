// crates/citydb-core/src/export.rs

//! Batch export of city coordinates as JSON, e.g. for a map page.

use crate::error::Result;
use crate::model::{City, CityDb};
use crate::report::{display_name, NameStyle};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// Population floor used when resolving export names.
pub const EXPORT_MIN_POPULATION: u64 = 10_000;

/// One exported location. Field names match what map front-ends expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub name: String,
    pub lat: f64,
    pub long: f64,
}

impl LocationRecord {
    pub fn from_city(city: &City) -> Self {
        Self {
            name: display_name(city, NameStyle::Abbreviated),
            lat: round4(city.latitude),
            long: round4(city.longitude),
        }
    }
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

/// Result of [`export_locations`]: resolved records plus the names that did
/// not match anything.
#[derive(Debug, Clone, Default)]
pub struct ExportOutcome {
    pub records: Vec<LocationRecord>,
    pub missing: Vec<String>,
}

/// Resolves each descriptor with [`CityDb::find_city`] at
/// [`EXPORT_MIN_POPULATION`] and keeps the most populous match.
///
/// Unmatched names are collected and skipped; the batch always completes.
pub fn export_locations<I, S>(db: &CityDb, names: I) -> ExportOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut outcome = ExportOutcome::default();
    for name in names {
        let name = name.as_ref();
        match db.find_city(name, EXPORT_MIN_POPULATION).first() {
            Some(city) => outcome.records.push(LocationRecord::from_city(city)),
            None => {
                tracing::warn!(name, "no city matched export entry");
                outcome.missing.push(name.to_string());
            }
        }
    }
    outcome
}

/// Reads one descriptor per line, skipping blank lines.
pub fn read_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim_end_matches(['\r', '\n']);
        if !name.trim().is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Writes `records` as a pretty-printed JSON array.
///
/// With `var_name`, the array is wrapped as a JavaScript statement
/// (`var locations = [...];`) so a page can load it with a `<script>` tag.
pub fn write_json<W: Write>(mut writer: W, records: &[LocationRecord], var_name: Option<&str>) -> Result<()> {
    if let Some(var) = var_name {
        write!(writer, "var {var} = ")?;
    }
    serde_json::to_writer_pretty(&mut writer, records)?;
    if var_name.is_some() {
        write!(writer, ";")?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
