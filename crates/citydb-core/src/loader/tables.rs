// crates/citydb-core/src/loader/tables.rs

//! Row parsers for the country, state and city tables.

use super::layout::{CityLayout, TableLayout};
use crate::error::{CityDbError, Result};
use crate::geo::Coordinates;
use crate::model::{City, CountryTable, StateTable};
use crate::text::{sanitize_display, DisplayCharset, InputEncoding};
use csv::{ByteRecord, ReaderBuilder};
use std::io::Read;
use std::str::FromStr;

/// One data row plus where it came from, for error messages.
struct Row<'a> {
    record: &'a ByteRecord,
    source: &'a str,
    encoding: InputEncoding,
}

impl Row<'_> {
    fn line(&self) -> u64 {
        self.record.position().map_or(0, |p| p.line())
    }

    fn malformed(&self, reason: impl Into<String>) -> CityDbError {
        CityDbError::Malformed {
            file: self.source.to_string(),
            line: self.line(),
            reason: reason.into(),
        }
    }

    fn text(&self, column: usize) -> Result<String> {
        let bytes = self
            .record
            .get(column)
            .ok_or_else(|| self.malformed(format!("missing column {column}")))?;
        self.encoding
            .decode(bytes)
            .ok_or_else(|| self.malformed(format!("column {column} is not valid {:?} text", self.encoding)))
    }

    fn number<T: FromStr>(&self, column: usize, what: &str) -> Result<T> {
        let raw = self.text(column)?;
        raw.trim()
            .parse()
            .map_err(|_| self.malformed(format!("invalid {what} '{raw}'")))
    }

    fn require_width(&self, width: usize) -> Result<()> {
        if self.record.len() < width {
            return Err(self.malformed(format!(
                "expected at least {width} columns, found {}",
                self.record.len()
            )));
        }
        Ok(())
    }
}

/// Reads `(key, value)` pairs. Rows with an empty key are skipped.
fn read_pairs<R: Read>(reader: R, layout: &TableLayout, source: &str) -> Result<Vec<(String, String)>> {
    let mut csv = ReaderBuilder::new()
        .delimiter(layout.delimiter)
        .has_headers(layout.has_header)
        .flexible(true)
        .from_reader(reader);

    let mut pairs = Vec::new();
    let mut record = ByteRecord::new();
    while csv.read_byte_record(&mut record)? {
        let row = Row {
            record: &record,
            source,
            encoding: layout.encoding,
        };
        row.require_width(layout.width())?;
        let key = row.text(layout.key_column)?;
        if key.trim().is_empty() {
            continue;
        }
        pairs.push((key, row.text(layout.value_column)?));
    }
    Ok(pairs)
}

pub(crate) fn read_countries<R: Read>(reader: R, layout: &TableLayout, source: &str) -> Result<CountryTable> {
    Ok(read_pairs(reader, layout, source)?.into_iter().collect())
}

pub(crate) fn read_states<R: Read>(reader: R, layout: &TableLayout, source: &str) -> Result<StateTable> {
    Ok(read_pairs(reader, layout, source)?.into_iter().collect())
}

/// Parses every city row, resolving country codes and US state names.
///
/// The first bad row aborts the whole load.
pub(crate) fn read_cities<R: Read>(
    reader: R,
    layout: &CityLayout,
    charset: DisplayCharset,
    countries: &CountryTable,
    states: &StateTable,
    source: &str,
) -> Result<Vec<City>> {
    let mut csv = ReaderBuilder::new()
        .delimiter(layout.delimiter)
        .has_headers(layout.has_header)
        .quoting(layout.quoting)
        .flexible(true)
        .from_reader(reader);

    let width = layout.width();
    let mut cities = Vec::new();
    let mut record = ByteRecord::new();
    while csv.read_byte_record(&mut record)? {
        let row = Row {
            record: &record,
            source,
            encoding: layout.encoding,
        };
        row.require_width(width)?;

        let name = sanitize_display(&row.text(layout.name)?, charset);
        let country_code = row.text(layout.country_code)?;

        let population = if layout.blank_population_as_zero && row.text(layout.population)?.trim().is_empty() {
            0
        } else {
            row.number::<u64>(layout.population, "population")?
        };

        let lat = row.number::<f64>(layout.latitude, "latitude")?;
        let lon = row.number::<f64>(layout.longitude, "longitude")?;
        let position = Coordinates::new(lat, lon).map_err(|e| row.malformed(e.to_string()))?;

        let mut city = City::new(&name, &country_code, population, position, countries)?;
        if let Some(col) = layout.state {
            city = city.with_us_state(&row.text(col)?, states);
        }
        cities.push(city);
    }
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: &str = "Alabama,AL\nNew York,NY\n";

    fn countries() -> CountryTable {
        [("US", "United States"), ("FR", "France")].into_iter().collect()
    }

    fn geonames_row(name: &str, lat: &str, lon: &str, cc: &str, admin1: &str, pop: &str) -> String {
        // 19 columns: id, name, asciiname, alternatenames, lat, lon, class, code,
        // cc, cc2, admin1..admin4, population, elevation, dem, timezone, modified
        format!(
            "1\t{name}\t{name}\t\t{lat}\t{lon}\tP\tPPL\t{cc}\t\t{admin1}\t\t\t\t{pop}\t\t0\tUTC\t2024-01-01\n"
        )
    }

    fn parse_geonames(body: &str) -> Result<Vec<City>> {
        let states = read_states(STATES.as_bytes(), &TableLayout::us_states(), "usstates.csv").unwrap();
        let input = format!("header\n{body}");
        read_cities(
            input.as_bytes(),
            &CityLayout::geonames(),
            DisplayCharset::Utf8,
            &countries(),
            &states,
            "cities.txt",
        )
    }

    #[test]
    fn country_table_columns() {
        let csv = "name,x,y,z,ISO3166-1-Alpha-2,a,b,official_name_en\n\
                   a,b,c,d,US,f,g,United States\na,b,c,d,,f,g,Nowhere\na,b,c,d,fr,f,g,France\n";
        let table = read_countries(csv.as_bytes(), &TableLayout::country_codes(), "countries").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.name_for("FR"), Some("France"));
        assert_eq!(table.name_for("ISO3166-1-Alpha-2"), None);
    }

    #[test]
    fn short_country_row_is_malformed() {
        let csv = "name,x,y,z,code,a,b,official_name_en\nUS,United States\n";
        let err = read_countries(csv.as_bytes(), &TableLayout::country_codes(), "countries").unwrap_err();
        assert!(matches!(err, CityDbError::Malformed { line: 2, .. }), "{err}");
    }

    #[test]
    fn geonames_rows() {
        let body = geonames_row("New York City", "40.71427", "-74.00597", "US", "NY", "8175133")
            + &geonames_row("Paris", "48.85341", "2.3488", "FR", "11", "2138551");
        let cities = parse_geonames(&body).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].us_state.as_deref(), Some("NY"));
        assert_eq!(cities[0].us_state_name.as_deref(), Some("New York"));
        assert_eq!(cities[1].country, "France");
        assert_eq!(cities[1].us_state, None);
        assert_eq!(cities[1].population, 2_138_551);
    }

    #[test]
    fn bare_quotes_in_geonames_names() {
        let body = geonames_row("Pa\"ris", "48.85", "2.35", "FR", "11", "10");
        let cities = parse_geonames(&body).unwrap();
        assert_eq!(cities[0].name, "Pa\"ris");
    }

    #[test]
    fn bad_population_reports_line() {
        let body = geonames_row("Paris", "48.85", "2.35", "FR", "11", "10")
            + &geonames_row("Lyon", "45.75", "4.85", "FR", "84", "lots");
        let err = parse_geonames(&body).unwrap_err();
        match err {
            CityDbError::Malformed { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("population"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn out_of_range_latitude_is_malformed() {
        let body = geonames_row("Nowhere", "95.0", "0.0", "FR", "", "10");
        assert!(matches!(parse_geonames(&body), Err(CityDbError::Malformed { .. })));
    }

    #[test]
    fn unknown_country_is_fatal() {
        let body = geonames_row("Berlin", "52.52", "13.40", "DE", "16", "3426354");
        assert!(matches!(
            parse_geonames(&body),
            Err(CityDbError::UnknownCountry { ref code, .. }) if code == "DE"
        ));
    }

    #[test]
    fn maxmind_latin1_rows() {
        let mut input = b"Country,City,AccentCity,Region,Population,Latitude,Longitude\n".to_vec();
        input.extend_from_slice(b"fr,paris,Paris,A8,2110694,48.866667,2.333333\n");
        input.extend_from_slice(b"fr,arles,Arl\xe8s,B8,,43.683333,4.633333\n");
        input.extend_from_slice(b"us,albany,Albany,NY,93576,42.6525,-73.7566667\n");
        let states = read_states(STATES.as_bytes(), &TableLayout::us_states(), "usstates.csv").unwrap();

        let cities = read_cities(
            input.as_slice(),
            &CityLayout::maxmind(),
            DisplayCharset::Ascii,
            &countries(),
            &states,
            "worldcitiespop.txt",
        )
        .unwrap();

        assert_eq!(cities.len(), 3);
        assert_eq!(cities[1].name, "Arls");
        assert_eq!(cities[1].population, 0);
        assert_eq!(cities[2].country, "United States");
        assert_eq!(cities[2].us_state.as_deref(), Some("NY"));
    }
}
