// crates/citydb-core/src/loader/layout.rs

//! Column layouts and file locations of the three input tables.
//!
//! The city table has shipped in more than one shape (GeoNames dumps,
//! MaxMind world cities); each shape is a [`CityLayout`] preset instead of a
//! separate loader.

use crate::text::{DisplayCharset, InputEncoding};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const COUNTRIES_FILE: &str = "countrycodes.csv";
pub const STATES_FILE: &str = "usstates.csv";
pub const CITIES_FILE: &str = "cities.txt";
pub const MAXMIND_CITIES_FILE: &str = "worldcitiespop.txt";

/// A two-column lookup table (code → name) inside a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    pub delimiter: u8,
    pub has_header: bool,
    pub encoding: InputEncoding,
    pub key_column: usize,
    pub value_column: usize,
}

impl TableLayout {
    /// datahub.io `country-codes.csv`: a header row, then ISO alpha-2 in
    /// column 4 and the English short name in column 7.
    pub const fn country_codes() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            encoding: InputEncoding::Utf8,
            key_column: 4,
            value_column: 7,
        }
    }

    /// `name,code` rows.
    pub const fn us_states() -> Self {
        Self {
            delimiter: b',',
            has_header: false,
            encoding: InputEncoding::Utf8,
            key_column: 1,
            value_column: 0,
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.key_column.max(self.value_column) + 1
    }
}

/// Where each city attribute lives in a city row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityLayout {
    pub delimiter: u8,
    pub has_header: bool,
    /// Honour `"` quoting. GeoNames dumps contain bare quotes in names and
    /// must be read with quoting off.
    pub quoting: bool,
    pub encoding: InputEncoding,
    pub name: usize,
    pub country_code: usize,
    pub population: usize,
    pub latitude: usize,
    pub longitude: usize,
    /// State / admin-1 code column, consulted for US cities only.
    pub state: Option<usize>,
    /// Read an empty population field as `0` instead of rejecting the row.
    pub blank_population_as_zero: bool,
}

impl CityLayout {
    /// GeoNames `citiesNNNN.txt`: tab separated UTF-8.
    pub const fn geonames() -> Self {
        Self {
            delimiter: b'\t',
            has_header: true,
            quoting: false,
            encoding: InputEncoding::Utf8,
            name: 2,
            country_code: 8,
            population: 14,
            latitude: 4,
            longitude: 5,
            state: Some(10),
            blank_population_as_zero: false,
        }
    }

    /// MaxMind `worldcitiespop.txt`: comma separated Latin-1 with lower-case
    /// country codes and many rows without a population.
    pub const fn maxmind() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            quoting: true,
            encoding: InputEncoding::Latin1,
            name: 2,
            country_code: 0,
            population: 4,
            latitude: 5,
            longitude: 6,
            state: Some(3),
            blank_population_as_zero: true,
        }
    }

    pub(crate) fn width(&self) -> usize {
        [
            self.name,
            self.country_code,
            self.population,
            self.latitude,
            self.longitude,
        ]
        .into_iter()
        .chain(self.state)
        .max()
        .unwrap_or(0)
            + 1
    }
}

impl Default for CityLayout {
    fn default() -> Self {
        Self::geonames()
    }
}

/// Everything needed to load a [`CityDb`](crate::CityDb) from disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub countries_path: PathBuf,
    pub country_layout: TableLayout,
    pub states_path: PathBuf,
    pub state_layout: TableLayout,
    pub cities_path: PathBuf,
    pub city_layout: CityLayout,
    /// Characters city names are reduced to.
    pub charset: DisplayCharset,
}

impl DatasetConfig {
    /// Default file names and the GeoNames layout inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            countries_path: dir.join(COUNTRIES_FILE),
            country_layout: TableLayout::country_codes(),
            states_path: dir.join(STATES_FILE),
            state_layout: TableLayout::us_states(),
            cities_path: dir.join(CITIES_FILE),
            city_layout: CityLayout::geonames(),
            charset: DisplayCharset::Utf8,
        }
    }

    /// Like [`DatasetConfig::in_dir`] but reading `worldcitiespop.txt` with
    /// the MaxMind layout.
    pub fn maxmind_in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            cities_path: dir.join(MAXMIND_CITIES_FILE),
            city_layout: CityLayout::maxmind(),
            ..Self::in_dir(dir)
        }
    }

    /// The small sample dataset shipped in this crate's `data/` directory.
    pub fn sample_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn with_charset(mut self, charset: DisplayCharset) -> Self {
        self.charset = charset;
        self
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}
