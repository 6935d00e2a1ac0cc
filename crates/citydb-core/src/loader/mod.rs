// crates/citydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to the row
//! parsers in `tables`.
//!
//! Countries and states are read before cities, because every city resolves
//! its country code (and US state name) while it is being built.

use crate::error::Result;
use crate::model::CityDb;
use crate::text::DisplayCharset;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub mod common_io;
pub mod layout;
mod tables;

pub use layout::{
    CityLayout, DatasetConfig, TableLayout, CITIES_FILE, COUNTRIES_FILE, MAXMIND_CITIES_FILE,
    STATES_FILE,
};

/// In-memory sources for [`CityDb::from_readers`].
pub struct Sources<C, S, Y> {
    pub countries: C,
    pub states: S,
    pub cities: Y,
}

impl CityDb {
    /// Loads all three tables described by `config`.
    ///
    /// Any missing file, malformed row or unknown country code aborts the
    /// load; there is no partial dataset.
    pub fn load(config: &DatasetConfig) -> Result<Self> {
        let sources = Sources {
            countries: common_io::open_stream(&config.countries_path)?,
            states: common_io::open_stream(&config.states_path)?,
            cities: common_io::open_stream(&config.cities_path)?,
        };
        let names = [
            display(&config.countries_path),
            display(&config.states_path),
            display(&config.cities_path),
        ];
        Self::load_sources(sources, config, names)
    }

    /// Loads from arbitrary readers, using the layouts and charset of
    /// `config` (its paths are ignored).
    pub fn from_readers<C: Read, S: Read, Y: Read>(
        sources: Sources<C, S, Y>,
        config: &DatasetConfig,
    ) -> Result<Self> {
        Self::load_sources(
            sources,
            config,
            [
                "<countries>".to_string(),
                "<states>".to_string(),
                "<cities>".to_string(),
            ],
        )
    }

    fn load_sources<C: Read, S: Read, Y: Read>(
        sources: Sources<C, S, Y>,
        config: &DatasetConfig,
        [countries_name, states_name, cities_name]: [String; 3],
    ) -> Result<Self> {
        let countries = tables::read_countries(sources.countries, &config.country_layout, &countries_name)?;
        debug!(source = %countries_name, entries = countries.len(), "country table loaded");

        let states = tables::read_states(sources.states, &config.state_layout, &states_name)?;
        debug!(source = %states_name, entries = states.len(), "state table loaded");

        let cities = tables::read_cities(
            sources.cities,
            &config.city_layout,
            config.charset,
            &countries,
            &states,
            &cities_name,
        )?;
        debug!(source = %cities_name, entries = cities.len(), "city table loaded");

        let db = CityDb::from_cities(countries, states, cities);
        let stats = db.stats();
        info!(
            countries = stats.countries,
            states = stats.states,
            cities = stats.cities,
            "dataset ready"
        );
        Ok(db)
    }

    /// Loads the sample dataset bundled in this crate's `data/` directory.
    pub fn load_sample() -> Result<Self> {
        Self::load(&DatasetConfig::in_dir(DatasetConfig::sample_data_dir()))
    }

    /// Loads the default file names from `dir` with the given display charset.
    pub fn load_dir(dir: impl AsRef<Path>, charset: DisplayCharset) -> Result<Self> {
        Self::load(&DatasetConfig::in_dir(dir).with_charset(charset))
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
