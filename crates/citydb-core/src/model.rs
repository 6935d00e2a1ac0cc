// crates/citydb-core/src/model.rs
use crate::common::{DbStats, US_COUNTRY_NAME};
use crate::error::{CityDbError, Result};
use crate::geo::Coordinates;
use crate::text::equals_ignore_case;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// ISO country code → display name.
///
/// Codes are ASCII, so lookups are case-insensitive via upper-casing the key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryTable {
    by_code: HashMap<String, String>,
}

impl CountryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a mapping. A later row for the same code wins.
    pub fn insert(&mut self, code: &str, name: &str) {
        self.by_code
            .insert(code.trim().to_ascii_uppercase(), name.trim().to_string());
    }

    /// Display name for a code, case-insensitive (`"us"`, `"US"`).
    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.by_code
            .get(&code.trim().to_ascii_uppercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// `(code, name)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_code.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for CountryTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (code, name) in iter {
            table.insert(code.as_ref(), name.as_ref());
        }
        table
    }
}

/// US state code → full state name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StateTable {
    by_code: HashMap<String, String>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: &str, name: &str) {
        self.by_code
            .insert(code.trim().to_ascii_uppercase(), name.trim().to_string());
    }

    /// Full name for a two-letter code, case-insensitive.
    pub fn name_for(&self, code: &str) -> Option<&str> {
        self.by_code
            .get(&code.trim().to_ascii_uppercase())
            .map(String::as_str)
    }

    /// Resolves a full state name (`"new york"`, `"New York"`) to its code.
    ///
    /// Linear scan; the table has a few dozen entries.
    pub fn code_for_name(&self, name: &str) -> Option<&str> {
        self.by_code
            .iter()
            .find(|(_, full)| equals_ignore_case(full, name))
            .map(|(code, _)| code.as_str())
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.name_for(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (code, name) in iter {
            table.insert(code.as_ref(), name.as_ref());
        }
        table
    }
}

/// A city entry.
///
/// The country display name is resolved once at construction; cities are
/// never re-resolved afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub country_code: String,
    pub country: String,
    pub population: u64,
    pub latitude: f64,
    pub longitude: f64,
    /// Two-letter state code, only for cities in the United States.
    pub us_state: Option<String>,
    /// Full state name resolved from the state table.
    pub us_state_name: Option<String>,
    /// 1-based population rank, assigned by [`CityDb::from_cities`].
    #[serde(skip)]
    pub(crate) rank: usize,
}

impl City {
    /// Builds a city, resolving `country_code` through `countries`.
    ///
    /// Fails with [`CityDbError::UnknownCountry`] if the code is not in the
    /// table.
    pub fn new(
        name: &str,
        country_code: &str,
        population: u64,
        position: Coordinates,
        countries: &CountryTable,
    ) -> Result<Self> {
        let country = countries
            .name_for(country_code)
            .ok_or_else(|| CityDbError::UnknownCountry {
                code: country_code.to_string(),
                city: name.to_string(),
            })?;

        Ok(Self {
            name: name.to_string(),
            country_code: country_code.trim().to_string(),
            country: country.to_string(),
            population,
            latitude: position.lat,
            longitude: position.lon,
            us_state: None,
            us_state_name: None,
            rank: 0,
        })
    }

    /// Attaches a state code (and its full name, when known).
    ///
    /// Ignored for non-US cities and for blank codes.
    pub fn with_us_state(mut self, code: &str, states: &StateTable) -> Self {
        let code = code.trim();
        if !self.is_us() || code.is_empty() {
            return self;
        }
        self.us_state_name = states.name_for(code).map(str::to_string);
        self.us_state = Some(code.to_ascii_uppercase());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for cities whose resolved country name is the United States.
    ///
    /// The code alone is not enough: a country table may map `US` elsewhere.
    pub fn is_us(&self) -> bool {
        self.country == US_COUNTRY_NAME
    }

    #[inline]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.latitude,
            lon: self.longitude,
        }
    }

    /// Great-circle distance to `other` in kilometres.
    #[inline]
    pub fn distance_to(&self, other: &City) -> f64 {
        self.coordinates().distance_to(&other.coordinates())
    }

    /// 1-based population rank; `0` for a city not owned by a [`CityDb`].
    pub fn rank(&self) -> usize {
        self.rank
    }
}

/// The loaded dataset: country and state tables plus every city, sorted
/// descending by population.
///
/// Built once, then only read. Share it by reference.
#[derive(Debug, Clone)]
pub struct CityDb {
    pub(crate) countries: CountryTable,
    pub(crate) states: StateTable,
    /// Population-descending. Never reordered after construction.
    pub(crate) cities: Vec<City>,
    /// Case-folded name → indices into `cities`, built on first lookup.
    pub(crate) name_index: OnceCell<HashMap<String, Vec<usize>>>,
}

impl CityDb {
    /// Assembles a database from already constructed cities.
    ///
    /// Cities are stably sorted by population (descending, ties keep input
    /// order) and ranked.
    pub fn from_cities(countries: CountryTable, states: StateTable, mut cities: Vec<City>) -> Self {
        cities.sort_by(|a, b| b.population.cmp(&a.population));
        for (idx, city) in cities.iter_mut().enumerate() {
            city.rank = idx + 1;
        }

        Self {
            countries,
            states,
            cities,
            name_index: OnceCell::new(),
        }
    }

    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    pub fn states(&self) -> &StateTable {
        &self.states
    }

    /// All cities in rank order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            states: self.states.len(),
            cities: self.cities.len(),
        }
    }
}
