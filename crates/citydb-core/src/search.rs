// crates/citydb-core/src/search.rs

//! Descriptor lookup: `"name[, state][, country]"` → matching cities.

use crate::common::{US_COUNTRY_CODE, US_COUNTRY_NAME};
use crate::model::{City, CityDb, StateTable};
use crate::text::{equals_ignore_case, fold_case, fold_key};
use crate::traits::NameMatch;
use std::collections::HashMap;

/// A parsed city descriptor.
///
/// With one token only the name is set. With two or more the last token is
/// the country. With three or more the second-to-last token is the US state
/// (only consulted when the country is the United States).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub name: String,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl Descriptor {
    /// Splits on commas and trims every token. Returns `None` for a blank
    /// name.
    ///
    /// ```rust
    /// use citydb_core::search::Descriptor;
    ///
    /// let d = Descriptor::parse("Portland, OR, US").unwrap();
    /// assert_eq!(d.name, "Portland");
    /// assert_eq!(d.state.as_deref(), Some("OR"));
    /// assert_eq!(d.country.as_deref(), Some("US"));
    /// ```
    pub fn parse(query: &str) -> Option<Self> {
        let mut tokens = query.split(',').map(str::trim);
        let name = tokens.next().filter(|n| !n.is_empty())?.to_string();
        let rest: Vec<&str> = tokens.filter(|t| !t.is_empty()).collect();

        let country = rest.last().map(|c| c.to_string());
        let state = if rest.len() >= 2 {
            rest.get(rest.len() - 2).map(|s| s.to_string())
        } else {
            None
        };
        Some(Self {
            name,
            state,
            country,
        })
    }

    /// True when the country token names the United States (name or code).
    pub fn targets_us(&self) -> bool {
        self.country.as_deref().is_some_and(|c| {
            equals_ignore_case(c, US_COUNTRY_NAME) || c.eq_ignore_ascii_case(US_COUNTRY_CODE)
        })
    }

    /// The state code this descriptor filters on, if any.
    ///
    /// A known code is used as is; otherwise the token is tried as a full
    /// state name. A token that is neither stays as given and therefore
    /// matches no city.
    pub fn state_code(&self, states: &StateTable) -> Option<String> {
        if !self.targets_us() {
            return None;
        }
        let token = self.state.as_deref()?;
        if states.contains_code(token) {
            return Some(token.to_ascii_uppercase());
        }
        Some(
            states
                .code_for_name(token)
                .map(str::to_string)
                .unwrap_or_else(|| token.to_string()),
        )
    }

    fn matches_country(&self, city: &City) -> bool {
        match self.country.as_deref() {
            None => true,
            Some(c) => equals_ignore_case(&city.country, c) || city.country_code.eq_ignore_ascii_case(c),
        }
    }

    /// Full match of a city against this descriptor, population aside.
    pub fn matches(&self, city: &City, states: &StateTable) -> bool {
        self.matches_resolved(city, self.state_code(states).as_deref())
    }

    /// [`Descriptor::matches`] with the state code already resolved by
    /// [`Descriptor::state_code`].
    fn matches_resolved(&self, city: &City, state_code: Option<&str>) -> bool {
        if !city.is_named(&self.name) || !self.matches_country(city) {
            return false;
        }
        match state_code {
            None => true,
            Some(code) => city
                .us_state
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(code)),
        }
    }
}

impl CityDb {
    /// Case-folded name → positions in the rank-ordered city list.
    fn name_index(&self) -> &HashMap<String, Vec<usize>> {
        self.name_index.get_or_init(|| {
            let mut index: HashMap<String, Vec<usize>> = HashMap::new();
            for (i, city) in self.cities.iter().enumerate() {
                index.entry(city.name_key()).or_default().push(i);
            }
            tracing::debug!(keys = index.len(), "built city name index");
            index
        })
    }

    /// All cities named `name` (ignoring case), in rank order.
    pub fn cities_named(&self, name: &str) -> impl Iterator<Item = &City> + '_ {
        self.name_index()
            .get(&fold_case(name))
            .into_iter()
            .flatten()
            .map(move |&i| &self.cities[i])
    }

    /// Resolves a descriptor such as `"Springfield, Illinois, United States"`.
    ///
    /// Only cities with `population > min_population` qualify. Every match is
    /// returned, most populous first; an unknown name yields an empty list.
    pub fn find_city(&self, query: &str, min_population: u64) -> Vec<&City> {
        let Some(descriptor) = Descriptor::parse(query) else {
            return Vec::new();
        };
        self.find_by_descriptor(&descriptor, min_population)
    }

    pub fn find_by_descriptor(&self, descriptor: &Descriptor, min_population: u64) -> Vec<&City> {
        // Resolve the state once instead of per candidate.
        let state_code = descriptor.state_code(&self.states);

        self.cities_named(&descriptor.name)
            .filter(|c| c.population > min_population)
            .filter(|c| descriptor.matches_resolved(c, state_code.as_deref()))
            .collect()
    }

    /// Cities whose name contains `substr` (folded), most populous first.
    pub fn find_cities_by_substring(&self, substr: &str) -> Vec<&City> {
        if fold_key(substr).is_empty() {
            return Vec::new();
        }
        self.cities.iter().filter(|c| c.name_contains(substr)).collect()
    }
}
