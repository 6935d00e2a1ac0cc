// crates/citydb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`CityDb::stats`](crate::CityDb::stats); the counts reflect the
/// tables as they were loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub states: usize,
    pub cities: usize,
}

/// Name of the country whose cities carry a US state code.
pub const US_COUNTRY_NAME: &str = "United States";
/// ISO code of [`US_COUNTRY_NAME`].
pub const US_COUNTRY_CODE: &str = "US";
