// crates/citydb-core/src/lib.rs

//! # citydb-core
//!
//! An in-memory database of world cities, loaded once from delimited text
//! files, with population ranking, descriptor lookup
//! (`"Portland, OR, US"`) and great-circle distances.
//!
//! ```no_run
//! use citydb_core::{CityDb, DatasetConfig, ReportOptions, CityReport};
//!
//! let db = CityDb::load(&DatasetConfig::in_dir("data"))?;
//! for city in db.find_city("Paris, France", 100_000) {
//!     print!("{}", CityReport::build(&db, city, &ReportOptions::default()));
//! }
//! # Ok::<(), citydb_core::CityDbError>(())
//! ```

pub mod common;
pub mod error;
pub mod export;
pub mod geo;
pub mod loader;
pub mod model;
pub mod registry;
pub mod report;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{CityDbError, Result};
pub use crate::geo::{great_circle_km, half_circumference_fraction, Coordinates};
pub use crate::loader::{CityLayout, DatasetConfig, Sources, TableLayout};
pub use crate::model::{City, CityDb, CountryTable, StateTable};
pub use crate::report::{display_name, pairwise, CityReport, DistanceReport, NameStyle, ReportOptions};
pub use crate::search::Descriptor;
pub use crate::text::{fold_case, fold_key, DisplayCharset, InputEncoding};
pub use crate::traits::NameMatch;
