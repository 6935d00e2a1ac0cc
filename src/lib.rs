//! citydb-rs
//!
//! Umbrella crate for the workspace. Re-exports [`citydb_core`] so the demos
//! can be written against a single import.
//!
//! ```no_run
//! use citydb_rs::prelude::*;
//!
//! let db = CityDb::load_sample()?;
//! println!("{} cities", db.len());
//! # Ok::<(), CityDbError>(())
//! ```

pub use citydb_core;

pub mod prelude {
    pub use citydb_core::{
        display_name, pairwise, City, CityDb, CityDbError, CityReport, DatasetConfig,
        DisplayCharset, DistanceReport, NameMatch, NameStyle, ReportOptions, Result,
    };
}
