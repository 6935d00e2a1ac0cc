// crates/citydb-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading or querying the city database.
///
/// Every variant raised by the loader is fatal: a `CityDb` is either built
/// completely or not at all.
#[derive(Debug, Error)]
pub enum CityDbError {
    /// An input file does not exist or cannot be opened.
    #[error("Dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A row is missing a column, holds an unparsable value or is not valid
    /// text in the configured encoding.
    #[error("Malformed record in {file} (line {line}): {reason}")]
    Malformed {
        file: String,
        line: u64,
        reason: String,
    },

    /// A city references a country code missing from the country table.
    #[error("Unknown country code '{code}' for city '{city}'")]
    UnknownCountry { code: String, city: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Invalid coordinates: latitude {lat}, longitude {lon}")]
    InvalidCoordinates { lat: f64, lon: f64 },
}

pub type Result<T> = std::result::Result<T, CityDbError>;
