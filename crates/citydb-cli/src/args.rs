use citydb_core::{DatasetConfig, DisplayCharset};
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for `citydb`
#[derive(Debug, Parser)]
#[command(
    name = "citydb",
    version,
    about = "Look up world cities by name and report population rank and distances"
)]
pub struct CliArgs {
    /// City descriptors: "name[, state][, country]". None lists the largest cities.
    pub cities: Vec<String>,

    /// Include furthest, nearest and closest-population lists
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// How many cities to list when no descriptor is given
    #[arg(short = 'n', long = "number", default_value_t = 5)]
    pub number: usize,

    /// Entries per verbose list (also accepted as -n2)
    #[arg(long = "numextra", default_value_t = 1)]
    pub numextra: usize,

    /// Minimum population a match must exceed
    #[arg(short = 'p', long = "population", value_enum, default_value = "100k")]
    pub population: PopulationFilter,

    /// List cities whose name contains this text instead of printing reports
    #[arg(short = 's', long = "search")]
    pub search: Option<String>,

    /// Print table sizes after loading
    #[arg(long = "stats")]
    pub stats: bool,

    #[command(flatten)]
    pub data: DataArgs,
}

/// CLI arguments for `citydb-export`
#[derive(Debug, Parser)]
#[command(
    name = "citydb-export",
    version,
    about = "Resolve a list of city names and write their coordinates as JSON"
)]
pub struct ExportArgs {
    /// Text file with one city descriptor per line
    pub input: PathBuf,

    /// Where to write the JSON
    #[arg(short = 'o', long = "output", default_value = "./out.json")]
    pub output: PathBuf,

    /// Wrap the array in a JavaScript `var <name> = ...;` assignment
    #[arg(long = "var")]
    pub var: Option<String>,

    #[command(flatten)]
    pub data: DataArgs,
}

/// Where the dataset lives and how to read it.
#[derive(Debug, Clone, Args)]
pub struct DataArgs {
    /// Directory holding countrycodes.csv, usstates.csv and the city file
    #[arg(short = 'd', long = "data-dir", default_value = ".")]
    pub data_dir: PathBuf,

    /// Override the country table path
    #[arg(long = "countries")]
    pub countries: Option<PathBuf>,

    /// Override the US state table path
    #[arg(long = "states")]
    pub states: Option<PathBuf>,

    /// Override the city table path
    #[arg(long = "cities", id = "cities_file", value_name = "PATH")]
    pub cities_file: Option<PathBuf>,

    /// Column layout of the city table
    #[arg(long = "layout", value_enum, default_value_t = Layout::Geonames)]
    pub layout: Layout,

    /// Characters kept in city names
    #[arg(long = "charset", value_enum, default_value_t = Charset::Utf8)]
    pub charset: Charset,
}

impl DataArgs {
    pub fn to_config(&self) -> DatasetConfig {
        let mut config = match self.layout {
            Layout::Geonames => DatasetConfig::in_dir(&self.data_dir),
            Layout::Maxmind => DatasetConfig::maxmind_in_dir(&self.data_dir),
        };
        if let Some(p) = &self.countries {
            config.countries_path = p.clone();
        }
        if let Some(p) = &self.states {
            config.states_path = p.clone();
        }
        if let Some(p) = &self.cities_file {
            config.cities_path = p.clone();
        }
        config.with_charset(self.charset.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PopulationFilter {
    #[value(name = "0")]
    Any,
    #[value(name = "10k")]
    TenThousand,
    #[value(name = "100k")]
    HundredThousand,
    #[value(name = "1M")]
    Million,
}

impl PopulationFilter {
    pub fn threshold(self) -> u64 {
        match self {
            Self::Any => 0,
            Self::TenThousand => 10_000,
            Self::HundredThousand => 100_000,
            Self::Million => 1_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    Geonames,
    Maxmind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Charset {
    Utf8,
    Latin1,
    Ascii,
}

impl From<Charset> for DisplayCharset {
    fn from(c: Charset) -> Self {
        match c {
            Charset::Utf8 => DisplayCharset::Utf8,
            Charset::Latin1 => DisplayCharset::Latin1,
            Charset::Ascii => DisplayCharset::Ascii,
        }
    }
}
