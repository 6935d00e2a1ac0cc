//! citydb: city reports from the command line
//!
//! Usage examples
//! --------------
//!
//! - Report on a few cities and the distances between them
//!   $ citydb -d data "Paris, France" "New York, NY, US"
//!
//! - Neighbour analysis with three entries per list
//!   $ citydb -d data -v -n2 3 Auckland
//!
//! - The ten most populous cities, any size
//!   $ citydb -d data -n 10 -p 0
//!
//! - Substring search
//!   $ citydb -d data --search spring
//!
//! Data source
//! -----------
//!
//! The dataset is read from `--data-dir` (default: the current directory):
//! `countrycodes.csv`, `usstates.csv` and `cities.txt` (GeoNames layout) or
//! `worldcitiespop.txt` with `--layout maxmind`. Gzipped files are detected
//! by extension.
use anyhow::Context;
use citydb_cli::args::CliArgs;
use citydb_cli::{init_tracing, normalize_args, run};
use citydb_core::CityDb;
use clap::Parser;
use std::io;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse_from(normalize_args(std::env::args()));

    let config = args.data.to_config();
    let db = CityDb::load(&config).with_context(|| {
        format!(
            "failed to load dataset (cities: {})",
            config.cities_path.display()
        )
    })?;

    run(&args, &db, io::stdout().lock())
}
