//! citydb-export: resolve a list of city names to coordinates
//!
//!   $ citydb-export -d data names.txt -o out.json --var locations
//!
//! Each line of the input is a descriptor as accepted by `citydb`. Names that
//! match nothing are reported and skipped; the rest are written in input order.
use anyhow::Context;
use citydb_cli::args::ExportArgs;
use citydb_cli::init_tracing;
use citydb_core::export::{export_locations, read_names, write_json};
use citydb_core::CityDb;
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = ExportArgs::parse();

    let config = args.data.to_config();
    let db = CityDb::load(&config).with_context(|| {
        format!(
            "failed to load dataset (cities: {})",
            config.cities_path.display()
        )
    })?;

    let input = File::open(&args.input)
        .with_context(|| format!("cannot open {}", args.input.display()))?;
    let names = read_names(BufReader::new(input))
        .with_context(|| format!("cannot read {}", args.input.display()))?;

    let outcome = export_locations(&db, &names);
    for name in &outcome.missing {
        println!("Could not find city {name}");
    }

    let output = File::create(&args.output)
        .with_context(|| format!("cannot create {}", args.output.display()))?;
    write_json(BufWriter::new(output), &outcome.records, args.var.as_deref())
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    info!(
        written = outcome.records.len(),
        missing = outcome.missing.len(),
        output = %args.output.display(),
        "export finished"
    );
    Ok(())
}
