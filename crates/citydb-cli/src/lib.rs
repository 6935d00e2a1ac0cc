//! citydb-cli
//! ==========
//!
//! Command-line front-ends for the `citydb-core` world city database.
//!
//! Two binaries are built from this crate:
//!
//! - `citydb` prints a report for each city descriptor given on the command
//!   line, plus pairwise distances between the matches.
//! - `citydb-export` resolves a file of city names and writes their
//!   coordinates as JSON.
//!
//! Quick start
//! -----------
//!
//! ```text
//! citydb -d data "Paris, France" "London"
//! citydb -d data -v -n2 3 Auckland
//! citydb -d data -n 10
//! citydb -d data --search spring
//! citydb-export -d data names.txt -o out.json --var locations
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=citydb_core=debug`).
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::CliArgs;
use citydb_core::report::group_thousands;
use citydb_core::{display_name, CityDb, CityReport, DistanceReport, NameStyle, ReportOptions};
use std::io::Write;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Writes everything `citydb` prints for `args` against an already loaded
/// database.
///
/// Descriptors are resolved in order; one without matches prints an apology
/// and the rest still run. Each matched city gets its report followed by a
/// distance report to every later match. With no descriptors the `number`
/// most populous cities are reported.
pub fn run<W: Write>(args: &CliArgs, db: &CityDb, mut out: W) -> anyhow::Result<()> {
    if args.stats {
        let stats = db.stats();
        writeln!(out, "Database statistics:")?;
        writeln!(out, "  Countries: {}", stats.countries)?;
        writeln!(out, "  US states: {}", stats.states)?;
        writeln!(out, "  Cities: {}", stats.cities)?;
    }

    if let Some(query) = &args.search {
        let matches = db.find_cities_by_substring(query);
        if matches.is_empty() {
            writeln!(out, "No cities found matching: {query}")?;
        }
        for city in matches {
            writeln!(
                out,
                "{:>6}  {} ({})",
                city.rank(),
                display_name(city, NameStyle::Full),
                group_thousands(city.population)
            )?;
        }
        return Ok(());
    }

    let min_population = args.population.threshold();
    let opts = ReportOptions {
        verbose: args.verbose,
        extra: args.numextra,
        min_population,
    };

    if args.cities.is_empty() {
        for city in db.top_n(args.number) {
            write!(out, "{}", CityReport::build(db, city, &opts))?;
        }
        return Ok(());
    }

    let mut matched = Vec::new();
    for descriptor in &args.cities {
        let found = db.find_city(descriptor, min_population);
        debug!(descriptor = %descriptor, matches = found.len(), "resolved descriptor");
        if found.is_empty() {
            writeln!(out, "Sorry, no cities with name {descriptor} found!")?;
        }
        matched.extend(found);
    }

    for (i, &city) in matched.iter().enumerate() {
        write!(out, "{}", CityReport::build(db, city, &opts))?;
        for &other in &matched[i + 1..] {
            write!(out, "{}", DistanceReport::new(city, other))?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Installs the stderr subscriber shared by both binaries.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

/// Rewrites the two-letter `-n2` flag to `--numextra`.
///
/// Clap short options are a single character, so `-n2 3` would otherwise be
/// read as `-n 2` followed by a stray positional `3`.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.strip_prefix("-n2") {
            Some("") => "--numextra".to_string(),
            Some(rest) if rest.starts_with('=') => format!("--numextra{rest}"),
            _ => arg,
        })
        .collect()
}
