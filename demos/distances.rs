//! Distance example for citydb-rs
//!
//! Great-circle distances between a handful of cities, plus a custom
//! population floor for the nearest-city search.

use anyhow::Context;
use citydb_core::{display_name, pairwise, CityDb, NameStyle};

fn main() -> anyhow::Result<()> {
    println!("=== CityDB-RS Distances Example ===\n");

    let db = CityDb::load_sample().context("loading sample dataset")?;

    let picks: Vec<_> = ["London", "Paris, France", "New York, NY, US", "Tokyo"]
        .iter()
        .filter_map(|q| db.find_city(q, 100_000).into_iter().next())
        .collect();

    println!("--- Pairwise distances ---");
    for report in pairwise(&picks) {
        print!("{report}");
    }

    println!("--- Nearest cities to Zürich above 1M ---");
    let zurich = db
        .find_city("Zürich", 0)
        .into_iter()
        .next()
        .context("Zürich missing from sample data")?;
    for (city, km) in db.nearest(zurich, 3, 1_000_000) {
        println!("{:>8.0} km  {}", km, display_name(city, NameStyle::Full));
    }

    Ok(())
}
