//! Basic usage example for citydb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled sample dataset
//! - List the most populous cities
//! - Resolve descriptors with state and country
//! - Print a verbose city report

use citydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== CityDB-RS Basic Usage Example ===\n");

    println!("Loading sample dataset...");
    let db = CityDb::load_sample()?;
    let stats = db.stats();
    println!(
        "✓ {} cities, {} countries, {} US states\n",
        stats.cities, stats.countries, stats.states
    );

    // Example 1: Top cities by population
    println!("--- Example 1: Five most populous cities ---");
    for city in db.top_n(5) {
        println!("{}. {} ({})", city.rank(), display_name(city, NameStyle::Full), city.population);
    }
    println!();

    // Example 2: Ambiguous names
    println!("--- Example 2: Every 'Springfield' above 100k ---");
    for city in db.find_city("Springfield", 100_000) {
        println!("- {}", display_name(city, NameStyle::Abbreviated));
    }
    println!();

    // Example 3: Narrowing by state
    println!("--- Example 3: 'Portland, Maine, United States' ---");
    match db.find_city("Portland, Maine, United States", 0).first() {
        Some(city) => println!("Found {} at rank {}\n", display_name(city, NameStyle::Full), city.rank()),
        None => println!("Not found\n"),
    }

    // Example 4: Verbose report
    println!("--- Example 4: Verbose report for Auckland ---");
    let opts = ReportOptions {
        verbose: true,
        extra: 2,
        ..ReportOptions::default()
    };
    if let Some(city) = db.find_city("Auckland, NZ", 0).first() {
        print!("{}", CityReport::build(&db, city, &opts));
    }

    Ok(())
}
