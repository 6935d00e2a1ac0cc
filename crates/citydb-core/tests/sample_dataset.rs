//! End-to-end checks against the sample dataset in `data/`.

use citydb_core::export::{export_locations, LocationRecord};
use citydb_core::{
    pairwise, CityDb, CityReport, DatasetConfig, DisplayCharset, ReportOptions,
};
use std::sync::OnceLock;

fn db() -> &'static CityDb {
    static DB: OnceLock<CityDb> = OnceLock::new();
    DB.get_or_init(|| CityDb::load_sample().expect("sample dataset loads"))
}

#[test]
fn loads_every_table() {
    let stats = db().stats();
    assert_eq!(stats.cities, 34);
    assert_eq!(stats.states, 10);
    assert_eq!(stats.countries, 22);
}

#[test]
fn cities_are_sorted_by_population() {
    let cities = db().cities();
    assert_eq!(cities[0].name, "Shanghai");
    assert!(cities.windows(2).all(|w| w[0].population >= w[1].population));
    for (i, c) in cities.iter().enumerate() {
        assert_eq!(db().rank_of(c), Some(i + 1));
    }
}

#[test]
fn distance_is_zero_to_self_and_symmetric() {
    let cities = db().cities();
    for a in cities {
        assert_eq!(a.distance_to(a), 0.0);
        for b in cities {
            assert_eq!(a.distance_to(b), b.distance_to(a));
        }
    }
}

#[test]
fn new_york_by_state_and_country_code() {
    let found = db().find_city("New York, NY, US", 0);
    assert!(!found.is_empty());
    assert!(found
        .iter()
        .any(|c| c.country == "United States" && c.us_state.as_deref() == Some("NY")));
}

#[test]
fn nonexistent_city() {
    assert!(db().find_city("Nonexistent City", 0).is_empty());
}

#[test]
fn ambiguous_names_return_every_match() {
    let found = db().find_city("Springfield", 100_000);
    let states: Vec<_> = found.iter().filter_map(|c| c.us_state.as_deref()).collect();
    assert_eq!(states, ["MO", "MA", "IL"]);

    let found = db().find_city("Springfield, Illinois, United States", 100_000);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].us_state.as_deref(), Some("IL"));
}

#[test]
fn lookups_ignore_case_but_not_accents() {
    let found = db().find_city("SÃO PAULO, brazil", 100_000);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "São Paulo");
    assert_eq!(db().find_city("zürich, ch", 0).len(), 1);

    assert!(db().find_city("sao paulo, brazil", 100_000).is_empty());
    assert!(db().find_city("Zurich, CH", 0).is_empty());
    // Substring search still folds accents.
    assert_eq!(db().find_cities_by_substring("sao pau").len(), 1);
}

#[test]
fn population_filter_hides_small_matches() {
    assert_eq!(db().find_city("Paris", 100_000).len(), 1);
    assert_eq!(db().find_city("Paris", 10_000).len(), 3);
    assert_eq!(db().find_city("Paris, Texas, US", 0).len(), 1);
}

#[test]
fn top_n_larger_than_dataset() {
    assert_eq!(db().top_n(1_000).len(), db().len());
    assert_eq!(db().top_n(5).len(), 5);
}

#[test]
fn london_paris_distance() {
    let london = db().find_city("London", 0)[0];
    let paris = db().find_city("Paris, FR", 0)[0];
    let d = london.distance_to(paris);
    assert!((d - 343.0).abs() < 5.0, "got {d}");
}

#[test]
fn verbose_report_for_auckland() {
    let auckland = db().find_city("Auckland", 0)[0];
    let opts = ReportOptions {
        verbose: true,
        extra: 2,
        min_population: 100_000,
    };
    let report = CityReport::build(db(), auckland, &opts);
    assert_eq!(report.rank, 25);
    assert_eq!(report.nearest[0].city.name, "Wellington");
    assert_eq!(report.nearest.len(), 2);
    assert_eq!(report.furthest.len(), 2);
    assert!(report.furthest[0].distance_km >= report.furthest[1].distance_km);
    let closest: Vec<_> = report
        .closest_population
        .iter()
        .map(|n| n.city.rank())
        .collect();
    assert_eq!(closest, [23, 24, 26, 27]);
}

#[test]
fn pairwise_reports_for_query_list() {
    let mut picked = Vec::new();
    for q in ["London", "Paris, France", "New York, New York, US"] {
        picked.extend(db().find_city(q, 100_000));
    }
    let reports = pairwise(&picked);
    assert_eq!(reports.len(), 3);
    assert!(reports[0].to_string().contains("London, United Kingdom ----- Paris, France"));
}

#[test]
fn export_uses_ten_thousand_floor() {
    let outcome = export_locations(db(), ["Paris, TN, US", "Portland, ME, US", "Nowhere"]);
    assert_eq!(
        outcome.records.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        ["Paris, TN, United States", "Portland, ME, United States"]
    );
    assert_eq!(outcome.missing, ["Nowhere"]);
    assert_eq!(
        outcome.records[1],
        LocationRecord {
            name: "Portland, ME, United States".into(),
            lat: 43.6615,
            long: -70.2553,
        }
    );
}

#[test]
fn ascii_charset_strips_accents_from_names() {
    let cfg = DatasetConfig::in_dir(DatasetConfig::sample_data_dir()).with_charset(DisplayCharset::Ascii);
    let db = CityDb::load(&cfg).unwrap();
    assert!(db.cities().iter().all(|c| c.name.is_ascii()));
    assert_eq!(db.find_city("Zrich", 0).len(), 1);
}
