use citydb_core::{great_circle_km, CityDb, Coordinates, ReportOptions, CityReport};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_distance(c: &mut Criterion) {
    let london = Coordinates { lat: 51.5074, lon: -0.1278 };
    let paris = Coordinates { lat: 48.8566, lon: 2.3522 };
    c.bench_function("great_circle_km", |b| {
        b.iter(|| great_circle_km(black_box(london), black_box(paris)))
    });
}

fn bench_lookup(c: &mut Criterion) {
    let db = CityDb::load_sample().expect("sample dataset");
    c.bench_function("find_city descriptor", |b| {
        b.iter(|| db.find_city(black_box("Springfield, Illinois, United States"), 0))
    });
    let tokyo = db.find_city("Tokyo", 0)[0];
    let opts = ReportOptions {
        verbose: true,
        extra: 3,
        min_population: 0,
    };
    c.bench_function("verbose report", |b| {
        b.iter(|| CityReport::build(&db, black_box(tokyo), &opts).to_string())
    });
}

criterion_group!(benches, bench_distance, bench_lookup);
criterion_main!(benches);
