use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_core::{Body, Direction, Ephemeris, Observer};
use panchang_ephem::AnalyticEphemeris;
use panchang_search::{PanchangRequest, ScanConfig, panchang_for_date, scan};

fn panchang_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let req = PanchangRequest::new(2024, 1, 1, 17.385, 78.4867);

    let mut group = c.benchmark_group("panchang");
    group.sample_size(20);
    group.bench_function("panchang_for_date", |b| {
        b.iter(|| {
            panchang_for_date(black_box(&eph), black_box(&req), &ScanConfig::default())
                .expect("panchang should succeed")
        })
    });
    let refined = ScanConfig {
        refine_boundaries: true,
        ..Default::default()
    };
    group.bench_function("panchang_for_date_refined", |b| {
        b.iter(|| {
            panchang_for_date(black_box(&eph), black_box(&req), &refined)
                .expect("panchang should succeed")
        })
    });
    group.finish();
}

fn component_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let observer = Observer::at(17.385, 78.4867);
    let midnight = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let sunrise = Utc.with_ymd_and_hms(2024, 1, 1, 1, 16, 0).unwrap();
    let sunset = Utc.with_ymd_and_hms(2024, 1, 1, 12, 23, 0).unwrap();

    let mut group = c.benchmark_group("panchang_components");
    group.sample_size(20);
    group.bench_function("moon_position", |b| {
        b.iter(|| {
            eph.apparent_equatorial_position(Body::Moon, black_box(&sunrise), &observer)
                .expect("position should succeed")
        })
    });
    group.bench_function("moonrise_search", |b| {
        b.iter(|| {
            eph.search_rise_set(Body::Moon, &observer, Direction::Rising, black_box(&midnight), 1.0)
                .expect("search should succeed")
        })
    });
    group.bench_function("scan_day", |b| {
        b.iter(|| {
            scan(&eph, black_box(&sunrise), black_box(&sunset), &observer, &ScanConfig::default())
                .expect("scan should succeed")
        })
    });
    group.finish();
}

criterion_group!(benches, panchang_bench, component_bench);
criterion_main!(benches);
