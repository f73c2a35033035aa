use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vedanga_ephem::{Body, Ephemeris, MeanEphemeris};

fn bench_positions(c: &mut Criterion) {
    let eph = MeanEphemeris::new();

    c.bench_function("position_moon", |b| {
        b.iter(|| eph.position(black_box(2_451_545.0), Body::Moon))
    });

    c.bench_function("position_saturn", |b| {
        b.iter(|| eph.position(black_box(2_451_545.0), Body::Saturn))
    });

    c.bench_function("all_bodies_one_epoch", |b| {
        b.iter(|| {
            for body in vedanga_ephem::body::ALL_BODIES {
                let _ = eph.position(black_box(2_460_000.5), body);
            }
        })
    });
}

criterion_group!(benches, bench_positions);
criterion_main!(benches);
