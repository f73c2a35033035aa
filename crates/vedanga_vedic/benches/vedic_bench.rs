use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vedanga_vedic::ashtakavarga::{AvPositions, sarvashtakavarga};
use vedanga_vedic::dasha::vimshottari;
use vedanga_vedic::{SUPPORTED_DIVISIONS, Sign, sub_lord_chain, varga_position};

fn bench_core_math(c: &mut Criterion) {
    c.bench_function("varga_all_divisions", |b| {
        b.iter(|| {
            for n in SUPPORTED_DIVISIONS {
                let _ = varga_position(n, black_box(122.39));
            }
        })
    });

    c.bench_function("sub_lord_chain", |b| {
        b.iter(|| sub_lord_chain(black_box(149.21)))
    });

    let positions = AvPositions {
        grahas: [
            Sign::Pisces,
            Sign::Libra,
            Sign::Leo,
            Sign::Aries,
            Sign::Cancer,
            Sign::Aquarius,
            Sign::Virgo,
        ],
        lagna: Sign::Virgo,
    };
    c.bench_function("sarvashtakavarga", |b| {
        b.iter(|| sarvashtakavarga(black_box(&positions)))
    });

    c.bench_function("vimshottari_snapshot", |b| {
        b.iter(|| vimshottari::snapshot(black_box(188.45), 2_444_332.0, 2_451_545.0))
    });
}

criterion_group!(benches, bench_core_math);
criterion_main!(benches);
