use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slope::{
    geo::{coord, Coord},
    AltitudeError,
};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

const ISE: Coord = coord! { x: 136.582085, y: 34.8503617 };

/// A tilted plane rising to the north-east.
fn plane(coord: Coord) -> Result<f64, AltitudeError> {
    Ok((coord.y - ISE.y) * 3e4 + (coord.x - ISE.x) * 2e4)
}

fn ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ring");
    for count in [4, 128] {
        group.bench_with_input(format!("{count}"), &count, |b, count| {
            b.iter(|| slope::ring(black_box(ISE), *count, 50.0).unwrap())
        });
    }
}

fn estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Estimate");
    for count in [4, 128] {
        group.bench_with_input(format!("{count}"), &count, |b, count| {
            b.iter(|| slope::estimate(black_box(ISE), *count, 50.0, &plane).unwrap())
        });
    }
    group.bench_function("tiles", |b| {
        b.iter(|| slope::tiles::sample(black_box(ISE), &plane).unwrap())
    });
}

criterion_group!(benches, ring, estimate);
criterion_main!(benches);
