use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tesseroids::{DiscretizationScratch, Mode, ObservationPoint, Tesseroid};

fn random_points(count: usize) -> Vec<ObservationPoint> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            ObservationPoint::new(
                rng.gen_range(-15.0..15.0),
                rng.gen_range(-15.0..15.0),
                rng.gen_range(6_380.0..6_500.0),
            )
        })
        .collect()
}

fn bench_adaptive_discretization(c: &mut Criterion) {
    // A 1 degree, 30 km thick crustal tesseroid in kilometers
    let tesseroid = Tesseroid::new(-0.5, 0.5, -0.5, 0.5, 6_348.0, 6_378.0);
    let points = random_points(256);

    for (name, mode) in [
        ("discretize_2d", Mode::TwoDimensional),
        ("discretize_3d", Mode::ThreeDimensional),
    ] {
        let mut scratch = DiscretizationScratch::new(mode);
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut total = 0;
                for point in &points {
                    if let Ok(pieces) = scratch.discretize(point, &tesseroid, black_box(2.5)) {
                        total += pieces.len();
                    }
                }
                black_box(total)
            })
        });
    }

    let near = ObservationPoint::new(0.0, 0.0, 6_378.5);
    let mut scratch = DiscretizationScratch::new(Mode::ThreeDimensional);
    c.bench_function("discretize_3d_near_surface", |b| {
        b.iter(|| {
            let pieces = scratch.discretize(&near, &tesseroid, 2.5);
            black_box(pieces.map(|pieces| pieces.len()))
        })
    });
}

criterion_group!(benches, bench_adaptive_discretization);
criterion_main!(benches);
