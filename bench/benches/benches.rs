use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use noise_core::grid::{flatten, normalize, sample_grid_2d, to_terrain_rgb};
use noise_core::{CellularReturnType, FractalType, NoiseConfig, NoiseEngine, NoiseType, PermutationTable};
use std::hint::black_box;

const SIZE: usize = 257;
const SEED: i32 = 2025;

fn engine(noise_type: NoiseType) -> NoiseEngine {
    NoiseEngine::with_config(NoiseConfig {
        seed: SEED,
        frequency: 0.02,
        octaves: 4,
        ..NoiseConfig::with_noise_type(noise_type)
    })
}

// single point evaluation, every noise type
fn bench_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for &noise_type in NoiseType::ALL {
        let e = engine(noise_type);
        group.bench_with_input(BenchmarkId::new("2d", noise_type), &e, |b, e| {
            b.iter(|| e.evaluate_2d(black_box(123.4), black_box(-56.7)))
        });
        group.bench_with_input(BenchmarkId::new("3d", noise_type), &e, |b, e| {
            b.iter(|| e.evaluate_3d(black_box(123.4), black_box(-56.7), black_box(8.9)))
        });
    }
    group.finish();
}

fn bench_fractal_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("fractal");
    for &fractal_type in FractalType::ALL {
        let e = NoiseEngine::with_config(NoiseConfig {
            fractal_type,
            octaves: 8,
            ..NoiseConfig::with_noise_type(NoiseType::SimplexFractal)
        });
        group.bench_with_input(BenchmarkId::from_parameter(fractal_type), &e, |b, e| {
            b.iter(|| e.evaluate_3d(black_box(12.0), black_box(34.0), black_box(56.0)))
        });
    }
    group.finish();
}

fn bench_cellular_lookup(c: &mut Criterion) {
    let e = NoiseEngine::with_config(NoiseConfig {
        noise_type: NoiseType::Cellular,
        cellular_return_type: CellularReturnType::NoiseLookup,
        cellular_noise_lookup: Some(Box::new(NoiseConfig::with_noise_type(NoiseType::PerlinFractal))),
        ..Default::default()
    });
    c.bench_function("Cellular NoiseLookup 3D", |b| {
        b.iter(|| e.evaluate_3d(black_box(12.0), black_box(34.0), black_box(56.0)))
    });
}

fn bench_reseed(c: &mut Criterion) {
    c.bench_function("PermutationTable::new", |b| {
        b.iter(|| PermutationTable::new(black_box(SEED)))
    });
}

fn bench_simplex_pipeline(c: &mut Criterion) {
    c.bench_function("SimplexFractal grid + normalize + flatten + image", |b| {
        let e = engine(NoiseType::SimplexFractal);
        b.iter(|| {
            let mut map = sample_grid_2d(&e, SIZE, [0.0, 0.0], 1.0);
            normalize(&mut map);
            let flat = flatten(&map);
            let _img = to_terrain_rgb(&flat);
        })
    });
}

criterion_group!(
    noise_benchmarks,
    bench_points,
    bench_fractal_types,
    bench_cellular_lookup,
    bench_reseed,
    bench_simplex_pipeline
);
criterion_main!(noise_benchmarks);
