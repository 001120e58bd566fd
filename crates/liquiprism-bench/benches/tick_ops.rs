//! Criterion micro-benchmarks for neighbour resolution and ticking.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use liquiprism_bench::{reference_profile, staggered_profile, stress_profile};
use liquiprism_core::FaceId;
use liquiprism_engine::{perturb, tick_cube, LockstepCube};
use liquiprism_obs::cube_hash;
use liquiprism_rules::Rule;
use liquiprism_space::{Cube, FillMode, Topology};
use liquiprism_test_utils::seeded_rng;

fn random_cube(size: usize) -> Cube {
    Cube::filled(size, Topology::cube(), FillMode::Random, &mut seeded_rng(42))
}

/// Benchmark: resolve neighbours for every cell of one 32x32 face.
fn bench_neighbours_face_32(c: &mut Criterion) {
    let cube = random_cube(32);
    let faces = cube.faces();
    let topology = cube.topology();

    c.bench_function("neighbours_face_32", |b| {
        b.iter(|| {
            for row in 0..32 {
                for col in 0..32 {
                    let n = faces[0].neighbours(row, col, FaceId(0), topology, faces);
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: one Rule 1 tick of a 32x32 face.
fn bench_tick_conventional_32(c: &mut Criterion) {
    let mut cube = random_cube(32);
    let mut rng = seeded_rng(0);

    c.bench_function("tick_conventional_32", |b| {
        b.iter(|| {
            let report = tick_cube(&mut cube, FaceId(0), Rule::Conventional, &mut rng);
            black_box(&report);
        });
    });
}

/// Benchmark: one Rule 2 tick of a 32x32 face.
fn bench_tick_stochastic_32(c: &mut Criterion) {
    let mut cube = random_cube(32);
    let mut rng = seeded_rng(0);

    c.bench_function("tick_stochastic_32", |b| {
        b.iter(|| {
            let report = tick_cube(&mut cube, FaceId(0), Rule::Stochastic, &mut rng);
            black_box(&report);
        });
    });
}

/// Benchmark: full lockstep steps at reference, staggered and stress sizes.
fn bench_lockstep_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("lockstep_step");
    for (name, cfg) in [
        ("reference", reference_profile(42)),
        ("staggered", staggered_profile(42)),
        ("stress", stress_profile(42)),
    ] {
        let mut world = LockstepCube::new(cfg).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| {
                let report = world.step();
                black_box(&report);
            });
        });
    }
    group.finish();
}

/// Benchmark: perturb a 128x128 face with 64 flips.
fn bench_perturb_128(c: &mut Criterion) {
    let mut cube = random_cube(128);
    let mut rng = seeded_rng(7);

    c.bench_function("perturb_128_x64", |b| {
        b.iter(|| {
            if let Some(face) = cube.face_mut(FaceId(3)) {
                perturb(face, 64, &mut rng);
            }
        });
    });
}

/// Benchmark: digest a 128x128 cube.
fn bench_cube_hash_128(c: &mut Criterion) {
    let cube = random_cube(128);

    c.bench_function("cube_hash_128", |b| {
        b.iter(|| black_box(cube_hash(&cube)));
    });
}

criterion_group!(
    benches,
    bench_neighbours_face_32,
    bench_tick_conventional_32,
    bench_tick_stochastic_32,
    bench_lockstep_step,
    bench_perturb_128,
    bench_cube_hash_128
);
criterion_main!(benches);
