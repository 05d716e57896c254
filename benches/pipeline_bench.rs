//! Benchmarks for the `build_geometry` pipeline.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use ribbonize::options::Options;
use ribbonize::build_geometry;

/// Synthetic mixed-structure chain: alternating helical turns and
/// extended runs, written as column-exact atom records.
fn synthetic_chain(residues: usize) -> String {
    let mut lines = Vec::with_capacity(residues);
    let mut cursor = Vec3::ZERO;
    for i in 0..residues {
        let pos = if (i / 12) % 2 == 0 {
            let theta = (i as f32) * 100.0_f32.to_radians();
            cursor + Vec3::new(2.3 * theta.cos(), 2.3 * theta.sin(), 1.5 * i as f32)
        } else {
            cursor += Vec3::new(3.4, 0.0, 0.0);
            cursor + Vec3::new(0.0, 0.0, 1.5 * i as f32)
        };
        lines.push(format!(
            "ATOM  {:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}",
            i + 1,
            "CA",
            "ALA",
            'A',
            i as i32 + 1,
            pos.x,
            pos.y,
            pos.z
        ));
    }
    lines.join("\n")
}

fn pipeline_benchmark(c: &mut Criterion) {
    let options = Options::default();
    let mut group = c.benchmark_group("build_geometry");

    for residues in [50, 200, 800] {
        let text = synthetic_chain(residues);
        let _ = group.bench_function(format!("{residues}_residues"), |b| {
            b.iter(|| black_box(build_geometry(black_box(&text), &options)));
        });
    }
    group.finish();
}

criterion_group!(benches, pipeline_benchmark);
criterion_main!(benches);
