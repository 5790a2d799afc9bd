//! Criterion benchmarks for brightness mapping and frame output.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use membrane_bench::{reference_profile, scripted_strikes};
use membrane_render::{DrawList, GrayFrame, ToneCurve, Viewport};
use membrane_sim::MembraneSimulator;

fn ringing() -> MembraneSimulator {
    let mut sim = MembraneSimulator::new(reference_profile()).unwrap();
    for p in scripted_strikes(42, 16, 100) {
        let _ = sim.excite_at(p);
    }
    for _ in 0..10 {
        sim.advance();
    }
    sim
}

fn bench_draw_list_10k(c: &mut Criterion) {
    let sim = ringing();
    let vp = Viewport::new(800.0, 800.0).unwrap();
    c.bench_function("draw_list_10k", |b| {
        b.iter(|| black_box(DrawList::build(&sim, &vp, ToneCurve::Reference)));
    });
}

fn bench_rasterize_800(c: &mut Criterion) {
    let sim = ringing();
    c.bench_function("rasterize_800x800", |b| {
        b.iter(|| black_box(GrayFrame::rasterize(&sim, 800, 800, ToneCurve::Reference).unwrap()));
    });
}

fn bench_brightness(c: &mut Criterion) {
    let values: Vec<f32> = (0..10_000).map(|i| (i as f32 / 5_000.0) - 1.0).collect();
    c.bench_function("brightness_10k", |b| {
        b.iter(|| {
            let sum: u32 = values
                .iter()
                .map(|&v| u32::from(ToneCurve::Reference.brightness(v)))
                .sum();
            black_box(sum)
        });
    });
}

criterion_group!(
    benches,
    bench_draw_list_10k,
    bench_rasterize_800,
    bench_brightness
);
criterion_main!(benches);
