//! Benchmarks for the hot geometry paths sampled on every animation tick
//!
//! Run with: cargo bench placement

use std::time::{Duration, Instant};

use slideout::animation::{Easing, FrameAnimation};
use slideout::geometry::{Rect, Size};
use slideout::state::compute_placement;

fn main() {
    divan::main();
}

#[divan::bench]
fn bench_compute_placement() {
    let screen = Rect::new(0.0, 0.0, 1920.0, 1080.0);
    let window = Rect::new(1300.0, 200.0, 400.0, 300.0);
    let candidate = Size::new(800.0, 300.0);
    divan::black_box(compute_placement(
        divan::black_box(window),
        divan::black_box(screen),
        divan::black_box(candidate),
    ));
}

#[divan::bench(args = [0.0, 0.25, 0.5, 0.75, 1.0])]
fn bench_easing(t: f64) {
    divan::black_box(Easing::EaseInOut.apply(divan::black_box(t)));
}

#[divan::bench]
fn bench_frame_sample(bencher: divan::Bencher) {
    let start = Instant::now();
    let anim = FrameAnimation::new(
        Rect::new(100.0, 100.0, 400.0, 300.0),
        Rect::new(-300.0, 100.0, 800.0, 300.0),
        start,
        Duration::from_millis(250),
        Easing::EaseInOut,
    );
    let sample_at = start + Duration::from_millis(125);

    bencher.bench_local(|| divan::black_box(anim.frame_at(divan::black_box(sample_at))));
}
