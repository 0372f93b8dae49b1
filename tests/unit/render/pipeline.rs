use super::*;
use crate::foundation::core::Rgb;

use rand::{Rng, SeedableRng};

const TOLERANCE: f32 = 1e-5;

fn assert_canvases_match(a: &[Rgb], b: &[Rgb], context: &str) {
    assert_eq!(a.len(), b.len());
    for (i, (pa, pb)) in a.iter().zip(b).enumerate() {
        for (channel, va, vb) in [
            ("r", pa.r, pb.r),
            ("g", pa.g, pb.g),
            ("b", pa.b, pb.b),
        ] {
            assert!(
                (va - vb).abs() <= TOLERANCE,
                "{context}: pixel {i} channel {channel}: {va} vs {vb}"
            );
        }
    }
}

fn random_scene(rng: &mut impl Rng, width: f32, height: f32, count: usize) -> Vec<Circle> {
    (0..count)
        .map(|_| {
            Circle::new(
                rng.gen_range(0.0..width),
                rng.gen_range(0.0..height),
                // Coarse integer depths force plenty of ties.
                rng.gen_range(0..8) as f32,
                rng.gen_range(1.0..10.0),
                Rgb::new(
                    rng.gen_range(0.0..=1.0),
                    rng.gen_range(0.0..=1.0),
                    rng.gen_range(0.0..=1.0),
                ),
                rng.gen_range(0.1..=1.0),
            )
        })
        .collect()
}

#[test]
fn new_rejects_zero_dimensions() {
    assert!(Renderer::new(0, 8).is_err());
    assert!(Renderer::new(8, 0).is_err());
}

#[test]
fn full_coverage_circle_paints_every_pixel() {
    let mut renderer = Renderer::new(4, 4).unwrap();
    renderer
        .add_circle(Circle::new(2.0, 2.0, 0.0, 10.0, Rgb::new(1.0, 0.0, 0.0), 1.0))
        .unwrap();
    renderer.render_sequential();
    assert_eq!(renderer.canvas().pixels().len(), 16);
    assert!(
        renderer
            .canvas()
            .pixels()
            .iter()
            .all(|p| *p == Rgb::new(1.0, 0.0, 0.0))
    );
}

#[test]
fn empty_scene_leaves_background() {
    let mut renderer = Renderer::new(8, 8).unwrap();
    let stats = renderer.render_sequential();
    assert!(renderer.canvas().pixels().iter().all(|p| *p == Rgb::BLACK));
    assert_eq!(stats.total_time, stats.sort_time + stats.render_time);
}

#[test]
fn two_circles_blend_back_to_front() {
    // A (z=0, red, 0.5) composites before B (z=1, blue, 0.5); over black the
    // closed form is (0.25, 0, 0.5) on every covered pixel. Insertion order
    // is deliberately front-first to prove ordering comes from the sort.
    let expected = Rgb::new(0.25, 0.0, 0.5);
    let a = Circle::new(4.0, 4.0, 0.0, 5.0, Rgb::new(1.0, 0.0, 0.0), 0.5);
    let b = Circle::new(4.0, 4.0, 1.0, 5.0, Rgb::new(0.0, 0.0, 1.0), 0.5);

    let mut sequential = Renderer::new(8, 8).unwrap();
    sequential.add_circle(b).unwrap();
    sequential.add_circle(a).unwrap();
    let baseline = sequential.render_sequential();
    for p in sequential.canvas().pixels() {
        assert!((p.r - expected.r).abs() <= TOLERANCE);
        assert!((p.g - expected.g).abs() <= TOLERANCE);
        assert!((p.b - expected.b).abs() <= TOLERANCE);
    }

    for (threads, block_size) in [(1, 8), (2, 3), (4, 1), (3, 16)] {
        let mut parallel = Renderer::new(8, 8).unwrap();
        parallel.add_circle(b).unwrap();
        parallel.add_circle(a).unwrap();
        parallel
            .render_parallel(threads, block_size, baseline.total_time)
            .unwrap();
        assert_canvases_match(
            sequential.canvas().pixels(),
            parallel.canvas().pixels(),
            &format!("threads={threads} block_size={block_size}"),
        );
    }
}

#[test]
fn parallel_matches_sequential_across_configurations() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1492);
    let circles = random_scene(&mut rng, 32.0, 24.0, 60);

    let mut renderer = Renderer::new(32, 24).unwrap();
    for &c in &circles {
        renderer.add_circle(c).unwrap();
    }
    let baseline = renderer.render_sequential();
    let reference = renderer.canvas().pixels().to_vec();

    for threads in [1, 2, 3, 8] {
        for block_size in [1, 3, 16, 64] {
            let stats = renderer
                .render_parallel(threads, block_size, baseline.total_time)
                .unwrap();
            assert_canvases_match(
                &reference,
                renderer.canvas().pixels(),
                &format!("threads={threads} block_size={block_size}"),
            );
            assert_eq!(stats.threads, threads);
            assert_eq!(stats.block_size, block_size);
            assert_eq!(stats.total_time, stats.sort_time + stats.render_time);
        }
    }
}

#[test]
fn repeated_sequential_renders_are_reproducible() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut renderer = Renderer::new(16, 16).unwrap();
    for c in random_scene(&mut rng, 16.0, 16.0, 20) {
        renderer.add_circle(c).unwrap();
    }
    renderer.render_sequential();
    let first = renderer.canvas().pixels().to_vec();
    renderer.render_sequential();
    assert_eq!(first, renderer.canvas().pixels());
}

#[test]
fn more_threads_than_blocks_degrades_gracefully() {
    let mut renderer = Renderer::new(4, 4).unwrap();
    renderer
        .add_circle(Circle::new(2.0, 2.0, 0.0, 3.0, Rgb::new(0.0, 1.0, 0.0), 0.7))
        .unwrap();
    let baseline = renderer.render_sequential();
    let reference = renderer.canvas().pixels().to_vec();

    // One 100-sided block, eight workers: seven get no work, no error.
    let stats = renderer
        .render_parallel(8, 100, baseline.total_time)
        .unwrap();
    assert_eq!(stats.threads, 8);
    assert_canvases_match(&reference, renderer.canvas().pixels(), "oversized block");
}

#[test]
fn invalid_configuration_is_rejected_without_canvas_mutation() {
    let mut renderer = Renderer::new(8, 8).unwrap();
    renderer
        .add_circle(Circle::new(4.0, 4.0, 0.0, 10.0, Rgb::new(1.0, 1.0, 1.0), 1.0))
        .unwrap();
    renderer.render_sequential();
    let before = renderer.canvas().pixels().to_vec();

    assert!(matches!(
        renderer.render_parallel(0, 16, Duration::from_millis(1)),
        Err(TilepaintError::Validation(_))
    ));
    assert!(matches!(
        renderer.render_parallel(4, 0, Duration::from_millis(1)),
        Err(TilepaintError::Validation(_))
    ));
    assert_eq!(before, renderer.canvas().pixels());
}

#[test]
fn efficiency_is_speedup_over_thread_count() {
    let mut renderer = Renderer::new(16, 16).unwrap();
    renderer
        .add_circle(Circle::new(8.0, 8.0, 0.0, 6.0, Rgb::new(0.3, 0.3, 0.9), 0.4))
        .unwrap();
    let baseline = renderer.render_sequential();
    let stats = renderer
        .render_parallel(3, 4, baseline.total_time)
        .unwrap();
    assert!((stats.efficiency - stats.speedup / 3.0).abs() < 1e-12);
}

#[test]
fn metrics_report_unit_speedup_when_baseline_equals_total() {
    let total = Duration::from_micros(1500);
    for threads in [1, 4] {
        let (speedup, efficiency) = derive_metrics(total, total, threads);
        assert!((speedup - 1.0).abs() < 1e-12);
        assert!((efficiency - 1.0 / threads as f64).abs() < 1e-12);
    }
}

#[test]
fn metrics_survive_zero_length_total() {
    let (speedup, efficiency) = derive_metrics(Duration::ZERO, Duration::ZERO, 2);
    assert!((speedup - 1.0).abs() < 1e-12);
    assert!((efficiency - 0.5).abs() < 1e-12);
}
