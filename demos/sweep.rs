//! Experiment driver: sweeps canvas size, scene size, thread count and block
//! size over the same seeded scenes, printing one CSV row per configuration.

use rand::{Rng, SeedableRng};
use tilepaint::{Circle, Renderer, Rgb};

const SEED: u64 = 1492;

const CANVAS_SIZES: &[u32] = &[128, 256, 512];
const CIRCLE_COUNTS: &[usize] = &[1_000, 5_000, 20_000];
const THREAD_COUNTS: &[usize] = &[2, 4, 8, 16];
const BLOCK_SIZES: &[u32] = &[16, 24, 32];

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!(
        "canvas,circles,threads,block_size,seq_sort_s,par_sort_s,seq_render_s,par_render_s,\
         seq_total_s,par_total_s,speedup,efficiency"
    );

    let mut rng = rand::rngs::StdRng::seed_from_u64(SEED);
    for &canvas_size in CANVAS_SIZES {
        for &circle_count in CIRCLE_COUNTS {
            let mut renderer = Renderer::new(canvas_size, canvas_size)?;
            for _ in 0..circle_count {
                renderer.add_circle(Circle::new(
                    rng.gen_range(0.0..canvas_size as f32),
                    rng.gen_range(0.0..canvas_size as f32),
                    rng.gen_range(0.0..1000.0),
                    rng.gen_range(10.0..50.0),
                    Rgb::new(
                        rng.gen_range(0.0..=1.0),
                        rng.gen_range(0.0..=1.0),
                        rng.gen_range(0.0..=1.0),
                    ),
                    rng.gen_range(0.1..0.5),
                ))?;
            }

            // Measured immediately before the parallel runs on the same
            // scene so the baseline is comparable.
            let seq = renderer.render_sequential();

            for &threads in THREAD_COUNTS {
                for &block_size in BLOCK_SIZES {
                    let par = renderer.render_parallel(threads, block_size, seq.total_time)?;
                    println!(
                        "{canvas_size},{circle_count},{threads},{block_size},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6},{:.3},{:.3}",
                        seq.sort_time.as_secs_f64(),
                        par.sort_time.as_secs_f64(),
                        seq.render_time.as_secs_f64(),
                        par.render_time.as_secs_f64(),
                        seq.total_time.as_secs_f64(),
                        par.total_time.as_secs_f64(),
                        par.speedup,
                        par.efficiency,
                    );
                }
            }

            if canvas_size == *CANVAS_SIZES.last().unwrap()
                && circle_count == *CIRCLE_COUNTS.last().unwrap()
            {
                let out_path = std::path::Path::new("target").join("sweep_last_render.png");
                renderer.canvas().to_rgb_image().save(&out_path)?;
                eprintln!("wrote {}", out_path.display());
            }
        }
    }
    Ok(())
}
