use std::time::{Duration, Instant};

use crate::{
    foundation::core::Circle,
    foundation::error::{TilepaintError, TilepaintResult},
    render::blocks::{BlockRect, BlockView, split_views},
    render::canvas::Canvas,
    render::compositor::{blend, covers},
    render::sort::{depth_order, depth_order_parallel},
    scene::store::Scene,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Timings of one sequential render pass.
pub struct SequentialStats {
    /// Time spent depth-sorting the scene.
    pub sort_time: Duration,
    /// Time spent compositing every circle onto the canvas.
    pub render_time: Duration,
    /// `sort_time + render_time`; setup is excluded so this is a fair
    /// baseline for [`Renderer::render_parallel`] on the same scene.
    pub total_time: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Timings and derived metrics of one parallel render pass.
pub struct ParallelStats {
    /// Time spent depth-sorting the scene on the worker pool.
    pub sort_time: Duration,
    /// Wall-clock span from dispatch to the last worker's completion.
    pub render_time: Duration,
    /// `sort_time + render_time`.
    pub total_time: Duration,
    /// Worker thread count, exactly as requested.
    pub threads: usize,
    /// Block side length in pixels, exactly as requested.
    pub block_size: u32,
    /// Supplied sequential baseline divided by `total_time`.
    pub speedup: f64,
    /// `speedup / threads`.
    pub efficiency: f64,
}

/// Painter's-algorithm circle compositor with sequential and block-parallel
/// pipelines over one exclusively owned canvas.
///
/// The intended benchmark protocol: build a scene via [`Renderer::add_circle`],
/// measure [`Renderer::render_sequential`] once, then feed its total time as
/// the baseline to [`Renderer::render_parallel`] for every `(threads,
/// block_size)` configuration under test. Renders are not reentrant; the
/// scene must not be mutated while a render is in progress.
#[derive(Clone, Debug)]
pub struct Renderer {
    scene: Scene,
    canvas: Canvas,
}

impl Renderer {
    /// Create a renderer with an empty scene and a black canvas.
    pub fn new(width: u32, height: u32) -> TilepaintResult<Self> {
        Ok(Self {
            scene: Scene::new(),
            canvas: Canvas::new(width, height)?,
        })
    }

    /// Append a circle to the scene, rejecting malformed primitives.
    pub fn add_circle(&mut self, circle: Circle) -> TilepaintResult<()> {
        self.scene.push(circle)
    }

    /// The scene store, in insertion order.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Read access to the canvas produced by the most recent render.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[tracing::instrument(skip(self), fields(circles = self.scene.len()))]
    /// Single-threaded reference pipeline: depth-sort, then composite every
    /// circle over its clipped bounding box, timing each phase.
    pub fn render_sequential(&mut self) -> SequentialStats {
        self.canvas.clear();
        let width = self.canvas.width();
        let height = self.canvas.height();

        let sort_start = Instant::now();
        let order = depth_order(&self.scene);
        let sort_time = sort_start.elapsed();

        let render_start = Instant::now();
        // One full-canvas block keeps the per-pixel operation sequence
        // identical to the parallel path by construction.
        let mut views = split_views(self.canvas.pixels_mut(), width, height, width.max(height));
        for view in &mut views {
            composite_block(view, self.scene.circles(), &order);
        }
        let render_time = render_start.elapsed();

        tracing::debug!(?sort_time, ?render_time, "sequential render complete");
        SequentialStats {
            sort_time,
            render_time,
            total_time: sort_time + render_time,
        }
    }

    #[tracing::instrument(skip(self, baseline), fields(circles = self.scene.len()))]
    /// Block-parallel pipeline: depth-sort on a pool of `threads` rayon
    /// threads, tile the canvas into `block_size`-sided blocks, then
    /// composite each block on one of `threads` scoped worker threads
    /// (block `i` goes to worker `i % threads`).
    ///
    /// `baseline` is the total time of a prior [`Renderer::render_sequential`]
    /// on the same scene; it only feeds the speedup/efficiency fields and
    /// never alters behavior. `threads` or `block_size` of zero is rejected
    /// before any canvas mutation. Worker spawn failure is surfaced rather
    /// than silently downgrading the thread count, since the recorded
    /// configuration must match what actually ran.
    pub fn render_parallel(
        &mut self,
        threads: usize,
        block_size: u32,
        baseline: Duration,
    ) -> TilepaintResult<ParallelStats> {
        if threads < 1 {
            return Err(TilepaintError::validation("thread count must be >= 1"));
        }
        if block_size < 1 {
            return Err(TilepaintError::validation("block size must be >= 1"));
        }

        // Pool construction is warm-up and stays outside every timed phase.
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| TilepaintError::render(format!("failed to build sort pool: {e}")))?;

        self.canvas.clear();
        let width = self.canvas.width();
        let height = self.canvas.height();

        let sort_start = Instant::now();
        let order = depth_order_parallel(&self.scene, &pool);
        let sort_time = sort_start.elapsed();
        drop(pool);

        // Static round-robin assignment of disjoint block views. Every pixel
        // belongs to exactly one view and a view never spans two workers, so
        // the scope join below is the only synchronization on pixel data.
        let views = split_views(self.canvas.pixels_mut(), width, height, block_size);
        let mut per_worker: Vec<Vec<BlockView<'_>>> = (0..threads).map(|_| Vec::new()).collect();
        for (i, view) in views.into_iter().enumerate() {
            per_worker[i % threads].push(view);
        }

        let circles = self.scene.circles();
        let order = &order;
        let mut spawn_error: Option<std::io::Error> = None;

        let render_start = Instant::now();
        std::thread::scope(|s| {
            for (i, worker_views) in per_worker.into_iter().enumerate() {
                let builder = std::thread::Builder::new().name(format!("tilepaint-worker-{i}"));
                let spawned = builder.spawn_scoped(s, move || {
                    for mut view in worker_views {
                        composite_block(&mut view, circles, order);
                    }
                });
                if let Err(e) = spawned {
                    spawn_error = Some(e);
                    break;
                }
            }
        });
        let render_time = render_start.elapsed();

        if let Some(e) = spawn_error {
            return Err(TilepaintError::render(format!(
                "failed to spawn worker thread: {e}"
            )));
        }

        let total_time = sort_time + render_time;
        let (speedup, efficiency) = derive_metrics(baseline, total_time, threads);
        tracing::debug!(?sort_time, ?render_time, speedup, "parallel render complete");
        Ok(ParallelStats {
            sort_time,
            render_time,
            total_time,
            threads,
            block_size,
            speedup,
            efficiency,
        })
    }
}

/// Speedup and efficiency of a parallel run against a sequential baseline.
pub(crate) fn derive_metrics(
    baseline: Duration,
    total: Duration,
    threads: usize,
) -> (f64, f64) {
    let total_s = total.as_secs_f64();
    // A zero-length span only occurs on degenerate scenes under coarse
    // clocks; report a neutral speedup instead of dividing by zero.
    let speedup = if total_s > 0.0 {
        baseline.as_secs_f64() / total_s
    } else {
        1.0
    };
    (speedup, speedup / threads as f64)
}

/// Composite every circle, in depth order, onto the pixels of one block.
///
/// This is the single compositing procedure used by both pipelines; the
/// per-pixel blend sequence depends only on the depth order, never on the
/// block decomposition, which is what makes the two paths bit-identical.
fn composite_block(view: &mut BlockView<'_>, circles: &[Circle], order: &[usize]) {
    let rect = view.rect;
    for &idx in order {
        let circle = &circles[idx];
        let Some((x0, y0, x1, y1)) = clipped_bounds(circle, rect) else {
            continue;
        };
        for py in y0..y1 {
            let ry = (py - rect.y) as usize;
            for px in x0..x1 {
                if covers(circle, px, py) {
                    let rx = (px - rect.x) as usize;
                    let dst = view.rows[ry][rx];
                    view.rows[ry][rx] = blend(circle.color, dst, circle.alpha);
                }
            }
        }
    }
}

/// The circle's bounding box clipped to a block, as half-open pixel ranges.
fn clipped_bounds(circle: &Circle, rect: BlockRect) -> Option<(u32, u32, u32, u32)> {
    let bx0 = i64::from(rect.x);
    let by0 = i64::from(rect.y);
    let bx1 = bx0 + i64::from(rect.width);
    let by1 = by0 + i64::from(rect.height);

    let x0 = ((circle.x - circle.radius).floor() as i64).max(bx0);
    let y0 = ((circle.y - circle.radius).floor() as i64).max(by0);
    let x1 = ((circle.x + circle.radius).ceil() as i64).min(bx1);
    let y1 = ((circle.y + circle.radius).ceil() as i64).min(by1);

    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
