//! Tilepaint is a painter's-algorithm circle compositor built to study
//! block-parallel rendering.
//!
//! The engine composites a scene of translucent, depth-ordered circles onto
//! a 2-D canvas twice: once through a strictly sequential reference pipeline
//! and once through a multi-threaded pipeline whose decomposition (worker
//! thread count, spatial block side length) is the experiment's independent
//! variable. Both pipelines share one compositing procedure, so for any
//! scene and any valid configuration the parallel canvas matches the
//! sequential canvas exactly.
//!
//! # Pipeline overview
//!
//! 1. **Scene**: append validated [`Circle`] primitives to a [`Renderer`]
//! 2. **Sort**: derive the stable, ascending-`z` compositing order
//! 3. **Composite**: bounding-box walk + membership test + linear alpha blend
//! 4. **Measure**: [`SequentialStats`] / [`ParallelStats`] with
//!    speedup and efficiency against a supplied sequential baseline
//!
//! The key design constraints:
//!
//! - **No unsafe**: canvas write safety under concurrency comes from
//!   decomposing the framebuffer into disjoint per-block `&mut` views, not
//!   from locks, atomics, or raw pointers.
//! - **Deterministic-by-default**: depth ties break on insertion order, so
//!   repeated runs and all thread counts produce bit-identical pixels.
//! - **Honest timing**: requested configurations are never downgraded, pool
//!   warm-up is excluded uniformly, and stragglers count toward render time.
//!
//! Sweep driving, reporting and image persistence are the caller's concern;
//! see `demos/sweep.rs` for a complete experiment driver.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod foundation;
mod render;
mod scene;

pub use foundation::core::{Circle, Rgb};
pub use foundation::error::{TilepaintError, TilepaintResult};
pub use render::canvas::Canvas;
pub use render::compositor::{blend, covers};
pub use render::pipeline::{ParallelStats, Renderer, SequentialStats};
pub use render::sort::depth_order;
pub use scene::store::Scene;
