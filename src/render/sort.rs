//! Depth ordering for painter's-algorithm compositing.
//!
//! Both variants produce the identical permutation: ascending `z` with ties
//! broken by original insertion index. The explicit secondary key keeps the
//! order deterministic regardless of the sort algorithm, so the parallel
//! variant cannot introduce visual drift on equal depths.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::foundation::core::Circle;
use crate::scene::store::Scene;

fn depth_cmp(circles: &[Circle], a: usize, b: usize) -> Ordering {
    circles[a].z.total_cmp(&circles[b].z).then(a.cmp(&b))
}

/// Compositing order of the scene: indices sorted by ascending depth.
///
/// Lower `z` is farther away and composited first. An empty scene yields an
/// empty order.
pub fn depth_order(scene: &Scene) -> Vec<usize> {
    let circles = scene.circles();
    let mut order: Vec<usize> = (0..circles.len()).collect();
    order.sort_by(|&a, &b| depth_cmp(circles, a, b));
    order
}

/// Parallel variant of [`depth_order`], run on the given pool.
///
/// Rayon's stable merge sort plus the index tie-break make the output
/// indistinguishable from the sequential sort for any input.
pub(crate) fn depth_order_parallel(scene: &Scene, pool: &rayon::ThreadPool) -> Vec<usize> {
    let circles = scene.circles();
    let mut order: Vec<usize> = (0..circles.len()).collect();
    pool.install(|| order.par_sort_by(|&a, &b| depth_cmp(circles, a, b)));
    order
}

#[cfg(test)]
#[path = "../../tests/unit/render/sort.rs"]
mod tests;
