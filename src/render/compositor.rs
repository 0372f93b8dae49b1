//! Per-pixel membership test and alpha blending.
//!
//! These functions are pure and shared verbatim by the sequential and
//! parallel pipelines; parallel correctness is defined as producing the same
//! canvas the sequential path produces for the same scene and depth order.

use crate::foundation::core::{Circle, Rgb};

/// Whether the center of pixel `(px, py)` lies inside the circle's disk.
///
/// Uses a squared-distance comparison against `radius^2` to avoid a square
/// root per pixel.
pub fn covers(circle: &Circle, px: u32, py: u32) -> bool {
    let dx = (px as f32 + 0.5) - circle.x;
    let dy = (py as f32 + 0.5) - circle.y;
    dx * dx + dy * dy <= circle.radius * circle.radius
}

/// Standard over-operator in linear space: `src * alpha + dst * (1 - alpha)`.
pub fn blend(src: Rgb, dst: Rgb, alpha: f32) -> Rgb {
    let inv = 1.0 - alpha;
    Rgb {
        r: src.r * alpha + dst.r * inv,
        g: src.g * alpha + dst.g * inv,
        b: src.b * alpha + dst.b * inv,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
