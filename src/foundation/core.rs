use crate::foundation::error::{TilepaintError, TilepaintResult};

/// Linear-light RGB color with normalized `[0, 1]` channels.
///
/// All blending happens on these linear values; only the export surface
/// ([`crate::Canvas::to_rgb_image`]) quantizes to 8-bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel in `[0, 1]`.
    pub r: f32,
    /// Green channel in `[0, 1]`.
    pub g: f32,
    /// Blue channel in `[0, 1]`.
    pub b: f32,
}

impl Rgb {
    /// Build a color from three channel intensities.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Opaque black, the canvas background.
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    fn validate(self, what: &str) -> TilepaintResult<()> {
        for (channel, v) in [("r", self.r), ("g", self.g), ("b", self.b)] {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(TilepaintError::validation(format!(
                    "{what} channel '{channel}' must be in [0, 1], got {v}"
                )));
            }
        }
        Ok(())
    }
}

/// A translucent circle primitive in canvas space.
///
/// Circles are immutable once appended to a [`crate::Scene`]; depth ordering
/// uses ascending `z` (lower `z` is farther away and composited first).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Circle {
    /// Center x in canvas space (pixels).
    pub x: f32,
    /// Center y in canvas space (pixels).
    pub y: f32,
    /// Depth; lower values are composited first.
    pub z: f32,
    /// Disk radius in pixels, strictly positive.
    pub radius: f32,
    /// Fill color.
    pub color: Rgb,
    /// Opacity in `(0, 1]`.
    pub alpha: f32,
}

impl Circle {
    /// Build a circle primitive.
    pub fn new(x: f32, y: f32, z: f32, radius: f32, color: Rgb, alpha: f32) -> Self {
        Self {
            x,
            y,
            z,
            radius,
            color,
            alpha,
        }
    }

    /// Check that this circle is well-formed scene data.
    ///
    /// Enforced by [`crate::Scene::push`] so that the render stage never sees
    /// malformed input. A non-finite `z` would break the total depth order.
    pub fn validate(&self) -> TilepaintResult<()> {
        for (field, v) in [("x", self.x), ("y", self.y), ("z", self.z)] {
            if !v.is_finite() {
                return Err(TilepaintError::validation(format!(
                    "circle field '{field}' must be finite, got {v}"
                )));
            }
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(TilepaintError::validation(format!(
                "circle radius must be > 0, got {}",
                self.radius
            )));
        }
        self.color.validate("circle color")?;
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(TilepaintError::validation(format!(
                "circle alpha must be in (0, 1], got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
