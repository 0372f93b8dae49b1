use crate::foundation::core::Circle;
use crate::foundation::error::TilepaintResult;

/// Append-only, ordered store of circle primitives.
///
/// Insertion order is irrelevant to the visual result (the depth sorter
/// re-derives compositing order) but serves as the deterministic tie-break
/// for circles with equal depth. The store is read-only for the duration of
/// a render pass.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct Scene {
    circles: Vec<Circle>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a circle after validating it.
    ///
    /// Rejected circles do not grow the store, so the scene is always
    /// well-formed when it reaches the render stage.
    pub fn push(&mut self, circle: Circle) -> TilepaintResult<()> {
        circle.validate()?;
        self.circles.push(circle);
        Ok(())
    }

    /// Circles in insertion order.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Number of circles in the scene.
    pub fn len(&self) -> usize {
        self.circles.len()
    }

    /// Whether the scene has no circles.
    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/store.rs"]
mod tests;
