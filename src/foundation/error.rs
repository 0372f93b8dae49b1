/// Convenience result type used across Tilepaint.
pub type TilepaintResult<T> = Result<T, TilepaintError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TilepaintError {
    /// Invalid user-provided scene data or render configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource failures while executing a render (worker spawn, pool build).
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TilepaintError {
    /// Build a [`TilepaintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TilepaintError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
