//! Build errors for the engine builder.

use thiserror::Error;

/// Errors that can occur when building an engine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Renderer not specified. Call .renderer(renderer) before .build()")]
    MissingRenderer,
}
