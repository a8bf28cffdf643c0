//! The renderer collaborator.
//!
//! The engine never touches scene graphs, meshes or fonts. It issues
//! commands through [`Renderer`] and reads back the few facts it needs:
//! which option is under the pointer, and whether the losing options have
//! left the screen.
//!
//! [`HeadlessRenderer`] implements the trait over [`Visuals`] without any
//! drawing, for tests and for hosts that only need the interaction logic.

mod headless;
mod visuals;

pub use headless::HeadlessRenderer;
pub use visuals::{
    BoundingBox, Glyph, GlyphMetrics, MonospaceMetrics, OptionVisual, Rotation, Visuals,
};

use crate::core::OptionLabel;
use crate::selection::PointerCoords;
use thiserror::Error;

/// Errors a renderer may report back to the engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RenderError {
    /// The visual tree is being rebuilt and cannot be read this frame
    #[error("Visual tree is temporarily inconsistent")]
    InconsistentChildren,

    /// No option visual exists at this index
    #[error("No option visual at index {index}")]
    UnknownOption { index: usize },
}

/// Commands the engine issues to whatever draws the menu.
pub trait Renderer {
    /// Create visuals for `labels`, in order.
    fn build_visuals(&mut self, labels: &[OptionLabel]);

    /// Dispose of every visual of the current step.
    fn destroy_visuals(&mut self);

    /// Index of the option under the pointer, if any.
    fn intersected_index(&mut self, pointer: PointerCoords) -> Option<usize>;

    /// Highlight one option, or none.
    fn set_highlight(&mut self, index: Option<usize>);

    /// Advance the exit animation of option `index` by `elapsed_ms`.
    ///
    /// Returns whether the option is now entirely off screen.
    fn drive_exit_animation(&mut self, index: usize, elapsed_ms: f64) -> Result<bool, RenderError>;

    /// Whether every option other than `chosen` is off screen.
    fn every_non_chosen_offscreen(&self, chosen: usize) -> bool;

    /// Visibility of every glyph, per option.
    fn glyph_visibility(&self) -> Result<Vec<Vec<bool>>, RenderError>;

    /// Set the idle rotation of one glyph.
    fn set_glyph_rotation(&mut self, option: usize, glyph: usize, rotation: Rotation);

    /// Present the frame.
    fn draw(&mut self) {}
}
