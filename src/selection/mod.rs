//! Pointer arbitration.
//!
//! [`SelectionArbiter`] turns hover, move and click signals into at most one
//! locked choice per step. Hovering only drives highlight feedback; a choice
//! is locked by the first click that lands on an option, and stays locked
//! until the transition engine resets the arbiter after a commit.

mod pointer;

pub use pointer::PointerCoords;

use crate::core::EngineStatus;
use crate::render::Renderer;
use tracing::debug;

/// Index of an on-screen option.
pub type Choice = usize;

/// Hover and click state for the current step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionArbiter {
    hovering: bool,
    pointer: Option<PointerCoords>,
    intersected: Option<usize>,
    locked: Option<Choice>,
}

impl SelectionArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pointer entered the interactive surface.
    pub fn on_hover_enter(&mut self) {
        self.hovering = true;
    }

    /// The pointer left the interactive surface.
    pub fn on_hover_exit(&mut self) {
        self.hovering = false;
    }

    /// Record the latest pointer position.
    ///
    /// The intersection test runs on the next frame, not here.
    pub fn on_pointer_move(&mut self, coords: PointerCoords) {
        self.pointer = Some(coords);
    }

    /// Lock the choice to the option under the pointer.
    ///
    /// Only the first click that lands on an option counts. Clicks on empty
    /// space, or after a choice is locked, change nothing. Returns the newly
    /// locked choice.
    pub fn on_click(&mut self) -> Option<Choice> {
        if self.locked.is_some() {
            return None;
        }
        let index = self.intersected.take()?;
        self.locked = Some(index);
        debug!(choice = index, "choice locked");
        Some(index)
    }

    /// Refresh the intersected option for highlight feedback.
    ///
    /// Runs once per frame, and only while the pointer is over the surface,
    /// no choice is locked, and the step's visuals are live and unsettled.
    pub fn refresh_intersection<R: Renderer>(&mut self, status: EngineStatus, renderer: &mut R) {
        if !self.hovering || self.locked.is_some() || status != EngineStatus::Active {
            return;
        }
        let Some(pointer) = self.pointer else {
            return;
        };

        let intersected = renderer.intersected_index(pointer);
        if intersected != self.intersected {
            self.intersected = intersected;
            renderer.set_highlight(intersected);
        }
    }

    /// Forget the locked choice and intersected option.
    pub fn reset(&mut self) {
        self.locked = None;
        self.intersected = None;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn intersected(&self) -> Option<usize> {
        self.intersected
    }

    pub fn locked(&self) -> Option<Choice> {
        self.locked
    }

    #[cfg(test)]
    pub(crate) fn lock_for_test(&mut self, choice: Choice) {
        self.locked = Some(choice);
    }
}
