//! Per-frame option animation.
//!
//! [`StepAnimator`] does two unrelated things every frame:
//! - rotates every visible glyph a little, purely for idle motion
//! - once a choice is locked, drives every other option off screen and
//!   reports when they are all gone
//!
//! Only the second affects the engine: a step can only settle after a
//! choice is locked, and only a settled step may transition.

mod clock;
mod idle;

pub use clock::FrameClock;
pub use idle::idle_rotation;

use crate::config::AnimationConfig;
use crate::render::Renderer;
use crate::selection::Choice;
use tracing::trace;

/// Result of one animator pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// Options are still on screen (or nothing is locked)
    Unsettled,
    /// Every option except the chosen one is off screen
    Settled,
}

/// Settle bookkeeping for the current step.
#[derive(Clone, Debug, Default)]
pub struct StepAnimator {
    config: AnimationConfig,
    exit_elapsed_ms: f64,
}

impl StepAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            exit_elapsed_ms: 0.0,
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Time spent driving the losing options off screen this step.
    pub fn exit_elapsed_ms(&self) -> f64 {
        self.exit_elapsed_ms
    }

    /// Forget this step's exit progress.
    pub fn reset(&mut self) {
        self.exit_elapsed_ms = 0.0;
    }

    /// Run one frame of idle motion and exit animation.
    ///
    /// A renderer that cannot report its glyphs this frame, or fails to move
    /// an option, leaves the step unsettled; the next frame tries again.
    pub fn update<R: Renderer>(
        &mut self,
        renderer: &mut R,
        choice: Option<Choice>,
        time_ms: f64,
        delta_ms: f64,
    ) -> Settle {
        let visibility = match renderer.glyph_visibility() {
            Ok(visibility) => visibility,
            Err(err) => {
                trace!(%err, "visuals not readable, retrying next frame");
                return Settle::Unsettled;
            }
        };

        for (option, glyphs) in visibility.iter().enumerate() {
            for (glyph, visible) in glyphs.iter().enumerate() {
                if *visible {
                    let rotation = idle_rotation(time_ms, option, glyph, &self.config);
                    renderer.set_glyph_rotation(option, glyph, rotation);
                }
            }
        }

        let Some(chosen) = choice else {
            return Settle::Unsettled;
        };

        self.exit_elapsed_ms += delta_ms;

        let mut all_offscreen = true;
        for option in (0..visibility.len()).filter(|option| *option != chosen) {
            match renderer.drive_exit_animation(option, delta_ms) {
                Ok(offscreen) => all_offscreen &= offscreen,
                Err(err) => {
                    trace!(option, %err, "exit animation skipped this frame");
                    all_offscreen = false;
                }
            }
        }

        if all_offscreen && renderer.every_non_chosen_offscreen(chosen) {
            trace!(chosen, elapsed_ms = self.exit_elapsed_ms, "step settled");
            Settle::Settled
        } else {
            Settle::Unsettled
        }
    }
}
