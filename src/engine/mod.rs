//! The frame-driven menu engine.
//!
//! [`Engine`] owns the [`EngineContext`], the step animator, the
//! subscribers and the renderer. The host forwards pointer events to it and
//! calls [`Engine::frame`] once per display refresh. Each frame runs, in
//! order:
//!
//! 1. the intersection refresh for hover feedback
//! 2. transition evaluation
//! 3. the animator (idle motion and exit animation)
//! 4. the renderer's draw
//!
//! A click registered before a frame can gate that frame's transition, and
//! a transition committed in a frame is drawn by that same frame.

mod context;
mod error;
mod subscribers;
mod transition;

pub use context::EngineContext;
pub use error::{EngineError, SubscriberError};
pub use subscribers::{Subscriber, Subscribers};
pub use transition::{evaluate, Commit};

use crate::animation::{FrameClock, Settle, StepAnimator};
use crate::config::EngineConfig;
use crate::core::{EngineStatus, Machine, MachineStager, StateMachineModel};
use crate::render::Renderer;
use crate::selection::{Choice, PointerCoords, SelectionArbiter};
use tracing::debug;

/// What one frame did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// The transition committed this frame, if any
    pub commit: Option<Commit>,
    /// Status after the frame
    pub status: EngineStatus,
}

/// Interactive choose-one menu over a state machine.
///
/// # Example
///
/// ```rust
/// use menuflow::config::EngineConfig;
/// use menuflow::core::{EngineStatus, Machine, OptionsNode, StepValue};
/// use menuflow::engine::Engine;
/// use menuflow::render::HeadlessRenderer;
///
/// let config = EngineConfig::default();
/// let mut engine = Engine::new(HeadlessRenderer::new(&config), config);
/// engine.set_next_machine(
///     Machine::new()
///         .with_step("000", OptionsNode::new().with_option("Start", "001"))
///         .with_step("001", StepValue::Terminal),
/// );
///
/// engine.init(0.0);
/// engine.frame(16.0).unwrap();
///
/// assert_eq!(engine.status(), EngineStatus::Active);
/// assert_eq!(engine.renderer().visuals().len(), 1);
/// ```
#[derive(Debug)]
pub struct Engine<R: Renderer> {
    context: EngineContext,
    animator: StepAnimator,
    subscribers: Subscribers,
    renderer: R,
    clock: FrameClock,
}

impl<R: Renderer> Engine<R> {
    pub fn new(renderer: R, config: EngineConfig) -> Self {
        Self::with_subscribers(renderer, config, Subscribers::new())
    }

    pub(crate) fn with_subscribers(
        renderer: R,
        config: EngineConfig,
        subscribers: Subscribers,
    ) -> Self {
        Self {
            context: EngineContext::new(),
            animator: StepAnimator::new(config.animation),
            subscribers,
            renderer,
            clock: FrameClock::new(),
        }
    }

    /// Finish start-up. Frames before this do nothing.
    pub fn init(&mut self, time_ms: f64) {
        if self.context.status != EngineStatus::NotInit {
            return;
        }
        self.clock.start(time_ms);
        self.context.status = EngineStatus::Init;
        debug!(status = self.context.status.name(), "engine initialized");
    }

    /// Register a closure to receive every emitted label.
    pub fn subscribe<F: FnMut(&str) + 'static>(&mut self, callback: F) {
        self.subscribers.push(callback);
    }

    /// Register a subscriber that keeps its own state or can fail.
    pub fn add_subscriber<S: Subscriber + 'static>(&mut self, subscriber: S) {
        self.subscribers.push(subscriber);
    }

    /// Stage a machine to replace the live one at the next commit point.
    pub fn set_next_machine(&mut self, machine: Machine) {
        self.context.model.replace_machine(machine);
    }

    /// A handle for staging machines from inside subscriber callbacks.
    pub fn stager(&self) -> MachineStager {
        self.context.model.stager()
    }

    pub fn on_hover_enter(&mut self) {
        self.context.arbiter.on_hover_enter();
    }

    pub fn on_hover_exit(&mut self) {
        self.context.arbiter.on_hover_exit();
    }

    pub fn on_pointer_move(&mut self, coords: PointerCoords) {
        self.context.arbiter.on_pointer_move(coords);
    }

    /// Lock the hovered option, if nothing is locked yet.
    pub fn on_click(&mut self) -> Option<Choice> {
        let locked = self.context.arbiter.on_click()?;
        self.renderer.set_highlight(None);
        Some(locked)
    }

    /// Run one display frame at host time `time_ms`.
    pub fn frame(&mut self, time_ms: f64) -> Result<FrameReport, EngineError> {
        if self.context.status == EngineStatus::NotInit {
            return Ok(FrameReport {
                commit: None,
                status: self.context.status,
            });
        }

        let delta_ms = self.clock.tick(time_ms);

        self.context
            .arbiter
            .refresh_intersection(self.context.status, &mut self.renderer);

        let commit = evaluate(&mut self.context, &mut self.renderer, &mut self.subscribers)?;
        if commit.is_some() {
            self.animator.reset();
        }

        if self.context.status.is_live() {
            let settle = self.animator.update(
                &mut self.renderer,
                self.context.arbiter.locked(),
                time_ms,
                delta_ms,
            );
            if settle == Settle::Settled && self.context.status == EngineStatus::Active {
                self.context.status = EngineStatus::Ready;
                debug!(
                    step = ?self.context.model.step(),
                    status = self.context.status.name(),
                    "step settled"
                );
            }
        }

        self.renderer.draw();

        Ok(FrameReport {
            commit,
            status: self.context.status,
        })
    }

    pub fn status(&self) -> EngineStatus {
        self.context.status
    }

    /// Whether an emission left the engine with nothing to show and nothing
    /// staged.
    pub fn is_halted(&self) -> bool {
        self.context.status == EngineStatus::Halted && !self.context.model.has_pending()
    }

    pub fn context(&self) -> &EngineContext {
        &self.context
    }

    pub fn model(&self) -> &StateMachineModel {
        &self.context.model
    }

    pub fn arbiter(&self) -> &SelectionArbiter {
        &self.context.arbiter
    }

    pub fn animator(&self) -> &StepAnimator {
        &self.animator
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
