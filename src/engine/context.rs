//! The engine's mutable state, in one place.

use crate::core::{EngineStatus, StateMachineModel};
use crate::selection::SelectionArbiter;

/// Everything the engine mutates between frames.
///
/// The host owns this (through [`Engine`](super::Engine)) and every
/// component receives it by reference. The model is only mutated by the
/// transition engine; the arbiter only by pointer events, plus the single
/// reset after each commit.
#[derive(Debug, Default)]
pub struct EngineContext {
    pub(crate) model: StateMachineModel,
    pub(crate) arbiter: SelectionArbiter,
    pub(crate) status: EngineStatus,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> &StateMachineModel {
        &self.model
    }

    pub fn arbiter(&self) -> &SelectionArbiter {
        &self.arbiter
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }
}
