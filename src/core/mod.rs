//! Menu state machine data.
//!
//! This module holds the pure data side of the engine:
//! - Machine definitions with an explicit terminal variant
//! - The live machine/step record and the pending-machine slot
//! - The engine lifecycle status
//!
//! Nothing here talks to a renderer or runs per frame.

mod machine;
mod model;
mod status;

pub use machine::{
    Machine, OptionEntry, OptionLabel, OptionsNode, StepId, StepValue, EMIT_SENTINEL, ROOT_STEP,
};
pub use model::{CurrentOptions, MachineStager, StateMachineModel};
pub use status::EngineStatus;
