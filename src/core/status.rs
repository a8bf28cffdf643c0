//! Engine lifecycle status.

use serde::{Deserialize, Serialize};

/// Where the engine is in its step cycle.
///
/// The engine moves `NotInit -> Init` once, then cycles `Active -> Ready`
/// for every step it shows. `Halted` is entered when a step emitted and no
/// replacement machine was staged; staging one resumes the cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineStatus {
    /// Before the host has initialized the engine
    #[default]
    NotInit,
    /// Initialized, nothing shown yet
    Init,
    /// Visuals are live and animating
    Active,
    /// The losing options have left the screen; a transition may commit
    Ready,
    /// An emission left the engine without a step to show
    Halted,
}

impl EngineStatus {
    /// Whether a transition may be evaluated in this status.
    pub fn can_evaluate(self) -> bool {
        matches!(self, Self::Init | Self::Ready | Self::Halted)
    }

    /// Whether visuals exist and the animator should run.
    pub fn is_live(self) -> bool {
        matches!(self, Self::Active | Self::Ready)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::NotInit => "NotInit",
            Self::Init => "Init",
            Self::Active => "Active",
            Self::Ready => "Ready",
            Self::Halted => "Halted",
        }
    }
}
