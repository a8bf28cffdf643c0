//! Engine and subscriber error types.

use thiserror::Error;

/// Errors raised while evaluating a transition.
///
/// Lookup failures leave the context as it was before the failing commit.
/// A subscriber failure is reported after the emission has been committed,
/// so the label is never delivered a second time.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A step id was not a key of the machine
    #[error("Step '{step}' is not defined in the machine")]
    MalformedMachine { step: String },

    /// A choice index fell outside the on-screen options
    #[error("Choice {index} is out of bounds for {len} options")]
    InvalidChoice { index: usize, len: usize },

    /// A subscriber failed while handling an emission
    #[error("Subscriber failed: {0}")]
    Subscriber(#[from] SubscriberError),
}

/// Errors a subscriber may return from an emission.
#[derive(Debug, Error)]
pub enum SubscriberError {
    /// The bootstrap value map has no translation for the emitted label
    #[error("No translation for label '{label}'")]
    MissingTranslation { label: String },

    /// Host callback failure
    #[error("{0}")]
    Failed(String),
}
