//! First-choice interception.
//!
//! The [`Bootstrapper`] sits between the host and the real machine. When the
//! real flow emits a label, it stages a one-option intercept machine that
//! shows the label's translation; when that intercept emits, it stages the
//! real machine again. Every decision of the real flow is therefore followed
//! by exactly one translated emission, and the real machine's own steps are
//! left untouched.

use crate::core::{Machine, MachineStager, OptionsNode, StepValue, ROOT_STEP};
use crate::document::MenuDocument;
use crate::engine::{Engine, Subscriber, SubscriberError};
use crate::render::Renderer;
use std::collections::HashMap;
use tracing::debug;

/// Terminal step of the intercept machine.
pub const INTERCEPT_STEP: &str = "001";

/// Which emission the bootstrapper expects next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootstrapPhase {
    /// The real machine is live; its next emission gets intercepted
    #[default]
    AwaitingRealFlow,
    /// The intercept machine is live; its emission hands back to the real flow
    AwaitingIntercept,
}

/// Alternates between the real machine and a translating intercept.
///
/// # Example
///
/// ```rust
/// use menuflow::bootstrap::{Bootstrapper, BootstrapPhase};
/// use menuflow::core::StateMachineModel;
/// use menuflow::document::MenuDocument;
/// use menuflow::engine::Subscriber;
///
/// let doc = MenuDocument::from_json(
///     r#"{"state_machine": {"000": {"yes": "001"}, "001": "emit"}, "value_map": {"yes": "OK"}}"#,
/// ).unwrap();
/// let model = StateMachineModel::new();
/// let mut bootstrapper = Bootstrapper::from_document(doc, model.stager());
///
/// bootstrapper.notify("yes").unwrap();
/// assert_eq!(bootstrapper.phase(), BootstrapPhase::AwaitingIntercept);
/// assert!(model.has_pending());
/// ```
#[derive(Debug)]
pub struct Bootstrapper {
    raw: Machine,
    value_map: HashMap<String, String>,
    phase: BootstrapPhase,
    stager: MachineStager,
}

impl Bootstrapper {
    pub fn new(raw: Machine, value_map: HashMap<String, String>, stager: MachineStager) -> Self {
        Self {
            raw,
            value_map,
            phase: BootstrapPhase::default(),
            stager,
        }
    }

    pub fn from_document(document: MenuDocument, stager: MachineStager) -> Self {
        Self::new(document.state_machine, document.value_map, stager)
    }

    /// Stage the real machine and register with `engine`.
    pub fn install<R: Renderer>(self, engine: &mut Engine<R>) {
        self.stager.stage(self.raw.clone());
        engine.add_subscriber(self);
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    /// The one-step machine that re-offers `label`'s translation.
    pub fn intercept_machine(&self, label: &str) -> Result<Machine, SubscriberError> {
        let translated = self
            .value_map
            .get(label)
            .ok_or_else(|| SubscriberError::MissingTranslation {
                label: label.to_string(),
            })?;

        Ok(Machine::new()
            .with_step(
                ROOT_STEP,
                OptionsNode::new().with_option(translated.clone(), INTERCEPT_STEP),
            )
            .with_step(INTERCEPT_STEP, StepValue::Terminal))
    }
}

impl Subscriber for Bootstrapper {
    fn notify(&mut self, label: &str) -> Result<(), SubscriberError> {
        match self.phase {
            BootstrapPhase::AwaitingRealFlow => {
                let intercept = self.intercept_machine(label)?;
                debug!(label, "staging intercept machine");
                self.stager.stage(intercept);
                self.phase = BootstrapPhase::AwaitingIntercept;
            }
            BootstrapPhase::AwaitingIntercept => {
                debug!(label, "restoring real machine");
                self.stager.stage(self.raw.clone());
                self.phase = BootstrapPhase::AwaitingRealFlow;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateMachineModel;

    fn raw() -> Machine {
        Machine::new()
            .with_step("000", OptionsNode::new().with_option("yes", "001"))
            .with_step("001", StepValue::Terminal)
    }

    fn bootstrapper(model: &StateMachineModel) -> Bootstrapper {
        let value_map = HashMap::from([("yes".to_string(), "OK".to_string())]);
        Bootstrapper::new(raw(), value_map, model.stager())
    }

    #[test]
    fn intercept_machine_offers_translation() {
        let model = StateMachineModel::new();
        let machine = bootstrapper(&model).intercept_machine("yes").unwrap();

        let root = machine.resolve(ROOT_STEP).unwrap().options().unwrap();
        assert_eq!(root.labels(), vec!["OK"]);
        assert_eq!(root.get(0).unwrap().target, INTERCEPT_STEP);
        assert!(machine.resolve(INTERCEPT_STEP).unwrap().is_terminal());
    }

    #[test]
    fn phases_alternate_on_each_emission() {
        let mut model = StateMachineModel::new();
        let mut bootstrapper = bootstrapper(&model);

        bootstrapper.notify("yes").unwrap();
        assert_eq!(bootstrapper.phase(), BootstrapPhase::AwaitingIntercept);
        model.adopt_pending().unwrap();
        assert_eq!(model.machine().len(), 2);
        assert_eq!(model.materialize(), vec!["OK"]);

        bootstrapper.notify("OK").unwrap();
        assert_eq!(bootstrapper.phase(), BootstrapPhase::AwaitingRealFlow);
        model.adopt_pending().unwrap();
        assert_eq!(model.machine(), &raw());
    }

    #[test]
    fn missing_translation_fails_and_keeps_phase() {
        let model = StateMachineModel::new();
        let mut bootstrapper = bootstrapper(&model);

        let result = bootstrapper.notify("no");

        assert!(matches!(
            result,
            Err(SubscriberError::MissingTranslation { ref label }) if label == "no"
        ));
        assert_eq!(bootstrapper.phase(), BootstrapPhase::AwaitingRealFlow);
        assert!(!model.has_pending());
    }
}
