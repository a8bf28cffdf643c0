//! The live machine, the live step and the staged replacement machine.

use super::machine::{Machine, OptionEntry, OptionsNode, StepValue, ROOT_STEP};
use crate::engine::EngineError;
use std::cell::RefCell;
use std::rc::Rc;

/// Handle to the pending-machine slot.
///
/// Cloned handles share one slot, so a subscriber can stage a machine from
/// inside its callback while the engine is mid-commit. Staging overwrites
/// whatever was staged before; nothing is queued.
#[derive(Clone, Debug, Default)]
pub struct MachineStager {
    slot: Rc<RefCell<Option<Machine>>>,
}

impl MachineStager {
    /// Stage `machine` to replace the live machine at the next commit.
    pub fn stage(&self, machine: Machine) {
        *self.slot.borrow_mut() = Some(machine);
    }

    pub fn is_staged(&self) -> bool {
        self.slot.borrow().is_some()
    }

    pub(crate) fn take(&self) -> Option<Machine> {
        self.slot.borrow_mut().take()
    }
}

/// What the live step offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurrentOptions<'a> {
    /// The live step has options
    Options(&'a OptionsNode),
    /// The live step resolves to the terminal marker (never expected for a
    /// live step; only targets should be terminal)
    Terminal,
    /// There is no live step
    None,
}

/// The live machine and step.
///
/// Only the transition engine mutates this; everything else reads it.
#[derive(Debug, Default)]
pub struct StateMachineModel {
    machine: Machine,
    step: Option<String>,
    options: Vec<OptionEntry>,
    pending: MachineStager,
}

impl StateMachineModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// The live step id, if any.
    pub fn step(&self) -> Option<&str> {
        self.step.as_deref()
    }

    /// Make `id` the live step.
    ///
    /// Fails with [`EngineError::MalformedMachine`] when the machine has no
    /// such step; the live step is left untouched in that case.
    pub fn set_step(&mut self, id: &str) -> Result<(), EngineError> {
        self.machine.resolve(id)?;
        self.step = Some(id.to_string());
        Ok(())
    }

    pub(crate) fn clear_step(&mut self) {
        self.step = None;
    }

    /// What the live step offers, read from the machine definition.
    pub fn current_options(&self) -> CurrentOptions<'_> {
        match self.step.as_deref().and_then(|id| self.machine.get(id)) {
            Some(StepValue::Options(node)) => CurrentOptions::Options(node),
            Some(StepValue::Terminal) => CurrentOptions::Terminal,
            None => CurrentOptions::None,
        }
    }

    /// Options currently on screen, addressed by index.
    pub fn materialized_options(&self) -> &[OptionEntry] {
        &self.options
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    /// Snapshot the live step's options as the on-screen list.
    ///
    /// Returns the labels in display order, empty when the live step has no
    /// options.
    pub(crate) fn materialize(&mut self) -> Vec<String> {
        self.options = match self.current_options() {
            CurrentOptions::Options(node) => node.entries().to_vec(),
            CurrentOptions::Terminal | CurrentOptions::None => Vec::new(),
        };
        self.options.iter().map(|entry| entry.label.clone()).collect()
    }

    pub(crate) fn clear_options(&mut self) {
        self.options.clear();
    }

    /// On-screen option at `index`.
    pub fn option(&self, index: usize) -> Result<&OptionEntry, EngineError> {
        self.options.get(index).ok_or(EngineError::InvalidChoice {
            index,
            len: self.options.len(),
        })
    }

    /// Stage a replacement machine for the next commit point.
    pub fn replace_machine(&mut self, machine: Machine) {
        self.pending.stage(machine);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_staged()
    }

    /// A handle that stages into this model's pending slot.
    pub fn stager(&self) -> MachineStager {
        self.pending.clone()
    }

    /// Adopt the staged machine, if any, and move to its root step.
    ///
    /// Returns `Ok(false)` when nothing was staged. A staged machine without
    /// a root step is left staged and reported as malformed.
    pub(crate) fn adopt_pending(&mut self) -> Result<bool, EngineError> {
        let Some(machine) = self.pending.take() else {
            return Ok(false);
        };

        if let Err(err) = machine.resolve(ROOT_STEP) {
            self.pending.stage(machine);
            return Err(err);
        }

        self.machine = machine;
        self.step = Some(ROOT_STEP.to_string());
        self.options.clear();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_way() -> Machine {
        Machine::new()
            .with_step(
                "000",
                OptionsNode::new().with_option("A", "001").with_option("B", "002"),
            )
            .with_step("001", StepValue::Terminal)
            .with_step("002", StepValue::Terminal)
    }

    #[test]
    fn new_model_has_no_step() {
        let model = StateMachineModel::new();
        assert!(model.step().is_none());
        assert_eq!(model.current_options(), CurrentOptions::None);
        assert!(!model.has_pending());
    }

    #[test]
    fn staged_machine_waits_for_adoption() {
        let mut model = StateMachineModel::new();
        model.replace_machine(two_way());

        assert!(model.has_pending());
        assert!(model.machine().is_empty());

        assert!(model.adopt_pending().unwrap());
        assert_eq!(model.step(), Some(ROOT_STEP));
        assert!(!model.has_pending());
        assert_eq!(model.machine().len(), 3);
    }

    #[test]
    fn later_stage_overwrites_earlier() {
        let mut model = StateMachineModel::new();
        model.replace_machine(Machine::new().with_step("000", StepValue::Terminal));
        model.replace_machine(two_way());

        model.adopt_pending().unwrap();
        assert_eq!(model.machine().len(), 3);
        assert!(!model.adopt_pending().unwrap());
    }

    #[test]
    fn stager_handle_shares_slot() {
        let model = StateMachineModel::new();
        let stager = model.stager();

        stager.stage(two_way());
        assert!(model.has_pending());
    }

    #[test]
    fn set_step_rejects_unknown_step() {
        let mut model = StateMachineModel::new();
        model.replace_machine(two_way());
        model.adopt_pending().unwrap();

        let result = model.set_step("999");
        assert!(matches!(result, Err(EngineError::MalformedMachine { .. })));
        assert_eq!(model.step(), Some(ROOT_STEP));
    }

    #[test]
    fn terminal_live_step_has_no_options() {
        let mut model = StateMachineModel::new();
        model.replace_machine(two_way());
        model.adopt_pending().unwrap();
        model.set_step("001").unwrap();

        assert_eq!(model.current_options(), CurrentOptions::Terminal);
        assert!(model.materialize().is_empty());
    }

    #[test]
    fn materialize_snapshots_labels_in_order() {
        let mut model = StateMachineModel::new();
        model.replace_machine(two_way());
        model.adopt_pending().unwrap();

        assert_eq!(model.materialize(), vec!["A", "B"]);
        assert_eq!(model.option(1).unwrap().target, "002");
        assert!(matches!(
            model.option(2),
            Err(EngineError::InvalidChoice { index: 2, len: 2 })
        ));
    }

    #[test]
    fn rootless_machine_stays_staged() {
        let mut model = StateMachineModel::new();
        model.replace_machine(Machine::new().with_step("001", StepValue::Terminal));

        let result = model.adopt_pending();
        assert!(matches!(result, Err(EngineError::MalformedMachine { .. })));
        assert!(model.has_pending());
        assert!(model.step().is_none());
    }
}
