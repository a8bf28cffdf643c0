//! Machine definition types.
//!
//! A [`Machine`] maps step ids to a [`StepValue`]: either an ordered set of
//! options or the terminal marker. Documents spell the terminal marker as the
//! literal string `"emit"`; in Rust it is a variant, so nothing downstream
//! compares strings to find out whether a step ends the flow.

use crate::engine::EngineError;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a step in a [`Machine`].
pub type StepId = String;

/// Display text of an option.
pub type OptionLabel = String;

/// The step every machine starts from.
pub const ROOT_STEP: &str = "000";

/// Document spelling of [`StepValue::Terminal`].
pub const EMIT_SENTINEL: &str = "emit";

/// One option of a step: what is shown and where it leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionEntry {
    /// Text shown for the option
    pub label: OptionLabel,
    /// Step the option leads to
    pub target: StepId,
}

/// Ordered label to target mapping for a single step.
///
/// Order is the order the options were written in the document and decides
/// where each option is drawn. Once options are on screen they are addressed
/// by index into this order.
///
/// # Example
///
/// ```rust
/// use menuflow::core::OptionsNode;
///
/// let node = OptionsNode::new()
///     .with_option("Tea", "010")
///     .with_option("Coffee", "020");
///
/// assert_eq!(node.len(), 2);
/// assert_eq!(node.get(1).map(|o| o.label.as_str()), Some("Coffee"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionsNode {
    entries: Vec<OptionEntry>,
}

impl OptionsNode {
    /// Create an empty options node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option, returning the node for chaining.
    pub fn with_option(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(label, target);
        self
    }

    /// Insert an option.
    ///
    /// A label that is already present keeps its position and takes the new
    /// target, the same way a JSON object with a repeated key behaves.
    pub fn insert(&mut self, label: impl Into<String>, target: impl Into<String>) {
        let label = label.into();
        let target = target.into();
        match self.entries.iter_mut().find(|entry| entry.label == label) {
            Some(existing) => existing.target = target,
            None => self.entries.push(OptionEntry { label, target }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Option at `index`, in display order.
    pub fn get(&self, index: usize) -> Option<&OptionEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OptionEntry> {
        self.entries.iter()
    }

    /// Labels in display order.
    pub fn labels(&self) -> Vec<OptionLabel> {
        self.entries.iter().map(|entry| entry.label.clone()).collect()
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }
}

impl<L: Into<String>, T: Into<String>> FromIterator<(L, T)> for OptionsNode {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        let mut node = OptionsNode::new();
        for (label, target) in iter {
            node.insert(label, target);
        }
        node
    }
}

/// What a step id resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepValue {
    /// The step offers options
    Options(OptionsNode),
    /// Selecting into this step emits the chosen label
    Terminal,
}

impl StepValue {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }

    pub fn options(&self) -> Option<&OptionsNode> {
        match self {
            Self::Options(node) => Some(node),
            Self::Terminal => None,
        }
    }
}

impl From<OptionsNode> for StepValue {
    fn from(node: OptionsNode) -> Self {
        Self::Options(node)
    }
}

/// A complete menu state machine.
///
/// # Example
///
/// ```rust
/// use menuflow::core::{Machine, OptionsNode, StepValue};
///
/// let machine = Machine::new()
///     .with_step("000", OptionsNode::new().with_option("A", "001"))
///     .with_step("001", StepValue::Terminal);
///
/// assert!(machine.resolve("001").unwrap().is_terminal());
/// assert!(machine.resolve("404").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Machine {
    steps: BTreeMap<StepId, StepValue>,
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a step, returning the machine for chaining.
    pub fn with_step(mut self, id: impl Into<String>, value: impl Into<StepValue>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<StepValue>) {
        self.steps.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&StepValue> {
        self.steps.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.steps.contains_key(id)
    }

    /// Resolve a step id, failing when the machine has no such step.
    pub fn resolve(&self, id: &str) -> Result<&StepValue, EngineError> {
        self.steps
            .get(id)
            .ok_or_else(|| EngineError::MalformedMachine {
                step: id.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Serialize for OptionsNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.label, &entry.target)?;
        }
        map.end()
    }
}

fn collect_options<'de, A: MapAccess<'de>>(mut access: A) -> Result<OptionsNode, A::Error> {
    let mut node = OptionsNode::new();
    while let Some((label, target)) = access.next_entry::<String, String>()? {
        node.insert(label, target);
    }
    Ok(node)
}

struct OptionsNodeVisitor;

impl<'de> Visitor<'de> for OptionsNodeVisitor {
    type Value = OptionsNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from option label to target step")
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        collect_options(access)
    }
}

impl<'de> Deserialize<'de> for OptionsNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OptionsNodeVisitor)
    }
}

impl Serialize for StepValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Options(node) => node.serialize(serializer),
            Self::Terminal => serializer.serialize_str(EMIT_SENTINEL),
        }
    }
}

struct StepValueVisitor;

impl<'de> Visitor<'de> for StepValueVisitor {
    type Value = StepValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an options map or the string \"{EMIT_SENTINEL}\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        if value == EMIT_SENTINEL {
            Ok(StepValue::Terminal)
        } else {
            Err(E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        collect_options(access).map(StepValue::Options)
    }
}

impl<'de> Deserialize<'de> for StepValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StepValueVisitor)
    }
}
