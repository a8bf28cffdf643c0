//! The menu document consumed at start-up.
//!
//! A document carries the machine and a value map used by the
//! [`Bootstrapper`](crate::bootstrap::Bootstrapper) to translate the first
//! choice:
//!
//! ```json
//! {
//!   "state_machine": { "000": { "yes": "001" }, "001": "emit" },
//!   "value_map": { "yes": "OK" }
//! }
//! ```
//!
//! The shape of the machine is trusted: a target that names no step is only
//! reported when the engine first resolves it.

use crate::core::Machine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

pub mod error;

pub use error::DocumentError;

/// A machine plus the label translations for its first decision.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuDocument {
    pub state_machine: Machine,
    #[serde(default)]
    pub value_map: HashMap<String, String>,
}

impl MenuDocument {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, DocumentError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json(&json)
    }

    /// Translation of `label`, if the value map has one.
    pub fn translate(&self, label: &str) -> Option<&str> {
        self.value_map.get(label).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ROOT_STEP;

    const DOC: &str = r#"{
        "state_machine": {"000": {"yes": "001", "maybe": "000"}, "001": "emit"},
        "value_map": {"yes": "OK"}
    }"#;

    #[test]
    fn parses_machine_and_value_map() {
        let doc = MenuDocument::from_json(DOC).unwrap();

        let root = doc.state_machine.resolve(ROOT_STEP).unwrap().options().unwrap();
        assert_eq!(root.labels(), vec!["yes", "maybe"]);
        assert_eq!(doc.translate("yes"), Some("OK"));
        assert_eq!(doc.translate("maybe"), None);
    }

    #[test]
    fn value_map_is_optional() {
        let doc = MenuDocument::from_json(r#"{"state_machine": {"000": "emit"}}"#).unwrap();
        assert!(doc.value_map.is_empty());
    }

    #[test]
    fn reads_from_any_reader() {
        let doc = MenuDocument::from_reader(DOC.as_bytes()).unwrap();
        assert_eq!(doc.state_machine.len(), 2);
    }

    #[test]
    fn unknown_step_string_is_a_parse_error() {
        let result = MenuDocument::from_json(r#"{"state_machine": {"000": "done"}}"#);
        assert!(matches!(result, Err(DocumentError::Parse(_))));
    }

    #[test]
    fn dangling_targets_are_accepted_at_load() {
        let doc = MenuDocument::from_json(r#"{"state_machine": {"000": {"go": "999"}}}"#).unwrap();
        assert!(doc.state_machine.resolve("999").is_err());
    }
}
