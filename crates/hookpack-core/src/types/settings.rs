use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::HookpackError;

/// Top-level key holding the event -> hook groups map.
pub const HOOKS_KEY: &str = "hooks";

/// The whole settings.json document.
///
/// Only the `hooks` key is interpreted; every other key is carried through
/// untouched, in its original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsDocument(Map<String, Value>);

impl SettingsDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns the hook map, or `None` if the document has no `hooks` key.
    pub fn hooks(&self) -> Result<Option<&Map<String, Value>>, HookpackError> {
        match self.0.get(HOOKS_KEY) {
            None => Ok(None),
            Some(Value::Object(hooks)) => Ok(Some(hooks)),
            Some(_) => Err(not_an_object()),
        }
    }

    /// Mutable access to an existing hook map.
    pub fn hooks_mut(&mut self) -> Result<Option<&mut Map<String, Value>>, HookpackError> {
        match self.0.get_mut(HOOKS_KEY) {
            None => Ok(None),
            Some(Value::Object(hooks)) => Ok(Some(hooks)),
            Some(_) => Err(not_an_object()),
        }
    }

    /// Mutable access to the hook map, inserting an empty one at the end of
    /// the document if it is missing.
    pub fn hooks_or_insert(&mut self) -> Result<&mut Map<String, Value>, HookpackError> {
        match self
            .0
            .entry(HOOKS_KEY)
            .or_insert_with(|| Value::Object(Map::new()))
        {
            Value::Object(hooks) => Ok(hooks),
            _ => Err(not_an_object()),
        }
    }

    /// Drops the `hooks` key without disturbing the order of the other keys.
    pub fn remove_hooks(&mut self) {
        self.0.retain(|key, _| key != HOOKS_KEY);
    }
}

fn not_an_object() -> HookpackError {
    HookpackError::MalformedSettings(format!("\"{HOOKS_KEY}\" is not a JSON object"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> SettingsDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn deserialize_rejects_non_object_root() {
        let result: Result<SettingsDocument, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }

    #[test]
    fn hooks_absent_is_none() {
        let settings = doc(json!({"model": "opus"}));
        assert!(settings.hooks().unwrap().is_none());
    }

    #[test]
    fn hooks_wrong_type_is_malformed() {
        let settings = doc(json!({"hooks": ["Stop"]}));
        assert!(matches!(
            settings.hooks(),
            Err(HookpackError::MalformedSettings(_))
        ));
    }

    #[test]
    fn hooks_or_insert_appends_empty_map() {
        let mut settings = doc(json!({"model": "opus"}));
        settings.hooks_or_insert().unwrap();

        let keys: Vec<&String> = settings.as_map().keys().collect();
        assert_eq!(keys, vec!["model", "hooks"]);
        assert_eq!(settings.as_map().get("hooks"), Some(&json!({})));
    }

    #[test]
    fn remove_hooks_keeps_key_order() {
        let mut settings = doc(json!({"a": 1, "hooks": {}, "b": 2, "c": 3}));
        settings.remove_hooks();

        let keys: Vec<&String> = settings.as_map().keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}
