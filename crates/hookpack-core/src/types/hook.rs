use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HookpackError;

/// A single `{"type": "command", "command": "..."}` entry inside a hook group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookCommand {
    #[serde(rename = "type")]
    pub kind: String,
    pub command: String,
}

impl HookCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            kind: "command".to_string(),
            command: command.into(),
        }
    }
}

/// A hook group as written under an event in settings.json.
///
/// Only used to build new groups. Groups already on disk are kept as raw
/// JSON so that fields this crate doesn't know about survive a rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookGroup {
    pub hooks: Vec<HookCommand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<String>,
}

impl HookGroup {
    /// Builds the single-command group for a pack entry. An empty matcher is
    /// dropped rather than written as `""`.
    pub fn for_entry(entry: &PackHookEntry) -> Self {
        Self {
            hooks: vec![HookCommand::new(entry.command.clone())],
            matcher: entry.matcher.clone().filter(|m| !m.is_empty()),
        }
    }
}

/// What a pack wants registered for one event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackHookEntry {
    pub command: String,
    #[serde(default)]
    pub matcher: Option<String>,
}

impl PackHookEntry {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            matcher: None,
        }
    }

    pub fn with_matcher(mut self, matcher: impl Into<String>) -> Self {
        self.matcher = Some(matcher.into());
        self
    }
}

/// The event -> entry mapping passed to `install`, in the order the events
/// appeared in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackHooks {
    entries: Vec<(String, PackHookEntry)>,
}

impl PackHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the `hooks_json` argument, e.g.
    /// `{"SessionStart": {"command": "bash -c '...'"}, "Stop": {"command": "..."}}`.
    ///
    /// # Errors
    ///
    /// Returns [`HookpackError::Json`] if the text is not JSON, and
    /// [`HookpackError::InvalidHookEntries`] if it is not an object of
    /// `{command, matcher?}` records.
    pub fn parse(json: &str) -> Result<Self, HookpackError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, HookpackError> {
        let Value::Object(map) = value else {
            return Err(HookpackError::InvalidHookEntries(
                "expected a JSON object mapping event names to hook entries".to_string(),
            ));
        };

        let mut hooks = Self::new();
        for (event, raw) in map {
            let entry: PackHookEntry = serde_json::from_value(raw)
                .map_err(|e| HookpackError::InvalidHookEntries(format!("{event}: {e}")))?;
            hooks.insert(event, entry);
        }
        Ok(hooks)
    }

    /// Adds or replaces the entry for `event`, keeping its original position.
    pub fn insert(&mut self, event: impl Into<String>, entry: PackHookEntry) {
        let event = event.into();
        match self.entries.iter_mut().find(|(name, _)| *name == event) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((event, entry)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PackHookEntry)> {
        self.entries
            .iter()
            .map(|(event, entry)| (event.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
