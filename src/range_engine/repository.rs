//! Range document loading and lookup.
//!
//! The document nests three levels of keys, position -> facing action ->
//! stack depth, and each leaf is either a notation string or an object of
//! sub-action -> notation string:
//!
//! ```json
//! {
//!   "BTN": { "open": { "50bb": "22+, A2s+, K9s+" } },
//!   "BB":  { "3bet vs BTN": { "50bb": { "3bet": "QQ+, AKs", "call": "JJ-22" } } }
//! }
//! ```
//!
//! Key order is kept as written, so listings and sub-action precedence match
//! the file.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::range_engine::{
    error::{ConfigError, RangeError},
    range::{RangeMapping, RangeSpec},
};

/// File name the web layer looks for when no path is configured.
pub const DEFAULT_RANGES_FILE: &str = "ranges.json";

/// Stack-depth key used when a caller does not pick one.
pub const DEFAULT_STACK_DEPTH: &str = "standard";

type Entries<T> = Vec<(String, T)>;

fn lookup<'a, T>(entries: &'a Entries<T>, key: &str) -> Option<&'a T> {
    entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

fn keys<T>(entries: &Entries<T>) -> Vec<String> {
    entries.iter().map(|(k, _)| k.clone()).collect()
}

// ---------------------------------------------------------------------------
// RangeConfig
// ---------------------------------------------------------------------------

/// Parsed range document, read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeConfig {
    positions: Entries<Entries<Entries<RangeSpec>>>,
}

impl RangeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one leaf. Intended for building documents in code.
    pub fn insert(
        &mut self,
        position: impl Into<String>,
        action: impl Into<String>,
        stack_depth: impl Into<String>,
        spec: RangeSpec,
    ) -> &mut Self {
        let actions = entry(&mut self.positions, position.into());
        let stacks = entry(actions, action.into());
        let stack_depth = stack_depth.into();
        match stacks.iter_mut().find(|(k, _)| *k == stack_depth) {
            Some((_, existing)) => *existing = spec,
            None => stacks.push((stack_depth, spec)),
        }
        self
    }

    /// Walk a JSON document into the nested configuration.
    pub fn from_value(doc: &Value) -> Result<Self, ConfigError> {
        let mut config = RangeConfig::new();
        for (position, actions) in as_object(doc, "$")? {
            let pos_path = format!("$.{position}");
            let mut action_entries = Vec::new();
            for (action, stacks) in as_object(actions, &pos_path)? {
                let action_path = format!("{pos_path}.{action}");
                let mut stack_entries = Vec::new();
                for (stack_depth, leaf) in as_object(stacks, &action_path)? {
                    let leaf_path = format!("{action_path}.{stack_depth}");
                    stack_entries.push((stack_depth.clone(), leaf_spec(leaf, &leaf_path)?));
                }
                action_entries.push((action.clone(), stack_entries));
            }
            config.positions.push((position.clone(), action_entries));
        }
        Ok(config)
    }

    pub fn spec(&self, position: &str, action: &str, stack_depth: &str) -> Option<&RangeSpec> {
        let actions = lookup(&self.positions, position)?;
        let stacks = lookup(actions, action)?;
        lookup(stacks, stack_depth)
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

fn entry<T: Default>(entries: &mut Entries<T>, key: String) -> &mut T {
    let idx = match entries.iter().position(|(k, _)| *k == key) {
        Some(idx) => idx,
        None => {
            entries.push((key, T::default()));
            entries.len() - 1
        }
    };
    &mut entries[idx].1
}

fn as_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a serde_json::Map<String, Value>, ConfigError> {
    value.as_object().ok_or_else(|| ConfigError::Shape {
        path: path.to_string(),
        reason: "expected an object".to_string(),
    })
}

fn leaf_spec(leaf: &Value, path: &str) -> Result<RangeSpec, ConfigError> {
    match leaf {
        Value::String(text) => Ok(RangeSpec::Binary(text.clone())),
        Value::Object(parts) => parts
            .iter()
            .map(|(label, text)| match text {
                Value::String(text) => Ok((label.clone(), text.clone())),
                _ => Err(ConfigError::Shape {
                    path: format!("{path}.{label}"),
                    reason: "sub-action range must be a string".to_string(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(RangeSpec::MultiAction),
        _ => Err(ConfigError::Shape {
            path: path.to_string(),
            reason: "range must be a string or an object of strings".to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// RangeRepository
// ---------------------------------------------------------------------------

/// Read-only store of configured ranges; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RangeRepository {
    config: RangeConfig,
}

impl RangeRepository {
    /// Load `path`, falling back to an empty repository on any failure.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(repo) => repo,
            Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "range file not found, starting with no ranges");
                Self::default()
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to load range file, starting with no ranges");
                Self::default()
            }
        }
    }

    /// Strict variant of [`RangeRepository::load`].
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let repo = Self::from_json_str(&text)?;
        info!(
            path = %path.display(),
            positions = repo.config.positions.len(),
            "loaded range file"
        );
        Ok(repo)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let doc: Value = serde_json::from_str(text)?;
        Ok(Self::from_config(RangeConfig::from_value(&doc)?))
    }

    pub fn from_config(config: RangeConfig) -> Self {
        RangeRepository { config }
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Resolve one selection into a hand -> action mapping.
    ///
    /// A missing key at any level is `RangeNotFound`; a present leaf with no
    /// hands resolves to an empty mapping.
    pub fn resolve_range(
        &self,
        position: &str,
        action: &str,
        stack_depth: &str,
    ) -> Result<RangeMapping, RangeError> {
        let spec = self
            .config
            .spec(position, action, stack_depth)
            .ok_or_else(|| RangeError::RangeNotFound {
                position: position.to_string(),
                action: action.to_string(),
                stack_depth: stack_depth.to_string(),
            })?;
        let mapping = spec.resolve()?;
        debug!(position, action, stack_depth, hands = mapping.len(), "resolved range");
        Ok(mapping)
    }

    /// [`resolve_range`](Self::resolve_range) at [`DEFAULT_STACK_DEPTH`].
    pub fn resolve_default(&self, position: &str, action: &str) -> Result<RangeMapping, RangeError> {
        self.resolve_range(position, action, DEFAULT_STACK_DEPTH)
    }

    pub fn list_positions(&self) -> Vec<String> {
        keys(&self.config.positions)
    }

    pub fn list_actions(&self, position: &str) -> Vec<String> {
        lookup(&self.config.positions, position).map(keys).unwrap_or_default()
    }

    pub fn list_stack_depths(&self, position: &str, action: &str) -> Vec<String> {
        lookup(&self.config.positions, position)
            .and_then(|actions| lookup(actions, action))
            .map(keys)
            .unwrap_or_default()
    }

    /// `["in_range"]` for a binary leaf, the sub-action labels otherwise.
    pub fn list_range_actions(&self, position: &str, action: &str, stack_depth: &str) -> Vec<String> {
        self.config
            .spec(position, action, stack_depth)
            .map(RangeSpec::action_labels)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }
}
