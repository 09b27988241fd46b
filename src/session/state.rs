//! Request-scoped session state
//!
//! `SessionState` is the session mapping for a single request. It is loaded
//! from the encrypted session cookie by the [`SessionManager`](super::SessionManager),
//! mutated explicitly by handlers, and written back only when it was
//! modified.

use serde_json::Value;
use std::collections::BTreeMap;

use super::SessionError;

/// Session keys and their first-visit defaults
pub const HELLO_KEY: &str = "hello";
pub const GOODNIGHT_KEY: &str = "goodnight";
pub const COUNT_KEY: &str = "count";

/// Default value for each known session key, in initialization order
#[must_use]
pub fn session_defaults() -> [(&'static str, Value); 3] {
    [
        (HELLO_KEY, Value::from("World")),
        (GOODNIGHT_KEY, Value::from("Moon")),
        (COUNT_KEY, Value::from(0)),
    ]
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    values: BTreeMap<String, Value>,
    accessed: bool,
    modified: bool,
}

impl SessionState {
    /// Create an empty (fresh) session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap values decoded from a session cookie
    #[must_use]
    pub fn from_values(values: BTreeMap<String, Value>) -> Self {
        Self {
            values,
            accessed: false,
            modified: false,
        }
    }

    /// Look up a key, failing when the session holds no value for it
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownKey` if the key is not present
    pub fn get(&mut self, key: &str) -> Result<&Value, SessionError> {
        self.accessed = true;
        self.values
            .get(key)
            .ok_or_else(|| SessionError::UnknownKey(key.to_string()))
    }

    /// Store a value, marking the session modified only if it changed
    pub fn insert(&mut self, key: &str, value: Value) {
        if self.values.get(key) != Some(&value) {
            self.values.insert(key.to_string(), value);
            self.modified = true;
        }
    }

    /// Set `key` to `default` unless it already holds a truthy value
    ///
    /// Absent keys and falsy values (`null`, `false`, `0`, `""`, `[]`, `{}`)
    /// are both replaced. Returns true when the default was applied.
    pub fn set_default(&mut self, key: &str, default: Value) -> bool {
        self.accessed = true;
        if self.values.get(key).is_some_and(is_truthy) {
            return false;
        }
        self.insert(key, default);
        true
    }

    /// Apply the defaults for `hello`, `goodnight` and `count`
    pub fn initialize_defaults(&mut self) {
        for (key, default) in session_defaults() {
            if self.set_default(key, default) {
                log::debug!("Initialized session key '{key}' with its default");
            }
        }
    }

    /// Add one to an integer value and return the new value
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownKey` if the key is missing and
    /// `SessionError::NotAnInteger` if it does not hold an integer
    pub fn increment(&mut self, key: &str) -> Result<i64, SessionError> {
        let current = self
            .get(key)?
            .as_i64()
            .ok_or_else(|| SessionError::NotAnInteger(key.to_string()))?;
        let next = current.saturating_add(1);
        self.insert(key, Value::from(next));
        Ok(next)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Whether any lookup happened during this request
    #[must_use]
    pub fn accessed(&self) -> bool {
        self.accessed
    }

    /// Whether any value changed during this request
    #[must_use]
    pub fn modified(&self) -> bool {
        self.modified
    }

    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
