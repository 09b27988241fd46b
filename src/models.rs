use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// One request cookie, serialized as a single-entry object `{"name": "value"}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieEntry {
    pub name: String,
    pub value: String,
}

impl CookieEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl Serialize for CookieEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}

/// Snapshot of the session lookup performed by `/sessions/{key}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub session_key: String,
    pub session_value: Value,
    pub session_accessed: bool,
}

/// Body of `/sessions/{key}`
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session: SessionSnapshot,
    pub cookies: Vec<CookieEntry>,
}

/// Body of `/crumbs`
#[derive(Debug, Clone, Serialize)]
pub struct CrumbsResponse {
    pub cookies: Vec<CookieEntry>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
