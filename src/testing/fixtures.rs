//! Test fixtures providing pre-built test objects

use actix_web::web;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use super::constants::TEST_SESSION_KEY;
use crate::session::{SessionManager, SessionState, COOKIE_NAME};
use crate::settings::CrumbtrailSettings;

/// Central fixture provider for test data
pub struct TestFixtures;

impl TestFixtures {
    /// Settings with a fixed secret and compact JSON output
    #[must_use]
    pub fn settings() -> CrumbtrailSettings {
        let mut settings = CrumbtrailSettings::default();
        settings.session.session_secret =
            String::from_utf8_lossy(TEST_SESSION_KEY.as_slice()).into_owned();
        settings.application.pretty_json = false;
        settings
    }

    /// Session manager using the test key
    #[must_use]
    pub fn session_manager() -> SessionManager {
        SessionManager::new(TEST_SESSION_KEY, COOKIE_NAME, false, 0)
    }

    /// App data registered by the server, for `App::app_data`
    #[must_use]
    pub fn app_data() -> (web::Data<SessionManager>, web::Data<CrumbtrailSettings>) {
        (
            web::Data::new(SessionManager::from_settings(&Self::settings())),
            web::Data::new(Self::settings()),
        )
    }

    /// A session as it looks after the first visit to `/sessions/hello`
    #[must_use]
    pub fn initialized_session() -> SessionState {
        Self::session_with_count(0)
    }

    /// An initialized session whose `count` is already `count`
    #[must_use]
    pub fn session_with_count(count: i64) -> SessionState {
        let mut values: BTreeMap<String, Value> = BTreeMap::new();
        values.insert("hello".to_string(), json!("World"));
        values.insert("goodnight".to_string(), json!("Moon"));
        values.insert("count".to_string(), json!(count));
        SessionState::from_values(values)
    }
}
