//! Session Manager - Stateless Encrypted Session Handling
//!
//! The `SessionManager` turns the encrypted session cookie on a request into a
//! [`SessionState`] and, after a handler has run, turns a modified state back
//! into a `Set-Cookie`. Nothing is stored server side: the whole session
//! mapping travels inside the cookie.
//!
//! A missing cookie, a cookie encrypted under another key, or a tampered
//! cookie all load as a fresh, empty session.

use actix_web::{cookie::Cookie, HttpRequest};
use anyhow::Result;
use serde_json::Value;
use std::collections::BTreeMap;

use super::cookie::CookieFactory;
use super::state::SessionState;
use super::SessionError;
use crate::settings::CrumbtrailSettings;
use crate::utils::crypto::{decrypt_data, derive_encryption_key, encrypt_data};

#[derive(Clone)]
pub struct SessionManager {
    encryption_key: [u8; 32],
    cookie_factory: CookieFactory,
}

impl SessionManager {
    /// Create a session manager
    ///
    /// `key` is the configured secret; anything other than exactly 32 bytes
    /// is hashed into the AES-256 key.
    #[must_use]
    pub fn new(
        key: &[u8],
        cookie_name: &str,
        cookie_secure: bool,
        session_duration_hours: u64,
    ) -> Self {
        let encryption_key = derive_encryption_key(key);
        let cookie_factory = CookieFactory::new(
            encryption_key,
            cookie_name,
            cookie_secure,
            session_duration_hours,
        );

        Self {
            encryption_key,
            cookie_factory,
        }
    }

    /// Create a session manager from application settings
    #[must_use]
    pub fn from_settings(settings: &CrumbtrailSettings) -> Self {
        Self::new(
            settings.session.session_secret.as_bytes(),
            &settings.session.cookie_name,
            settings.cookies.secure,
            settings.session.session_duration_hours,
        )
    }

    /// Load the session carried by the request
    ///
    /// Never fails: an absent or unreadable cookie yields an empty session.
    #[must_use]
    pub fn load(&self, req: &HttpRequest) -> SessionState {
        match self
            .cookie_factory
            .read_session_cookie::<BTreeMap<String, Value>>(req)
        {
            Ok(Some(values)) => {
                log::debug!("Loaded session with {} key(s)", values.len());
                SessionState::from_values(values)
            }
            Ok(None) => {
                log::debug!("No session cookie present, starting a fresh session");
                SessionState::new()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable session cookie: {e}");
                SessionState::new()
            }
        }
    }

    /// Build the `Set-Cookie` for a session
    ///
    /// Returns `Ok(None)` when nothing changed during the request, so the
    /// client keeps the cookie it already has.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Encode` if encryption fails
    pub fn session_cookie(
        &self,
        state: &SessionState,
    ) -> Result<Option<Cookie<'static>>, SessionError> {
        if !state.modified() {
            return Ok(None);
        }

        self.cookie_factory
            .create_session_cookie(state.values())
            .map(Some)
            .map_err(SessionError::Encode)
    }

    /// Encrypt a session into its cookie value
    ///
    /// # Errors
    ///
    /// Returns an error if encryption fails
    pub fn encode(&self, state: &SessionState) -> Result<String> {
        encrypt_data(state.values(), &self.encryption_key)
    }

    /// Decrypt a cookie value into a session
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be decrypted or is not a JSON object
    pub fn decode(&self, cookie_value: &str) -> Result<SessionState> {
        let values: BTreeMap<String, Value> = decrypt_data(cookie_value, &self.encryption_key)?;
        Ok(SessionState::from_values(values))
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        self.cookie_factory.cookie_name()
    }

    #[must_use]
    pub fn encryption_key(&self) -> &[u8; 32] {
        &self.encryption_key
    }
}
