//! Session error types
//!
//! Failures here are per-request: they become an HTTP error response and
//! never affect the server process.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::utils::responses::ResponseBuilder;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The requested key is not present in the session mapping
    #[error("Session has no value for key '{0}'")]
    UnknownKey(String),

    /// A value expected to be an integer holds something else
    #[error("Session value for key '{0}' is not an integer")]
    NotAnInteger(String),

    /// Encrypting the session for the response cookie failed
    #[error("Failed to encode session cookie: {0}")]
    Encode(anyhow::Error),
}

impl ResponseError for SessionError {
    fn error_response(&self) -> HttpResponse {
        log::error!("Session request failed: {self}");
        ResponseBuilder::internal_server_error()
            .with_message(&self.to_string())
            .build()
    }
}
