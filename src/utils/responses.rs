//! HTTP response handling
//!
//! A single place to build the JSON success and error responses returned by
//! the handlers, including the cookies they carry.

use actix_web::{cookie::Cookie, http::header, HttpResponse};
use serde::Serialize;
use serde_json::json;

// ===============================
// CACHED RESPONSES
// ===============================

/// Pre-serialized bodies for responses without customization
static CACHED_RESPONSES: std::sync::LazyLock<CachedResponses> =
    std::sync::LazyLock::new(CachedResponses::new);

struct CachedResponses {
    server_error: String,
    not_found: String,
}

impl CachedResponses {
    fn new() -> Self {
        Self {
            server_error: Self::create_json("server_error", "An internal server error occurred"),
            not_found: Self::create_json("not_found", "The requested resource does not exist"),
        }
    }

    fn create_json(error: &str, message: &str) -> String {
        json!({
            "error": error,
            "message": message
        })
        .to_string()
    }

    fn server_error(&self) -> HttpResponse {
        HttpResponse::InternalServerError()
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .body(self.server_error.clone())
    }

    fn not_found(&self) -> HttpResponse {
        HttpResponse::NotFound()
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .body(self.not_found.clone())
    }
}

/// Unified response builder
pub struct ResponseBuilder;

impl ResponseBuilder {
    /// Create an `InternalServerError` (500) error response with optional customization
    #[must_use]
    pub fn internal_server_error() -> ErrorResponseBuilder {
        ErrorResponseBuilder::new(ErrorType::InternalServerError)
    }

    /// Create a `NotFound` (404) error response with optional customization
    #[must_use]
    pub fn not_found() -> ErrorResponseBuilder {
        ErrorResponseBuilder::new(ErrorType::NotFound)
    }

    /// Create an OK response (200) with JSON content
    #[must_use]
    pub fn ok() -> JsonResponseBuilder {
        JsonResponseBuilder::new()
    }
}

// ===============================
// BUILDER TYPES
// ===============================

/// Builder for error responses with fluent interface
pub struct ErrorResponseBuilder {
    error_type: ErrorType,
    error_code: Option<String>,
    message: Option<String>,
}

/// Builder for 200 JSON responses
pub struct JsonResponseBuilder {
    pretty: bool,
    cookies: Vec<Cookie<'static>>,
}

#[derive(Clone, Copy)]
enum ErrorType {
    InternalServerError,
    NotFound,
}

impl ErrorResponseBuilder {
    fn new(error_type: ErrorType) -> Self {
        Self {
            error_type,
            error_code: None,
            message: None,
        }
    }

    /// Set a custom error code (e.g., "`server_error`")
    #[must_use]
    pub fn with_error_code(mut self, code: &str) -> Self {
        self.error_code = Some(code.to_string());
        self
    }

    /// Set a custom error message
    #[must_use]
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Build the final `HttpResponse`
    #[must_use]
    pub fn build(self) -> HttpResponse {
        if self.error_code.is_none() && self.message.is_none() {
            return match self.error_type {
                ErrorType::InternalServerError => CACHED_RESPONSES.server_error(),
                ErrorType::NotFound => CACHED_RESPONSES.not_found(),
            };
        }

        let error_type = self.error_type;
        let body = json!({
            "error": self
                .error_code
                .unwrap_or_else(|| error_type.default_error_code().to_string()),
            "message": self
                .message
                .unwrap_or_else(|| error_type.default_message().to_string()),
        });

        let mut response = match error_type {
            ErrorType::InternalServerError => HttpResponse::InternalServerError(),
            ErrorType::NotFound => HttpResponse::NotFound(),
        };
        response.json(body)
    }
}

impl ErrorType {
    fn default_error_code(self) -> &'static str {
        match self {
            Self::InternalServerError => "server_error",
            Self::NotFound => "not_found",
        }
    }

    fn default_message(self) -> &'static str {
        match self {
            Self::InternalServerError => "An internal server error occurred",
            Self::NotFound => "The requested resource does not exist",
        }
    }
}

impl JsonResponseBuilder {
    fn new() -> Self {
        Self {
            pretty: false,
            cookies: Vec::new(),
        }
    }

    /// Pretty-print the JSON body
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Add a cookie to the response
    #[must_use]
    pub fn with_cookie(mut self, cookie: Cookie<'static>) -> Self {
        self.cookies.push(cookie);
        self
    }

    /// Add a cookie if one is given
    #[must_use]
    pub fn with_optional_cookie(self, cookie: Option<Cookie<'static>>) -> Self {
        match cookie {
            Some(cookie) => self.with_cookie(cookie),
            None => self,
        }
    }

    /// Build the response with JSON content
    #[must_use]
    pub fn json<T: Serialize>(self, data: &T) -> HttpResponse {
        let body = if self.pretty {
            serde_json::to_string_pretty(data)
        } else {
            serde_json::to_string(data)
        };

        let body = match body {
            Ok(body) => body,
            Err(e) => {
                log::error!("Failed to serialize response body: {e}");
                return ResponseBuilder::internal_server_error()
                    .with_error_code("encoding_failed")
                    .with_message("Failed to encode response")
                    .build();
            }
        };

        let mut builder = HttpResponse::Ok();
        for cookie in self.cookies {
            builder.cookie(cookie);
        }
        builder
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .body(body)
    }
}
