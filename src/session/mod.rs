//! Session Management Module
//!
//! Stateless sessions carried in a single AES-256-GCM encrypted cookie.
//!
//! # Modules
//!
//! - [`state`] - Request-scoped session mapping and its defaults
//! - [`manager`] - Loading sessions from requests and re-issuing the cookie
//! - [`cookie`] - Cookie construction for the session and crumb cookies
//! - [`errors`] - Session error taxonomy

pub mod cookie;
pub mod errors;
pub mod manager;
pub mod state;

pub use cookie::{
    create_crumb_cookie, CookieFactory, CookieOptions, COOKIE_NAME, CRUMB_COOKIE_NAME,
    CRUMB_COOKIE_VALUE,
};
pub use errors::SessionError;
pub use manager::SessionManager;
pub use state::{session_defaults, SessionState, COUNT_KEY, GOODNIGHT_KEY, HELLO_KEY};
