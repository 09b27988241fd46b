#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

/// Version of the crumbtrail application
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod handlers;
pub mod models;
pub mod routes;
pub mod session;
pub mod settings;
pub mod utils;

#[cfg(test)]
pub mod testing;

/// Re-export commonly used items
pub use handlers::{follow_crumbs, health, show_session};
pub use routes::configure_services;
pub use session::{SessionError, SessionManager, SessionState};
pub use settings::CrumbtrailSettings;
