// HTTP request handlers
pub mod crumbs;
pub mod health;
pub mod sessions;


pub use crumbs::{follow_crumbs, leave_crumbs, CRUMBS_MESSAGE};
pub use health::health;
pub use sessions::{show_session, visit_session};
