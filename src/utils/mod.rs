pub mod cookie_utils;
pub mod crypto;
pub mod responses;
