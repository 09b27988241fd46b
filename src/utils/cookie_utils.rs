use actix_web::HttpRequest;
use std::collections::HashSet;

use crate::models::CookieEntry;

/// Collect the request cookies in the order they were sent
///
/// One entry per distinct cookie name; when a name repeats, the first
/// occurrence wins. A `Cookie` header that fails to parse yields no entries.
#[must_use]
pub fn request_cookies(req: &HttpRequest) -> Vec<CookieEntry> {
    let cookies = match req.cookies() {
        Ok(cookies) => cookies,
        Err(e) => {
            log::warn!("Failed to parse request cookies: {e}");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    cookies
        .iter()
        .filter(|cookie| seen.insert(cookie.name().to_string()))
        .map(|cookie| CookieEntry::new(cookie.name(), cookie.value()))
        .collect()
}

/// Log the names of the cookies on a request
pub fn log_cookies(req: &HttpRequest) {
    if let Ok(cookies) = req.cookies() {
        for cookie in cookies.iter() {
            log::debug!("Found cookie: name='{}'", cookie.name());
        }
    }
}
