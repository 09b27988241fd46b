use actix_web::{cookie::Cookie, web, HttpRequest, HttpResponse};

use crate::models::{CookieEntry, CrumbsResponse};
use crate::session::create_crumb_cookie;
use crate::settings::CrumbtrailSettings;
use crate::utils::cookie_utils::{log_cookies, request_cookies};
use crate::utils::responses::ResponseBuilder;

pub const CRUMBS_MESSAGE: &str = "mouse successfully followed crumbs";

/// Build the `/crumbs` body and the cookie it leaves behind
#[must_use]
pub fn leave_crumbs(cookies: Vec<CookieEntry>) -> (CrumbsResponse, Cookie<'static>) {
    let body = CrumbsResponse {
        cookies,
        message: CRUMBS_MESSAGE.to_string(),
    };
    (body, create_crumb_cookie())
}

/// `GET /crumbs`
pub async fn follow_crumbs(
    req: HttpRequest,
    settings: web::Data<CrumbtrailSettings>,
) -> HttpResponse {
    log_cookies(&req);
    let (body, cookie) = leave_crumbs(request_cookies(&req));
    log::info!("Setting cookie '{}'", cookie.name());

    ResponseBuilder::ok()
        .pretty(settings.application.pretty_json)
        .with_cookie(cookie)
        .json(&body)
}
