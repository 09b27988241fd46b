use actix_web::web;

use crate::handlers::{follow_crumbs, health, show_session};
use crate::utils::responses::ResponseBuilder;

/// Register every route served by crumbtrail
pub fn configure_services(cfg: &mut web::ServiceConfig) {
    cfg.route("/sessions/{key}", web::get().to(show_session))
        .route("/crumbs", web::get().to(follow_crumbs))
        .route("/ping", web::get().to(health))
        .default_service(web::to(|| async { ResponseBuilder::not_found().build() }));
}
