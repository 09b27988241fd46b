// Shared helpers for the HTTP flow tests
#![allow(dead_code)]

use actix_web::{
    cookie::Cookie,
    dev::ServiceResponse,
    http::header,
    test::TestRequest,
    web,
};
use crumbtrail::{CrumbtrailSettings, SessionManager};

pub const TEST_SECRET: &str = "integration-test-session-secret";

/// Settings used by the flow tests: fixed secret, compact JSON
pub fn test_settings(secret: &str) -> CrumbtrailSettings {
    let mut settings = CrumbtrailSettings::default();
    settings.session.session_secret = secret.to_string();
    settings.application.pretty_json = false;
    settings
}

pub fn app_data(
    settings: CrumbtrailSettings,
) -> (web::Data<SessionManager>, web::Data<CrumbtrailSettings>) {
    (
        web::Data::new(SessionManager::from_settings(&settings)),
        web::Data::new(settings),
    )
}

/// Build an initialized test service for the full router
macro_rules! init_app {
    ($settings:expr) => {{
        let (session_manager, settings) = common::app_data($settings);
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(session_manager)
                .app_data(settings)
                .configure(crumbtrail::configure_services),
        )
        .await
    }};
    () => {
        init_app!(common::test_settings(common::TEST_SECRET))
    };
}

/// Send a GET as `client`, store the cookies it sets, return status and JSON body
macro_rules! visit {
    ($app:expr, $client:expr, $uri:expr) => {{
        let resp = actix_web::test::call_service(&$app, $client.get($uri).to_request()).await;
        $client.absorb(&resp);
        let status = resp.status();
        let body = actix_web::test::read_body(resp).await;
        let json: serde_json::Value =
            serde_json::from_slice(&body).expect("response body should be JSON");
        (status, json)
    }};
}

/// A minimal browser: remembers cookies by name and sends them back in order
#[derive(Default, Clone)]
pub struct TestClient {
    cookies: Vec<Cookie<'static>>,
}

impl TestClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a GET request carrying every stored cookie in a single `Cookie` header
    pub fn get(&self, uri: &str) -> TestRequest {
        let req = TestRequest::get().uri(uri);
        if self.cookies.is_empty() {
            return req;
        }

        let header_value = self
            .cookies
            .iter()
            .map(|c| format!("{}={}", c.name(), c.value()))
            .collect::<Vec<_>>()
            .join("; ");
        req.insert_header((header::COOKIE, header_value))
    }

    /// Store the cookies set by a response, replacing ones with the same name
    pub fn absorb<B>(&mut self, resp: &ServiceResponse<B>) {
        for cookie in resp.response().cookies() {
            self.set_cookie(cookie.into_owned());
        }
    }

    pub fn set_cookie(&mut self, cookie: Cookie<'static>) {
        if let Some(existing) = self.cookies.iter_mut().find(|c| c.name() == cookie.name()) {
            *existing = cookie;
        } else {
            self.cookies.push(cookie);
        }
    }

    pub fn cookie_value(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|c| c.name() == name)
            .map(Cookie::value)
    }
}
