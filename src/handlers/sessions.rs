use actix_web::{web, HttpRequest, HttpResponse, ResponseError};

use crate::models::{CookieEntry, SessionResponse, SessionSnapshot};
use crate::session::{SessionError, SessionManager, SessionState, COUNT_KEY};
use crate::settings::CrumbtrailSettings;
use crate::utils::cookie_utils::request_cookies;
use crate::utils::responses::ResponseBuilder;

/// Apply one `/sessions/{key}` visit to a session
///
/// Fills in the defaults for `hello`, `goodnight` and `count`, increments
/// `count` when `key` is `"count"`, then reads `key` back. `key` is not
/// validated: a key the session does not hold fails the lookup.
///
/// # Errors
///
/// Returns `SessionError::UnknownKey` if the session holds no value for `key`
pub fn visit_session(
    state: &mut SessionState,
    key: &str,
    cookies: Vec<CookieEntry>,
) -> Result<SessionResponse, SessionError> {
    state.initialize_defaults();

    if key == COUNT_KEY {
        let count = state.increment(COUNT_KEY)?;
        log::debug!("Session count incremented to {count}");
    }

    let session_value = state.get(key)?.clone();

    Ok(SessionResponse {
        session: SessionSnapshot {
            session_key: key.to_string(),
            session_value,
            session_accessed: state.accessed(),
        },
        cookies,
    })
}

/// `GET /sessions/{key}`
///
/// # Errors
///
/// Returns an error if the updated session cannot be encrypted into its
/// cookie. A key the session does not hold becomes a 500 response that
/// still carries the re-issued session cookie.
pub async fn show_session(
    req: HttpRequest,
    path: web::Path<String>,
    session_manager: web::Data<SessionManager>,
    settings: web::Data<CrumbtrailSettings>,
) -> Result<HttpResponse, SessionError> {
    let key = path.into_inner();
    let mut state = session_manager.load(&req);

    let visit = visit_session(&mut state, &key, request_cookies(&req));

    // Defaults written before a failed lookup are still persisted
    let session_cookie = session_manager.session_cookie(&state)?;
    if session_cookie.is_some() {
        log::info!("Re-issuing session cookie after visit to '{key}'");
    }

    match visit {
        Ok(body) => Ok(ResponseBuilder::ok()
            .pretty(settings.application.pretty_json)
            .with_optional_cookie(session_cookie)
            .json(&body)),
        Err(e) => {
            let mut response = e.error_response();
            if let Some(cookie) = session_cookie {
                if let Err(err) = response.add_cookie(&cookie) {
                    log::warn!("Failed to attach session cookie to error response: {err}");
                }
            }
            Ok(response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestFixtures;
    use serde_json::json;

    #[test]
    fn test_first_visit_defaults() {
        let cases = [
            ("hello", json!("World")),
            ("goodnight", json!("Moon")),
            ("count", json!(1)),
        ];

        for (key, expected) in cases {
            let mut state = SessionState::new();
            let response = visit_session(&mut state, key, Vec::new()).unwrap();

            assert_eq!(response.session.session_key, key);
            assert_eq!(response.session.session_value, expected);
            assert!(response.session.session_accessed);
            assert!(state.modified());
        }
    }

    #[test]
    fn test_count_increments_per_visit() {
        let mut state = SessionState::new();
        let values: Vec<_> = (0..5)
            .map(|_| {
                visit_session(&mut state, "count", Vec::new())
                    .unwrap()
                    .session
                    .session_value
            })
            .collect();

        assert_eq!(values, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
    }

    #[test]
    fn test_other_keys_never_increment() {
        let mut state = TestFixtures::session_with_count(3);

        visit_session(&mut state, "hello", Vec::new()).unwrap();
        visit_session(&mut state, "goodnight", Vec::new()).unwrap();

        assert_eq!(state.get("count").unwrap(), &json!(3));
        assert!(!state.modified());
    }

    #[test]
    fn test_unknown_key_fails_after_defaults() {
        let mut state = SessionState::new();
        let err = visit_session(&mut state, "unknown_key", Vec::new()).unwrap_err();

        assert!(matches!(err, SessionError::UnknownKey(ref key) if key == "unknown_key"));
        // Defaults were still applied before the lookup failed
        assert!(state.contains_key("hello"));
    }

    #[test]
    fn test_key_is_case_sensitive() {
        let mut state = SessionState::new();
        assert!(visit_session(&mut state, "Count", Vec::new()).is_err());
        assert_eq!(state.get("count").unwrap(), &json!(0));
    }

    #[test]
    fn test_cookies_are_passed_through() {
        let mut state = SessionState::new();
        let cookies = vec![CookieEntry::new("mouse", "Cookie")];

        let response = visit_session(&mut state, "hello", cookies.clone()).unwrap();
        assert_eq!(response.cookies, cookies);
    }
}
