use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;
use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

use crate::utils::crypto::{decrypt_data, encrypt_data};

/// Default name of the encrypted session cookie
pub const COOKIE_NAME: &str = "session";

/// The plain cookie set by `/crumbs`
pub const CRUMB_COOKIE_NAME: &str = "mouse";
pub const CRUMB_COOKIE_VALUE: &str = "Cookie";

/// Options for cookie creation
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieOptions {
    /// `None` produces a browser-session cookie
    pub max_age: Option<Duration>,
}

/// Cookie factory for the encrypted session cookie and the plain crumb cookie
#[derive(Clone)]
pub struct CookieFactory {
    encryption_key: [u8; 32],
    cookie_name: String,
    cookie_secure: bool,
    session_duration_hours: u64,
}

impl CookieFactory {
    #[must_use]
    pub fn new(
        encryption_key: [u8; 32],
        cookie_name: &str,
        cookie_secure: bool,
        session_duration_hours: u64,
    ) -> Self {
        Self {
            encryption_key,
            cookie_name: cookie_name.to_string(),
            cookie_secure,
            session_duration_hours,
        }
    }

    /// Create a cookie whose value is the encrypted JSON encoding of `data`
    ///
    /// # Errors
    ///
    /// Returns an error if encryption fails
    pub fn create_cookie<T: Serialize>(
        &self,
        name: &str,
        data: &T,
        options: CookieOptions,
    ) -> Result<Cookie<'static>> {
        let value = encrypt_data(data, &self.encryption_key)?;

        let mut builder = Cookie::build(name.to_owned(), value)
            .http_only(true)
            .secure(self.cookie_secure)
            .same_site(SameSite::Lax)
            .path("/");
        if let Some(max_age) = options.max_age {
            builder = builder.max_age(max_age);
        }

        Ok(builder.finish())
    }

    /// Create the encrypted session cookie carrying `data`
    ///
    /// # Errors
    ///
    /// Returns an error if encryption fails
    pub fn create_session_cookie<T: Serialize>(&self, data: &T) -> Result<Cookie<'static>> {
        let max_age = (self.session_duration_hours > 0).then(|| {
            Duration::hours(i64::try_from(self.session_duration_hours).unwrap_or(i64::MAX / 3600))
        });

        self.create_cookie(
            &self.cookie_name,
            data,
            CookieOptions { max_age },
        )
    }

    /// Read and decrypt the session cookie from the request
    ///
    /// Returns `Ok(None)` when the request carries no session cookie.
    ///
    /// # Errors
    ///
    /// Returns an error if the cookie is present but cannot be decrypted or parsed
    pub fn read_session_cookie<T: DeserializeOwned>(&self, req: &HttpRequest) -> Result<Option<T>> {
        req.cookie(&self.cookie_name)
            .map(|cookie| decrypt_data(cookie.value(), &self.encryption_key))
            .transpose()
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}

/// The plain, client-readable `mouse=Cookie` cookie with framework-default attributes
#[must_use]
pub fn create_crumb_cookie() -> Cookie<'static> {
    Cookie::build(CRUMB_COOKIE_NAME, CRUMB_COOKIE_VALUE)
        .path("/")
        .finish()
}
