//! Signed session-id cookie.

use rand::RngCore;
use std::time::Duration;
use tower_cookies::cookie::{time, SameSite};
use tower_cookies::{Cookie, Cookies, Key};
use uuid::Uuid;

/// Issues and verifies the cookie that carries a browser's session id.
#[derive(Clone)]
pub struct SessionCookies {
    key: Key,
    cookie_name: String,
    max_age: time::Duration,
}

impl SessionCookies {
    /// `ttl` becomes the cookie's `Max-Age`; keep it equal to the store's idle ttl.
    pub fn new(key: Key, cookie_name: impl Into<String>, ttl: Duration) -> Self {
        Self {
            key,
            cookie_name: cookie_name.into(),
            max_age: time::Duration::seconds(i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)),
        }
    }

    /// Use a fresh random signing key held only in memory.
    pub fn with_random_key(cookie_name: impl Into<String>, ttl: Duration) -> Self {
        let mut bytes = [0u8; 64];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self::new(Key::from(&bytes[..]), cookie_name, ttl)
    }

    /// Session id from a cookie whose signature verifies.
    pub fn session_id(&self, cookies: &Cookies) -> Option<String> {
        cookies
            .signed(&self.key)
            .get(&self.cookie_name)
            .map(|c| c.value().to_string())
    }

    /// Existing verified session id, or a newly minted one.
    pub fn session_id_or_new(&self, cookies: &Cookies) -> String {
        self.session_id(cookies)
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    pub fn issue(&self, cookies: &Cookies, session_id: &str) {
        let cookie = Cookie::build((self.cookie_name.clone(), session_id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(self.max_age)
            .build();
        cookies.signed(&self.key).add(cookie);
    }

    pub fn revoke(&self, cookies: &Cookies) {
        let cookie = Cookie::build((self.cookie_name.clone(), "")).path("/").build();
        cookies.signed(&self.key).remove(cookie);
    }
}
