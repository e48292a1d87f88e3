//! Client-side key/value storage. In production this is the browser's cookie
//! jar; writes are queued and emitted as `Set-Cookie` headers on the response.

use std::collections::BTreeMap;

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponseBuilder};
use log::warn;

pub trait ClientStorage {
    fn get(&self, key: &str) -> Option<&str>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub max_age_days: i64,
    pub secure: bool,
}

/// Snapshot of the request's cookies plus the changes made while handling it.
#[derive(Debug)]
pub struct CookieStorage {
    values: BTreeMap<String, String>,
    changes: Vec<Cookie<'static>>,
    settings: CookieSettings,
}

impl CookieStorage {
    pub fn from_request(req: &HttpRequest, settings: CookieSettings) -> Self {
        let values = match req.cookies() {
            Ok(cookies) => cookies
                .iter()
                .map(|c| (c.name().to_string(), c.value().to_string()))
                .collect(),
            Err(e) => {
                warn!("Ignoring unparsable cookie header: {}", e);
                BTreeMap::new()
            }
        };
        Self {
            values,
            changes: Vec::new(),
            settings,
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Writes every queued change onto the response, percent-encoded.
    pub fn apply(&self, builder: &mut HttpResponseBuilder) {
        for cookie in &self.changes {
            builder.append_header((header::SET_COOKIE, cookie.encoded().to_string()));
        }
    }

    fn queue(&mut self, cookie: Cookie<'static>) {
        self.changes.retain(|c| c.name() != cookie.name());
        self.changes.push(cookie);
    }
}

impl ClientStorage for CookieStorage {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        let cookie = Cookie::build(key.to_string(), value.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.settings.secure)
            .max_age(time::Duration::days(self.settings.max_age_days))
            .finish();
        self.queue(cookie);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
        let mut cookie = Cookie::build(key.to_string(), "").path("/").finish();
        cookie.make_removal();
        self.queue(cookie);
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    pub values: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
impl ClientStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
