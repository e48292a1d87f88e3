//! The persisted session: auth token, username and the role list returned at
//! login, each under its own key.

use log::warn;

use super::storage::ClientStorage;
use crate::models::role::{Authority, RoleSet};

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const ROLE_KEY: &str = "role";

const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, USERNAME_KEY, ROLE_KEY];

pub struct SessionStore<S> {
    storage: S,
}

impl<S: ClientStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn token(&self) -> Option<&str> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn username(&self) -> Option<&str> {
        self.storage.get(USERNAME_KEY).filter(|u| !u.is_empty())
    }

    /// Cached role list. Never fails: anything that is not a JSON array of
    /// `{authority}` objects is deleted and read as empty.
    pub fn read(&mut self) -> RoleSet {
        let raw = match self.storage.get(ROLE_KEY) {
            Some(raw) => raw.trim().to_string(),
            None => return RoleSet::default(),
        };

        if raw.is_empty() || raw == "undefined" || raw == "null" {
            warn!("Discarding empty role entry {:?}", raw);
            self.storage.remove(ROLE_KEY);
            return RoleSet::default();
        }

        match serde_json::from_str::<Vec<Authority>>(&raw) {
            Ok(authorities) => RoleSet::new(authorities),
            Err(e) => {
                warn!("Discarding corrupt role entry: {}", e);
                self.storage.remove(ROLE_KEY);
                RoleSet::default()
            }
        }
    }

    pub fn write(&mut self, token: &str, username: &str, roles: &RoleSet) {
        self.storage.set(TOKEN_KEY, token);
        self.storage.set(USERNAME_KEY, username);
        match serde_json::to_string(roles) {
            Ok(encoded) => self.storage.set(ROLE_KEY, &encoded),
            Err(e) => warn!("Role list could not be encoded: {}", e),
        }
    }

    pub fn clear(&mut self) {
        for key in SESSION_KEYS {
            if self.storage.get(key).is_some() {
                self.storage.remove(key);
            }
        }
    }

    pub fn has_data(&self) -> bool {
        SESSION_KEYS.iter().any(|key| self.storage.get(key).is_some())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
