//! Protected-screen admission.

use chrono::{DateTime, Utc};

use super::current::{CurrentSession, TokenState};
use super::notice::Notice;
use crate::models::role::{Role, RoleSet};

pub const SIGN_IN_REQUIRED: &str = "Giriş yapmanız gerekiyor.";
pub const TOKEN_REJECTED: &str = "Geçersiz veya süresi dolmuş token. Lütfen tekrar giriş yapın.";

/// A caller admitted to a protected screen.
#[derive(Debug, Clone)]
pub struct Verified {
    pub username: String,
    pub token: String,
    pub roles: RoleSet,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Refusal {
    /// Send the caller to the login screen, optionally wiping the session first.
    SignIn { clear: bool, notice: Option<Notice> },
    /// Authenticated, but without the role. Rendered in place, never redirected.
    Denied { required: Role },
}

pub fn evaluate(session: &CurrentSession, required: Role) -> Result<Verified, Refusal> {
    let token = match (session.state(), session.token()) {
        (TokenState::Absent, _) | (_, None) => {
            return Err(Refusal::SignIn {
                clear: true,
                notice: Some(Notice::warning(SIGN_IN_REQUIRED)),
            })
        }
        (TokenState::Invalid, _) => {
            return Err(Refusal::SignIn {
                clear: true,
                notice: Some(Notice::error(TOKEN_REJECTED)),
            })
        }
        (_, Some(token)) => token,
    };

    // Router fast path: the cached list decides whether the screen is even reachable.
    if !session.cached_roles().contains(required) {
        return Err(Refusal::SignIn {
            clear: false,
            notice: None,
        });
    }

    if !session.is_authorized(required) {
        return Err(Refusal::Denied { required });
    }

    Ok(Verified {
        username: session.username().unwrap_or_default().to_string(),
        token: token.to_string(),
        roles: session.roles().clone(),
        expires_at: session.expires_at(),
    })
}
