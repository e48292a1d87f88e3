//! Per-request plumbing shared by every handler: the cookie-backed session,
//! gate refusals, and responses that carry the queued cookie changes.

use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse};
use log::info;

use crate::error::{ApiError, SESSION_EXPIRED};
use crate::models::role::Role;
use crate::session::current::CurrentSession;
use crate::session::gate::{self, Refusal, Verified};
use crate::session::notice::{self, Notice};
use crate::session::storage::CookieStorage;
use crate::session::store::SessionStore;
use crate::views;
use crate::AppState;

pub const LOGIN_PATH: &str = "/login";

pub struct Screen {
    store: SessionStore<CookieStorage>,
}

impl Screen {
    pub fn open(req: &HttpRequest, state: &AppState) -> Self {
        Self {
            store: SessionStore::new(CookieStorage::from_request(req, state.cookie_settings())),
        }
    }

    pub fn session(&mut self) -> CurrentSession {
        CurrentSession::load(&mut self.store)
    }

    pub fn guard(&mut self, required: Role) -> Result<Verified, Refusal> {
        let session = self.session();
        gate::evaluate(&session, required)
    }

    pub fn store_mut(&mut self) -> &mut SessionStore<CookieStorage> {
        &mut self.store
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        notice::take(self.store.storage_mut())
    }

    pub fn push_notice(&mut self, notice: &Notice) {
        notice::push(self.store.storage_mut(), notice);
    }

    pub fn refuse(mut self, refusal: Refusal) -> HttpResponse {
        match refusal {
            Refusal::SignIn { clear, notice } => {
                if clear {
                    self.store.clear();
                }
                if let Some(notice) = notice {
                    self.push_notice(&notice);
                }
                self.redirect(LOGIN_PATH)
            }
            Refusal::Denied { required } => {
                info!("Access denied, {} role required", required.authority());
                self.render(StatusCode::FORBIDDEN, views::dashboard::access_denied(required))
            }
        }
    }

    pub fn render(self, status: StatusCode, html: String) -> HttpResponse {
        let mut builder = HttpResponse::build(status);
        self.store.storage().apply(&mut builder);
        builder.content_type("text/html; charset=utf-8").body(html)
    }

    pub fn redirect(self, location: &str) -> HttpResponse {
        let mut builder = HttpResponse::SeeOther();
        self.store.storage().apply(&mut builder);
        builder.insert_header((header::LOCATION, location)).finish()
    }

    pub fn redirect_with(mut self, location: &str, notice: Notice) -> HttpResponse {
        self.push_notice(&notice);
        self.redirect(location)
    }

    /// Ends the session and goes back to the login screen with `notice`.
    pub fn sign_out(mut self, notice: Notice) -> HttpResponse {
        self.store.clear();
        self.redirect_with(LOGIN_PATH, notice)
    }

    /// Teardown after the backend rejected the token.
    pub fn session_expired(self) -> HttpResponse {
        info!("Backend rejected the session, signing out");
        self.sign_out(Notice::error(SESSION_EXPIRED))
    }
}

/// Status of a screen rendered after a failed backend call.
pub fn failure_status(err: &ApiError) -> StatusCode {
    match err {
        ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        ApiError::Status { status, .. } if (400..500).contains(status) => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        _ => StatusCode::BAD_GATEWAY,
    }
}
