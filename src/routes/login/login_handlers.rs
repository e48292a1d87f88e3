use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, Responder};
use log::{error, info, warn};

use super::login_models::{LoginForm, CREDENTIALS_REQUIRED, ROLE_MISSING, TOKEN_MISSING};
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::role::RoleSet;
use crate::routes::screen::{failure_status, Screen};
use crate::session::current::HomeRoute;
use crate::session::notice::Notice;
use crate::views;
use crate::AppState;

pub async fn login_get(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let mut screen = Screen::open(&req, &state);
    let home = screen.session().home();
    if home != HomeRoute::Login {
        info!("Session already active, skipping login form");
        return screen.redirect(home.path());
    }
    let notice = screen.take_notice();
    screen.render(StatusCode::OK, views::login::render("", None, notice.as_ref()))
}

// login logic
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let form = form.into_inner();
    let username = form.username.trim().to_string();
    info!("Received login request for user: {}", username);
    let mut screen = Screen::open(&req, &state);

    if username.is_empty() || form.password.is_empty() {
        return screen.render(
            StatusCode::UNPROCESSABLE_ENTITY,
            views::login::render(&username, Some(CREDENTIALS_REQUIRED), None),
        );
    }

    let request = LoginRequest {
        username: username.clone(),
        password: form.password,
    };
    let response = match state.api.login(&request).await {
        Ok(response) => response,
        Err(e) => {
            error!("Login failed for user {}: {}", username, e);
            let message = e.login_message(state.api.base_url());
            return screen.render(
                failure_status(&e),
                views::login::render(&username, Some(&message), None),
            );
        }
    };

    let (token, roles, home) = match resolve_login(response) {
        Ok(resolved) => resolved,
        Err(message) => {
            warn!("Unusable login response for user {}: {}", username, message);
            return screen.render(
                StatusCode::BAD_GATEWAY,
                views::login::render(&username, Some(message), None),
            );
        }
    };

    screen.store_mut().write(&token, &username, &roles);
    info!("User {} logged in, redirecting to {}", username, home.path());
    screen.redirect(home.path())
}

/// Token, role list and landing screen from a login response. Nothing is
/// persisted unless all three are usable.
fn resolve_login(response: LoginResponse) -> Result<(String, RoleSet, HomeRoute), &'static str> {
    let roles = match response.role {
        Some(roles) if !roles.is_empty() => RoleSet::new(roles),
        _ => return Err(ROLE_MISSING),
    };
    let home = HomeRoute::for_role(roles.landing_role());
    if home == HomeRoute::Login {
        return Err(ROLE_MISSING);
    }
    let token = match response.token {
        Some(token) if !token.trim().is_empty() => token.trim().to_string(),
        _ => return Err(TOKEN_MISSING),
    };
    Ok((token, roles, home))
}

// logout logic
pub async fn logout(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let mut screen = Screen::open(&req, &state);
    let username = screen.session().username().unwrap_or_default().to_string();
    info!("Logging out user: {}", username);
    screen.sign_out(Notice::info("Çıkış yapıldı."))
}
