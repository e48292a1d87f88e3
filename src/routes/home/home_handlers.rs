use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::info;

use crate::routes::screen::{Screen, LOGIN_PATH};
use crate::AppState;

/// `/` dispatch from the cached role list. Only a usable token counts.
pub async fn home(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let mut screen = Screen::open(&req, &state);
    let session = screen.session();
    if session.is_invalid() {
        info!("Stored token is no longer valid, clearing session");
        screen.store_mut().clear();
    }
    let target = session.home().path();
    info!("Dispatching / to {}", target);
    screen.redirect(target)
}

pub async fn fallback(req: HttpRequest) -> HttpResponse {
    info!("Unknown path {}, redirecting to login", req.path());
    HttpResponse::SeeOther()
        .insert_header((actix_web::http::header::LOCATION, LOGIN_PATH))
        .finish()
}
