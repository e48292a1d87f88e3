use actix_web::web;

use crate::resource::{Projects, Resource, Workers};

use super::assignment::assignment_handlers;
use super::dashboard::dashboard_handlers;
use super::home::home_handlers;
use super::login::login_handlers;
use super::resource::resource_handlers;

/// Every screen, plus the catch-all back to the login page.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(home_configure)
        .configure(login_configure)
        .configure(dashboard_configure)
        .configure(resource_configure::<Projects>)
        .configure(resource_configure::<Workers>)
        .configure(assignment_configure)
        .default_service(web::to(home_handlers::fallback));
}

pub fn home_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home_handlers::home));
}

pub fn login_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .route(web::get().to(login_handlers::login_get))
            .route(web::post().to(login_handlers::login)),
    )
    .route("/logout", web::post().to(login_handlers::logout));
}

pub fn dashboard_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin-dashboard", web::get().to(dashboard_handlers::admin_dashboard))
        .route("/user-dashboard", web::get().to(dashboard_handlers::user_dashboard));
}

pub fn resource_configure<R: Resource>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(R::SCREEN_PATH)
            .route("", web::get().to(resource_handlers::list::<R>))
            .route("", web::post().to(resource_handlers::create::<R>))
            .route("/{id}", web::post().to(resource_handlers::update::<R>))
            .route("/{id}/delete", web::get().to(resource_handlers::confirm_delete::<R>))
            .route("/{id}/delete", web::post().to(resource_handlers::delete::<R>)),
    );
}

pub fn assignment_configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/project-assignment")
            .route(web::get().to(assignment_handlers::assignment_get))
            .route(web::post().to(assignment_handlers::assign)),
    );
}
