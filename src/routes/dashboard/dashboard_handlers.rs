use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, Responder};
use log::{error, info};

use super::dashboard_models::DashboardQuery;
use crate::models::role::Role;
use crate::resource::list::matches_search;
use crate::resource::Projects;
use crate::routes::screen::{failure_status, Screen};
use crate::session::notice::Notice;
use crate::views;
use crate::views::dashboard::StaffView;
use crate::AppState;

const PROJECTS_FAILED: &str = "Projeler yüklenirken hata oluştu.";

pub async fn admin_dashboard(req: HttpRequest, state: web::Data<AppState>) -> impl Responder {
    let mut screen = Screen::open(&req, &state);
    let verified = match screen.guard(Role::ProjectManager) {
        Ok(verified) => verified,
        Err(refusal) => return screen.refuse(refusal),
    };
    info!("Rendering admin dashboard for {}", verified.username);
    let notice = screen.take_notice();
    screen.render(
        StatusCode::OK,
        views::dashboard::admin(&verified.username, verified.expires_at, notice.as_ref()),
    )
}

pub async fn user_dashboard(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<DashboardQuery>,
) -> impl Responder {
    let mut screen = Screen::open(&req, &state);
    let verified = match screen.guard(Role::Staff) {
        Ok(verified) => verified,
        Err(refusal) => return screen.refuse(refusal),
    };
    info!("Fetching assigned projects for {}", verified.username);

    let (projects, failure) = match state.api.my_projects(&verified.token).await {
        Ok(projects) => (projects, None),
        Err(e) if e.is_session_failure() => return screen.session_expired(),
        Err(e) => {
            error!("Failed to fetch projects for {}: {}", verified.username, e);
            let status = failure_status(&e);
            (Vec::new(), Some((status, e.user_message(PROJECTS_FAILED))))
        }
    };

    let term = query.search_term();
    let view = StaffView {
        username: &verified.username,
        projects: projects
            .iter()
            .filter(|p| matches_search::<Projects>(p, term))
            .collect(),
        search: term,
        expanded: query.is_expanded(),
        error: failure.as_ref().map(|(_, message)| message.as_str()),
    };
    let notice = match &failure {
        Some((_, message)) => Some(Notice::error(message.clone())),
        None => screen.take_notice(),
    };
    let status = failure.as_ref().map_or(StatusCode::OK, |(status, _)| *status);
    let html = views::dashboard::user(&view, notice.as_ref());
    screen.render(status, html)
}
