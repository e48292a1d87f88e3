use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{error, info};

use super::assignment_models::{AssignmentForm, AssignmentQuery, ASSIGNMENT_PATH};
use crate::error::ApiError;
use crate::models::project::Project;
use crate::models::role::Role;
use crate::models::worker::Worker;
use crate::resource::{Projects, Workers};
use crate::routes::screen::{failure_status, Screen};
use crate::session::notice::Notice;
use crate::views;
use crate::views::assignment::AssignmentView;
use crate::AppState;

const LOAD_FAILED: &str = "Projeler veya çalışanlar yüklenirken hata oluştu.";
const SELECTION_MISSING: &str = "Lütfen hem proje hem de çalışan seçin.";
const ASSIGN_FAILED: &str = "Atama işlemi başarısız oldu.";
const ASSIGNED: &str = "Çalışan projeye başarıyla atandı!";

pub async fn assignment_get(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<AssignmentQuery>,
) -> HttpResponse {
    let mut screen = Screen::open(&req, &state);
    let verified = match screen.guard(Role::ProjectManager) {
        Ok(verified) => verified,
        Err(refusal) => return screen.refuse(refusal),
    };

    let (projects, workers, failure) = match load_choices(&state, &verified.token).await {
        Ok((projects, workers)) => (projects, workers, None),
        Err(e) if e.is_session_failure() => return screen.session_expired(),
        Err(e) => {
            error!("Failed to load assignment choices: {}", e);
            (Vec::new(), Vec::new(), Some(e))
        }
    };

    let message = failure.as_ref().map(|e| e.user_message(LOAD_FAILED));
    let status = failure.as_ref().map_or(StatusCode::OK, failure_status);
    let notice = match &message {
        Some(message) => Some(Notice::error(message.clone())),
        None => screen.take_notice(),
    };
    let html = views::assignment::render(
        &AssignmentView {
            username: &verified.username,
            projects: &projects,
            workers: &workers,
            project_id: query.project_id,
            worker_id: query.worker_id,
            error: message.as_deref(),
        },
        notice.as_ref(),
    );
    screen.render(status, html)
}

pub async fn assign(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Form<AssignmentForm>,
) -> HttpResponse {
    let mut screen = Screen::open(&req, &state);
    let verified = match screen.guard(Role::ProjectManager) {
        Ok(verified) => verified,
        Err(refusal) => return screen.refuse(refusal),
    };

    let (worker_id, project_id) = match form.selection() {
        Some(selection) => selection,
        None => {
            info!("Assignment submitted without a complete selection");
            return screen.redirect_with(&form.href(), Notice::warning(SELECTION_MISSING));
        }
    };

    info!(
        "Assigning worker {} to project {} for {}",
        worker_id, project_id, verified.username
    );
    match state.api.assign(&verified.token, worker_id, project_id).await {
        Ok(()) => screen.redirect_with(ASSIGNMENT_PATH, Notice::success(ASSIGNED)),
        Err(e) if e.is_session_failure() => screen.session_expired(),
        Err(e) => {
            error!("Failed to assign worker {} to project {}: {}", worker_id, project_id, e);
            screen.redirect_with(&form.href(), Notice::error(e.user_message(ASSIGN_FAILED)))
        }
    }
}

async fn load_choices(
    state: &AppState,
    token: &str,
) -> Result<(Vec<Project>, Vec<Worker>), ApiError> {
    let projects = state.api.list_all::<Projects>(token).await?;
    let workers = state.api.list_all::<Workers>(token).await?;
    Ok((projects, workers))
}
