//! List, create, update and delete for any [`Resource`]. Every write is a POST
//! answered with a redirect back to the list state it came from, or with the
//! re-rendered screen when the input has to be corrected.

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{error, info, warn};

use super::resource_models::{DeleteConfirmation, DELETE_DECLINED};
use crate::error::ApiError;
use crate::models::page::Page;
use crate::models::role::Role;
use crate::resource::{FormMode, FormState, ListQuery, ListScreen, Resource, ResourceForm};
use crate::routes::screen::{failure_status, Screen};
use crate::session::gate::Verified;
use crate::session::notice::Notice;
use crate::views;
use crate::views::resource::ListView;
use crate::AppState;

pub async fn list<R: Resource>(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let mut screen = Screen::open(&req, &state);
    let verified = match screen.guard(Role::ProjectManager) {
        Ok(verified) => verified,
        Err(refusal) => return screen.refuse(refusal),
    };
    show::<R>(screen, &state, &verified, query.into_inner(), None, StatusCode::OK).await
}

pub async fn create<R: Resource>(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
    form: web::Form<R::Form>,
) -> HttpResponse {
    save::<R>(req, state, query.into_inner(), FormMode::Create, form.into_inner()).await
}

pub async fn update<R: Resource>(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<ListQuery>,
    form: web::Form<R::Form>,
) -> HttpResponse {
    let mode = FormMode::Edit(path.into_inner());
    save::<R>(req, state, query.into_inner(), mode, form.into_inner()).await
}

pub async fn confirm_delete<R: Resource>(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<ListQuery>,
) -> HttpResponse {
    let mut screen = Screen::open(&req, &state);
    let verified = match screen.guard(Role::ProjectManager) {
        Ok(verified) => verified,
        Err(refusal) => return screen.refuse(refusal),
    };
    let id = path.into_inner();
    let html = views::resource::confirm_delete::<R>(&verified.username, id, &query, None);
    screen.render(StatusCode::OK, html)
}

pub async fn delete<R: Resource>(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<i64>,
    query: web::Query<ListQuery>,
    form: web::Form<DeleteConfirmation>,
) -> HttpResponse {
    let mut screen = Screen::open(&req, &state);
    let verified = match screen.guard(Role::ProjectManager) {
        Ok(verified) => verified,
        Err(refusal) => return screen.refuse(refusal),
    };
    let id = path.into_inner();
    let query = query.into_inner();
    let back = query.href(R::SCREEN_PATH);

    if !form.is_confirmed() {
        info!("Delete of {} {} declined", R::API_SEGMENT, id);
        return screen.redirect_with(&back, Notice::info(DELETE_DECLINED));
    }

    info!("Deleting {} {} for {}", R::API_SEGMENT, id, verified.username);
    match state.api.delete::<R>(&verified.token, id).await {
        Ok(()) => screen.redirect_with(
            &query.closing(id).href(R::SCREEN_PATH),
            Notice::success(R::LABELS.deleted),
        ),
        Err(e) if e.is_session_failure() => screen.session_expired(),
        Err(e) => {
            error!("Failed to delete {} {}: {}", R::API_SEGMENT, id, e);
            let message = match e.status() {
                Some(404) => R::LABELS.not_found.to_string(),
                _ => e.user_message(R::LABELS.delete_failed),
            };
            screen.redirect_with(&back, Notice::error(message))
        }
    }
}

async fn save<R: Resource>(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: ListQuery,
    mode: FormMode,
    input: R::Form,
) -> HttpResponse {
    let mut screen = Screen::open(&req, &state);
    let verified = match screen.guard(Role::ProjectManager) {
        Ok(verified) => verified,
        Err(refusal) => return screen.refuse(refusal),
    };

    let draft = match input.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            info!(
                "Rejected {} form with {} invalid field(s)",
                R::API_SEGMENT,
                errors.len()
            );
            let form = FormState::with_input(mode, input).rejected(errors);
            return show::<R>(
                screen,
                &state,
                &verified,
                query,
                Some(form),
                StatusCode::UNPROCESSABLE_ENTITY,
            )
            .await;
        }
    };

    let (outcome, done) = match mode {
        FormMode::Create => (
            state.api.create::<R>(&verified.token, &draft).await,
            R::LABELS.created,
        ),
        FormMode::Edit(id) => (
            state.api.update::<R>(&verified.token, id, &draft).await,
            R::LABELS.updated,
        ),
    };

    match outcome {
        Ok(()) => {
            info!("Saved {} ({:?}) for {}", R::API_SEGMENT, mode, verified.username);
            screen.redirect_with(&query.after_save().href(R::SCREEN_PATH), Notice::success(done))
        }
        Err(e) if e.is_session_failure() => screen.session_expired(),
        Err(e) => {
            error!("Failed to save {} ({:?}): {}", R::API_SEGMENT, mode, e);
            let status = failure_status(&e);
            let form = FormState::with_input(mode, input).failed(e.user_message(R::LABELS.save_failed));
            show::<R>(screen, &state, &verified, query, Some(form), status).await
        }
    }
}

/// Fetches the requested page and renders the list screen around `form`.
async fn show<R: Resource>(
    mut screen: Screen,
    state: &AppState,
    verified: &Verified,
    mut query: ListQuery,
    form: Option<FormState<R::Form>>,
    status: StatusCode,
) -> HttpResponse {
    let (page, failure) = match fetch_page::<R>(state, &verified.token, query.page_index()).await {
        Ok(page) => {
            if query.page.is_some() && page.number != query.page_index() {
                query.page = Some(page.number);
            }
            (page, None)
        }
        Err(e) if e.is_session_failure() => return screen.session_expired(),
        Err(e) => {
            error!("Failed to fetch {} list: {}", R::API_SEGMENT, e);
            (Page::empty(), Some(e))
        }
    };

    let list = ListScreen::<R>::new(page, query, form);
    let (status, message) = match &failure {
        Some(e) => (failure_status(e), Some(e.user_message(R::LABELS.fetch_failed))),
        None => (status, None),
    };
    let notice = match &message {
        Some(message) => Some(Notice::error(message.clone())),
        None => screen.take_notice(),
    };
    let html = views::resource::list_page(
        &ListView {
            username: &verified.username,
            screen: &list,
            error: message.as_deref(),
        },
        notice.as_ref(),
    );
    screen.render(status, html)
}

/// A page past the end (the last row of the last page was just deleted) is
/// replaced by the last existing page.
async fn fetch_page<R: Resource>(
    state: &AppState,
    token: &str,
    requested: u32,
) -> Result<Page<R::Entity>, ApiError> {
    let size = state.config.page_size;
    let page = state.api.list_page::<R>(token, requested, size).await?;
    if !page.is_beyond_last(requested) {
        return Ok(page);
    }
    warn!(
        "Page {} of {} is past the end, showing page {}",
        requested,
        R::API_SEGMENT,
        page.last_index()
    );
    state.api.list_page::<R>(token, page.last_index(), size).await
}
