use super::layout::{error_banner, escape, manager_header, page, SUBMIT_GUARD};
use crate::models::project::Project;
use crate::models::worker::Worker;
use crate::session::notice::Notice;

pub struct AssignmentView<'a> {
    pub username: &'a str,
    pub projects: &'a [Project],
    pub workers: &'a [Worker],
    pub project_id: Option<i64>,
    pub worker_id: Option<i64>,
    pub error: Option<&'a str>,
}

pub fn render(view: &AssignmentView<'_>, notice: Option<&Notice>) -> String {
    let projects = options(
        "-- Proje Seç --",
        view.projects.iter().map(|p| (p.id, p.name.as_str())),
        view.project_id,
    );
    let workers = options(
        "-- Çalışan Seç --",
        view.workers.iter().map(|w| (w.worker_id, w.name.as_str())),
        view.worker_id,
    );
    let body = format!(
        r#"{header}
<h1>Çalışana Proje Ata</h1>
{banner}
<form method="post" action="/project-assignment" class="assignment" {SUBMIT_GUARD}>
<div class="field"><label for="project_id">Proje Seçin:</label><select id="project_id" name="project_id">{projects}</select></div>
<div class="field"><label for="worker_id">Çalışan Seçin:</label><select id="worker_id" name="worker_id">{workers}</select></div>
<button type="submit">Çalışana Proje Ata</button>
</form>"#,
        header = manager_header(view.username, "/project-assignment"),
        banner = view.error.map(error_banner).unwrap_or_default(),
    );
    page("Çalışana Proje Ata", notice, &body)
}

fn options<'a>(
    placeholder: &str,
    items: impl Iterator<Item = (i64, &'a str)>,
    selected: Option<i64>,
) -> String {
    let mut html = format!(r#"<option value="">{placeholder}</option>"#);
    for (id, name) in items {
        let marker = if selected == Some(id) { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{id}"{marker}>{}</option>"#,
            escape(name)
        ));
    }
    html
}
