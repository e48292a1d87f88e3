//! The list screen shared by every [`Resource`]: form on top, collapsible
//! searchable list below, pagination under the list.

use super::layout::{error_banner, escape, manager_header, page, SUBMIT_GUARD};
use crate::resource::{
    FieldKind, FieldView, FormMode, ListQuery, ListScreen, Pagination, Resource,
};
use crate::session::notice::Notice;

pub struct ListView<'a, R: Resource> {
    pub username: &'a str,
    pub screen: &'a ListScreen<R>,
    /// Set when the page itself could not be loaded.
    pub error: Option<&'a str>,
}

pub fn list_page<R: Resource>(view: &ListView<'_, R>, notice: Option<&Notice>) -> String {
    let labels = R::LABELS;
    let screen = view.screen;
    let body = format!(
        r#"{header}
<h1>{title}</h1>
{banner}
{form}
<section class="listing">
{listing}
</section>"#,
        header = manager_header(view.username, R::SCREEN_PATH),
        title = labels.title,
        banner = view.error.map(error_banner).unwrap_or_default(),
        form = form::<R>(screen),
        listing = listing::<R>(screen),
    );
    page(labels.title, notice, &body)
}

pub fn confirm_delete<R: Resource>(
    username: &str,
    id: i64,
    query: &ListQuery,
    notice: Option<&Notice>,
) -> String {
    let action = escape(&query.href(&format!("{}/{}/delete", R::SCREEN_PATH, id)));
    let body = format!(
        r#"{header}
<section class="confirm" role="dialog" aria-modal="true">
<p>{question} (#{id})</p>
<form method="post" action="{action}" {SUBMIT_GUARD}>
<input type="hidden" name="confirm" value="yes">
<button type="submit" class="danger">Evet</button>
</form>
<form method="post" action="{action}" {SUBMIT_GUARD}>
<input type="hidden" name="confirm" value="no">
<button type="submit">Hayır</button>
</form>
</section>"#,
        header = manager_header(username, R::SCREEN_PATH),
        question = R::LABELS.delete_question,
    );
    page(R::LABELS.title, notice, &body)
}

fn form<R: Resource>(screen: &ListScreen<R>) -> String {
    let labels = R::LABELS;
    let query = &screen.query;
    let state = &screen.form;
    let (heading, action, submit) = match state.mode {
        FormMode::Create => (labels.create_title, query.href(R::SCREEN_PATH), "Ekle"),
        FormMode::Edit(id) => (
            labels.edit_title,
            query.href(&format!("{}/{}", R::SCREEN_PATH, id)),
            "Güncelle",
        ),
    };

    let fields: String = state.fields().iter().map(field).collect();
    let failure = state.failure.as_deref().map(error_banner).unwrap_or_default();
    let extra = match state.mode {
        FormMode::Create => String::new(),
        FormMode::Edit(id) => format!(
            r#"<a class="cancel" href="{}">İptal</a>
<a class="delete" href="{}">Sil</a>"#,
            escape(&query.without_edit().href(R::SCREEN_PATH)),
            escape(&query.href(&format!("{}/{}/delete", R::SCREEN_PATH, id))),
        ),
    };

    format!(
        r#"<section class="editor" id="form">
<h2>{heading}</h2>
{failure}
<form method="post" action="{action}" novalidate {SUBMIT_GUARD}>
{fields}<button type="submit">{submit}</button>
{extra}
</form>
</section>"#,
        action = escape(&action),
    )
}

fn field(view: &FieldView) -> String {
    let name = view.name;
    let value = escape(&view.value);
    let input = match &view.kind {
        FieldKind::Text => {
            format!(r#"<input type="text" id="{name}" name="{name}" value="{value}">"#)
        }
        FieldKind::Email => {
            format!(r#"<input type="email" id="{name}" name="{name}" value="{value}">"#)
        }
        FieldKind::Number { min, max } => format!(
            r#"<input type="number" id="{name}" name="{name}" min="{min}" max="{max}" value="{value}">"#
        ),
        FieldKind::Select(options) => {
            let mut html = format!(r#"<select id="{name}" name="{name}"><option value="">Seçiniz</option>"#);
            for option in options {
                let selected = if *option == view.value { " selected" } else { "" };
                let option = escape(option);
                html.push_str(&format!(r#"<option value="{option}"{selected}>{option}</option>"#));
            }
            html.push_str("</select>");
            html
        }
    };
    let errors: String = view
        .errors
        .iter()
        .map(|e| format!(r#"<p class="field-error">{}</p>"#, escape(e)))
        .collect();
    format!(
        "<div class=\"field\"><label for=\"{name}\">{}</label>{input}{errors}</div>\n",
        view.label
    )
}

fn listing<R: Resource>(screen: &ListScreen<R>) -> String {
    let labels = R::LABELS;
    let query = &screen.query;
    let expanded = query.is_expanded();
    let arrow = if expanded { "▲" } else { "▼" };
    let mut toggle = query.toggled().href(R::SCREEN_PATH);
    if !expanded {
        toggle.push_str("#list");
    }

    let mut html = format!(
        r#"<h2><a href="{}">{} {arrow}</a></h2>"#,
        escape(&toggle),
        labels.list_title
    );
    if !expanded {
        return html;
    }

    html.push_str(&search_form(R::SCREEN_PATH, query, labels.search_placeholder));

    let visible = screen.visible();
    if visible.is_empty() {
        html.push_str(&format!(r#"<p class="empty" id="list">{}</p>"#, labels.empty));
    } else {
        html.push_str(r#"<ul id="list">"#);
        for entity in visible {
            let id = R::id(entity);
            let details: String = R::details(entity)
                .into_iter()
                .map(|(label, value)| {
                    format!(r#"<span class="detail">{}: {}</span>"#, label, escape(&value))
                })
                .collect();
            let editing = if screen.editing_id() == Some(id) {
                r#" aria-selected="true""#
            } else {
                ""
            };
            html.push_str(&format!(
                r#"<li class="item"{editing}><strong>{}</strong>{details}<a href="{}">Düzenle</a> <a href="{}">Sil</a></li>"#,
                escape(&R::label(entity)),
                escape(&format!("{}#form", query.editing(id).href(R::SCREEN_PATH))),
                escape(&query.href(&format!("{}/{}/delete", R::SCREEN_PATH, id))),
            ));
        }
        html.push_str("</ul>");
    }

    html.push_str(&pagination(R::SCREEN_PATH, query, screen.pagination()));
    html
}

fn search_form(path: &str, query: &ListQuery, placeholder: &str) -> String {
    let mut hidden = String::new();
    for (key, value) in query.pairs() {
        if key == "q" {
            continue;
        }
        hidden.push_str(&format!(
            r#"<input type="hidden" name="{key}" value="{}">"#,
            escape(&value)
        ));
    }
    format!(
        r#"<form method="get" action="{path}" class="search">{hidden}<input type="text" name="q" value="{}" placeholder="{placeholder}"><button type="submit">Ara</button></form>"#,
        escape(query.search_term()),
    )
}

fn pagination(path: &str, query: &ListQuery, pagination: Pagination) -> String {
    if pagination.total_pages == 0 {
        return String::new();
    }
    let link = |index: u32| escape(&query.without_edit().with_page(index).href(path));

    let mut html = String::from(r#"<nav class="pagination" aria-label="Sayfalama">"#);
    if pagination.has_previous() {
        html.push_str(&format!(
            r#"<a rel="prev" href="{}">Önceki</a>"#,
            link(pagination.number - 1)
        ));
    } else {
        html.push_str(r#"<span class="disabled" aria-disabled="true">Önceki</span>"#);
    }
    for index in pagination.link_range() {
        if pagination.is_active(index) {
            html.push_str(&format!(r#"<span aria-current="page">{}</span>"#, index + 1));
        } else {
            html.push_str(&format!(r#"<a href="{}">{}</a>"#, link(index), index + 1));
        }
    }
    if pagination.has_next() {
        html.push_str(&format!(
            r#"<a rel="next" href="{}">Sonraki</a>"#,
            link(pagination.number + 1)
        ));
    } else {
        html.push_str(r#"<span class="disabled" aria-disabled="true">Sonraki</span>"#);
    }
    html.push_str(&format!(r#"<span class="page-label">{}</span></nav>"#, pagination.label()));
    html
}
