use chrono::{DateTime, Utc};

use super::layout::{error_banner, escape, logout_form, manager_header, page};
use crate::models::project::Project;
use crate::models::role::Role;
use crate::resource::{list::with_query, Projects, Resource};
use crate::session::notice::Notice;

pub fn admin(username: &str, expires_at: Option<DateTime<Utc>>, notice: Option<&Notice>) -> String {
    let expiry = expires_at
        .map(|at| {
            format!(
                r#"<p class="expiry">Oturum bitişi: {}</p>"#,
                at.format("%d.%m.%Y %H:%M UTC")
            )
        })
        .unwrap_or_default();
    let body = format!(
        r#"{header}
<h1>Yönetici Paneline Hoşgeldiniz, {name}!</h1>
{expiry}
<p>Yönetmek istediğiniz bölümü yukarıdan seçin.</p>"#,
        header = manager_header(username, "/admin-dashboard"),
        name = escape(username),
    );
    page("Yönetici Paneli", notice, &body)
}

pub struct StaffView<'a> {
    pub username: &'a str,
    pub projects: Vec<&'a Project>,
    pub search: &'a str,
    pub expanded: bool,
    pub error: Option<&'a str>,
}

pub fn user(view: &StaffView<'_>, notice: Option<&Notice>) -> String {
    let pairs = toggle_pairs(view.search, !view.expanded);
    let arrow = if view.expanded { "▲" } else { "▼" };
    let toggle_href = with_query("/user-dashboard", &pairs);
    let anchor = if view.expanded { "" } else { "#list" };

    let mut list = String::new();
    if view.expanded {
        list.push_str(&format!(
            r#"<form method="get" action="/user-dashboard" class="search">
<input type="hidden" name="expanded" value="true">
<input type="text" name="q" value="{}" placeholder="Proje adı, açıklama veya duruma göre ara...">
<button type="submit">Ara</button>
</form>"#,
            escape(view.search)
        ));
        if view.projects.is_empty() {
            list.push_str(r#"<p class="empty">Size atanmış proje bulunmamaktadır.</p>"#);
        } else {
            list.push_str(r#"<ul id="list">"#);
            for project in &view.projects {
                list.push_str(&project_item(project));
            }
            list.push_str("</ul>");
        }
    } else {
        list.push_str(r#"<p class="collapsed">Projeleri görmek için başlığa tıklayın.</p>"#);
    }

    let body = format!(
        r#"<header>
<h1>Kullanıcı Paneline Hoşgeldiniz, {name}!</h1>
{logout}
</header>
{banner}
<section class="projects">
<h2><a href="{toggle}{anchor}">Size Atanmış Projeler {arrow}</a></h2>
{list}
</section>"#,
        name = escape(view.username),
        logout = logout_form("Çıkış Yap"),
        banner = view.error.map(error_banner).unwrap_or_default(),
        toggle = escape(&toggle_href),
    );
    page("Kullanıcı Paneli", notice, &body)
}

/// Access refused for an authenticated caller. Stays on screen until the
/// user chooses to go back.
pub fn access_denied(required: Role) -> String {
    let body = format!(
        r#"<h1>Erişim Reddedildi</h1>
<p class="denied">Bu sayfaya erişim yetkiniz yoktur. '{}' rolü gereklidir.</p>
{}"#,
        required.authority(),
        logout_form("Giriş Sayfasına Dön"),
    );
    page("Erişim Reddedildi", None, &body)
}

fn toggle_pairs(search: &str, expanded: bool) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if !search.is_empty() {
        pairs.push(("q", search.to_string()));
    }
    pairs.push(("expanded", expanded.to_string()));
    pairs
}

fn project_item(project: &Project) -> String {
    let details: String = Projects::details(project)
        .into_iter()
        .map(|(label, value)| format!(r#"<span class="detail">{}: {}</span>"#, label, escape(&value)))
        .collect();
    format!(
        r#"<li class="item"><strong>{}</strong>{}</li>"#,
        escape(&Projects::label(project)),
        details
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_denied_names_the_role_and_offers_logout() {
        let html = access_denied(Role::ProjectManager);
        assert!(html.contains("PROJE_YONETICISI"));
        assert!(html.contains(r#"action="/logout""#));
        assert!(!html.contains("http-equiv"));
    }

    #[test]
    fn collapsed_staff_list_hides_projects() {
        let project = Project {
            id: 1,
            name: "Depo".into(),
            description: None,
            project_status: None,
            workers: Vec::new(),
        };
        let mut view = StaffView {
            username: "ayse",
            projects: vec![&project],
            search: "",
            expanded: false,
            error: None,
        };
        assert!(!user(&view, None).contains(r#"class="item""#));

        view.expanded = true;
        let html = user(&view, None);
        assert_eq!(html.matches(r#"class="item""#).count(), 1);
        assert!(html.contains("Durum: Yok"));
    }
}
