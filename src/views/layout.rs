use crate::session::notice::Notice;

/// Disables every button of the form once it is submitted.
pub const SUBMIT_GUARD: &str =
    r#"onsubmit="this.querySelectorAll('button').forEach(function(b){b.disabled=true;})""#;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes and keeps line breaks.
pub fn multiline(text: &str) -> String {
    escape(text).replace('\n', "<br>")
}

pub fn page(title: &str, notice: Option<&Notice>, body: &str) -> String {
    let notice = notice.map(notice_box).unwrap_or_default();
    format!(
        r#"<!DOCTYPE html>
<html lang="tr">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
</head>
<body>
{notice}
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn notice_box(notice: &Notice) -> String {
    format!(
        r#"<div class="notice notice-{}" role="status">{}</div>"#,
        notice.level.as_str(),
        escape(&notice.message)
    )
}

pub fn error_banner(message: &str) -> String {
    format!(r#"<div class="error-banner" role="alert">{}</div>"#, multiline(message))
}

pub fn logout_form(label: &str) -> String {
    format!(
        r#"<form method="post" action="/logout" class="logout" {SUBMIT_GUARD}><button type="submit">{}</button></form>"#,
        escape(label)
    )
}

/// Header shared by the manager screens.
pub fn manager_header(username: &str, active: &str) -> String {
    let links = [
        ("/admin-dashboard", "Panel"),
        ("/projects", "Projeleri Yönet"),
        ("/workers", "Çalışanları Yönet"),
        ("/project-assignment", "Çalışana Proje Ata"),
    ];
    let nav: String = links
        .iter()
        .map(|(href, label)| {
            let current = if *href == active {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(r#"<a href="{href}"{current}>{label}</a>"#)
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<header>
<span class="user">{}</span>
{}
</header>
<nav class="sections">
{nav}
</nav>"#,
        escape(username),
        logout_form("Çıkış Yap"),
    )
}
