use super::layout::{error_banner, escape, page, SUBMIT_GUARD};
use crate::session::notice::Notice;

pub fn render(username: &str, error: Option<&str>, notice: Option<&Notice>) -> String {
    let banner = error.map(error_banner).unwrap_or_default();
    let body = format!(
        r#"<h1>Proje Yönetim Sistemi</h1>
<h2>Giriş Yap</h2>
{banner}
<form method="post" action="/login" class="login" {SUBMIT_GUARD}>
<input type="text" name="username" placeholder="Kullanıcı Adı" value="{username}" required autofocus>
<input type="password" name="password" placeholder="Şifre" required>
<button type="submit">Giriş Yap</button>
</form>"#,
        username = escape(username),
    );
    page("Giriş Yap", notice, &body)
}
