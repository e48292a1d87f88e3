use serde::Deserialize;

// Login form as posted by the browser
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// Login response checks
pub const TOKEN_MISSING: &str = "Sunucudan oturum anahtarı alınamadı.";
pub const ROLE_MISSING: &str = "Kullanıcı rol bilgisi alınamadı.";
pub const CREDENTIALS_REQUIRED: &str = "Kullanıcı adı ve şifre gereklidir.";
