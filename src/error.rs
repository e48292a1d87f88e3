//! Errors raised while talking to the remote API, and the user-facing text
//! each one maps to.

use reqwest::StatusCode;

pub const SESSION_EXPIRED: &str =
    "Oturum süreniz doldu veya yetkiniz yok. Lütfen tekrar giriş yapın.";
pub const TIMEOUT: &str = "İstek zaman aşımına uğradı. Sunucu yanıt vermiyor.";
pub const UNREACHABLE: &str = "Sunucuya bağlanılamıyor. Ağ bağlantınızı kontrol edin.";
pub const NOT_FOUND: &str = "Kayıt bulunamadı.";
const GENERIC: &str = "Bir hata oluştu. Lütfen tekrar deneyin.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client could not be built: {0}")]
    Client(reqwest::Error),

    /// The request could not be prepared (bad URL, bad header).
    #[error("request could not be built: {0}")]
    Request(String),

    #[error("request timed out")]
    Timeout,

    /// No response at all: DNS failure, connection refused, reset.
    #[error("backend unreachable: {0}")]
    Unreachable(String),

    /// 401/403. Ends the session everywhere except on the login call.
    #[error("backend rejected the session ({status})")]
    Unauthorized { status: u16 },

    /// Any other non-2xx status.
    #[error("backend returned {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Status { status: u16, message: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_builder() {
            ApiError::Request(err.to_string())
        } else {
            ApiError::Unreachable(err.to_string())
        }
    }

    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized { status },
            _ => ApiError::Status {
                status,
                message: extract_message(body),
            },
        }
    }

    pub fn is_session_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status } | ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text for a failed resource call. A server-provided message wins, then
    /// a status-keyed template, then `generic`.
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Status { status: 404, .. } => NOT_FOUND.to_string(),
            ApiError::Status { status, .. } => format!("{generic} ({status})"),
            ApiError::Unauthorized { .. } => SESSION_EXPIRED.to_string(),
            ApiError::Timeout => TIMEOUT.to_string(),
            ApiError::Unreachable(_) => UNREACHABLE.to_string(),
            ApiError::Client(_) | ApiError::Request(_) | ApiError::Decode(_) => {
                generic.to_string()
            }
        }
    }

    /// Text for a failed login call.
    pub fn login_message(&self, api_base_url: &str) -> String {
        match self {
            ApiError::Timeout => TIMEOUT.to_string(),
            ApiError::Unauthorized { status: 401 } => {
                "Geçersiz kullanıcı adı veya şifre.".to_string()
            }
            ApiError::Unauthorized { .. } => "Bu hesapla giriş yapma yetkiniz yok.".to_string(),
            ApiError::Status { status: 500, .. } => {
                "Sunucu hatası. Lütfen daha sonra tekrar deneyin.".to_string()
            }
            ApiError::Status { status, message } => {
                let reason = message.clone().unwrap_or_else(|| {
                    StatusCode::from_u16(*status)
                        .ok()
                        .and_then(|s| s.canonical_reason())
                        .unwrap_or("Bilinmeyen hata")
                        .to_string()
                });
                format!("Giriş başarısız ({status}): {reason}")
            }
            ApiError::Unreachable(_) => format!(
                "Sunucuya bağlanılamıyor ({api_base_url}). Lütfen:\n\
                 - Backend servisinin çalıştığını kontrol edin\n\
                 - URL'nin doğru olduğunu kontrol edin\n\
                 - Ağ bağlantınızı kontrol edin"
            ),
            ApiError::Client(_) | ApiError::Request(_) | ApiError::Decode(_) => {
                GENERIC.to_string()
            }
        }
    }
}

/// Pulls a human-readable message out of an error body: a JSON `message` or
/// `error` field, a bare JSON string, or plain text. HTML error pages are
/// ignored.
fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => non_empty(text),
        Ok(serde_json::Value::Object(fields)) => ["message", "error"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(|v| v.as_str()))
            .and_then(|text| non_empty(text.to_string())),
        Ok(_) => None,
        Err(_) if body.starts_with('<') => None,
        Err(_) => Some(body.to_string()),
    }
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
