//! One-shot notifications carried across a redirect.

use serde::{Deserialize, Serialize};

use super::storage::ClientStorage;

pub const NOTICE_KEY: &str = "notice";

/// Longest message kept in the cookie, in characters.
pub const MAX_MESSAGE_CHARS: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

pub fn push<S: ClientStorage>(storage: &mut S, notice: &Notice) {
    let notice = Notice::new(notice.level, shorten(&notice.message));
    if let Ok(encoded) = serde_json::to_string(&notice) {
        storage.set(NOTICE_KEY, &encoded);
    }
}

fn shorten(message: &str) -> String {
    match message.char_indices().nth(MAX_MESSAGE_CHARS) {
        Some((cut, _)) => format!("{}…", &message[..cut]),
        None => message.to_string(),
    }
}

/// Reads and deletes the pending notice, if any.
pub fn take<S: ClientStorage>(storage: &mut S) -> Option<Notice> {
    let raw = storage.get(NOTICE_KEY)?.to_string();
    storage.remove(NOTICE_KEY);
    serde_json::from_str(&raw).ok()
}
