use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::worker::Worker;

/// Status values offered by the project form. The backend stores free text.
pub const PROJECT_STATUSES: [&str; 6] = [
    "Planlama",
    "Geliştirme",
    "Test",
    "Tamamlandı",
    "Beklemede",
    "İptal",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_status: Option<String>,
    // Filled in by the backend, never sent back.
    #[serde(default, deserialize_with = "null_as_default")]
    pub workers: Vec<Worker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub project_status: String,
}
