use serde::{Deserialize, Serialize};

use super::null_as_default;

pub const GENDERS: [&str; 2] = ["Erkek", "Kadın"];

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Worker {
    pub worker_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub worker_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerDraft {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub worker_email: String,
}
