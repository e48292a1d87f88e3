use serde::Deserialize;

use crate::resource::list::with_query;

pub const ASSIGNMENT_PATH: &str = "/project-assignment";

// Selection posted from the assignment form. Empty means "not chosen".
#[derive(Debug, Default, Deserialize)]
pub struct AssignmentForm {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub worker_id: String,
}

impl AssignmentForm {
    pub fn project(&self) -> Option<i64> {
        parse_id(&self.project_id)
    }

    pub fn worker(&self) -> Option<i64> {
        parse_id(&self.worker_id)
    }

    /// `(worker_id, project_id)` when both are chosen.
    pub fn selection(&self) -> Option<(i64, i64)> {
        Some((self.worker()?, self.project()?))
    }

    /// The form again, preselected with whatever was chosen.
    pub fn href(&self) -> String {
        let selected = AssignmentQuery {
            project_id: self.project(),
            worker_id: self.worker(),
        };
        selected.href()
    }
}

// Selection carried across a redirect
#[derive(Debug, Default, Deserialize)]
pub struct AssignmentQuery {
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub worker_id: Option<i64>,
}

impl AssignmentQuery {
    pub fn href(&self) -> String {
        let mut pairs = Vec::new();
        if let Some(id) = self.project_id {
            pairs.push(("project_id", id.to_string()));
        }
        if let Some(id) = self.worker_id {
            pairs.push(("worker_id", id.to_string()));
        }
        with_query(ASSIGNMENT_PATH, &pairs)
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
