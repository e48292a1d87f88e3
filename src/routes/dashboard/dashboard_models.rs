use serde::Deserialize;

// Staff dashboard list state
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub expanded: Option<bool>,
}

impl DashboardQuery {
    pub fn search_term(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.unwrap_or(false)
    }
}
