use serde::Deserialize;

/// One page of a paginated list endpoint. `number` is zero-based.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            number: 0,
        }
    }

    /// True when `requested` points past the last page the backend reported.
    pub fn is_beyond_last(&self, requested: u32) -> bool {
        self.total_pages > 0 && requested >= self.total_pages
    }

    pub fn last_index(&self) -> u32 {
        self.total_pages.saturating_sub(1)
    }
}
