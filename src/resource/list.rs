//! List screen state: the fetched page, the search term, the collapsed/expanded
//! toggle and the form currently shown above the list.

use std::ops::Range;

use reqwest::Url;
use serde::Deserialize;

use super::form::{FormMode, FormState};
use super::Resource;
use crate::models::page::Page;

/// Query string of a list screen. Every link on the screen is derived from
/// it so that redirects land back on exactly the same state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub expanded: Option<bool>,
    #[serde(default)]
    pub edit: Option<i64>,
}

impl ListQuery {
    pub fn page_index(&self) -> u32 {
        self.page.unwrap_or(0)
    }

    pub fn search_term(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.unwrap_or(false)
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    pub fn toggled(&self) -> Self {
        Self {
            expanded: Some(!self.is_expanded()),
            ..self.clone()
        }
    }

    pub fn editing(&self, id: i64) -> Self {
        Self {
            edit: Some(id),
            ..self.clone()
        }
    }

    pub fn without_edit(&self) -> Self {
        Self {
            edit: None,
            ..self.clone()
        }
    }

    /// State after a delete: an edit form pointing at `id` goes away.
    pub fn closing(&self, id: i64) -> Self {
        if self.edit == Some(id) {
            self.without_edit()
        } else {
            self.clone()
        }
    }

    /// State after a successful create or update.
    pub fn after_save(&self) -> Self {
        Self {
            edit: None,
            expanded: Some(true),
            ..self.clone()
        }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(q) = self.q.as_ref().filter(|q| !q.is_empty()) {
            pairs.push(("q", q.clone()));
        }
        if let Some(expanded) = self.expanded {
            pairs.push(("expanded", expanded.to_string()));
        }
        if let Some(edit) = self.edit {
            pairs.push(("edit", edit.to_string()));
        }
        pairs
    }

    pub fn href(&self, path: &str) -> String {
        with_query(path, &self.pairs())
    }
}

/// `path?k=v&...` with form-urlencoded values.
pub fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let mut url = match Url::parse("http://panel.invalid/") {
        Ok(url) => url,
        Err(_) => return path.to_string(),
    };
    url.query_pairs_mut()
        .extend_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    format!("{}?{}", path, url.query().unwrap_or_default())
}

/// Most numbered page links shown at once.
pub const PAGE_LINKS: u32 = 7;

/// Page controls derived from a fetched page. `number` stays zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub number: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn from_page<T>(page: &Page<T>) -> Self {
        let number = if page.total_pages == 0 {
            0
        } else {
            page.number.min(page.total_pages - 1)
        };
        Self {
            number,
            total_pages: page.total_pages,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }

    pub fn is_active(&self, index: u32) -> bool {
        index == self.number
    }

    /// Pages that get a numbered link, a window around the current one.
    pub fn link_range(&self) -> Range<u32> {
        let start = self.number.saturating_sub(PAGE_LINKS / 2);
        let end = (start + PAGE_LINKS).min(self.total_pages);
        end.saturating_sub(PAGE_LINKS)..end
    }

    /// Human page label, one-based.
    pub fn label(&self) -> String {
        format!("Sayfa {} / {}", self.number + 1, self.total_pages.max(1))
    }
}

/// Case-insensitive substring match over the resource's search fields.
pub fn matches_search<R: Resource>(entity: &R::Entity, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    R::search_fields(entity)
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Narrows the already-fetched page. Never reaches other pages.
pub fn filter_page<'a, R: Resource>(items: &'a [R::Entity], term: &str) -> Vec<&'a R::Entity> {
    items
        .iter()
        .filter(|entity| matches_search::<R>(entity, term))
        .collect()
}

pub struct ListScreen<R: Resource> {
    pub page: Page<R::Entity>,
    pub query: ListQuery,
    pub form: FormState<R::Form>,
}

impl<R: Resource> ListScreen<R> {
    /// Opens the edit form named by `query.edit` if that entity is on this page.
    pub fn new(page: Page<R::Entity>, query: ListQuery, form: Option<FormState<R::Form>>) -> Self {
        let form = form.unwrap_or_else(|| {
            query
                .edit
                .and_then(|id| page.content.iter().find(|e| R::id(e) == id))
                .map(|entity| FormState::edit(R::id(entity), entity))
                .unwrap_or_else(FormState::create)
        });
        Self { page, query, form }
    }

    pub fn visible(&self) -> Vec<&R::Entity> {
        filter_page::<R>(&self.page.content, self.query.search_term())
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::from_page(&self.page)
    }

    pub fn editing_id(&self) -> Option<i64> {
        match self.form.mode {
            FormMode::Edit(id) => Some(id),
            FormMode::Create => None,
        }
    }
}
