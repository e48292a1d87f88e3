//! One descriptor per administrable entity. The list screen, its form and the
//! API calls are written once against [`Resource`] and instantiated for
//! projects and workers.

pub mod form;
pub mod list;
pub mod project;
pub mod worker;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use form::{FieldError, FieldKind, FieldView, FormMode, FormState};
pub use list::{ListQuery, ListScreen, Pagination};
pub use project::Projects;
pub use worker::Workers;

/// User-facing text for one resource screen.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title: &'static str,
    pub list_title: &'static str,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub search_placeholder: &'static str,
    pub empty: &'static str,
    pub fetch_failed: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub delete_question: &'static str,
    pub not_found: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

pub trait Resource: 'static {
    type Entity: DeserializeOwned + Clone + 'static;
    type Form: ResourceForm<Entity = Self::Entity>;

    /// Path segment under `/api/`.
    const API_SEGMENT: &'static str;
    /// Front-end path of the list screen.
    const SCREEN_PATH: &'static str;
    const LABELS: Labels;

    fn id(entity: &Self::Entity) -> i64;

    fn label(entity: &Self::Entity) -> String;

    /// Text the client-side search looks into.
    fn search_fields(entity: &Self::Entity) -> Vec<String>;

    /// Label/value lines shown under the entity in the list.
    fn details(entity: &Self::Entity) -> Vec<(&'static str, String)>;
}

/// Controlled input state for one entity, as posted by the browser.
pub trait ResourceForm: DeserializeOwned + Default + Clone + 'static {
    type Entity;
    type Draft: Serialize + 'static;

    fn from_entity(entity: &Self::Entity) -> Self;

    /// Every failing rule is reported, in field order.
    fn validate(&self) -> Result<Self::Draft, Vec<FieldError>>;

    fn fields(&self) -> Vec<FieldView>;
}
