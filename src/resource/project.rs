use serde::Deserialize;

use super::form::{options_with_current, require, FieldError, FieldKind, FieldView};
use super::worker::Workers;
use super::{Labels, Resource, ResourceForm};
use crate::models::project::{Project, ProjectDraft, PROJECT_STATUSES};

pub const MIN_NAME_LEN: usize = 3;

pub struct Projects;

impl Resource for Projects {
    type Entity = Project;
    type Form = ProjectForm;

    const API_SEGMENT: &'static str = "project";
    const SCREEN_PATH: &'static str = "/projects";
    const LABELS: Labels = Labels {
        title: "Proje Yönetimi",
        list_title: "Mevcut Proje Listesi",
        create_title: "Yeni Proje Ekle",
        edit_title: "Proje Düzenle",
        search_placeholder: "Proje adı, açıklama veya duruma göre ara...",
        empty: "Aradığınız kriterlere uygun proje bulunmamaktadır.",
        fetch_failed: "Projeler alınamadı.",
        save_failed: "İşlem başarısız oldu.",
        delete_failed: "Silme işlemi başarısız oldu.",
        delete_question: "Bu projeyi silmek istediğinize emin misiniz?",
        not_found: "Silinecek proje bulunamadı.",
        created: "Proje başarıyla eklendi!",
        updated: "Proje başarıyla güncellendi!",
        deleted: "Proje başarıyla silindi!",
    };

    fn id(entity: &Project) -> i64 {
        entity.id
    }

    fn label(entity: &Project) -> String {
        if entity.name.is_empty() {
            "İsim yok".to_string()
        } else {
            entity.name.clone()
        }
    }

    fn search_fields(entity: &Project) -> Vec<String> {
        vec![
            entity.name.clone(),
            entity.description.clone().unwrap_or_default(),
            entity.project_status.clone().unwrap_or_default(),
        ]
    }

    fn details(entity: &Project) -> Vec<(&'static str, String)> {
        let or_none = |value: &Option<String>| {
            value
                .clone()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "Yok".to_string())
        };
        let mut details = vec![
            ("Açıklama", or_none(&entity.description)),
            ("Durum", or_none(&entity.project_status)),
        ];
        if !entity.workers.is_empty() {
            let names: Vec<String> = entity.workers.iter().map(Workers::label).collect();
            details.push(("Çalışanlar", names.join(", ")));
        }
        details
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub project_status: String,
}

impl ResourceForm for ProjectForm {
    type Entity = Project;
    type Draft = ProjectDraft;

    fn from_entity(entity: &Project) -> Self {
        Self {
            name: entity.name.clone(),
            description: entity.description.clone().unwrap_or_default(),
            project_status: entity.project_status.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<ProjectDraft, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = self.name.trim();
        let description = self.description.trim();
        let status = self.project_status.trim();

        if require(&mut errors, "name", name) && name.chars().count() < MIN_NAME_LEN {
            errors.push(FieldError::new(
                "name",
                format!("Proje adı en az {MIN_NAME_LEN} karakter olmalıdır."),
            ));
        }
        require(&mut errors, "description", description);
        require(&mut errors, "project_status", status);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ProjectDraft {
            name: name.to_string(),
            description: description.to_string(),
            project_status: status.to_string(),
        })
    }

    fn fields(&self) -> Vec<FieldView> {
        vec![
            FieldView::new("name", "Proje Adı", FieldKind::Text, &self.name),
            FieldView::new("description", "Açıklama", FieldKind::Text, &self.description),
            FieldView::new(
                "project_status",
                "Durum",
                FieldKind::Select(options_with_current(&PROJECT_STATUSES, &self.project_status)),
                &self.project_status,
            ),
        ]
    }
}
