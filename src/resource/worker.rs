use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::form::{options_with_current, require, FieldError, FieldKind, FieldView};
use super::{Labels, Resource, ResourceForm};
use crate::models::worker::{Worker, WorkerDraft, GENDERS, MAX_AGE, MIN_AGE};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

pub struct Workers;

impl Resource for Workers {
    type Entity = Worker;
    type Form = WorkerForm;

    const API_SEGMENT: &'static str = "worker";
    const SCREEN_PATH: &'static str = "/workers";
    const LABELS: Labels = Labels {
        title: "Çalışan Yönetimi",
        list_title: "Mevcut Çalışan Listesi",
        create_title: "Yeni Çalışan Ekle",
        edit_title: "Çalışan Düzenle",
        search_placeholder: "İsim, cinsiyet, e-posta veya yaşa göre ara...",
        empty: "Aradığınız kriterlere uygun çalışan bulunmamaktadır.",
        fetch_failed: "Çalışanlar alınamadı.",
        save_failed: "İşlem başarısız oldu.",
        delete_failed: "Silme işlemi başarısız oldu.",
        delete_question: "Bu çalışanı silmek istediğinize emin misiniz?",
        not_found: "Silinecek çalışan bulunamadı.",
        created: "Çalışan başarıyla eklendi!",
        updated: "Çalışan başarıyla güncellendi!",
        deleted: "Çalışan başarıyla silindi!",
    };

    fn id(entity: &Worker) -> i64 {
        entity.worker_id
    }

    fn label(entity: &Worker) -> String {
        if entity.name.is_empty() {
            "İsim yok".to_string()
        } else {
            entity.name.clone()
        }
    }

    fn search_fields(entity: &Worker) -> Vec<String> {
        vec![
            entity.name.clone(),
            entity.gender.clone(),
            entity.worker_email.clone(),
            entity.age.map(|age| age.to_string()).unwrap_or_default(),
        ]
    }

    fn details(entity: &Worker) -> Vec<(&'static str, String)> {
        let or_none = |value: &str| {
            if value.is_empty() {
                "Yok".to_string()
            } else {
                value.to_string()
            }
        };
        vec![
            ("Yaş", entity.age.map_or_else(|| "Yok".to_string(), |age| age.to_string())),
            ("Cinsiyet", or_none(&entity.gender)),
            ("E-posta", or_none(&entity.worker_email)),
        ]
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkerForm {
    #[serde(default)]
    pub name: String,
    // Kept as typed so a non-numeric entry can be reported and shown back.
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub worker_email: String,
}

impl ResourceForm for WorkerForm {
    type Entity = Worker;
    type Draft = WorkerDraft;

    fn from_entity(entity: &Worker) -> Self {
        Self {
            name: entity.name.clone(),
            age: entity.age.map(|age| age.to_string()).unwrap_or_default(),
            gender: entity.gender.clone(),
            worker_email: entity.worker_email.clone(),
        }
    }

    fn validate(&self) -> Result<WorkerDraft, Vec<FieldError>> {
        let mut errors = Vec::new();
        let name = self.name.trim();
        let age = self.age.trim();
        let gender = self.gender.trim();
        let email = self.worker_email.trim();

        require(&mut errors, "name", name);

        let mut parsed_age = None;
        if require(&mut errors, "age", age) {
            match age.parse::<i32>() {
                Err(_) => errors.push(FieldError::new("age", "Yaş sayısal bir değer olmalıdır.")),
                Ok(value) if !(MIN_AGE..=MAX_AGE).contains(&value) => errors.push(FieldError::new(
                    "age",
                    format!("Yaş {MIN_AGE} ile {MAX_AGE} arasında olmalıdır."),
                )),
                Ok(value) => parsed_age = Some(value),
            }
        }

        // Values beyond the offered options may already be stored and stay valid.
        require(&mut errors, "gender", gender);

        if require(&mut errors, "worker_email", email) && !EMAIL_PATTERN.is_match(email) {
            errors.push(FieldError::new(
                "worker_email",
                "Geçerli bir e-posta adresi giriniz.",
            ));
        }

        match parsed_age {
            Some(age) if errors.is_empty() => Ok(WorkerDraft {
                name: name.to_string(),
                age,
                gender: gender.to_string(),
                worker_email: email.to_string(),
            }),
            _ => Err(errors),
        }
    }

    fn fields(&self) -> Vec<FieldView> {
        vec![
            FieldView::new("name", "Adı", FieldKind::Text, &self.name),
            FieldView::new(
                "age",
                "Yaşı",
                FieldKind::Number {
                    min: MIN_AGE,
                    max: MAX_AGE,
                },
                &self.age,
            ),
            FieldView::new(
                "gender",
                "Cinsiyet",
                FieldKind::Select(options_with_current(&GENDERS, &self.gender)),
                &self.gender,
            ),
            FieldView::new("worker_email", "E-posta", FieldKind::Email, &self.worker_email),
        ]
    }
}
