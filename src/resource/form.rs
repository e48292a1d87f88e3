use super::ResourceForm;

pub const REQUIRED: &str = "Bu alan zorunludur.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Number { min: i32, max: i32 },
    Select(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub errors: Vec<String>,
}

impl FieldView {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind, value: &str) -> Self {
        Self {
            name,
            label,
            kind,
            value: value.to_string(),
            errors: Vec::new(),
        }
    }
}

/// Pushes a "required" error when `value` is blank. Returns whether it was present.
pub fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, REQUIRED));
        false
    } else {
        true
    }
}

/// Select options, keeping a stored value that is no longer offered.
pub fn options_with_current(offered: &[&str], current: &str) -> Vec<String> {
    let mut options: Vec<String> = offered.iter().map(|o| o.to_string()).collect();
    if !current.is_empty() && !offered.contains(&current) {
        options.push(current.to_string());
    }
    options
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone)]
pub struct FormState<F> {
    pub mode: FormMode,
    pub input: F,
    pub errors: Vec<FieldError>,
    /// Rejection reported by the backend for the last submit.
    pub failure: Option<String>,
}

impl<F: ResourceForm> FormState<F> {
    pub fn create() -> Self {
        Self::with_input(FormMode::Create, F::default())
    }

    pub fn edit(id: i64, entity: &F::Entity) -> Self {
        Self::with_input(FormMode::Edit(id), F::from_entity(entity))
    }

    pub fn with_input(mode: FormMode, input: F) -> Self {
        Self {
            mode,
            input,
            errors: Vec::new(),
            failure: None,
        }
    }

    pub fn rejected(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }

    pub fn failed(mut self, message: String) -> Self {
        self.failure = Some(message);
        self
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Field views with this state's errors attached.
    pub fn fields(&self) -> Vec<FieldView> {
        let mut fields = self.input.fields();
        for error in &self.errors {
            if let Some(field) = fields.iter_mut().find(|f| f.name == error.field) {
                field.errors.push(error.message.clone());
            }
        }
        fields
    }
}
