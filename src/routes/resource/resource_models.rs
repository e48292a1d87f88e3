use serde::Deserialize;

// Answer posted from the delete confirmation page
#[derive(Debug, Deserialize)]
pub struct DeleteConfirmation {
    #[serde(default)]
    pub confirm: String,
}

impl DeleteConfirmation {
    pub fn is_confirmed(&self) -> bool {
        self.confirm == "yes"
    }
}

pub const DELETE_DECLINED: &str = "Silme işlemi iptal edildi.";
