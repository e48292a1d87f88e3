use serde::{Deserialize, Serialize};

use super::role::Authority;

#[derive(Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub role: Option<Vec<Authority>>,
    #[serde(default)]
    pub token: Option<String>,
}
