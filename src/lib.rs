pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod resource;
pub mod routes;
pub mod session;
pub mod views;

use api::ApiClient;
use config::AppConfig;
use error::ApiError;
use session::storage::CookieSettings;

/// Shared by every worker thread through `web::Data`.
pub struct AppState {
    pub config: AppConfig,
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config.api_base_url, config.request_timeout)?;
        Ok(Self { config, api })
    }

    pub fn cookie_settings(&self) -> CookieSettings {
        CookieSettings {
            max_age_days: self.config.session_max_age_days,
            secure: self.config.secure_cookies,
        }
    }
}
