//! HTTP client for the remote project/worker API.
//!
//! Every call carries the bearer token (login excepted), a fresh
//! `X-Request-Id`, and the configured timeout. Nothing is retried.

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::page::Page;
use crate::models::project::Project;
use crate::resource::{Resource, ResourceForm};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self.request(Method::POST, "/api/auth/login").json(request);
        let response = self.send(builder, None).await?;
        Self::decode(response).await
    }

    /// `GET /api/{resource}/list?page&size`
    pub async fn list_page<R: Resource>(
        &self,
        token: &str,
        page: u32,
        size: u32,
    ) -> Result<Page<R::Entity>, ApiError> {
        let builder = self
            .request(Method::GET, &format!("/api/{}/list", R::API_SEGMENT))
            .query(&[("page", page), ("size", size)]);
        let response = self.send(builder, Some(token)).await?;
        Self::decode(response).await
    }

    /// `GET /api/{resource}/all`, the unpaged variant used by dropdowns.
    pub async fn list_all<R: Resource>(&self, token: &str) -> Result<Vec<R::Entity>, ApiError> {
        let builder = self.request(Method::GET, &format!("/api/{}/all", R::API_SEGMENT));
        let response = self.send(builder, Some(token)).await?;
        Self::decode(response).await
    }

    /// `POST /api/{resource}/create`
    pub async fn create<R: Resource>(
        &self,
        token: &str,
        draft: &<R::Form as ResourceForm>::Draft,
    ) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, &format!("/api/{}/create", R::API_SEGMENT))
            .json(draft);
        self.send(builder, Some(token)).await.map(drop)
    }

    /// `PUT /api/{resource}/update/{id}`
    pub async fn update<R: Resource>(
        &self,
        token: &str,
        id: i64,
        draft: &<R::Form as ResourceForm>::Draft,
    ) -> Result<(), ApiError> {
        let builder = self
            .request(Method::PUT, &format!("/api/{}/update/{}", R::API_SEGMENT, id))
            .json(draft);
        self.send(builder, Some(token)).await.map(drop)
    }

    /// `DELETE /api/{resource}/delete/{id}`
    pub async fn delete<R: Resource>(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let builder = self.request(
            Method::DELETE,
            &format!("/api/{}/delete/{}", R::API_SEGMENT, id),
        );
        self.send(builder, Some(token)).await.map(drop)
    }

    /// `GET /api/project/my_project`, scoped to the caller by the backend.
    pub async fn my_projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        let builder = self.request(Method::GET, "/api/project/my_project");
        let response = self.send(builder, Some(token)).await?;
        Self::decode(response).await
    }

    /// `POST /api/worker/{worker_id}/project/{project_id}`, no body.
    pub async fn assign(&self, token: &str, worker_id: i64, project_id: i64) -> Result<(), ApiError> {
        let builder = self.request(
            Method::POST,
            &format!("/api/worker/{}/project/{}", worker_id, project_id),
        );
        self.send(builder, Some(token)).await.map(drop)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let request_id = Uuid::new_v4();
        let mut builder = builder.header("X-Request-Id", request_id.to_string());
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        let request = builder.build().map_err(ApiError::from_transport)?;
        let label = format!("{} {}", request.method(), request.url().path());
        debug!("[{}] {}", request_id, label);

        let response = match self.http.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("[{}] {} failed: {}", request_id, label, e);
                return Err(ApiError::from_transport(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!("[{}] {} returned {}", request_id, label, status);
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await.map_err(ApiError::from_transport)?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
