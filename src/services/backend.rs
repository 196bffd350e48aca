use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use validator::Validate;

use crate::config::backend::BackendConfig;
use crate::modules::account::schema::{
    CreateAdminRequest, CreateAdminResponse, LoginRequest, RegisterOutcome, RegisterRequest,
    TestTokenRequest, TokenResponse,
};
use crate::modules::application::schema::ApplicantDetails;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("Invalid request: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// Connection refused, DNS failure and the like: the server never answered.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, BackendError::RequestError(e) if e.is_connect() || e.is_timeout())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(alias = "error")]
    message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryMatches {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub users: Vec<Value>,
    #[serde(default)]
    pub batch_id: Option<String>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub end_of_matches: bool,
}

/// Thin JSON-over-HTTP client for the Connect backend. No retries.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn from_env() -> Result<Self, BackendError> {
        Self::new(&BackendConfig::load())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn api_error(response: reqwest::Response) -> BackendError {
        let status = response.status().as_u16();
        let error_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
            .map(|e| e.message)
            .unwrap_or(error_text);
        BackendError::ApiError { status, message }
    }

    /// 201 means created, 409 means the account already exists.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegisterOutcome, BackendError> {
        request.validate()?;

        let response = self
            .client
            .post(self.url("/api/auth/register"))
            .json(request)
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED | StatusCode::OK => Ok(RegisterOutcome::Created),
            StatusCode::CONFLICT => Ok(RegisterOutcome::AlreadyExists),
            _ => Err(Self::api_error(response).await),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, BackendError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        request.validate()?;

        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Dev-only endpoint that mints a token for any ConnectID.
    pub async fn generate_test_token(&self, user_id: &str) -> Result<String, BackendError> {
        let response = self
            .client
            .post(self.url("/api/auth/test/generate-token"))
            .json(&TestTokenRequest {
                user_id: user_id.to_string(),
            })
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Self::api_error(response).await);
        }

        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    pub async fn create_admin(&self, request: &CreateAdminRequest) -> Result<CreateAdminResponse, BackendError> {
        request.validate()?;

        let response = self
            .client
            .post(self.url("/api/admin/setup/create-admin"))
            .json(request)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Self::api_error(response).await);
        }

        Ok(response.json().await?)
    }

    pub async fn submit_application(&self, applicant: &ApplicantDetails) -> Result<(), BackendError> {
        applicant.validate()?;

        let response = self
            .client
            .post(self.url("/api/applications/submit"))
            .json(applicant)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            _ => Err(Self::api_error(response).await),
        }
    }

    async fn get_authorized(&self, path: &str, token: &str) -> Result<reqwest::Response, BackendError> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(Self::api_error(response).await);
        }

        Ok(response)
    }

    pub async fn discovery_status(&self, token: &str) -> Result<Value, BackendError> {
        let response = self.get_authorized("/api/discovery/matches/status", token).await?;
        Ok(response.json().await?)
    }

    pub async fn todays_matches(&self, token: &str) -> Result<DiscoveryMatches, BackendError> {
        let response = self.get_authorized("/api/discovery/matches/today", token).await?;
        let body: Value = response.json().await?;
        serde_json::from_value(body).map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    pub async fn matches_countdown(&self, token: &str) -> Result<Value, BackendError> {
        let response = self.get_authorized("/api/discovery/matches/countdown", token).await?;
        Ok(response.json().await?)
    }
}
