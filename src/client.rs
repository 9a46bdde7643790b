// Async portal API client (reqwest, cookie-based sessions)

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::{
    ApiResponse, Credentials, Domain, ParameterMessages, PasswordSetRequest, Plan,
    PlanSubscribeRequest, ResetRequest, TokenRequest, User,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
    /// The portal answered with a non-success envelope.
    #[error("portal error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
        parameters: Vec<ParameterMessages>,
    },
    /// 2xx body that does not match the response envelope.
    #[error("malformed portal response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client for the portal REST API. Sessions ride on cookies, so one client
/// instance holds one login session.
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_timeout(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        self.post_ok("/api/user/login", &credentials(email, password))
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_ok("/api/logout", &serde_json::json!({})).await
    }

    /// Current account; `ApiError::Api { status: 401, .. }` without a session.
    pub async fn user(&self) -> Result<User, ApiError> {
        self.get_data("/api/user").await
    }

    pub async fn create_user(&self, email: &str, password: &str) -> Result<(), ApiError> {
        self.post_ok("/api/user/create", &credentials(email, password))
            .await
    }

    pub async fn activate(&self, token: &str) -> Result<(), ApiError> {
        self.post_ok(
            "/api/user/activate",
            &TokenRequest {
                token: token.to_string(),
            },
        )
        .await
    }

    pub async fn reset_password(&self, email: &str) -> Result<(), ApiError> {
        self.post_ok(
            "/api/user/reset_password",
            &ResetRequest {
                email: email.to_string(),
            },
        )
        .await
    }

    pub async fn set_password(&self, token: &str, password: &str) -> Result<(), ApiError> {
        self.post_ok(
            "/api/user/set_password",
            &PasswordSetRequest {
                token: token.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    pub async fn domains(&self) -> Result<Vec<Domain>, ApiError> {
        self.get_data("/api/domains").await
    }

    pub async fn delete_domain(&self, name: &str) -> Result<(), ApiError> {
        let url = self.url("/api/domain");
        tracing::debug!("DELETE {} domain={}", url, name);
        let response = self
            .http
            .delete(&url)
            .query(&[("domain", name)])
            .send()
            .await?;
        Self::expect_ok(response).await
    }

    pub async fn set_notification(&self, enabled: bool) -> Result<(), ApiError> {
        let path = if enabled {
            "/api/notification/enable"
        } else {
            "/api/notification/disable"
        };
        self.post_ok(path, &serde_json::json!({})).await
    }

    pub async fn delete_user(&self) -> Result<(), ApiError> {
        let url = self.url("/api/user");
        tracing::debug!("DELETE {}", url);
        let response = self.http.delete(&url).send().await?;
        Self::expect_ok(response).await
    }

    pub async fn plan(&self) -> Result<Plan, ApiError> {
        self.get_data("/api/plan").await
    }

    pub async fn subscribe(&self, subscription_id: &str) -> Result<(), ApiError> {
        self.post_ok(
            "/api/plan/subscribe",
            &PlanSubscribeRequest {
                subscription_id: subscription_id.to_string(),
            },
        )
        .await
    }

    pub async fn unsubscribe(&self) -> Result<(), ApiError> {
        let url = self.url("/api/plan");
        tracing::debug!("DELETE {}", url);
        let response = self.http.delete(&url).send().await?;
        Self::expect_ok(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        Self::decode_data(response).await
    }

    async fn post_ok<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self.http.post(&url).json(body).send().await?;
        Self::expect_ok(response).await
    }

    /// Unwrap `data` out of a success envelope; anything else is an error.
    async fn decode_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), &body));
        }
        let envelope: ApiResponse<T> = serde_json::from_str(&body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        envelope
            .data
            .ok_or_else(|| ApiError::MalformedResponse("envelope has no data".to_string()))
    }

    /// For operations whose payload is only a status message.
    async fn expect_ok(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await?;
        Err(Self::api_error(status.as_u16(), &body))
    }

    fn api_error(status: u16, body: &str) -> ApiError {
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(body).unwrap_or_default();
        ApiError::Api {
            status,
            message: envelope
                .message
                .unwrap_or_else(|| "request failed".to_string()),
            parameters: envelope.parameters_messages.unwrap_or_default(),
        }
    }
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}
