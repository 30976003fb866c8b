//! Client for the property-services REST backend.
//!
//! Thin fetch helpers shared by SSR and the WASM build (reqwest targets
//! both), plus the DTOs the pages render. All business logic lives behind
//! these endpoints; nothing here is more than transport and shape.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::{Role, Session};
use crate::wizard::draft::{cities_or_fallback, City, RegistrationPayload};
use crate::wizard::{FieldError, RegistrationGateway, SubmitFailure};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
}

#[cfg(feature = "server")]
fn base_url() -> String {
    crate::config::settings().api_base.clone()
}

// In the browser the backend is reached through the same-origin /api proxy.
#[cfg(not(feature = "server"))]
fn base_url() -> String {
    "/api".to_string()
}

fn url(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = reqwest::get(url(path)).await?;
    if !resp.status().is_success() {
        return Err(ApiError::Status(resp.status().as_u16()));
    }
    Ok(resp.json::<T>().await?)
}

/// GET with the session's bearer token.
pub async fn fetch_json_auth<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, ApiError> {
    let resp = reqwest::Client::new()
        .get(url(path))
        .bearer_auth(token)
        .send()
        .await?;
    if !resp.status().is_success() {
        return Err(ApiError::Status(resp.status().as_u16()));
    }
    Ok(resp.json::<T>().await?)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = reqwest::Client::new().post(url(path)).json(body).send().await?;
    if !resp.status().is_success() {
        return Err(ApiError::Status(resp.status().as_u16()));
    }
    Ok(resp.json::<T>().await?)
}

// ============ Auth ============

#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Serialize)]
struct ActivateRequest<'a> {
    token: &'a str,
}

/// Login/activation exchange result.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub role: String,
    pub user_id: String,
}

impl AuthResponse {
    /// An unknown role tag still yields a token-bearing session; the gate
    /// then keeps it off role-gated pages.
    pub fn into_session(self) -> Session {
        Session {
            token: Some(self.token),
            role: Role::parse(&self.role),
            user_id: Some(self.user_id),
        }
    }
}

pub async fn login(request: &LoginRequest) -> Result<Session, ApiError> {
    let resp: AuthResponse = post_json("/auth/login", request).await?;
    Ok(resp.into_session())
}

/// Exchanges an activation token (from the invite email) for a session.
pub async fn activate(token: &str) -> Result<Session, ApiError> {
    let resp: AuthResponse = post_json("/auth/activate", &ActivateRequest { token }).await?;
    Ok(resp.into_session())
}

// ============ Provider registration ============

#[derive(Clone, Debug, Deserialize)]
struct RegistrationResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Vec<FieldError>,
}

/// Live gateway for the onboarding wizard.
pub struct HttpRegistrationGateway;

#[async_trait(?Send)]
impl RegistrationGateway for HttpRegistrationGateway {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<(), SubmitFailure> {
        // Validation failures arrive as non-2xx with a structured body, so
        // parse the body regardless of status.
        let resp = match reqwest::Client::new()
            .post(url("/providers/register"))
            .json(payload)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(%err, "registration request failed");
                return Err(SubmitFailure::default());
            }
        };
        match resp.json::<RegistrationResponse>().await {
            Ok(body) if body.status == "success" => Ok(()),
            Ok(body) => Err(SubmitFailure { message: body.message, errors: body.errors }),
            Err(err) => {
                tracing::warn!(%err, "registration response unreadable");
                Err(SubmitFailure::default())
            }
        }
    }
}

/// City options for the address step; falls back to the built-in list so
/// the step stays usable when the provider is down.
pub async fn fetch_cities() -> Vec<City> {
    cities_or_fallback(fetch_json::<Vec<City>>("/cities").await.ok())
}

// ============ Page DTOs ============

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub service: String,
    pub property: String,
    pub date: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRequest {
    pub id: i64,
    pub item: String,
    pub quantity: i64,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanerJob {
    pub id: i64,
    pub property: String,
    pub scheduled_at: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessCode {
    pub lock_name: String,
    pub code: String,
    pub valid_from: String,
    pub valid_to: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: i64,
    pub message: String,
    pub created_at: String,
}
