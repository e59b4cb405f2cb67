//! API Gateway Client
//!
//! Thin async wrappers over the backend REST API, one module per resource.
//! Every call goes through the helpers here so auth headers, error mapping
//! and JSON decoding stay in one place.

pub mod auth;
pub mod items;
pub mod public;
pub mod wishlists;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::token_store::TokenStore;

/// Failure surface of the API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The response body could not be decoded
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided failure message, when the body carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

/// Error body shape used by the backend: `{"detail": "..."}`. Validation
/// failures put an array under `detail`; those decode to `None` and callers
/// fall back to a generic message.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
}

fn map_gloo_error(err: gloo_net::Error) -> ApiError {
    match err {
        gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
        other => ApiError::Network(other.to_string()),
    }
}

fn url(path: &str) -> String {
    format!("{}{}", config::api_base(), path)
}

/// Attach the stored bearer token, if any. Anonymous requests go out as-is
/// and the server decides what they may see.
fn bearer(builder: RequestBuilder) -> RequestBuilder {
    match TokenStore::new().load() {
        Some(token) => builder.header(
            "Authorization",
            &format!("Bearer {}", token.access_token),
        ),
        None => builder,
    }
}

/// Fail on non-2xx statuses, pulling the backend's `detail` out of the body
/// when present.
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let detail = match response.text().await {
        Ok(body) => parse_detail(&body),
        Err(_) => None,
    };
    Err(ApiError::Status { status, detail })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(map_gloo_error)
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = bearer(Request::get(&url(path)))
        .send()
        .await
        .map_err(map_gloo_error)?;
    decode(check(response).await?).await
}

pub(crate) async fn post_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = bearer(Request::post(&url(path)))
        .json(body)
        .map_err(map_gloo_error)?
        .send()
        .await
        .map_err(map_gloo_error)?;
    decode(check(response).await?).await
}

/// POST where only success matters, e.g. sign-up.
pub(crate) async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let response = bearer(Request::post(&url(path)))
        .json(body)
        .map_err(map_gloo_error)?
        .send()
        .await
        .map_err(map_gloo_error)?;
    check(response).await?;
    Ok(())
}

/// Body-less POST, e.g. claiming a shared wishlist.
pub(crate) async fn post_empty(path: &str) -> Result<(), ApiError> {
    let response = bearer(Request::post(&url(path)))
        .send()
        .await
        .map_err(map_gloo_error)?;
    check(response).await?;
    Ok(())
}

pub(crate) async fn patch_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let response = bearer(Request::patch(&url(path)))
        .json(body)
        .map_err(map_gloo_error)?
        .send()
        .await
        .map_err(map_gloo_error)?;
    decode(check(response).await?).await
}
