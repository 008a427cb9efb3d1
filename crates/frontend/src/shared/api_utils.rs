//! API utilities for frontend-backend communication
//!
//! Every backend call goes through [`get_json`] / [`send_json`] /
//! [`post_empty`]: one request, JSON in and out, no retry, no timeout.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Backend address used when `SEO_COPILOT_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Failure of a backend call.
///
/// Views do not distinguish between variants: each action maps any error
/// to a single localized alert. The variants exist for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }

    fn builder(&self, url: &str) -> RequestBuilder {
        match self {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
        }
    }
}

/// Get the base URL for API requests
///
/// Fixed local endpoint, overridable at build time:
/// `SEO_COPILOT_API_BASE=http://10.0.0.5:8000 trunk build`
pub fn api_base() -> String {
    option_env!("SEO_COPILOT_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/articles/12");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

async fn execute<T: DeserializeOwned>(
    method: HttpMethod,
    path: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("{} {}", method.as_str(), url);

    let builder = method
        .builder(&url)
        .header("Content-Type", "application/json")
        .header("Accept", "application/json");
    let request = match body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn log_failure<T>(method: HttpMethod, path: &str, result: &Result<T, ApiError>) {
    if let Err(e) = result {
        log::error!("API error: {} {} -> {}", method.as_str(), path, e);
    }
}

/// `GET path`, decoding the JSON response
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let result = execute(HttpMethod::Get, path, None).await;
    log_failure(HttpMethod::Get, path, &result);
    result
}

/// `POST`/`PUT` with a JSON body, decoding the JSON response
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: HttpMethod,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let result = match serde_json::to_string(body) {
        Ok(body) => execute(method, path, Some(body)).await,
        Err(e) => Err(ApiError::Encode(e.to_string())),
    };
    log_failure(method, path, &result);
    result
}

/// `POST path` without a body, decoding the JSON response
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let result = execute(HttpMethod::Post, path, None).await;
    log_failure(HttpMethod::Post, path, &result);
    result
}

/// `true` when `GET /health` answers with a 2xx status
pub async fn ping_backend() -> bool {
    match Request::get(&api_url("/health")).send().await {
        Ok(resp) => resp.ok(),
        Err(e) => {
            log::warn!("Backend health check failed: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000", "/articles"),
            "http://localhost:8000/articles"
        );
        assert_eq!(
            join_url("http://localhost:8000/", "config/Salud"),
            "http://localhost:8000/config/Salud"
        );
    }

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            ApiError::Decode("expected value".into()).to_string(),
            "failed to parse response: expected value"
        );
    }
}
