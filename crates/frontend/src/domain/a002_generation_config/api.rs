//! Backend calls for article generation and named parameter sets

use crate::shared::api_utils::{get_json, send_json, ApiError, HttpMethod};
use contracts::domain::a002_generation_config::aggregate::{ConfigUpdate, GenerationParameters};
use contracts::domain::a002_generation_config::request::{GenerateResponse, GenerationRequest};
use contracts::shared::api_message::ApiMessage;

/// Path of the named configuration; the label is percent-encoded
fn config_path(topic: &str) -> String {
    format!("/config/{}", urlencoding::encode(topic))
}

pub async fn generate_article(request: &GenerationRequest) -> Result<GenerateResponse, ApiError> {
    send_json(HttpMethod::Post, "/generate", request).await
}

pub async fn fetch_config(topic: &str) -> Result<GenerationParameters, ApiError> {
    get_json(&config_path(topic)).await
}

pub async fn update_config(update: &ConfigUpdate) -> Result<ApiMessage, ApiError> {
    send_json(HttpMethod::Put, "/config", update).await
}
