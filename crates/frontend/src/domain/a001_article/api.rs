//! Backend calls for generated articles

use crate::shared::api_utils::{get_json, post_empty, send_json, ApiError, HttpMethod};
use contracts::domain::a001_article::aggregate::{Article, ArticleId, ArticleSummary};
use contracts::domain::a001_article::dto::{
    ArticleUpdate, RewriteRequest, RewriteResponse, SuggestionsResponse,
};
use contracts::shared::api_message::ApiMessage;

pub async fn fetch_articles() -> Result<Vec<ArticleSummary>, ApiError> {
    get_json("/articles").await
}

pub async fn fetch_article(id: ArticleId) -> Result<Article, ApiError> {
    get_json(&format!("/articles/{}", id)).await
}

pub async fn update_article(id: ArticleId, update: &ArticleUpdate) -> Result<ApiMessage, ApiError> {
    send_json(HttpMethod::Put, &format!("/articles/{}", id), update).await
}

/// Ask the copilot for improvement suggestions (plain text, one per line)
pub async fn generate_suggestions(id: ArticleId) -> Result<SuggestionsResponse, ApiError> {
    post_empty(&format!("/articles/{}/generate-suggestions", id)).await
}

pub async fn rewrite_article(
    id: ArticleId,
    text: impl Into<String>,
    instruction: impl Into<String>,
) -> Result<RewriteResponse, ApiError> {
    let request = RewriteRequest {
        text_to_rewrite: text.into(),
        instruction: instruction.into(),
    };
    send_json(HttpMethod::Post, &format!("/articles/{}/rewrite", id), &request).await
}

pub async fn publish_article(id: ArticleId) -> Result<ApiMessage, ApiError> {
    post_empty(&format!("/articles/{}/publish", id)).await
}
