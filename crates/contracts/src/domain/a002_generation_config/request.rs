use super::aggregate::GenerationParameters;
use crate::domain::a001_article::aggregate::ArticleId;
use serde::{Deserialize, Serialize};

/// Body of `POST /generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(flatten)]
    pub params: GenerationParameters,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, params: GenerationParameters) -> Self {
        Self {
            topic: topic.into(),
            params,
        }
    }

    /// The topic is the only field checked before sending
    pub fn validate(&self) -> Result<(), String> {
        if self.topic.trim().is_empty() {
            return Err("El tema es obligatorio".into());
        }
        Ok(())
    }
}

/// Response of `POST /generate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub article_id: Option<ArticleId>,
}
