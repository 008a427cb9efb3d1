use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ID of a generated article (numeric on the backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for ArticleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(ArticleId::new)
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lightweight projection returned by `GET /articles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    /// Topic (category label) the article was generated for
    #[serde(rename = "tema", default)]
    pub topic: String,
    pub created_at: String,
    #[serde(default)]
    pub status: String,
}

/// Full article as returned by `GET /articles/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "tema", default)]
    pub topic: String,
    #[serde(default)]
    pub body: String,
    pub created_at: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_caption: Option<String>,
    /// Average score (1-10) of the sources used during generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_score: Option<f64>,
}

impl Article {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// `true` when the draft differs from the last saved body
    pub fn is_draft_dirty(&self, draft: &str) -> bool {
        self.body != draft
    }

    /// Alt text for the header image: the caption when present, else the title
    pub fn image_alt(&self) -> &str {
        match self.image_caption.as_deref() {
            Some(caption) if !caption.trim().is_empty() => caption,
            _ => &self.title,
        }
    }
}

/// Known article statuses. The backend stores a free-form string, so
/// anything unrecognised is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleStatus {
    Pending,
    Generated,
    Published,
    Other(String),
}

impl ArticleStatus {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pendiente" => ArticleStatus::Pending,
            "generado" => ArticleStatus::Generated,
            "publicado" => ArticleStatus::Published,
            _ => ArticleStatus::Other(s.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ArticleStatus::Pending => "Pendiente",
            ArticleStatus::Generated => "Generado",
            ArticleStatus::Published => "Publicado",
            ArticleStatus::Other(s) => s,
        }
    }
}
