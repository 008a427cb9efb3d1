use serde::{Deserialize, Serialize};

/// Body of `PUT /articles/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleUpdate {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

impl ArticleUpdate {
    /// Update carrying only the edited body
    pub fn body_only(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }
}

/// Response of `POST /articles/{id}/generate-suggestions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    /// Plain-text blob, one suggestion per line
    #[serde(default)]
    pub suggestions: String,
}

/// Body of `POST /articles/{id}/rewrite`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub text_to_rewrite: String,
    pub instruction: String,
}

/// Response of `POST /articles/{id}/rewrite`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteResponse {
    pub rewritten_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_only_update_omits_optionals() {
        let json = serde_json::to_value(ArticleUpdate::body_only("nuevo")).unwrap();
        assert_eq!(json, serde_json::json!({ "body": "nuevo" }));
    }

    #[test]
    fn test_rewrite_request_wire_names() {
        let req = RewriteRequest {
            text_to_rewrite: "texto".into(),
            instruction: "mejora".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["text_to_rewrite"], "texto");
        assert_eq!(json["instruction"], "mejora");
    }
}
