use serde::{Deserialize, Serialize};

/// Generic acknowledgement returned by write endpoints
/// (`PUT /config`, `PUT /articles/{id}`, `POST /articles/{id}/publish`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl ApiMessage {
    /// File name reported by the publish endpoint, or a placeholder
    pub fn filename_or_default(&self) -> &str {
        match self.filename.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "generado",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_fallback() {
        let msg: ApiMessage = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert_eq!(msg.filename_or_default(), "generado");
        let msg: ApiMessage =
            serde_json::from_str(r#"{"message": "ok", "filename": "salud_ia_3_preview.html"}"#)
                .unwrap();
        assert_eq!(msg.filename_or_default(), "salud_ia_3_preview.html");
    }
}
