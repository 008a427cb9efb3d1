use serde::{Deserialize, Serialize};

/// Label of the configuration used when no topic-specific one is chosen
pub const DEFAULT_CONFIG_TOPIC: &str = "Defecto";

/// Configuration labels offered by the settings view: (wire value, display label)
pub const CONFIG_TOPICS: &[(&str, &str)] = &[
    (DEFAULT_CONFIG_TOPIC, "Defecto"),
    ("Tecnologia", "Tecnología"),
    ("Salud", "Salud"),
    ("Negocios", "Negocios"),
];

/// Writing tone requested from the generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "formal")]
    Formal,
    #[serde(rename = "informal")]
    Informal,
    #[serde(rename = "técnico")]
    Technical,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Neutral, Tone::Formal, Tone::Informal, Tone::Technical];

    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "neutral" => Ok(Tone::Neutral),
            "formal" => Ok(Tone::Formal),
            "informal" => Ok(Tone::Informal),
            "técnico" => Ok(Tone::Technical),
            _ => Err(format!("Unknown tone: {}", s)),
        }
    }

    /// Wire value, as stored by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Formal => "formal",
            Tone::Informal => "informal",
            Tone::Technical => "técnico",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Neutral => "Neutral",
            Tone::Formal => "Formal",
            Tone::Informal => "Informal",
            Tone::Technical => "Técnico",
        }
    }
}

/// Parameter set driving article generation.
///
/// Score fields are meant to stay within 1-10 and counts non-negative, but
/// only the form inputs suggest those bounds; nothing here clamps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    /// Approximate length of the article in words
    #[serde(rename = "longitud_texto")]
    pub text_length: i64,
    #[serde(rename = "tono_texto")]
    pub tone: Tone,
    /// Minimum score (1-10) a source needs to be kept by the scraper
    #[serde(rename = "min_score_fuente")]
    pub min_source_score: i64,
    #[serde(rename = "num_fuentes_scraper")]
    pub sources_to_search: i64,
    #[serde(rename = "num_resultados_scraper")]
    pub sources_to_analyze: i64,
    /// Minimum score (1-10) a source needs to be used by the generator
    #[serde(rename = "min_score_generador")]
    pub min_score_to_use: i64,
    #[serde(rename = "num_fuentes_generador")]
    pub sources_to_use: i64,
    /// 0 disables image search
    #[serde(rename = "num_imagenes_buscar")]
    pub images_to_find: i64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            text_length: 1000,
            tone: Tone::Neutral,
            min_source_score: 7,
            sources_to_search: 10,
            sources_to_analyze: 5,
            min_score_to_use: 6,
            sources_to_use: 3,
            images_to_find: 2,
        }
    }
}

/// Body of `PUT /config`: a parameter set keyed by its topic label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigUpdate {
    #[serde(rename = "tema")]
    pub topic: String,
    #[serde(flatten)]
    pub params: GenerationParameters,
}

impl ConfigUpdate {
    pub fn new(topic: impl Into<String>, params: GenerationParameters) -> Self {
        Self {
            topic: topic.into(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_wire_names() {
        let json = serde_json::to_value(GenerationParameters::default()).unwrap();
        assert_eq!(json["longitud_texto"], 1000);
        assert_eq!(json["tono_texto"], "neutral");
        assert_eq!(json["min_score_fuente"], 7);
        assert_eq!(json["num_fuentes_scraper"], 10);
        assert_eq!(json["num_resultados_scraper"], 5);
        assert_eq!(json["min_score_generador"], 6);
        assert_eq!(json["num_fuentes_generador"], 3);
        assert_eq!(json["num_imagenes_buscar"], 2);
    }

    #[test]
    fn test_technical_tone_wire_value() {
        let tone: Tone = serde_json::from_str("\"técnico\"").unwrap();
        assert_eq!(tone, Tone::Technical);
        assert_eq!(Tone::from_str(Tone::Technical.as_str()), Ok(Tone::Technical));
        assert!(Tone::from_str("sarcastic").is_err());
    }

    #[test]
    fn test_config_update_is_flat() {
        let update = ConfigUpdate::new("Salud", GenerationParameters::default());
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["tema"], "Salud");
        assert_eq!(json["longitud_texto"], 1000);
        assert!(json.get("params").is_none());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let params: GenerationParameters =
            serde_json::from_str(r#"{"longitud_texto": 500, "tono_texto": "formal"}"#).unwrap();
        assert_eq!(params.text_length, 500);
        assert_eq!(params.tone, Tone::Formal);
        assert_eq!(params.sources_to_search, 10);
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        let params = GenerationParameters {
            min_source_score: 999,
            min_score_to_use: 0,
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: GenerationParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back.min_source_score, 999);
        assert_eq!(back.min_score_to_use, 0);
    }
}
