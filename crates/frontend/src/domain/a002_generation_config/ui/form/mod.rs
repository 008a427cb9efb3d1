//! Parameter fields shared by the generation form and the settings page

use contracts::domain::a002_generation_config::aggregate::{GenerationParameters, Tone};
use contracts::shared::number_input::parse_lenient_int;
use leptos::prelude::*;
use thaw::*;

/// Numeric inputs keep the raw text the user typed; it is coerced only
/// when a request is built.
#[derive(Clone, Copy)]
pub struct ParametersVm {
    pub text_length: RwSignal<String>,
    pub tone: RwSignal<String>,
    pub min_source_score: RwSignal<String>,
    pub sources_to_search: RwSignal<String>,
    pub sources_to_analyze: RwSignal<String>,
    pub min_score_to_use: RwSignal<String>,
    pub sources_to_use: RwSignal<String>,
    pub images_to_find: RwSignal<String>,
}

impl ParametersVm {
    pub fn new() -> Self {
        let vm = Self {
            text_length: RwSignal::new(String::new()),
            tone: RwSignal::new(String::new()),
            min_source_score: RwSignal::new(String::new()),
            sources_to_search: RwSignal::new(String::new()),
            sources_to_analyze: RwSignal::new(String::new()),
            min_score_to_use: RwSignal::new(String::new()),
            sources_to_use: RwSignal::new(String::new()),
            images_to_find: RwSignal::new(String::new()),
        };
        vm.reset();
        vm
    }

    pub fn load(&self, params: &GenerationParameters) {
        self.text_length.set(params.text_length.to_string());
        self.tone.set(params.tone.as_str().to_string());
        self.min_source_score.set(params.min_source_score.to_string());
        self.sources_to_search.set(params.sources_to_search.to_string());
        self.sources_to_analyze.set(params.sources_to_analyze.to_string());
        self.min_score_to_use.set(params.min_score_to_use.to_string());
        self.sources_to_use.set(params.sources_to_use.to_string());
        self.images_to_find.set(params.images_to_find.to_string());
    }

    /// Restore the built-in defaults
    pub fn reset(&self) {
        self.load(&GenerationParameters::default());
    }

    pub fn to_params(&self) -> GenerationParameters {
        let int = |s: RwSignal<String>| s.with_untracked(|v| parse_lenient_int(v));
        GenerationParameters {
            text_length: int(self.text_length),
            tone: self
                .tone
                .with_untracked(|t| Tone::from_str(t))
                .unwrap_or_default(),
            min_source_score: int(self.min_source_score),
            sources_to_search: int(self.sources_to_search),
            sources_to_analyze: int(self.sources_to_analyze),
            min_score_to_use: int(self.min_score_to_use),
            sources_to_use: int(self.sources_to_use),
            images_to_find: int(self.images_to_find),
        }
    }
}

impl Default for ParametersVm {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
#[allow(non_snake_case)]
fn NumberField(
    id: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional)] hint: Option<&'static str>,
    min: &'static str,
    #[prop(optional)] max: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id style="display: block; font-size: 14px; font-weight: 500; margin-bottom: 8px;">{label}</label>
            <Input
                attr:id=id
                value=value
                input_type=InputType::Number
                attr:min=min
                attr:max=max
                attr:style="width: 100%;"
            />
            {hint.map(|h| view! {
                <p style="font-size: 12px; color: var(--colorNeutralForeground3); margin: 4px 0 0 0;">{h}</p>
            })}
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ParameterFields(vm: ParametersVm) -> impl IntoView {
    let grid = "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;";
    let section = "font-size: 18px; font-weight: 600; margin: 24px 0 16px 0;";

    view! {
        <h3 style=section>"Configuración de Contenido"</h3>
        <div style=grid>
            <NumberField
                id="longitud_texto"
                label="Longitud del Texto"
                value=vm.text_length
                hint="Número de palabras aproximado"
                min="100"
            />
            <div class="form-group">
                <label for="tono_texto" style="display: block; font-size: 14px; font-weight: 500; margin-bottom: 8px;">
                    "Tono del Texto"
                </label>
                <Select attr:id="tono_texto" value=vm.tone>
                    {Tone::ALL
                        .iter()
                        .map(|tone| view! { <option value=tone.as_str()>{tone.label()}</option> })
                        .collect_view()}
                </Select>
            </div>
            <NumberField
                id="num_imagenes_buscar"
                label="Número de Imágenes"
                value=vm.images_to_find
                hint="0 para desactivar imágenes"
                min="0"
            />
        </div>

        <h3 style=section>"Configuración de Fuentes"</h3>
        <div style=grid>
            <NumberField
                id="min_score_fuente"
                label="Score Mínimo Fuente"
                value=vm.min_source_score
                hint="Calidad mínima de fuentes (1-10)"
                min="1"
                max="10"
            />
            <NumberField
                id="num_fuentes_scraper"
                label="Buscar (Scraper)"
                value=vm.sources_to_search
                hint="Fuentes a buscar"
                min="1"
            />
            <NumberField
                id="num_resultados_scraper"
                label="Analizar (Scraper)"
                value=vm.sources_to_analyze
                hint="Resultados a analizar en detalle"
                min="1"
            />
            <NumberField
                id="min_score_generador"
                label="Score Mínimo Usar"
                value=vm.min_score_to_use
                hint="Score mínimo para usar en generación"
                min="1"
                max="10"
            />
            <NumberField
                id="num_fuentes_generador"
                label="Usar (Generador)"
                value=vm.sources_to_use
                hint="Fuentes a usar para generación"
                min="1"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holds_defaults() {
        let vm = ParametersVm::new();
        assert_eq!(vm.to_params(), GenerationParameters::default());
        assert_eq!(vm.tone.get_untracked(), "neutral");
    }

    #[test]
    fn test_non_numeric_input_becomes_zero() {
        let vm = ParametersVm::new();
        vm.text_length.set("abc".to_string());
        vm.images_to_find.set(String::new());
        vm.min_source_score.set("999".to_string());

        let params = vm.to_params();
        assert_eq!(params.text_length, 0);
        assert_eq!(params.images_to_find, 0);
        assert_eq!(params.min_source_score, 999);
    }

    #[test]
    fn test_load_then_reset() {
        let vm = ParametersVm::new();
        let custom = GenerationParameters {
            text_length: 1500,
            tone: Tone::Technical,
            ..GenerationParameters::default()
        };
        vm.load(&custom);
        assert_eq!(vm.to_params(), custom);

        vm.reset();
        assert_eq!(vm.to_params(), GenerationParameters::default());
    }
}
