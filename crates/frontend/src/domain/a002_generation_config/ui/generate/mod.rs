use super::form::{ParameterFields, ParametersVm};
use crate::domain::a002_generation_config::api;
use crate::shared::alert::{AlertBanner, AlertMessage};
use crate::shared::api_utils::ApiError;
use crate::shared::event_bus::{ArticleEvent, ArticleEventBus};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::shared::view_scope::{spawn_guarded, use_view_scope, ViewScope};
use contracts::domain::a001_article::aggregate::ArticleId;
use contracts::domain::a002_generation_config::aggregate::{
    GenerationParameters, DEFAULT_CONFIG_TOPIC,
};
use contracts::domain::a002_generation_config::request::{GenerateResponse, GenerationRequest};
use leptos::prelude::*;
use thaw::*;

const LOAD_DEFAULTS_ERROR: &str = "Error al cargar la configuración por defecto";
const GENERATE_ERROR: &str =
    "Error al generar el artículo. Verifica que el backend esté ejecutándose.";

fn generated_message(id: Option<ArticleId>) -> String {
    let id = id.map_or_else(|| "desconocido".to_string(), |id| id.to_string());
    format!("Artículo generado exitosamente. ID: {}", id)
}

#[derive(Clone, Copy)]
struct GenerateVm {
    topic: RwSignal<String>,
    params: ParametersVm,
    loading_config: RwSignal<bool>,
    generating: RwSignal<bool>,
    alert: RwSignal<Option<AlertMessage>>,
    scope: StoredValue<ViewScope>,
    bus: StoredValue<Option<ArticleEventBus>>,
}

impl GenerateVm {
    fn new() -> Self {
        Self {
            topic: RwSignal::new(String::new()),
            params: ParametersVm::new(),
            loading_config: RwSignal::new(true),
            generating: RwSignal::new(false),
            alert: RwSignal::new(None),
            scope: StoredValue::new(use_view_scope()),
            bus: StoredValue::new(use_context::<ArticleEventBus>()),
        }
    }

    /// Pre-fill the parameters from the default named configuration.
    /// On failure the built-in defaults stay in place.
    fn load_defaults(&self) {
        let vm = *self;
        vm.loading_config.set(true);
        spawn_guarded(
            &vm.scope.get_value(),
            "load default config",
            async move { api::fetch_config(DEFAULT_CONFIG_TOPIC).await },
            move |result| vm.on_defaults_loaded(result),
        );
    }

    fn on_defaults_loaded(&self, result: Result<GenerationParameters, ApiError>) {
        match result {
            Ok(params) => self.params.load(&params),
            Err(_) => self.alert.set(Some(AlertMessage::error(LOAD_DEFAULTS_ERROR))),
        }
        self.loading_config.set(false);
    }

    fn submit(&self) {
        if self.generating.get_untracked() {
            return;
        }
        let request = GenerationRequest::new(self.topic.get_untracked(), self.params.to_params());
        if let Err(msg) = request.validate() {
            self.alert.set(Some(AlertMessage::error(msg)));
            return;
        }

        let vm = *self;
        vm.generating.set(true);
        vm.alert.set(None);
        log::info!("generating article for topic {:?}", request.topic);

        spawn_guarded(
            &vm.scope.get_value(),
            "generate article",
            async move { api::generate_article(&request).await },
            move |result| vm.on_generated(result),
        );
    }

    /// Success clears the topic and announces the new article; failure keeps
    /// the form as it was.
    fn on_generated(&self, result: Result<GenerateResponse, ApiError>) {
        match result {
            Ok(response) => {
                self.alert
                    .set(Some(AlertMessage::success(generated_message(response.article_id))));
                self.topic.set(String::new());
                if let Some(bus) = self.bus.get_value() {
                    bus.publish(ArticleEvent::Created(response.article_id));
                }
            }
            Err(_) => self.alert.set(Some(AlertMessage::error(GENERATE_ERROR))),
        }
        self.generating.set(false);
    }
}

#[component]
#[allow(non_snake_case)]
pub fn GenerateArticle() -> impl IntoView {
    let vm = GenerateVm::new();
    vm.load_defaults();

    view! {
        <PageFrame page_id="a002_generation_config--usecase" category=PAGE_CAT_USECASE max_width="896px">
            {move || {
                if vm.loading_config.get() {
                    return view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 64px;">
                            <Spinner />
                            <span>"Cargando configuración..."</span>
                        </Flex>
                    }
                    .into_any();
                }

                view! {
                    <Card>
                        <h2 style="font-size: 24px; font-weight: bold; display: flex; align-items: center; gap: 12px; margin: 0;">
                            {icon("pen-tool")}
                            "Generar Nuevo Artículo"
                        </h2>
                        <p style="color: var(--colorNeutralForeground3); margin: 4px 0 16px 0;">
                            "Configura los parámetros para generar contenido optimizado para SEO"
                        </p>

                        <AlertBanner alert=vm.alert />

                        <div>
                            <div class="form-group">
                                <label for="tema" style="display: block; font-size: 14px; font-weight: 600; margin-bottom: 8px;">
                                    "Tema del Artículo *"
                                </label>
                                <Input
                                    attr:id="tema"
                                    value=vm.topic
                                    placeholder="Ej: Avances de la IA en medicina 2025"
                                    attr:style="width: 100%;"
                                />
                            </div>

                            <ParameterFields vm=vm.params />

                            <div style="margin-top: 24px;">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| vm.submit()
                                    attr:style="width: 100%;"
                                    disabled=Signal::derive(move || vm.generating.get())
                                    loading=Signal::derive(move || vm.generating.get())
                                >
                                    {icon("sparkles")}
                                    {move || if vm.generating.get() { " Generando Artículo..." } else { " Generar Artículo" }}
                                </Button>
                            </div>
                        </div>
                    </Card>
                }
                .into_any()
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::alert::AlertKind;

    fn alert_kind(vm: &GenerateVm) -> Option<AlertKind> {
        vm.alert.with_untracked(|a| a.as_ref().map(|a| a.kind))
    }

    #[test]
    fn test_generated_message() {
        assert_eq!(
            generated_message(Some(ArticleId(42))),
            "Artículo generado exitosamente. ID: 42"
        );
        assert_eq!(
            generated_message(None),
            "Artículo generado exitosamente. ID: desconocido"
        );
    }

    #[test]
    fn test_success_clears_topic_and_announces() {
        let owner = Owner::new();
        owner.with(|| {
            let bus = ArticleEventBus::new();
            provide_context(bus.clone());
            let mut rx = bus.subscribe();

            let vm = GenerateVm::new();
            vm.topic.set("IA en medicina".to_string());
            vm.generating.set(true);
            vm.on_generated(Ok(GenerateResponse {
                message: "ok".to_string(),
                article_id: Some(ArticleId(42)),
            }));

            assert_eq!(vm.topic.get_untracked(), "");
            assert!(!vm.generating.get_untracked());
            assert_eq!(alert_kind(&vm), Some(AlertKind::Success));
            assert_eq!(rx.try_recv(), Ok(ArticleEvent::Created(Some(ArticleId(42)))));
        });
    }

    #[test]
    fn test_failure_keeps_topic() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = GenerateVm::new();
            vm.topic.set("IA en medicina".to_string());
            vm.generating.set(true);
            vm.on_generated(Err(ApiError::Transport("offline".to_string())));

            assert_eq!(vm.topic.get_untracked(), "IA en medicina");
            assert!(!vm.generating.get_untracked());
            assert_eq!(alert_kind(&vm), Some(AlertKind::Error));
        });
    }

    #[test]
    fn test_blank_topic_is_rejected_locally() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = GenerateVm::new();
            vm.topic.set("   ".to_string());
            vm.submit();
            assert!(!vm.generating.get_untracked());
            assert_eq!(alert_kind(&vm), Some(AlertKind::Error));
        });
    }

    #[test]
    fn test_failed_defaults_keep_built_in_values() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = GenerateVm::new();
            vm.on_defaults_loaded(Err(ApiError::Status(404)));
            assert!(!vm.loading_config.get_untracked());
            assert_eq!(vm.params.to_params(), GenerationParameters::default());
        });
    }
}
