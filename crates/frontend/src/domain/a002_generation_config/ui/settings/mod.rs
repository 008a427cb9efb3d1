use super::form::{ParameterFields, ParametersVm};
use crate::domain::a002_generation_config::api;
use crate::shared::alert::{AlertBanner, AlertMessage};
use crate::shared::api_utils::ApiError;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::view_scope::{spawn_guarded, use_view_scope, ViewScope};
use contracts::domain::a002_generation_config::aggregate::{
    ConfigUpdate, GenerationParameters, CONFIG_TOPICS, DEFAULT_CONFIG_TOPIC,
};
use contracts::shared::api_message::ApiMessage;
use leptos::prelude::*;
use thaw::*;

const LOAD_ERROR: &str = "Error al cargar la configuración";
const SAVE_ERROR: &str =
    "Error al guardar la configuración. Esta funcionalidad puede no estar implementada en el backend.";

#[derive(Clone, Copy)]
struct ConfigurationVm {
    topic: RwSignal<String>,
    params: ParametersVm,
    loading: RwSignal<bool>,
    saving: RwSignal<bool>,
    alert: RwSignal<Option<AlertMessage>>,
    scope: StoredValue<ViewScope>,
}

impl ConfigurationVm {
    fn new() -> Self {
        Self {
            topic: RwSignal::new(DEFAULT_CONFIG_TOPIC.to_string()),
            params: ParametersVm::new(),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            alert: RwSignal::new(None),
            scope: StoredValue::new(use_view_scope()),
        }
    }

    /// Fetch the parameters stored under `topic`.
    ///
    /// A failed load leaves the fields as they were. A response for a label
    /// that is no longer selected is dropped.
    fn load(&self, topic: String) {
        let vm = *self;
        vm.loading.set(true);
        vm.alert.set(None);

        let requested = topic.clone();
        spawn_guarded(
            &vm.scope.get_value(),
            "load config",
            async move { api::fetch_config(&requested).await },
            move |result| vm.on_config_loaded(&topic, result),
        );
    }

    fn on_config_loaded(&self, topic: &str, result: Result<GenerationParameters, ApiError>) {
        if self.topic.with_untracked(|current| current != topic) {
            log::debug!("config for {:?} arrived after the label changed", topic);
            return;
        }
        match result {
            Ok(params) => self.params.load(&params),
            Err(_) => self.alert.set(Some(AlertMessage::error(LOAD_ERROR))),
        }
        self.loading.set(false);
    }

    fn reload(&self) {
        self.load(self.topic.get_untracked());
    }

    fn save(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let vm = *self;
        let update = ConfigUpdate::new(vm.topic.get_untracked(), vm.params.to_params());
        vm.saving.set(true);
        vm.alert.set(None);

        spawn_guarded(
            &vm.scope.get_value(),
            "save config",
            async move { api::update_config(&update).await },
            move |result| vm.on_config_saved(result),
        );
    }

    fn on_config_saved(&self, result: Result<ApiMessage, ApiError>) {
        match result {
            Ok(_) => self
                .alert
                .set(Some(AlertMessage::success("Configuración guardada exitosamente"))),
            Err(_) => self.alert.set(Some(AlertMessage::error(SAVE_ERROR))),
        }
        self.saving.set(false);
    }

    fn reset(&self) {
        self.params.reset();
        self.alert.set(Some(AlertMessage::info(
            "Configuración restablecida a valores por defecto",
        )));
    }
}

#[component]
#[allow(non_snake_case)]
pub fn Configuration() -> impl IntoView {
    let vm = ConfigurationVm::new();

    // Initial load and every label change
    Effect::new(move |_| {
        let topic = vm.topic.get();
        vm.load(topic);
    });

    view! {
        <PageFrame page_id="a002_generation_config--system" category=PAGE_CAT_SYSTEM max_width="896px">
            <Card>
                <h2 style="font-size: 24px; font-weight: bold; display: flex; align-items: center; gap: 12px; margin: 0;">
                    {icon("settings")}
                    "Configuración Global"
                </h2>
                <p style="color: var(--colorNeutralForeground3); margin: 4px 0 16px 0;">
                    "Ajusta los parámetros por defecto para la generación de artículos"
                </p>

                <AlertBanner alert=vm.alert />

                <div class="form-group">
                    <label for="tema" style="display: block; font-size: 14px; font-weight: 500; margin-bottom: 8px;">
                        "Tema de Configuración"
                    </label>
                    <Select attr:id="tema" value=vm.topic>
                        {CONFIG_TOPICS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </Select>
                    <p style="font-size: 12px; color: var(--colorNeutralForeground3); margin: 4px 0 0 0;">
                        "Selecciona el tema para cargar/guardar configuraciones específicas"
                    </p>
                </div>

                {move || {
                    if vm.loading.get() {
                        view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 48px;">
                                <Spinner />
                                <span>"Cargando configuración..."</span>
                            </Flex>
                        }
                        .into_any()
                    } else {
                        view! { <ParameterFields vm=vm.params /> }.into_any()
                    }
                }}

                <Flex gap=FlexGap::Medium style="margin-top: 24px; flex-wrap: wrap;">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save()
                        disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                        loading=Signal::derive(move || vm.saving.get())
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { " Guardando..." } else { " Guardar Configuración" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.reload()
                        disabled=Signal::derive(move || vm.loading.get())
                    >
                        {icon("refresh")}
                        " Recargar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| vm.reset()
                    >
                        "Restablecer"
                    </Button>
                </Flex>
            </Card>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::alert::AlertKind;
    use contracts::domain::a002_generation_config::aggregate::Tone;

    fn custom() -> GenerationParameters {
        GenerationParameters {
            text_length: 1500,
            tone: Tone::Formal,
            images_to_find: 3,
            ..GenerationParameters::default()
        }
    }

    #[test]
    fn test_failed_load_keeps_fields() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ConfigurationVm::new();
            vm.on_config_loaded(DEFAULT_CONFIG_TOPIC, Ok(custom()));
            vm.params.text_length.set("1800".to_string());

            vm.loading.set(true);
            vm.on_config_loaded(DEFAULT_CONFIG_TOPIC, Err(ApiError::Status(500)));

            assert!(!vm.loading.get_untracked());
            assert_eq!(vm.params.text_length.get_untracked(), "1800");
            assert_eq!(vm.params.to_params().tone, Tone::Formal);
            assert_eq!(
                vm.alert.with_untracked(|a| a.as_ref().map(|a| a.kind)),
                Some(AlertKind::Error)
            );
        });
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ConfigurationVm::new();
            vm.topic.set("Otro tema".to_string());
            vm.loading.set(true);

            vm.on_config_loaded(DEFAULT_CONFIG_TOPIC, Ok(custom()));
            assert_eq!(vm.params.to_params(), GenerationParameters::default());
            assert!(vm.loading.get_untracked());

            vm.on_config_loaded("Otro tema", Ok(custom()));
            assert_eq!(vm.params.to_params(), custom());
            assert!(!vm.loading.get_untracked());
        });
    }

    #[test]
    fn test_reset_restores_defaults_with_info() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ConfigurationVm::new();
            vm.on_config_loaded(DEFAULT_CONFIG_TOPIC, Ok(custom()));
            vm.reset();
            assert_eq!(vm.params.to_params(), GenerationParameters::default());
            assert_eq!(
                vm.alert.with_untracked(|a| a.as_ref().map(|a| a.kind)),
                Some(AlertKind::Info)
            );
        });
    }

    #[test]
    fn test_save_result_clears_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ConfigurationVm::new();
            vm.saving.set(true);
            vm.on_config_saved(Err(ApiError::Status(405)));
            assert!(!vm.saving.get_untracked());
            assert_eq!(
                vm.alert.with_untracked(|a| a.as_ref().map(|a| a.text.clone())),
                Some(SAVE_ERROR.to_string())
            );
        });
    }
}
