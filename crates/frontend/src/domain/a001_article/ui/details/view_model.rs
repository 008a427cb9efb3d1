//! Article review - ViewModel
//!
//! Owns the fetched article, the editable draft and the suggestion panel.
//! Every command has its own in-flight flag; commands do not wait for each
//! other.

use crate::domain::a001_article::api;
use crate::shared::alert::AlertMessage;
use crate::shared::api_utils::ApiError;
use crate::shared::event_bus::{ArticleEvent, ArticleEventBus};
use crate::shared::view_scope::{spawn_guarded, use_view_scope, ViewScope};
use contracts::domain::a001_article::aggregate::{Article, ArticleId};
use contracts::domain::a001_article::dto::{ArticleUpdate, RewriteResponse, SuggestionsResponse};
use contracts::domain::a001_article::suggestions::{
    build_rewrite_instruction, parse_suggestions, SuggestionSelection,
};
use contracts::shared::api_message::ApiMessage;
use leptos::prelude::*;

/// "Score: n/10" when the article carries a sources score
pub fn score_label(score: Option<f64>) -> Option<String> {
    score.map(|s| format!("Score: {}/10", s))
}

#[derive(Clone, Copy)]
pub struct ArticleReviewVm {
    pub id: ArticleId,
    pub article: RwSignal<Option<Article>>,
    pub draft: RwSignal<String>,
    pub suggestions: RwSignal<Vec<String>>,
    pub selection: RwSignal<SuggestionSelection>,
    pub alert: RwSignal<Option<AlertMessage>>,

    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub publishing: RwSignal<bool>,
    pub suggesting: RwSignal<bool>,
    pub applying: RwSignal<bool>,

    scope: StoredValue<ViewScope>,
    bus: StoredValue<Option<ArticleEventBus>>,
}

impl ArticleReviewVm {
    /// Must be called inside a component: the view scope and the event bus
    /// come from the current reactive owner.
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            article: RwSignal::new(None),
            draft: RwSignal::new(String::new()),
            suggestions: RwSignal::new(Vec::new()),
            selection: RwSignal::new(SuggestionSelection::new()),
            alert: RwSignal::new(None),
            loading: RwSignal::new(true),
            saving: RwSignal::new(false),
            publishing: RwSignal::new(false),
            suggesting: RwSignal::new(false),
            applying: RwSignal::new(false),
            scope: StoredValue::new(use_view_scope()),
            bus: StoredValue::new(use_context::<ArticleEventBus>()),
        }
    }

    fn publish_event(&self, event: ArticleEvent) {
        if let Some(bus) = self.bus.get_value() {
            bus.publish(event);
        }
    }

    fn is_loaded(&self) -> bool {
        self.article.with_untracked(Option::is_some)
    }

    /// Tracked; drives the save button
    pub fn can_save(&self) -> bool {
        if self.saving.get() {
            return false;
        }
        let draft = self.draft.get();
        self.article
            .with(|a| a.as_ref().is_some_and(|a| a.is_draft_dirty(&draft)))
    }

    fn can_save_untracked(&self) -> bool {
        if self.saving.get_untracked() {
            return false;
        }
        self.draft.with_untracked(|draft| {
            self.article
                .with_untracked(|a| a.as_ref().is_some_and(|a| a.is_draft_dirty(draft)))
        })
    }

    pub fn load(&self) {
        let vm = *self;
        vm.loading.set(true);
        spawn_guarded(
            &vm.scope.get_value(),
            "load article",
            api::fetch_article(vm.id),
            move |result| vm.on_loaded(result),
        );
    }

    fn on_loaded(&self, result: Result<Article, ApiError>) {
        match result {
            Ok(article) => {
                log::debug!("article {} loaded, image: {:?}", self.id, article.image_url);
                self.draft.set(article.body.clone());
                self.article.set(Some(article));
            }
            Err(_) => self
                .alert
                .set(Some(AlertMessage::error("Error al cargar el artículo"))),
        }
        self.loading.set(false);
    }

    pub fn save(&self) {
        if !self.can_save_untracked() {
            return;
        }
        let vm = *self;
        let body = vm.draft.get_untracked();
        vm.saving.set(true);
        vm.alert.set(None);

        let update = ArticleUpdate::body_only(body.clone());
        spawn_guarded(
            &vm.scope.get_value(),
            "save article",
            async move { api::update_article(vm.id, &update).await },
            move |result| vm.on_saved(body, result),
        );
    }

    fn on_saved(&self, body: String, result: Result<ApiMessage, ApiError>) {
        match result {
            Ok(_) => {
                self.article.update(|a| {
                    if let Some(a) = a {
                        a.body = body;
                    }
                });
                self.alert
                    .set(Some(AlertMessage::success("Cambios guardados exitosamente")));
                self.publish_event(ArticleEvent::Updated(self.id));
            }
            Err(_) => self
                .alert
                .set(Some(AlertMessage::error("Error al guardar los cambios"))),
        }
        self.saving.set(false);
    }

    pub fn publish(&self) {
        if self.publishing.get_untracked() || !self.is_loaded() {
            return;
        }
        let vm = *self;
        vm.publishing.set(true);
        vm.alert.set(None);

        spawn_guarded(
            &vm.scope.get_value(),
            "publish article",
            api::publish_article(vm.id),
            move |result| vm.on_published(result),
        );
    }

    fn on_published(&self, result: Result<ApiMessage, ApiError>) {
        match result {
            Ok(ack) => {
                self.alert.set(Some(AlertMessage::success(format!(
                    "Artículo publicado exitosamente. Archivo: {}",
                    ack.filename_or_default()
                ))));
                self.publish_event(ArticleEvent::Published(self.id));
            }
            Err(_) => self
                .alert
                .set(Some(AlertMessage::error("Error al publicar el artículo"))),
        }
        self.publishing.set(false);
    }

    /// Replace the suggestion panel with a fresh batch from the copilot
    pub fn generate_suggestions(&self) {
        if self.suggesting.get_untracked() || !self.is_loaded() {
            return;
        }
        let vm = *self;
        vm.suggesting.set(true);
        vm.alert.set(None);
        vm.suggestions.set(Vec::new());
        vm.selection.update(SuggestionSelection::clear);

        spawn_guarded(
            &vm.scope.get_value(),
            "generate suggestions",
            api::generate_suggestions(vm.id),
            move |result| vm.on_suggestions(result),
        );
    }

    fn on_suggestions(&self, result: Result<SuggestionsResponse, ApiError>) {
        match result {
            Ok(response) => {
                let parsed = parse_suggestions(&response.suggestions);
                if parsed.is_empty() {
                    self.alert.set(Some(AlertMessage::info(
                        "No se generaron sugerencias en este momento",
                    )));
                }
                self.suggestions.set(parsed);
            }
            Err(_) => self
                .alert
                .set(Some(AlertMessage::error("Error al generar sugerencias"))),
        }
        self.suggesting.set(false);
    }

    pub fn toggle_suggestion(&self, index: usize) {
        self.selection.update(|s| s.toggle(index));
    }

    /// Text to rewrite and the instruction for the current selection.
    ///
    /// Built from the draft as it is now, so a second apply works on the
    /// already rewritten text.
    fn rewrite_request(&self) -> Option<(String, String)> {
        if !self.is_loaded() {
            return None;
        }
        let instruction = self.suggestions.with_untracked(|list| {
            self.selection
                .with_untracked(|sel| build_rewrite_instruction(list, sel))
        })?;
        Some((self.draft.get_untracked(), instruction))
    }

    /// Rewrite the current draft with the selected suggestions
    pub fn apply_suggestions(&self) {
        if self.applying.get_untracked() {
            return;
        }
        let Some((text, instruction)) = self.rewrite_request() else {
            return;
        };

        let vm = *self;
        vm.applying.set(true);
        vm.alert.set(None);

        spawn_guarded(
            &vm.scope.get_value(),
            "apply suggestions",
            api::rewrite_article(vm.id, text, instruction),
            move |result| vm.on_rewritten(result),
        );
    }

    /// A failed rewrite keeps both the draft and the selection
    fn on_rewritten(&self, result: Result<RewriteResponse, ApiError>) {
        match result {
            Ok(response) => {
                self.draft.set(response.rewritten_text);
                self.selection.update(SuggestionSelection::clear);
                self.alert
                    .set(Some(AlertMessage::success("Sugerencias aplicadas exitosamente")));
            }
            Err(_) => self
                .alert
                .set(Some(AlertMessage::error("Error al aplicar las sugerencias"))),
        }
        self.applying.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::alert::AlertKind;

    fn article(body: &str) -> Article {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "IA en medicina",
            "tema": "Salud",
            "body": body,
            "created_at": "2024-03-15T14:02:00",
            "status": "generado"
        }))
        .unwrap()
    }

    fn loaded_vm(body: &str) -> ArticleReviewVm {
        let vm = ArticleReviewVm::new(ArticleId(7));
        vm.on_loaded(Ok(article(body)));
        vm
    }

    fn alert_kind(vm: &ArticleReviewVm) -> Option<AlertKind> {
        vm.alert.with_untracked(|a| a.as_ref().map(|a| a.kind))
    }

    #[test]
    fn test_score_label() {
        assert_eq!(score_label(Some(7.0)).as_deref(), Some("Score: 7/10"));
        assert_eq!(score_label(Some(8.5)).as_deref(), Some("Score: 8.5/10"));
        assert_eq!(score_label(None), None);
    }

    #[test]
    fn test_commands_need_a_loaded_article() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ArticleReviewVm::new(ArticleId(7));
            vm.on_loaded(Err(ApiError::Status(404)));
            assert!(!vm.loading.get_untracked());
            assert_eq!(alert_kind(&vm), Some(AlertKind::Error));

            vm.publish();
            vm.generate_suggestions();
            assert!(!vm.publishing.get_untracked());
            assert!(!vm.suggesting.get_untracked());

            vm.suggestions.set(vec!["a".to_string()]);
            vm.toggle_suggestion(0);
            assert_eq!(vm.rewrite_request(), None);
            vm.apply_suggestions();
            assert!(!vm.applying.get_untracked());
        });
    }

    #[test]
    fn test_save_needs_dirty_draft() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = loaded_vm("hola");
            assert!(!vm.can_save_untracked());
            vm.draft.set("hola mundo".to_string());
            assert!(vm.can_save_untracked());
            vm.saving.set(true);
            assert!(!vm.can_save_untracked());
        });
    }

    #[test]
    fn test_saved_body_becomes_the_baseline() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = loaded_vm("hola");
            vm.draft.set("hola mundo".to_string());
            vm.saving.set(true);
            vm.on_saved("hola mundo".to_string(), Ok(ApiMessage::default()));

            assert!(!vm.saving.get_untracked());
            assert!(!vm.can_save_untracked());
            assert_eq!(alert_kind(&vm), Some(AlertKind::Success));
        });
    }

    #[test]
    fn test_apply_twice_rewrites_the_rewritten_draft() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = loaded_vm("v1");
            vm.on_suggestions(Ok(SuggestionsResponse {
                suggestions: "- Añade datos\n- Acorta la intro".to_string(),
            }));
            assert_eq!(vm.suggestions.get_untracked().len(), 2);

            vm.toggle_suggestion(0);
            let (text, first) = vm.rewrite_request().unwrap();
            assert_eq!(text, "v1");
            assert_eq!(first, "Aplica estas sugerencias:\n- Añade datos");

            vm.on_rewritten(Ok(RewriteResponse {
                rewritten_text: "v2".to_string(),
            }));
            assert_eq!(vm.draft.get_untracked(), "v2");
            assert!(vm.selection.with_untracked(|s| s.is_empty()));

            vm.toggle_suggestion(0);
            let (text, second) = vm.rewrite_request().unwrap();
            assert_eq!(text, "v2");
            assert_eq!(second, first);

            vm.on_rewritten(Ok(RewriteResponse {
                rewritten_text: "v3".to_string(),
            }));
            assert_eq!(vm.draft.get_untracked(), "v3");
        });
    }

    #[test]
    fn test_failed_apply_keeps_draft_and_selection() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = loaded_vm("v1");
            vm.suggestions.set(vec!["a".to_string(), "b".to_string()]);
            vm.toggle_suggestion(1);
            vm.applying.set(true);

            vm.on_rewritten(Err(ApiError::Transport("offline".to_string())));

            assert_eq!(vm.draft.get_untracked(), "v1");
            assert!(vm.selection.with_untracked(|s| s.contains(1)));
            assert!(!vm.applying.get_untracked());
            assert_eq!(alert_kind(&vm), Some(AlertKind::Error));
        });
    }

    #[test]
    fn test_empty_suggestions_show_info() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = loaded_vm("v1");
            vm.on_suggestions(Ok(SuggestionsResponse {
                suggestions: "\n  \n".to_string(),
            }));
            assert!(vm.suggestions.get_untracked().is_empty());
            assert_eq!(alert_kind(&vm), Some(AlertKind::Info));
        });
    }
}
