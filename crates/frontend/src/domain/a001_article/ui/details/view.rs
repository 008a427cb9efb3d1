use super::view_model::{score_label, ArticleReviewVm};
use crate::routes::routes::ROUTE_ARTICLES;
use crate::shared::alert::AlertBanner;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_article::aggregate::ArticleId;
use contracts::domain::a001_article::suggestions::apply_button_label;
use contracts::domain::common::AggregateId;
use contracts::shared::date_format::format_long;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

/// Route entry for `/review/:id`
#[component]
#[allow(non_snake_case)]
pub fn ReviewArticle() -> impl IntoView {
    let params = use_params_map();
    let article_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|raw| ArticleId::from_string(&raw).ok())
    });

    move || match article_id.get() {
        Some(id) => view! { <ArticleEditor id=id /> }.into_any(),
        None => view! { <ArticleNotSpecified /> }.into_any(),
    }
}

#[component]
#[allow(non_snake_case)]
fn ArticleNotSpecified() -> impl IntoView {
    let navigate = use_navigate();
    view! {
        <div style="text-align: center; padding: 48px;">
            <p style="color: var(--colorNeutralForeground3);">"Artículo no especificado"</p>
            <button
                class="btn btn-primary"
                style="margin-top: 16px;"
                on:click=move |_| navigate(ROUTE_ARTICLES, Default::default())
            >
                "Volver a la lista"
            </button>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ArticleEditor(id: ArticleId) -> impl IntoView {
    let vm = ArticleReviewVm::new(id);
    vm.load();

    let navigate = use_navigate();
    let go_back = move |_: leptos::ev::MouseEvent| navigate(ROUTE_ARTICLES, Default::default());

    view! {
        <PageFrame page_id="a001_article--detail" category=PAGE_CAT_DETAIL max_width="1152px">
            {move || {
                if vm.loading.get() {
                    return view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 64px;">
                            <Spinner />
                            <span>"Cargando artículo..."</span>
                        </Flex>
                    }
                    .into_any();
                }

                let go_back = go_back.clone();
                view! {
                <Card>
                    <div style="display: flex; align-items: center; gap: 16px;">
                        <button
                            style="background: none; border: none; cursor: pointer; padding: 8px; border-radius: 8px; display: flex;"
                            title="Volver"
                            on:click=go_back
                        >
                            {icon("arrow-left")}
                        </button>
                        <div>
                            <h1 style="font-size: 24px; font-weight: bold; display: flex; align-items: center; gap: 12px; margin: 0;">
                                {icon("edit")}
                                {move || vm.article.with(|a| a.as_ref().map(|a| a.title.clone()))}
                            </h1>
                            <div style="display: flex; gap: 16px; margin-top: 8px; font-size: 14px; color: var(--colorNeutralForeground3);">
                                <span style="display: flex; align-items: center; gap: 4px;">
                                    {icon("target")}
                                    <b>"Tema:"</b>
                                    {move || vm.article.with(|a| a.as_ref().map(|a| a.topic.clone()))}
                                </span>
                                <span style="display: flex; align-items: center; gap: 4px;">
                                    {icon("calendar")}
                                    {move || vm.article.with(|a| a.as_ref().map(|a| format_long(&a.created_at)))}
                                </span>
                                {move || {
                                    vm.article
                                        .with(|a| score_label(a.as_ref().and_then(|a| a.sources_score)))
                                        .map(|label| view! { <span>{label}</span> })
                                }}
                            </div>
                        </div>
                    </div>
                </Card>

                <div style="margin-top: 16px;">
                    <AlertBanner alert=vm.alert />
                </div>

                <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 24px; margin-top: 16px;">
                    <Card>
                        <h2 style="font-size: 18px; font-weight: 600; margin: 0 0 16px 0;">"Editor de Contenido"</h2>
                        {move || {
                            vm.article.with(|a| {
                                a.as_ref().and_then(|article| {
                                    let url = article.image_url.clone()?;
                                    let alt = article.image_alt().to_string();
                                    let caption = article.image_caption.clone().filter(|c| !c.trim().is_empty());
                                    Some(view! {
                                        <div style="margin-bottom: 24px;">
                                            <img src=url alt=alt style="width: 100%; max-height: 384px; object-fit: contain; border-radius: 8px;" />
                                            {caption.map(|c| view! {
                                                <p style="font-size: 14px; text-align: center; font-style: italic; color: var(--colorNeutralForeground3); margin-top: 8px;">
                                                    {c}
                                                </p>
                                            })}
                                        </div>
                                    })
                                })
                            })
                        }}
                        <Textarea
                            value=vm.draft
                            attr:style="width: 100%; min-height: 384px; font-family: monospace; font-size: 14px;"
                            placeholder="El contenido del artículo aparecerá aquí..."
                        />
                        <Flex gap=FlexGap::Medium style="margin-top: 16px; flex-wrap: wrap;">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| vm.save()
                                disabled=Signal::derive(move || !vm.can_save())
                                loading=Signal::derive(move || vm.saving.get())
                            >
                                {icon("save")}
                                {move || if vm.saving.get() { " Guardando..." } else { " Guardar Cambios" }}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| vm.publish()
                                disabled=Signal::derive(move || vm.publishing.get() || vm.article.with(Option::is_none))
                                loading=Signal::derive(move || vm.publishing.get())
                            >
                                {icon("send")}
                                {move || if vm.publishing.get() { " Publicando..." } else { " Publicar Artículo" }}
                            </Button>
                        </Flex>
                    </Card>

                    <SuggestionsPanel vm=vm />
                </div>
                }
                .into_any()
            }}
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn SuggestionsPanel(vm: ArticleReviewVm) -> impl IntoView {
    view! {
        <Card>
            <h2 style="font-size: 18px; font-weight: 600; margin: 0 0 16px 0; display: flex; align-items: center; gap: 8px;">
                {icon("sparkles")}
                "Sugerencias del Copiloto"
            </h2>
            <Flex vertical=true gap=FlexGap::Medium>
                <Button
                    appearance=ButtonAppearance::Primary
                    attr:style="width: 100%;"
                    on_click=move |_| vm.generate_suggestions()
                    disabled=Signal::derive(move || vm.suggesting.get() || vm.article.with(Option::is_none))
                    loading=Signal::derive(move || vm.suggesting.get())
                >
                    {icon("wand")}
                    {move || if vm.suggesting.get() { " Generando..." } else { " Generar Sugerencias" }}
                </Button>

                <Show when=move || !vm.selection.with(|s| s.is_empty())>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        attr:style="width: 100%;"
                        on_click=move |_| vm.apply_suggestions()
                        disabled=Signal::derive(move || vm.applying.get())
                        loading=Signal::derive(move || vm.applying.get())
                    >
                        {icon("check-square")}
                        {move || {
                            if vm.applying.get() {
                                " Aplicando...".to_string()
                            } else {
                                format!(" {}", apply_button_label(vm.selection.with(|s| s.len())))
                            }
                        }}
                    </Button>
                </Show>

                {move || {
                    let items = vm.suggestions.get();
                    if items.is_empty() {
                        return view! {
                            <div style="text-align: center; padding: 32px 0; color: var(--colorNeutralForeground3);">
                                <p style="font-size: 14px;">
                                    "Genera sugerencias clicando el botón de arriba para mejorar tu artículo con IA"
                                </p>
                            </div>
                        }
                        .into_any();
                    }

                    view! {
                        <div style="max-height: 384px; overflow-y: auto;">
                            <h3 style="font-size: 14px; font-weight: 500; margin: 0 0 12px 0;">
                                "Selecciona las sugerencias que deseas aplicar:"
                            </h3>
                            {items
                                .into_iter()
                                .enumerate()
                                .map(|(index, text)| {
                                    let selected = move || vm.selection.with(|s| s.contains(index));
                                    view! {
                                        <div
                                            style=move || format!(
                                                "padding: 12px; margin-bottom: 8px; border-radius: 8px; cursor: pointer; display: flex; gap: 8px; align-items: flex-start; border: 1px solid {}; background: {};",
                                                if selected() { "var(--colorBrandStroke1)" } else { "var(--colorNeutralStroke2)" },
                                                if selected() { "var(--colorBrandBackground2)" } else { "transparent" },
                                            )
                                            on:click=move |_| vm.toggle_suggestion(index)
                                        >
                                            {move || icon(if selected() { "check-square" } else { "square" })}
                                            <p style="font-size: 14px; margin: 0; line-height: 1.5;">{text}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </Flex>
        </Card>
    }
}
