use crate::domain::a001_article::api::fetch_articles;
use crate::routes::routes::review_path;
use crate::shared::alert::{AlertBanner, AlertMessage};
use crate::shared::event_bus::{ArticleEvent, ArticleEventBus};
use crate::shared::icons::icon;
use crate::shared::list_utils::{contains_ci, filter_list, highlight_matches, SearchInput, Searchable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::view_scope::{spawn_guarded, use_view_scope};
use contracts::domain::a001_article::aggregate::{ArticleStatus, ArticleSummary};
use contracts::shared::date_format::format_short;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

const LOAD_ERROR: &str =
    "Error al cargar los artículos. Verifica que el backend esté ejecutándose.";
const EMPTY_INFO: &str = "No hay artículos generados aún. ¡Crea tu primer artículo!";

impl Searchable for ArticleSummary {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.title, filter) || contains_ci(&self.topic, filter)
    }
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 artículo en total".to_string()
    } else {
        format!("{} artículos en total", count)
    }
}

fn status_color(status: &ArticleStatus) -> BadgeColor {
    match status {
        ArticleStatus::Published => BadgeColor::Success,
        ArticleStatus::Generated => BadgeColor::Brand,
        ArticleStatus::Pending => BadgeColor::Warning,
        ArticleStatus::Other(_) => BadgeColor::Informative,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ArticlesList() -> impl IntoView {
    let articles = RwSignal::new(Vec::<ArticleSummary>::new());
    let loading = RwSignal::new(true);
    let alert = RwSignal::new(None::<AlertMessage>);
    let search = RwSignal::new(String::new());
    let scope = StoredValue::new(use_view_scope());
    let navigate = use_navigate();

    let load = move || {
        loading.set(true);
        alert.set(None);
        spawn_guarded(
            &scope.get_value(),
            "load articles",
            fetch_articles(),
            move |result| {
                match result {
                    Ok(list) => {
                        if list.is_empty() {
                            alert.set(Some(AlertMessage::info(EMPTY_INFO)));
                        }
                        articles.set(list);
                    }
                    Err(_) => alert.set(Some(AlertMessage::error(LOAD_ERROR))),
                }
                loading.set(false);
            },
        );
    };

    load();

    // Re-fetch whenever another view creates an article
    if let Some(bus) = use_context::<ArticleEventBus>() {
        bus.listen(&scope.get_value(), move |event| {
            if let ArticleEvent::Created(id) = event {
                log::debug!("article created ({:?}), refreshing list", id);
                load();
            }
        });
    }

    let filtered = Memo::new(move |_| filter_list(&articles.get(), &search.get()));

    view! {
        <PageFrame page_id="a001_article--list" category=PAGE_CAT_LIST max_width="1152px">
            <Card>
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <div>
                        <h2 style="font-size: 24px; font-weight: bold; display: flex; align-items: center; gap: 12px; margin: 0;">
                            {icon("file-text")}
                            "Artículos Generados"
                        </h2>
                        <p style="color: var(--colorNeutralForeground3); margin: 4px 0 0 0;">
                            {move || count_label(articles.get().len())}
                        </p>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Actualizar"
                    </Button>
                </Flex>

                <div style="margin: 16px 0;">
                    <SearchInput value=search placeholder="Buscar por título o tema..." />
                </div>

                {move || {
                    if loading.get() {
                        return view! {
                            <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: 64px;">
                                <Spinner />
                                <span>"Cargando artículos..."</span>
                            </Flex>
                        }
                        .into_any();
                    }

                    if alert.with(Option::is_some) {
                        return view! { <AlertBanner alert=alert /> }.into_any();
                    }

                    let rows = filtered.get();
                    if rows.is_empty() {
                        let searching = !search.get().is_empty();
                        return view! {
                            <div style="text-align: center; padding: 48px; color: var(--colorNeutralForeground3);">
                                <h3 style="font-size: 18px; margin-bottom: 8px; color: var(--colorNeutralForeground1);">
                                    {if searching { "No se encontraron artículos" } else { "No hay artículos" }}
                                </h3>
                                <p>
                                    {if searching {
                                        "Intenta con diferentes términos de búsqueda"
                                    } else {
                                        "Comienza generando tu primer artículo"
                                    }}
                                </p>
                            </div>
                        }
                        .into_any();
                    }

                    let term = search.get();
                    rows.into_iter()
                        .map(|article| {
                            let navigate = navigate.clone();
                            let target = review_path(article.id);
                            let status = ArticleStatus::from_str(&article.status);
                            view! {
                                <div
                                    class="article-row"
                                    style="border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 20px; margin-bottom: 12px; cursor: pointer; display: flex; justify-content: space-between; align-items: flex-start;"
                                    on:click=move |_| navigate(&target, Default::default())
                                >
                                    <div style="flex: 1; min-width: 0;">
                                        <h3 style="font-size: 18px; font-weight: 600; margin: 0 0 4px 0;">
                                            {highlight_matches(&article.title, &term)}
                                        </h3>
                                        <p style="font-size: 14px; color: var(--colorNeutralForeground3); margin: 0 0 4px 0;">
                                            <span style="font-weight: 500;">"Tema: "</span>
                                            {highlight_matches(&article.topic, &term)}
                                        </p>
                                        <p style="font-size: 14px; color: var(--colorNeutralForeground4); margin: 0; display: flex; align-items: center; gap: 4px;">
                                            {icon("calendar")}
                                            {format_short(&article.created_at)}
                                        </p>
                                    </div>
                                    <Badge appearance=BadgeAppearance::Tint color=status_color(&status)>
                                        {status.label().to_string()}
                                    </Badge>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </Card>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_article::aggregate::ArticleId;

    fn summary(id: i64, title: &str, topic: &str) -> ArticleSummary {
        ArticleSummary {
            id: ArticleId(id),
            title: title.to_string(),
            topic: topic.to_string(),
            created_at: "2024-03-15T14:02:00".to_string(),
            status: "generado".to_string(),
        }
    }

    #[test]
    fn test_matches_title_or_topic() {
        let items = vec![
            summary(1, "Avances de la IA", "Tecnologia"),
            summary(2, "Dieta mediterránea", "Salud"),
            summary(3, "Finanzas", "Negocios"),
        ];

        let by_title = filter_list(&items, "dieta");
        assert_eq!(by_title.iter().map(|a| a.id.0).collect::<Vec<_>>(), vec![2]);

        let both = filter_list(&items, "IA");
        assert_eq!(both.iter().map(|a| a.id.0).collect::<Vec<_>>(), vec![1]);

        let by_topic = filter_list(&items, "SALUD");
        assert_eq!(by_topic.len(), 1);
        assert_eq!(by_topic[0].id, ArticleId(2));

        assert!(filter_list(&items, "cripto").is_empty());
        assert_eq!(filter_list(&items, "").len(), 3);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 artículos en total");
        assert_eq!(count_label(1), "1 artículo en total");
        assert_eq!(count_label(12), "12 artículos en total");
    }

    #[test]
    fn test_status_color() {
        assert!(matches!(
            status_color(&ArticleStatus::from_str("publicado")),
            BadgeColor::Success
        ));
        assert!(matches!(
            status_color(&ArticleStatus::from_str("borrador")),
            BadgeColor::Informative
        ));
    }
}
