use crate::domain::a001_article::ui::details::ReviewArticle;
use crate::domain::a001_article::ui::list::ArticlesList;
use crate::domain::a002_generation_config::ui::generate::GenerateArticle;
use crate::domain::a002_generation_config::ui::settings::Configuration;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

pub const ROUTE_GENERATE: &str = "/";
pub const ROUTE_ARTICLES: &str = "/articles";
pub const ROUTE_CONFIG: &str = "/config";

/// Path of the review page for one article
pub fn review_path(id: impl std::fmt::Display) -> String {
    format!("/review/{}", id)
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="padding: 48px; text-align: center; color: var(--colorNeutralForeground3);">
            <h2 style="font-size: 20px; font-weight: bold;">"Página no encontrada"</h2>
            <a href=ROUTE_GENERATE>"Volver al inicio"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=GenerateArticle />
                    <Route path=path!("/articles") view=ArticlesList />
                    <Route path=path!("/review/:id") view=ReviewArticle />
                    <Route path=path!("/config") view=Configuration />
                </Routes>
            </Shell>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_path() {
        assert_eq!(review_path(7), "/review/7");
        assert_eq!(review_path("abc"), "/review/abc");
    }
}
