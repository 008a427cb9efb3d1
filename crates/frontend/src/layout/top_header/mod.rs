//! TopHeader component - brand and primary navigation.

use crate::routes::routes::{ROUTE_ARTICLES, ROUTE_CONFIG, ROUTE_GENERATE};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// (icon, label, path)
const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("pen-tool", "Generar Artículo", ROUTE_GENERATE),
    ("file-text", "Artículos", ROUTE_ARTICLES),
    ("settings", "Configuración", ROUTE_CONFIG),
];

/// Review pages belong to the articles section
fn is_nav_active(item_path: &str, current: &str) -> bool {
    current == item_path || (item_path == ROUTE_ARTICLES && current.starts_with("/review/"))
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    view! {
        <nav class="top-header" style="display: flex; justify-content: space-between; align-items: center; height: 64px; padding: 0 24px; background: var(--colorNeutralBackground1); border-bottom: 1px solid var(--colorNeutralStroke2);">
            <div class="top-header__brand" style="display: flex; align-items: center; gap: 8px; color: var(--colorBrandForeground1);">
                {icon("sparkles")}
                <span class="top-header__title" style="font-size: 20px; font-weight: bold; color: var(--colorNeutralForeground1);">
                    "SEO-Copilot"
                </span>
            </div>

            <div class="top-header__actions" style="display: flex; gap: 4px;">
                {NAV_ITEMS
                    .iter()
                    .map(|&(icon_name, label, path)| {
                        let navigate = navigate.clone();
                        let is_active = move || pathname.with(|current| is_nav_active(path, current));
                        view! {
                            <button
                                class="top-header__nav-btn"
                                style=move || format!(
                                    "display: flex; align-items: center; gap: 8px; padding: 8px 16px; border: none; border-radius: 8px; cursor: pointer; font-size: 14px; font-weight: 500; background: {}; color: {};",
                                    if is_active() { "var(--colorBrandBackground2)" } else { "transparent" },
                                    if is_active() { "var(--colorBrandForeground1)" } else { "var(--colorNeutralForeground2)" },
                                )
                                on:click=move |_| navigate(path, Default::default())
                            >
                                {icon(icon_name)}
                                <span>{label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
