//! Root wrapper for every routed page.
//!
//! Sets `id="{entity}--{category}"` and `data-page-category` on the root
//! element, plus the BEM modifier class for the category.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a001_article--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Max width of the content column (CSS length).
    #[prop(optional)]
    max_width: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_USECASE => "page page--usecase",
        _ => "page",
    };
    let style = format!(
        "max-width: {}; margin: 0 auto;",
        max_width.unwrap_or("960px")
    );

    view! {
        <div id=page_id class=class data-page-category=category style=style>
            {children()}
        </div>
    }
}
