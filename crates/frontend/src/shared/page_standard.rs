//! Page category constants.
//!
//! Every routed page declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a001_article--list"`) and a `data-page-category` from the list
//! below, so a DOM id copied from the inspector leads straight to
//! `domain/a001_article/`.

/// List of records with search.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Form that triggers a backend action (generation).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Settings page.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}
