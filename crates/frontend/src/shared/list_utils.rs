/// Utilities for searchable lists: filtering, match highlighting, search box
use leptos::prelude::*;
use std::ops::Range;

/// Trait for items that can be matched against a search term
pub trait Searchable {
    /// Case-insensitive match of `filter` against the item's searchable fields
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Case-insensitive substring test
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filter `items` by `filter`; an empty filter keeps everything
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Byte ranges of `text` matching `term`, case-insensitively, non-overlapping
pub fn match_ranges(text: &str, term: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = term.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start < text.len() {
        match match_len_at(&text[start..], &needle) {
            Some(len) => {
                ranges.push(start..start + len);
                start += len;
            }
            None => {
                start += text[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    ranges
}

fn match_len_at(haystack: &str, needle: &[char]) -> Option<usize> {
    let mut matched = 0;
    for (idx, c) in haystack.char_indices() {
        for lc in c.to_lowercase() {
            if matched >= needle.len() || lc != needle[matched] {
                return None;
            }
            matched += 1;
        }
        if matched == needle.len() {
            return Some(idx + c.len_utf8());
        }
    }
    None
}

/// Highlight matches of `filter` in `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last = 0;
    for range in ranges {
        if range.start > last {
            parts.push(view! { <span>{text[last..range.start].to_string()}</span> }.into_any());
        }
        parts.push(view! {
            <span style="background-color: #ff9800; color: white; padding: 1px 2px; border-radius: 2px; font-weight: 500;">
                {text[range.clone()].to_string()}
            </span>
        }.into_any());
        last = range.end;
    }
    if last < text.len() {
        parts.push(view! { <span>{text[last..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box bound to `value`; every keystroke updates it immediately
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div style="position: relative; display: flex; align-items: center; width: 100%;">
            <span style="position: absolute; left: 10px; display: flex; color: var(--colorNeutralForeground3);">
                {crate::shared::icons::icon("search")}
            </span>
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 100%; padding: 8px 32px 8px 38px; border: 1px solid #ddd; border-radius: 8px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; color: #999; display: flex;"
                    title="Limpiar"
                    on:click=move |_| value.set(String::new())
                >
                    {crate::shared::icons::icon("close")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str);

    impl Searchable for Item {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.0, filter)
        }
    }

    #[test]
    fn test_filter_empty_term_keeps_all() {
        let items = vec![Item("a"), Item("b")];
        assert_eq!(filter_list(&items, ""), items);
    }

    #[test]
    fn test_filter_empty_list() {
        let items: Vec<Item> = Vec::new();
        assert!(filter_list(&items, "x").is_empty());
        assert!(filter_list(&items, "").is_empty());
    }

    #[test]
    fn test_filter_case_insensitive() {
        let items = vec![Item("Salud Digital"), Item("Negocios")];
        assert_eq!(filter_list(&items, "SALUD"), vec![Item("Salud Digital")]);
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("IA en la ia", "ia"), vec![0..2, 9..11]);
        assert_eq!(match_ranges("Técnico", "TÉC"), vec![0..4]);
        assert!(match_ranges("abc", "").is_empty());
        assert!(match_ranges("abc", "z").is_empty());
    }
}
