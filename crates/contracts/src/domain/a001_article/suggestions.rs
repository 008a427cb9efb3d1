//! Copilot suggestions: parsing the backend's plain-text blob and turning
//! a selection back into a rewrite instruction.

use std::collections::BTreeSet;

/// Bullet markers the copilot may prefix a suggestion with
pub const BULLET_MARKERS: [char; 3] = ['-', '•', '*'];

/// Header line of the instruction sent to the rewrite endpoint
pub const REWRITE_INSTRUCTION_HEADER: &str = "Aplica estas sugerencias:";

/// Split a suggestions blob into individual suggestions.
///
/// Blank lines are dropped. A bullet marker in the first column (plus the
/// whitespace after it) is removed once; indented markers are kept as
/// text. Lines that end up empty are discarded. Order is preserved.
pub fn parse_suggestions(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(strip_bullet)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix(BULLET_MARKERS).unwrap_or(line).trim()
}

/// Set of selected suggestion indices.
///
/// Iteration is always in ascending index order, independent of the order
/// in which items were toggled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSelection {
    selected: BTreeSet<usize>,
}

impl SuggestionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `index` if unselected, unselect it otherwise
    pub fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }
}

/// Build the rewrite instruction for the selected suggestions.
///
/// Indices outside `suggestions` are ignored. Returns `None` when nothing
/// valid is selected.
pub fn build_rewrite_instruction(
    suggestions: &[String],
    selection: &SuggestionSelection,
) -> Option<String> {
    let lines: Vec<String> = selection
        .iter()
        .filter_map(|i| suggestions.get(i))
        .map(|s| format!("- {}", s))
        .collect();

    if lines.is_empty() {
        return None;
    }

    Some(format!("{}\n{}", REWRITE_INSTRUCTION_HEADER, lines.join("\n")))
}

/// Label of the "apply" button for `count` selected suggestions
pub fn apply_button_label(count: usize) -> String {
    if count == 1 {
        "Aplicar 1 Seleccionada".to_string()
    } else {
        format!("Aplicar {} Seleccionadas", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_mixed_markers_and_blank_lines() {
        assert_eq!(parse_suggestions("- a\n• b\n\nc"), owned(&["a", "b", "c"]));
    }

    #[test]
    fn test_parse_empty_and_whitespace() {
        assert!(parse_suggestions("").is_empty());
        assert!(parse_suggestions("   \n\t\n  ").is_empty());
    }

    #[test]
    fn test_parse_drops_bare_markers() {
        assert_eq!(parse_suggestions("-\n*   \nreal"), owned(&["real"]));
    }

    #[test]
    fn test_parse_strips_only_first_marker() {
        assert_eq!(parse_suggestions("- - doble"), owned(&["- doble"]));
        assert_eq!(parse_suggestions("** negrita"), owned(&["* negrita"]));
    }

    #[test]
    fn test_parse_keeps_inner_markers_and_crlf() {
        assert_eq!(
            parse_suggestions("* usar a-b\r\n  • indentada\r\n"),
            owned(&["usar a-b", "• indentada"])
        );
    }

    #[test]
    fn test_parse_strips_markers_only_in_first_column() {
        assert_eq!(parse_suggestions("  - a\n\t* b"), owned(&["- a", "* b"]));
        assert_eq!(parse_suggestions("-   c  "), owned(&["c"]));
    }

    #[test]
    fn test_selection_toggle() {
        let mut sel = SuggestionSelection::new();
        sel.toggle(2);
        sel.toggle(0);
        assert_eq!(sel.len(), 2);
        assert!(sel.contains(0));
        sel.toggle(2);
        assert!(!sel.contains(2));
        assert_eq!(sel.len(), 1);
        sel.clear();
        assert!(sel.is_empty());
    }

    #[test]
    fn test_instruction_uses_ascending_index_order() {
        let suggestions = owned(&["uno", "dos", "tres"]);
        let mut sel = SuggestionSelection::new();
        sel.toggle(2);
        sel.toggle(0);
        assert_eq!(
            build_rewrite_instruction(&suggestions, &sel).as_deref(),
            Some("Aplica estas sugerencias:\n- uno\n- tres")
        );
    }

    #[test]
    fn test_instruction_skips_out_of_range() {
        let suggestions = owned(&["uno"]);
        let mut sel = SuggestionSelection::new();
        sel.toggle(5);
        assert_eq!(build_rewrite_instruction(&suggestions, &sel), None);
        sel.toggle(0);
        assert_eq!(
            build_rewrite_instruction(&suggestions, &sel).as_deref(),
            Some("Aplica estas sugerencias:\n- uno")
        );
    }

    #[test]
    fn test_instruction_empty_selection() {
        let suggestions = owned(&["uno"]);
        assert_eq!(
            build_rewrite_instruction(&suggestions, &SuggestionSelection::new()),
            None
        );
    }

    #[test]
    fn test_apply_button_label() {
        assert_eq!(apply_button_label(1), "Aplicar 1 Seleccionada");
        assert_eq!(apply_button_label(3), "Aplicar 3 Seleccionadas");
    }
}
