//! Dismissible alert banner shown at the top of each view.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    /// (background, border, text) CSS colours
    fn palette(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            AlertKind::Success => (
                "var(--color-success-50)",
                "var(--color-success-100)",
                "var(--color-success)",
            ),
            AlertKind::Error => (
                "var(--color-error-50)",
                "var(--color-error-100)",
                "var(--color-error)",
            ),
            AlertKind::Warning => (
                "var(--color-warning-50)",
                "var(--color-warning-100)",
                "var(--color-warning)",
            ),
            AlertKind::Info => (
                "var(--color-info-50)",
                "var(--color-info-100)",
                "var(--color-info)",
            ),
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            AlertKind::Success => "check-circle",
            AlertKind::Error => "x-circle",
            AlertKind::Warning => "alert-triangle",
            AlertKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    pub kind: AlertKind,
    pub text: String,
}

impl AlertMessage {
    pub fn new(kind: AlertKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(AlertKind::Info, text)
    }
}

/// Renders `alert` while it is `Some`; the close button clears it.
#[component]
pub fn AlertBanner(alert: RwSignal<Option<AlertMessage>>) -> impl IntoView {
    move || {
        alert.get().map(|msg| {
            let (bg, border, color) = msg.kind.palette();
            view! {
                <div
                    role="alert"
                    style=format!(
                        "padding: 12px; margin-bottom: 16px; background: {}; border: 1px solid {}; border-radius: 8px; display: flex; align-items: flex-start; gap: 8px; color: {};",
                        bg, border, color,
                    )
                >
                    {icon(msg.kind.icon_name())}
                    <span style="flex: 1; font-size: 14px;">{msg.text}</span>
                    <button
                        style="background: none; border: none; cursor: pointer; color: inherit;"
                        title="Cerrar"
                        on:click=move |_| alert.set(None)
                    >
                        {icon("close")}
                    </button>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(AlertMessage::error("x").kind, AlertKind::Error);
        assert_eq!(AlertMessage::info("y").text, "y");
        assert_eq!(AlertMessage::success("z").kind.icon_name(), "check-circle");
    }
}
