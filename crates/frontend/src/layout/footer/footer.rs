use crate::shared::api_utils::ping_backend;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum BackendStatus {
    Online,
    Offline,
    Checking,
}

impl BackendStatus {
    fn display_text(&self) -> &'static str {
        match self {
            BackendStatus::Online => "Backend: en línea",
            BackendStatus::Offline => "Backend: sin conexión",
            BackendStatus::Checking => "Backend: comprobando...",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            BackendStatus::Online => "var(--colorPaletteGreenForeground1)",
            BackendStatus::Offline => "var(--colorPaletteRedForeground1)",
            BackendStatus::Checking => "var(--colorNeutralForeground3)",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(BackendStatus::Checking);

    let check_backend = move || {
        status.set(BackendStatus::Checking);

        spawn_local(async move {
            let online = ping_backend().await;
            status.set(if online {
                BackendStatus::Online
            } else {
                BackendStatus::Offline
            });
        });
    };

    Effect::new(move |_| {
        check_backend();
    });

    view! {
        <footer data-zone="footer" style="border-top: 1px solid var(--colorNeutralStroke2); background: var(--colorNeutralBackground1); padding: 24px 16px; text-align: center; font-size: 13px;">
            <p style="color: var(--colorNeutralForeground3); margin: 0 0 4px 0;">
                "SEO-Copilot Dashboard - Generación de contenido optimizado con IA"
            </p>
            <span
                style=move || format!("color: {}; cursor: pointer;", status.get().color())
                title="Comprobar de nuevo"
                on:click=move |_| check_backend()
            >
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}
