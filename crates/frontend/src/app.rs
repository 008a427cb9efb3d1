use crate::routes::routes::AppRoutes;
use crate::shared::event_bus::ArticleEventBus;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // One bus for the whole app; views publish and listen to article lifecycle events.
    provide_context(ArticleEventBus::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
