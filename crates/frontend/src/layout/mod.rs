pub mod footer;
pub mod top_header;

use leptos::prelude::*;
use footer::Footer;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |        TopHeader (brand + navigation)    |
/// +------------------------------------------+
/// |               routed page                |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
///
/// Must be rendered inside the `Router`: the header reads the current location.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout" style="min-height: 100vh; display: flex; flex-direction: column; background: var(--colorNeutralBackground2);">
            <TopHeader />

            <main class="app-main" style="flex: 1; width: 100%; max-width: 1200px; margin: 0 auto; padding: 32px 16px;">
                {children()}
            </main>

            <Footer />
        </div>
    }
}
