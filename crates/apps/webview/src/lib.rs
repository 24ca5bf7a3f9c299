//! Embedded browser-frame desktop app.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use shell_app_contract::{AppModule, AppMountContext};

const HOME_URL: &str = "https://www.wikipedia.org/";

/// Returns the mountable webview module for the runtime app registry.
pub fn module() -> AppModule {
    AppModule::new(mount)
}

fn mount(_context: AppMountContext) -> View {
    view! { <WebviewApp /> }.into_view()
}

#[component]
/// Browser window contents: a full-bleed embedded frame.
pub fn WebviewApp() -> impl IntoView {
    view! {
        <div class="app-webview" data-ui-kind="app-webview">
            <iframe
                class="app-webview-frame"
                src=HOME_URL
                title="Embedded browser"
            ></iframe>
        </div>
    }
}
