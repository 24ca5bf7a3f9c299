//! Embedded code-editor-frame desktop app.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use shell_app_contract::{AppModule, AppMountContext};

const EDITOR_URL: &str = "https://vscode.dev/";

/// Returns the mountable codepad module for the runtime app registry.
pub fn module() -> AppModule {
    AppModule::new(mount)
}

fn mount(_context: AppMountContext) -> View {
    view! { <CodepadApp /> }.into_view()
}

#[component]
/// Code window contents: a full-bleed embedded editor frame.
pub fn CodepadApp() -> impl IntoView {
    view! {
        <div class="app-codepad" data-ui-kind="app-codepad">
            <iframe
                class="app-codepad-frame"
                src=EDITOR_URL
                title="Embedded code editor"
            ></iframe>
        </div>
    }
}
