//! Browser entry crate: routing shell around the desktop runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod web_app;

pub use web_app::{DesktopRoute, LoginRoute, SiteApp};

/// Mounts the site application onto the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
