//! Browser (`web-sys`) adapters for the [`host_services`] contracts.
//!
//! Each adapter degrades to a deterministic failure on non-WASM targets so the
//! crate stays testable from the host toolchain.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod clipboard;
mod external_url;
mod files;
mod viewport;

use std::rc::Rc;

use host_services::HostServices;

pub use clipboard::WebClipboard;
pub use external_url::WebExternalUrls;
pub use files::WebTextFiles;
pub use viewport::DomViewport;

/// Assembles the browser host service bundle for the shell entry layer.
pub fn browser_host_services() -> HostServices {
    HostServices {
        viewport: Rc::new(DomViewport),
        clipboard: Rc::new(WebClipboard),
        text_files: Rc::new(WebTextFiles),
        external_urls: Rc::new(WebExternalUrls),
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn interop_error(value: wasm_bindgen::JsValue) -> host_services::HostError {
    host_services::HostError::Interop(format!("{value:?}"))
}
