//! Typed host-boundary contracts for the browser desktop shell.
//!
//! This crate is the API-first boundary between the shell runtime/apps and the
//! environment that hosts them. It owns the service traits (viewport probe,
//! clipboard, text-file transfer) plus deterministic in-memory implementations
//! used by tests, while concrete browser adapters live in `host_services_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clipboard;
pub mod error;
pub mod external_url;
pub mod files;
pub mod viewport;

use std::rc::Rc;

pub use clipboard::{ClipboardService, MemoryClipboard, NoopClipboard};
pub use error::HostError;
pub use external_url::{ExternalUrlService, MemoryExternalUrls, NoopExternalUrls};
pub use files::{MemoryTextFiles, NoopTextFiles, TextDocument, TextFileService};
pub use viewport::{FixedViewport, ViewportProbe, ViewportSize};

/// Object-safe boxed future used by host service traits.
pub type HostFuture<'a, T> = futures::future::LocalBoxFuture<'a, T>;

#[derive(Clone)]
/// Host service bundle injected into the shell provider by the entry layer.
pub struct HostServices {
    /// Viewport dimension probe.
    pub viewport: Rc<dyn ViewportProbe>,
    /// Clipboard text transfer service.
    pub clipboard: Rc<dyn ClipboardService>,
    /// Text-file open/save service.
    pub text_files: Rc<dyn TextFileService>,
    /// External URL navigation service.
    pub external_urls: Rc<dyn ExternalUrlService>,
}

impl HostServices {
    /// Builds a deterministic in-memory bundle for tests and non-browser targets.
    pub fn in_memory() -> Self {
        Self {
            viewport: Rc::new(FixedViewport::default()),
            clipboard: Rc::new(MemoryClipboard::default()),
            text_files: Rc::new(MemoryTextFiles::default()),
            external_urls: Rc::new(MemoryExternalUrls::default()),
        }
    }
}
