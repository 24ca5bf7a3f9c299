//! External URL host-service contracts.

use std::cell::RefCell;

use crate::{error::HostError, HostFuture};

/// Host service for opening URLs outside the desktop shell.
pub trait ExternalUrlService {
    /// Opens a URL using the host's external navigation mechanism.
    fn open_url<'a>(&'a self, url: &'a str) -> HostFuture<'a, Result<(), HostError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrls;

impl ExternalUrlService for NoopExternalUrls {
    fn open_url<'a>(&'a self, _url: &'a str) -> HostFuture<'a, Result<(), HostError>> {
        Box::pin(async { Err(HostError::Unavailable("external urls")) })
    }
}

#[derive(Debug, Default)]
/// Recording external URL service used by tests.
pub struct MemoryExternalUrls {
    opened: RefCell<Vec<String>>,
}

impl MemoryExternalUrls {
    /// Returns the URLs opened so far.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for MemoryExternalUrls {
    fn open_url<'a>(&'a self, url: &'a str) -> HostFuture<'a, Result<(), HostError>> {
        Box::pin(async move {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_service_records_opened_urls() {
        let urls = MemoryExternalUrls::default();
        block_on(urls.open_url("https://example.org/")).expect("open");
        assert_eq!(urls.opened(), vec!["https://example.org/".to_string()]);
    }
}
