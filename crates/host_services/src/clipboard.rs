//! Clipboard host-service contracts.

use std::cell::RefCell;

use crate::{error::HostError, HostFuture};

/// Host service for plain-text clipboard transfer.
pub trait ClipboardService {
    /// Writes `text` to the host clipboard.
    fn write_text<'a>(&'a self, text: &'a str) -> HostFuture<'a, Result<(), HostError>>;

    /// Reads the current host clipboard text.
    fn read_text(&self) -> HostFuture<'_, Result<String, HostError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op clipboard for targets without clipboard access.
pub struct NoopClipboard;

impl ClipboardService for NoopClipboard {
    fn write_text<'a>(&'a self, _text: &'a str) -> HostFuture<'a, Result<(), HostError>> {
        Box::pin(async { Err(HostError::Unavailable("clipboard")) })
    }

    fn read_text(&self) -> HostFuture<'_, Result<String, HostError>> {
        Box::pin(async { Err(HostError::Unavailable("clipboard")) })
    }
}

#[derive(Debug, Default)]
/// In-memory clipboard used by tests.
pub struct MemoryClipboard {
    text: RefCell<String>,
}

impl ClipboardService for MemoryClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> HostFuture<'a, Result<(), HostError>> {
        Box::pin(async move {
            *self.text.borrow_mut() = text.to_string();
            Ok(())
        })
    }

    fn read_text(&self) -> HostFuture<'_, Result<String, HostError>> {
        Box::pin(async move { Ok(self.text.borrow().clone()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_clipboard_round_trips_text() {
        let clipboard = MemoryClipboard::default();
        block_on(clipboard.write_text("copied selection")).expect("write");
        assert_eq!(
            block_on(clipboard.read_text()).expect("read"),
            "copied selection"
        );
    }

    #[test]
    fn noop_clipboard_reports_unavailable() {
        let clipboard = NoopClipboard;
        assert_eq!(
            block_on(clipboard.read_text()),
            Err(HostError::Unavailable("clipboard"))
        );
    }
}
