//! Text-file transfer contracts.
//!
//! The shell core never interprets file contents; these services move opaque
//! text across the host boundary for the notepad app (download-style save,
//! picker-style open).

use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::{error::HostError, HostFuture};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A named text payload crossing the host boundary.
pub struct TextDocument {
    /// File name as reported by the host.
    pub name: String,
    /// Full text contents.
    pub contents: String,
}

/// Host service for trivial text load/save.
pub trait TextFileService {
    /// Saves `contents` under `name` through the host's download mechanism.
    fn save_text<'a>(
        &'a self,
        name: &'a str,
        contents: &'a str,
    ) -> HostFuture<'a, Result<(), HostError>>;

    /// Opens a text file through the host's picker flow.
    ///
    /// Resolves to `None` when the host reports an empty selection.
    fn open_text(&self) -> HostFuture<'_, Result<Option<TextDocument>, HostError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op file service for targets without file transfer.
pub struct NoopTextFiles;

impl TextFileService for NoopTextFiles {
    fn save_text<'a>(
        &'a self,
        _name: &'a str,
        _contents: &'a str,
    ) -> HostFuture<'a, Result<(), HostError>> {
        Box::pin(async { Err(HostError::Unavailable("text files")) })
    }

    fn open_text(&self) -> HostFuture<'_, Result<Option<TextDocument>, HostError>> {
        Box::pin(async { Err(HostError::Unavailable("text files")) })
    }
}

#[derive(Debug, Default)]
/// In-memory file service used by tests.
///
/// `save_text` records the document; `open_text` yields the queued document,
/// if any.
pub struct MemoryTextFiles {
    saved: RefCell<Vec<TextDocument>>,
    queued: RefCell<Option<TextDocument>>,
}

impl MemoryTextFiles {
    /// Queues the document returned by the next `open_text` call.
    pub fn queue_open(&self, document: TextDocument) {
        *self.queued.borrow_mut() = Some(document);
    }

    /// Returns all documents saved so far.
    pub fn saved(&self) -> Vec<TextDocument> {
        self.saved.borrow().clone()
    }
}

impl TextFileService for MemoryTextFiles {
    fn save_text<'a>(
        &'a self,
        name: &'a str,
        contents: &'a str,
    ) -> HostFuture<'a, Result<(), HostError>> {
        Box::pin(async move {
            self.saved.borrow_mut().push(TextDocument {
                name: name.to_string(),
                contents: contents.to_string(),
            });
            Ok(())
        })
    }

    fn open_text(&self) -> HostFuture<'_, Result<Option<TextDocument>, HostError>> {
        Box::pin(async move { Ok(self.queued.borrow_mut().take()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_files_record_saves() {
        let files = MemoryTextFiles::default();
        block_on(files.save_text("notes.txt", "hello")).expect("save");
        assert_eq!(
            files.saved(),
            vec![TextDocument {
                name: "notes.txt".to_string(),
                contents: "hello".to_string(),
            }]
        );
    }

    #[test]
    fn memory_files_open_drains_queue() {
        let files = MemoryTextFiles::default();
        files.queue_open(TextDocument {
            name: "readme.txt".to_string(),
            contents: "content".to_string(),
        });
        assert!(block_on(files.open_text()).expect("open").is_some());
        assert_eq!(block_on(files.open_text()).expect("open"), None);
    }
}
