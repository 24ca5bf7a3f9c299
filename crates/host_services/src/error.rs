//! Error taxonomy for host-boundary operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure raised by a host service adapter.
///
/// Shell-internal state transitions never fail; only operations that cross the
/// host boundary (clipboard, file transfer) can.
pub enum HostError {
    /// The host does not expose the required API in this context.
    #[error("host api unavailable: {0}")]
    Unavailable(&'static str),
    /// The host API call itself failed.
    #[error("host call failed: {0}")]
    Interop(String),
}
