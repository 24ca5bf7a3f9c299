//! Shared contract types between the window-manager runtime and managed apps.
//!
//! Apps are mounted into runtime-owned window frames through a registered
//! mount function and talk back to the runtime exclusively through the
//! [`AppCommand`] channel; they never reach into shell state directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use host_services::HostServices;
use leptos::{Callable, Callback, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier for a runtime-managed window, as seen by apps.
pub type WindowRuntimeId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Commands emitted by an app toward the runtime that manages its window.
pub enum AppCommand {
    /// Request a title update for the current window.
    SetWindowTitle {
        /// New title text.
        title: String,
    },
    /// Request a second window running the same app.
    OpenNewWindow,
    /// Request closure of the current window.
    CloseWindow,
}

#[derive(Clone, Copy)]
/// App-side handle for the runtime command channel.
pub struct AppHost {
    sender: Callback<AppCommand>,
}

impl AppHost {
    /// Creates a host handle from the runtime command callback.
    pub const fn new(sender: Callback<AppCommand>) -> Self {
        Self { sender }
    }

    /// Requests a title change for the current window.
    pub fn set_title(&self, title: impl Into<String>) {
        self.sender.call(AppCommand::SetWindowTitle {
            title: title.into(),
        });
    }

    /// Requests a sibling window running the same app.
    pub fn open_new_window(&self) {
        self.sender.call(AppCommand::OpenNewWindow);
    }

    /// Requests closure of the current window.
    pub fn close_window(&self) {
        self.sender.call(AppCommand::CloseWindow);
    }

    /// Low-level send for exceptional flows.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }
}

#[derive(Clone)]
/// Per-window mount context injected by the runtime.
pub struct AppMountContext {
    /// Stable runtime window id.
    pub window_id: WindowRuntimeId,
    /// Launch parameters supplied at open time.
    pub launch_params: Value,
    /// Host service bundle (viewport, clipboard, text files).
    pub services: HostServices,
    /// Runtime command channel.
    pub host: AppHost,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_commands_round_trip_through_serde() {
        let command = AppCommand::SetWindowTitle {
            title: "notes.txt - Notepad".to_string(),
        };
        let raw = serde_json::to_string(&command).expect("serialize");
        let parsed: AppCommand = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(parsed, command);
    }
}
