//! Desktop shell runtime: process registry, window presenters, and the shell
//! UI composition (windows, taskbar, start panel, desktop icons).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod apps;
pub mod components;
pub mod model;
pub mod presenter;
pub mod registry;
mod runtime_context;

pub use components::DesktopShell;
pub use model::{
    ApplicationKind, PointerPoint, ProcessId, ProcessRecord, ResizeEdge, ShellState,
    WindowGeometry,
};
pub use presenter::{default_geometry, maximized_geometry, WindowPresenter};
pub use registry::{apply_shell_action, frontmost_process, max_stack_order, ShellAction};
pub use runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};
