//! Shared structural, shell, overlay, and control primitives.

use leptos::ev::MouseEvent;
use leptos::*;

mod controls;
mod overlays;
mod shell;

pub use controls::{Button, ButtonVariant};
pub use overlays::{
    AppShell, LauncherPanel, LauncherRail, MenuBar, MenuItem, MenuSeparator, MenuSurface,
    StatusBar, StatusBarItem,
};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopIconLabel, DesktopRoot,
    DesktopWindowLayer, ResizeHandleBar, TaskbarButton, TaskbarRoot, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

pub(crate) fn merge_layout_class(base: &'static str, extra: Option<&'static str>) -> String {
    match extra {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
