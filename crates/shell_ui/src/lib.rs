//! Shared Leptos primitives for the desktop shell and its built-in apps.
//!
//! The crate owns the reusable window/taskbar/menu building blocks and the
//! stable `data-ui-*` DOM contract consumed by the shell CSS layers. Apps
//! compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    AppShell, Button, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
    DesktopIconLabel, DesktopRoot, DesktopWindowLayer, LauncherPanel, LauncherRail, MenuBar,
    MenuItem, MenuSeparator, MenuSurface, ResizeHandleBar, StatusBar, StatusBarItem, TaskbarButton,
    TaskbarRoot, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        AppShell, Button, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid,
        DesktopIconLabel, DesktopRoot, DesktopWindowLayer, Icon, IconName, IconSize, LauncherPanel,
        LauncherRail, MenuBar, MenuItem, MenuSeparator, MenuSurface, ResizeHandleBar, StatusBar,
        StatusBarItem, TaskbarButton, TaskbarRoot, WindowBody, WindowControlButton, WindowControls,
        WindowFrame, WindowTitle, WindowTitleBar,
    };
}
