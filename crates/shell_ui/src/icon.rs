//! Centralized inline-SVG icon API shared by the shell and apps.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Stable icon identifiers used across shell and app surfaces.
pub enum IconName {
    /// Launcher/start glyph.
    Launcher,
    /// Notepad app glyph.
    Notepad,
    /// Browser app glyph.
    Globe,
    /// Code editor app glyph.
    CodeBrackets,
    /// Generic window glyph for unrecognized apps.
    Window,
    /// Minimize window control.
    WindowMinimize,
    /// Maximize/restore window control.
    WindowMaximize,
    /// Close/dismiss control.
    Dismiss,
    /// User profile glyph.
    User,
    /// Document glyph.
    Document,
    /// Picture glyph.
    Picture,
    /// Settings gear glyph.
    Settings,
    /// Power glyph.
    Power,
    /// Hamburger menu glyph.
    Menu,
}

impl IconName {
    /// Stable token used for `data-icon` hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Launcher => "launcher",
            Self::Notepad => "notepad",
            Self::Globe => "globe",
            Self::CodeBrackets => "code-brackets",
            Self::Window => "window",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::Dismiss => "dismiss",
            Self::User => "user",
            Self::Document => "document",
            Self::Picture => "picture",
            Self::Settings => "settings",
            Self::Power => "power",
            Self::Menu => "menu",
        }
    }

    const fn path(self) -> &'static str {
        match self {
            Self::Launcher => "M2 2h5v5H2zM9 2h5v5H9zM2 9h5v5H2zM9 9h5v5H9z",
            Self::Notepad => "M4 2h8v12H4zM6 5h4M6 8h4M6 11h3",
            Self::Globe => "M8 2a6 6 0 100 12A6 6 0 008 2zM2 8h12M8 2c-2 2-2 10 0 12c2-2 2-10 0-12",
            Self::CodeBrackets => "M6 4L3 8l3 4M10 4l3 4-3 4",
            Self::Window => "M2 3h12v10H2zM2 6h12",
            Self::WindowMinimize => "M3 11h10",
            Self::WindowMaximize => "M3 3h10v10H3z",
            Self::Dismiss => "M4 4l8 8M12 4l-8 8",
            Self::User => "M8 3a2.5 2.5 0 110 5a2.5 2.5 0 010-5zM3 13c1-3 9-3 10 0",
            Self::Document => "M4 2h6l2 2v10H4zM10 2v2h2",
            Self::Picture => "M2 3h12v10H2zM4 10l3-3 3 3 2-2 2 2",
            Self::Settings => "M8 5a3 3 0 100 6a3 3 0 000-6zM8 1v2M8 13v2M1 8h2M13 8h2",
            Self::Power => "M8 2v6M4 5a5.2 5.2 0 108 0",
            Self::Menu => "M3 4h10M3 8h10M3 12h10",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic icon sizes mapped to pixel boxes.
pub enum IconSize {
    /// 12px.
    Xs,
    /// 16px.
    #[default]
    Sm,
    /// 24px.
    Md,
    /// 40px.
    Lg,
}

impl IconSize {
    const fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 24,
            Self::Lg => 40,
        }
    }
}

#[component]
/// Inline-SVG icon rendered from the shared path catalog.
pub fn Icon(
    /// Icon to render.
    icon: IconName,
    /// Rendered box size.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            width=px
            height=px
            viewBox="0 0 16 16"
            fill="none"
            stroke="currentColor"
            stroke-width="1.4"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon.path() />
        </svg>
    }
}
