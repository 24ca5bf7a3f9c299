//! Installable app catalog and the kind → view resolver.

use leptos::*;
use shell_app_contract::{AppModule, AppMountContext};
use shell_ui::IconName;

use crate::model::ApplicationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Catalog entry for one installable application.
pub struct AppDescriptor {
    /// Application view tag.
    pub kind: ApplicationKind,
    /// Label under the desktop launcher icon.
    pub launcher_label: &'static str,
    /// Whether a launcher icon is placed on the desktop surface.
    pub show_on_desktop: bool,
}

const APP_REGISTRY: [AppDescriptor; 3] = [
    AppDescriptor {
        kind: ApplicationKind::Notepad,
        launcher_label: "Notepad",
        show_on_desktop: true,
    },
    AppDescriptor {
        kind: ApplicationKind::Webview,
        launcher_label: "Web Browser",
        show_on_desktop: true,
    },
    AppDescriptor {
        kind: ApplicationKind::Codepad,
        launcher_label: "Code",
        show_on_desktop: true,
    },
];

/// Returns the full installable app catalog.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Returns the apps that place a launcher icon on the desktop.
pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

/// Resolves an application kind to its mountable module.
///
/// Unrecognized kinds resolve to a blank window instead of failing; the
/// registry never validates kinds at open time.
pub fn app_module(kind: ApplicationKind) -> AppModule {
    match kind {
        ApplicationKind::Notepad => shell_app_notepad::module(),
        ApplicationKind::Webview => shell_app_webview::module(),
        ApplicationKind::Codepad => shell_app_codepad::module(),
        ApplicationKind::Unknown => AppModule::new(mount_blank),
    }
}

/// Returns the icon rendered for a kind on the taskbar and titlebar.
pub fn app_icon(kind: ApplicationKind) -> IconName {
    match kind {
        ApplicationKind::Notepad => IconName::Notepad,
        ApplicationKind::Webview => IconName::Globe,
        ApplicationKind::Codepad => IconName::CodeBrackets,
        ApplicationKind::Unknown => IconName::Window,
    }
}

fn mount_blank(_context: AppMountContext) -> View {
    view! { <div class="app-blank" data-ui-kind="app-blank"></div> }.into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_kind_has_a_dedicated_icon() {
        for entry in app_registry() {
            assert_ne!(app_icon(entry.kind), IconName::Window);
        }
    }

    #[test]
    fn catalog_tags_round_trip_through_the_kind_mapping() {
        for entry in app_registry() {
            assert_eq!(ApplicationKind::from_tag(entry.kind.tag()), entry.kind);
        }
    }
}
