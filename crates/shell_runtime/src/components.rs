//! Desktop shell UI composition: window layer, desktop icons, taskbar, and
//! the start panel.

mod start_menu;
mod taskbar;
mod window;

use leptos::*;
use shell_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopIconLabel, DesktopRoot,
    DesktopWindowLayer, Icon, IconSize,
};

use self::{taskbar::ShellTaskbar, window::ManagedWindow};
use crate::{apps, registry::ShellAction, runtime_context::use_shell_runtime};

#[component]
/// Renders the full desktop shell: icon grid, window stack, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    view! {
        <DesktopRoot id="desktop-shell-root">
            <DesktopBackdrop>
                <DesktopIconGrid>
                    <For
                        each=move || apps::desktop_icon_apps()
                        key=|app| app.kind.tag()
                        let:app
                    >
                        <DesktopIconButton
                            title=app.launcher_label
                            on_dblclick=Callback::new(move |_| {
                                runtime.dispatch_action(ShellAction::OpenProcess { kind: app.kind });
                            })
                        >
                            <Icon icon=apps::app_icon(app.kind) size=IconSize::Lg />
                            <DesktopIconLabel>{app.launcher_label}</DesktopIconLabel>
                        </DesktopIconButton>
                    </For>
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For
                        each=move || state.get().processes
                        key=|process| process.id.0
                        let:process
                    >
                        <ManagedWindow window_id=process.id kind=process.kind />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <ShellTaskbar />
        </DesktopRoot>
    }
}

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> crate::model::PointerPoint {
    crate::model::PointerPoint {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}
