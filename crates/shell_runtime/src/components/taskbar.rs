use leptos::ev::MouseEvent;
use leptos::*;
use shell_ui::{Icon, IconSize, TaskbarButton, TaskbarRoot};

use super::start_menu::StartMenu;
use crate::{apps, registry::ShellAction, runtime_context::use_shell_runtime};

#[component]
/// Bottom taskbar: start control plus one button per running process.
///
/// Left-click toggles minimize; right-click closes the process while
/// suppressing the platform context menu.
pub(super) fn ShellTaskbar() -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    view! {
        <TaskbarRoot on_mousedown=Callback::new(|ev: MouseEvent| ev.stop_propagation())>
            <StartMenu />

            <For
                each=move || state.get().processes
                key=|process| process.id.0
                let:process
            >
                {{
                    let id = process.id;
                    let label = process.kind.title();
                    view! {
                        <TaskbarButton
                            aria_label=label.to_string()
                            title=label.to_string()
                            dimmed=Signal::derive(move || {
                                state
                                    .get()
                                    .processes
                                    .iter()
                                    .find(|entry| entry.id == id)
                                    .map(|entry| entry.minimized)
                                    .unwrap_or(false)
                            })
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(ShellAction::ToggleMinimize { id });
                            })
                            on_contextmenu=Callback::new(move |ev: MouseEvent| {
                                ev.prevent_default();
                                runtime.dispatch_action(ShellAction::CloseProcess { id });
                            })
                        >
                            <Icon icon=apps::app_icon(process.kind) size=IconSize::Sm />
                        </TaskbarButton>
                    }
                }}
            </For>
        </TaskbarRoot>
    }
}
