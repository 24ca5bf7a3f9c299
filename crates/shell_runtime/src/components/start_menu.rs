use leptos::ev::MouseEvent;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use shell_ui::{
    Button, ButtonVariant, Icon, IconName, IconSize, LauncherPanel, LauncherRail, TaskbarButton,
};

use crate::{registry::ShellAction, runtime_context::use_shell_runtime};

const RAIL_ICONS: [(IconName, &str); 6] = [
    (IconName::Menu, "All options"),
    (IconName::User, "Profile"),
    (IconName::Document, "Documents"),
    (IconName::Picture, "Pictures"),
    (IconName::Settings, "Settings"),
    (IconName::Power, "Power"),
];

#[component]
/// Start control plus its popup panel.
///
/// The panel dismisses on outside-click and Escape; both listeners exist
/// only while the panel is open and are released when it closes or the
/// taskbar unmounts.
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_shell_runtime();
    let open = create_memo(move |_| runtime.state.get().start_menu_open);

    let dismiss_handles: StoredValue<Vec<WindowListenerHandle>> = store_value(Vec::new());
    let release_dismiss_listeners = move || {
        dismiss_handles.update_value(|handles| {
            for handle in handles.drain(..) {
                handle.remove();
            }
        });
    };
    create_effect(move |_| {
        let is_open = open.get();
        release_dismiss_listeners();
        if !is_open {
            return;
        }
        let outside_click = window_event_listener(ev::mousedown, move |_| {
            runtime.dispatch_action(ShellAction::CloseStartMenu);
        });
        let escape = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                runtime.dispatch_action(ShellAction::CloseStartMenu);
            }
        });
        dismiss_handles.update_value(|handles| {
            handles.extend([outside_click, escape]);
        });
    });
    on_cleanup(release_dismiss_listeners);

    view! {
        <TaskbarButton
            aria_label="Open start panel".to_string()
            title="Start".to_string()
            selected=Signal::from(open)
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(ShellAction::ToggleStartMenu);
            })
        >
            <Icon icon=IconName::Launcher size=IconSize::Sm />
        </TaskbarButton>

        <LauncherPanel
            id="shell-start-panel"
            open=Signal::from(open)
            on_mousedown=Callback::new(|ev: MouseEvent| ev.stop_propagation())
        >
            <LauncherRail>
                {RAIL_ICONS
                    .into_iter()
                    .map(|(icon, label)| {
                        view! {
                            <Button variant=ButtonVariant::Quiet aria_label=label>
                                <Icon icon=icon size=IconSize::Sm />
                            </Button>
                        }
                    })
                    .collect_view()}
            </LauncherRail>
        </LauncherPanel>
    }
}
