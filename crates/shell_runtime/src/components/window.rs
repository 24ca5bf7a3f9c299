use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use serde_json::Value;
use shell_app_contract::{AppCommand, AppHost, AppMountContext};
use shell_ui::{
    Icon, IconName, IconSize, ResizeHandleBar, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

use super::pointer_from_pointer_event;
use crate::{
    apps,
    model::{ApplicationKind, ProcessId, ResizeEdge},
    presenter::WindowPresenter,
    registry::{frontmost_process, ShellAction},
    runtime_context::use_shell_runtime,
};

const RESIZE_EDGES: [ResizeEdge; 8] = [
    ResizeEdge::North,
    ResizeEdge::South,
    ResizeEdge::East,
    ResizeEdge::West,
    ResizeEdge::NorthEast,
    ResizeEdge::NorthWest,
    ResizeEdge::SouthEast,
    ResizeEdge::SouthWest,
];

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}

#[component]
/// One managed window: frame chrome around the resolved app view.
pub(super) fn ManagedWindow(window_id: ProcessId, kind: ApplicationKind) -> impl IntoView {
    let runtime = use_shell_runtime();
    let state = runtime.state;

    let presenter = create_rw_signal(WindowPresenter::mount(runtime.viewport_size()));
    let title = create_rw_signal(kind.title().to_string());

    let record = Signal::derive(move || {
        state
            .get()
            .processes
            .into_iter()
            .find(|process| process.id == window_id)
    });
    let minimized = Signal::derive(move || {
        record
            .get()
            .map(|process| process.minimized)
            .unwrap_or(false)
    });
    let focused =
        Signal::derive(move || state.with(|shell| frontmost_process(shell) == Some(window_id)));
    let maximized = Signal::derive(move || presenter.with(|p| p.is_maximized()));
    let frame_style = Signal::derive(move || {
        let geometry = presenter.with(|p| p.geometry());
        let stack_order = record
            .get()
            .map(|process| process.stack_order)
            .unwrap_or(0);
        format!(
            "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
            geometry.x, geometry.y, geometry.width, geometry.height, stack_order
        )
    });

    // Global pointer listeners exist only while this window tracks a drag or
    // resize session, and are released when the session ends or the window
    // is closed mid-session.
    let pointer_handles: StoredValue<Vec<WindowListenerHandle>> = store_value(Vec::new());
    let release_pointer_listeners = move || {
        pointer_handles.update_value(|handles| {
            for handle in handles.drain(..) {
                handle.remove();
            }
        });
    };
    let tracking = create_memo(move |_| presenter.with(|p| p.is_tracking()));
    create_effect(move |_| {
        let is_tracking = tracking.get();
        release_pointer_listeners();
        if !is_tracking {
            return;
        }
        let pointer_move = window_event_listener(ev::pointermove, move |ev| {
            presenter.update(|p| p.pointer_move(pointer_from_pointer_event(&ev)));
        });
        let pointer_up = window_event_listener(ev::pointerup, move |_| {
            presenter.update(|p| p.end_session());
        });
        let pointer_cancel = window_event_listener(ev::pointercancel, move |_| {
            presenter.update(|p| p.end_session());
        });
        pointer_handles.update_value(|handles| {
            handles.extend([pointer_move, pointer_up, pointer_cancel]);
        });
    });
    on_cleanup(release_pointer_listeners);

    let focus = Callback::new(move |_ev: web_sys::PointerEvent| {
        runtime.dispatch_action(ShellAction::FocusProcess { id: window_id });
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        presenter.update(|p| p.begin_drag(pointer_from_pointer_event(&ev)));
    });
    let minimize = Callback::new(move |_| {
        runtime.dispatch_action(ShellAction::ToggleMinimize { id: window_id });
    });
    let toggle_maximize = Callback::new(move |_| {
        presenter.update(|p| p.toggle_maximize());
    });
    let close = Callback::new(move |_| {
        runtime.dispatch_action(ShellAction::CloseProcess { id: window_id });
    });

    let command_sender = Callback::new(move |command: AppCommand| match command {
        AppCommand::SetWindowTitle { title: next } => title.set(next),
        AppCommand::OpenNewWindow => runtime.dispatch_action(ShellAction::OpenProcess { kind }),
        AppCommand::CloseWindow => {
            runtime.dispatch_action(ShellAction::CloseProcess { id: window_id })
        }
    });
    let contents = apps::app_module(kind).mount(AppMountContext {
        window_id: window_id.0,
        launch_params: Value::Null,
        services: runtime.host_services(),
        host: AppHost::new(command_sender),
    });

    view! {
        <WindowFrame
            style=frame_style
            aria_label=Signal::derive(move || title.get())
            focused=focused
            minimized=minimized
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move>
                <WindowTitle>
                    <Icon icon=apps::app_icon(kind) size=IconSize::Sm />
                    <span>{move || title.get()}</span>
                </WindowTitle>
                <WindowControls>
                    <WindowControlButton aria_label="Minimize window" on_click=minimize>
                        <Icon icon=IconName::WindowMinimize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton aria_label="Maximize or restore window" on_click=toggle_maximize>
                        <Icon icon=IconName::WindowMaximize size=IconSize::Xs />
                    </WindowControlButton>
                    <WindowControlButton aria_label="Close window" on_click=close>
                        <Icon icon=IconName::Dismiss size=IconSize::Xs />
                    </WindowControlButton>
                </WindowControls>
            </WindowTitleBar>

            <WindowBody>{contents}</WindowBody>

            <Show when=move || !maximized.get() fallback=|| ()>
                <For
                    each=move || RESIZE_EDGES.to_vec()
                    key=|edge| resize_edge_class(*edge)
                    let:edge
                >
                    <ResizeHandleBar
                        edge_class=resize_edge_class(edge)
                        on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                            if ev.button() != 0 {
                                return;
                            }
                            ev.prevent_default();
                            presenter.update(|p| {
                                p.begin_resize(edge, pointer_from_pointer_event(&ev))
                            });
                        })
                    />
                </For>
            </Show>
        </WindowFrame>
    }
}
