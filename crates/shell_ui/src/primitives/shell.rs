use super::*;

#[component]
/// Root desktop shell container.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop wallpaper/backdrop host covering the area above the taskbar.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Column-flow grid hosting desktop launcher icons.
pub fn DesktopIconGrid(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-desktop-icon-grid"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop launcher icon button; activation is double-click.
pub fn DesktopIconButton(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-desktop-icon-button"
            title=title
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Caption rendered under a desktop launcher icon.
pub fn DesktopIconLabel(children: Children) -> impl IntoView {
    view! { <span class="ui-desktop-icon-label" data-ui-slot="label">{children()}</span> }
}

#[component]
/// Host layer for stacked managed windows.
pub fn DesktopWindowLayer(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-window-layer"
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Managed window frame: absolute-positioned via `style`, layered by z-index.
pub fn WindowFrame(
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="ui-window-frame"
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-minimized=move || bool_token(minimized.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Window titlebar: the drag handle region.
pub fn WindowTitleBar(
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="ui-window-titlebar"
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon-and-text window title region.
pub fn WindowTitle(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-slot="title">
            {children()}
        </div>
    }
}

#[component]
/// Container for titlebar window controls.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-slot="controls">
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control button (minimize/maximize/close).
///
/// Pointer/mouse-down are swallowed so pressing a control never starts a
/// titlebar drag; the action fires on click.
pub fn WindowControlButton(
    #[prop(into)] aria_label: String,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="window-control"
            on:pointerdown=move |ev: web_sys::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:mousedown=move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
            }
            on:click=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Window content region below the titlebar.
pub fn WindowBody(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-body" data-ui-slot="body">
            {children()}
        </div>
    }
}

#[component]
/// Invisible edge/corner strip that starts a resize session.
pub fn ResizeHandleBar(
    /// Stable `edge-*` class naming the handled edge or corner.
    edge_class: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-resize-handle", Some(edge_class))
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        />
    }
}

#[component]
/// Fixed bottom taskbar strip.
pub fn TaskbarRoot(
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class="ui-taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            data-ui-primitive="true"
            data-ui-kind="taskbar"
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
        >
            {children()}
        </footer>
    }
}

#[component]
/// Taskbar button for the start control and per-process entries.
pub fn TaskbarButton(
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] dimmed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_contextmenu: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-taskbar-button"
            aria-label=move || aria_label.get()
            title=move || title.get()
            data-ui-primitive="true"
            data-ui-kind="taskbar-button"
            data-ui-selected=move || bool_token(selected.get())
            data-ui-dimmed=move || bool_token(dimmed.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:contextmenu=move |ev| {
                if let Some(on_contextmenu) = on_contextmenu.as_ref() {
                    on_contextmenu.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
