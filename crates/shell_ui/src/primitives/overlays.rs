use super::*;

#[component]
/// Root application shell layout for app window contents.
pub fn AppShell(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-app-shell", layout_class)
            data-ui-primitive="true"
            data-ui-kind="app-shell"
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal menu strip hosting popup menu anchors.
pub fn MenuBar(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-menubar"
            role="menubar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menubar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Anchored popup menu surface; hidden while `open` is false.
pub fn MenuSurface(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="ui-menu-surface"
            role="menu"
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            data-ui-open=move || bool_token(open.get())
        >
            {children()}
        </div>
    }
}

#[component]
/// Single activatable entry inside a popup menu.
pub fn MenuItem(
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-menu-item"
            role="menuitem"
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            on:click=move |ev| {
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
/// Thin separator rule between menu groups.
pub fn MenuSeparator() -> impl IntoView {
    view! {
        <div
            class="ui-menu-separator"
            role="separator"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        />
    }
}

#[component]
/// Start-panel popup anchored above the taskbar; hidden while `open` is false.
pub fn LauncherPanel(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] on_mousedown: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="ui-launcher-panel"
            role="menu"
            aria-label="Start panel"
            data-ui-primitive="true"
            data-ui-kind="launcher-panel"
            data-ui-open=move || bool_token(open.get())
            on:mousedown=move |ev| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Vertical icon rail on the start panel edge.
pub fn LauncherRail(children: Children) -> impl IntoView {
    view! {
        <div class="ui-launcher-rail" data-ui-slot="rail">
            {children()}
        </div>
    }
}

#[component]
/// Horizontal status strip at the bottom of an app surface.
pub fn StatusBar(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-statusbar"
            data-ui-primitive="true"
            data-ui-kind="statusbar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Single cell inside a [`StatusBar`].
pub fn StatusBarItem(children: Children) -> impl IntoView {
    view! { <span class="ui-statusbar-item" data-ui-slot="item">{children()}</span> }
}
