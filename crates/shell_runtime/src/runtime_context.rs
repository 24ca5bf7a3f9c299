//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns the reactive shell snapshot and the dispatch callback;
//! every descendant reaches the registry through this context rather than
//! ambient globals.

use host_services::{HostServices, ViewportSize};
use leptos::*;

use crate::{
    model::ShellState,
    registry::{apply_shell_action, ShellAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading shell state and dispatching [`ShellAction`]s.
pub struct ShellRuntimeContext {
    /// Injected host service bundle.
    pub host: StoredValue<HostServices>,
    /// Reactive shell state snapshot.
    pub state: RwSignal<ShellState>,
    /// Registry dispatch callback.
    pub dispatch: Callback<ShellAction>,
}

impl ShellRuntimeContext {
    /// Dispatches a registry action through the runtime callback.
    pub fn dispatch_action(&self, action: ShellAction) {
        self.dispatch.call(action);
    }

    /// Returns a clone of the injected host service bundle.
    pub fn host_services(&self) -> HostServices {
        self.host.get_value()
    }

    /// Queries the host for the current viewport dimensions.
    pub fn viewport_size(&self) -> ViewportSize {
        self.host.get_value().viewport.viewport_size()
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components.
pub fn ShellProvider(
    /// Host service bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(host_services);
    let state = create_rw_signal(ShellState::default());

    let dispatch = Callback::new(move |action: ShellAction| {
        let mut shell = state.get_untracked();
        let previous = shell.clone();
        apply_shell_action(&mut shell, action);
        if shell != previous {
            state.set(shell);
        }
    });

    provide_context(ShellRuntimeContext {
        host,
        state,
        dispatch,
    });

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
