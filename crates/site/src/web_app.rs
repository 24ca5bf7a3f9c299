use host_services_web::browser_host_services;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use shell_runtime::{DesktopShell, ShellProvider};

#[component]
/// Top-level router: login surface at `/`, per-user desktop at `/:username`.
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Webtop" />
        <Meta name="description" content="A browser-hosted retro desktop shell." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=LoginRoute />
                    <Route path="/:username" view=DesktopRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
/// Sign-in surface; navigates to the named user's desktop.
pub fn LoginRoute() -> impl IntoView {
    let username = create_rw_signal(String::new());
    let navigate = use_navigate();

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked().trim().to_string();
        if user.is_empty() {
            return;
        }
        navigate(&format!("/{user}"), NavigateOptions::default());
    };

    view! {
        <section class="login-surface" data-ui-kind="login-surface">
            <form class="login-card" on:submit=submit>
                <h1>"Webtop"</h1>
                <label for="login-username">"Who is signing in?"</label>
                <input
                    id="login-username"
                    type="text"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <button type="submit">"Sign in"</button>
            </form>
        </section>
    }
}

#[component]
/// Desktop shell route with browser host services injected.
pub fn DesktopRoute() -> impl IntoView {
    view! {
        <ShellProvider host_services=browser_host_services()>
            <DesktopShell />
        </ShellProvider>
    }
}
