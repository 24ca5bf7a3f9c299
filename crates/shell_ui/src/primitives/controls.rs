use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic button variants.
pub enum ButtonVariant {
    /// Standard raised button.
    #[default]
    Standard,
    /// Flat button for toolbars and menu anchors.
    Quiet,
}

impl ButtonVariant {
    const fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quiet => "quiet",
        }
    }
}

#[component]
/// Shared button primitive with standardized state tokens.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-button"
            aria-label=aria_label
            aria-expanded=move || aria_expanded.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-selected=move || bool_token(selected.get())
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
