use leptos::*;

#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub enum IconButtonVariant {
    #[default]
    Ghost,
    Danger,
}

impl IconButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            IconButtonVariant::Ghost => "btn btn-icon btn-ghost",
            IconButtonVariant::Danger => "btn btn-icon btn-ghost btn-danger-text",
        }
    }
}

/// Compact icon action placed inside a clickable row.
///
/// Clicks and key presses never bubble to the row, so the row's own handlers do not fire.
#[component]
pub fn IconButton(
    #[prop(optional)] variant: IconButtonVariant,
    #[prop(into)] title: String,
    #[prop(into)] on_click: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=variant.class()
            title=title.clone()
            aria-label=title
            on:click=move |ev: ev::MouseEvent| {
                ev.stop_propagation();
                on_click.call(());
            }
            on:keydown=|ev: ev::KeyboardEvent| ev.stop_propagation()
        >
            {children()}
        </button>
    }
}
