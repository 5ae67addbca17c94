use leptos::*;

#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub enum ButtonSize {
    #[default]
    Medium,
    Small,
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let mut classes = vec![match variant {
        ButtonVariant::Primary => "btn btn-primary",
        ButtonVariant::Outline => "btn btn-outline",
        ButtonVariant::Ghost => "btn btn-ghost",
    }];
    if size == ButtonSize::Small {
        classes.push("btn-sm");
    }
    if let Some(extra) = extra {
        classes.push(extra);
    }
    classes.join(" ")
}

/// Text button used for the edit form and the trailing add row.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(into)] on_click: Callback<ev::MouseEvent>,
    children: Children,
) -> impl IntoView {
    let full_class = button_class(variant, size, class.as_deref());

    view! {
        <button
            type="button"
            class=full_class
            on:click=move |ev| on_click.call(ev)
        >
            {children()}
        </button>
    }
}
