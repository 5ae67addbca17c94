use leptos::*;

pub fn input_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("form-input {}", extra),
        None => "form-input".to_string(),
    }
}

/// Single-line text input bound to an externally held value.
#[component]
pub fn TextInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let full_class = input_class(class.as_deref());

    view! {
        <input
            type="text"
            class=full_class
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| {
                on_input.call(event_target_value(&ev));
            }
        />
    }
}
