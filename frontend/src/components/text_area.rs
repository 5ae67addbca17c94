use leptos::*;

const DEFAULT_ROWS: u32 = 4;

pub fn textarea_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) => format!("form-input form-textarea {}", extra),
        None => "form-input form-textarea".to_string(),
    }
}

/// Multi-line text input bound to an externally held value.
#[component]
pub fn TextArea(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let rows = rows.unwrap_or(DEFAULT_ROWS);

    let full_class = textarea_class(class.as_deref());

    view! {
        <textarea
            class=full_class
            rows=rows
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| {
                on_input.call(event_target_value(&ev));
            }
        ></textarea>
    }
}
