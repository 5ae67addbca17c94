use accordion_shared::{parse_sections, sections_to_json, AccordionStyles, Section};
use leptos::*;

use crate::components::accordion::DynamicAccordion;

const SECTIONS_JSON: &str = include_str!("../assets/sections.json");
const STYLES_JSON: &str = include_str!("../assets/styles.json");

/// Load the demo section list, falling back to an empty list.
pub fn load_sections(json: &str) -> Vec<Section> {
    parse_sections(json).unwrap_or_else(|e| {
        log::error!("Error loading sections: {}", e);
        Vec::new()
    })
}

/// Load the demo styles, falling back to the defaults.
pub fn load_styles(json: &str) -> AccordionStyles {
    AccordionStyles::from_json(json).unwrap_or_else(|e| {
        log::error!("Error loading styles: {}", e);
        AccordionStyles::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let sections = create_rw_signal(load_sections(SECTIONS_JSON));
    let styles = load_styles(STYLES_JSON);

    // The app is the only writer of the list
    let on_update = move |next: Vec<Section>| {
        log::info!("Accordion updated: {} sections", next.len());
        sections.set(next);
    };

    let sections_json = move || {
        sections
            .with(|list| sections_to_json(list))
            .unwrap_or_else(|e| e.to_string())
    };

    view! {
        <main class="container">
            <h1>"Dynamic Accordion"</h1>
            <DynamicAccordion
                sections=sections
                on_update=on_update
                styles=styles
                class="demo-accordion"
            />
            <h2>"Section data"</h2>
            <pre class="sections-json">{sections_json}</pre>
        </main>
    }
}
