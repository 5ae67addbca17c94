use accordion_shared::{AccordionState, AccordionStyles, Section};
use leptos::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::icon_button::{IconButton, IconButtonVariant};
use crate::components::text_area::TextArea;
use crate::components::text_input::TextInput;

pub fn root_class(extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("dynamic-accordion {}", extra),
        _ => "dynamic-accordion".to_string(),
    }
}

/// Keys that activate a focused header row, matching a native button.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn chevron_class(is_open: bool) -> &'static str {
    if is_open {
        "accordion-chevron rotated"
    } else {
        "accordion-chevron"
    }
}

/// Editable, collapsible list of sections.
///
/// The section list belongs to the caller. Every change is proposed through
/// `on_update` as a full replacement list; `sections` is never written to.
/// Only the edit buffer is held locally.
#[component]
pub fn DynamicAccordion(
    #[prop(into)] sections: Signal<Vec<Section>>,
    #[prop(into)] on_update: Callback<Vec<Section>>,
    #[prop(optional, into)] styles: MaybeSignal<AccordionStyles>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let state = create_rw_signal(AccordionState::new());

    // Rows only swap between form and header when the edited id changes, not on every keystroke
    let editing_id = create_memo(move |_| state.with(|s| s.editing_id().map(str::to_string)));

    let container_css = {
        let styles = styles.clone();
        move || styles.with(|s| s.container().to_string())
    };
    let header_css = {
        let styles = styles.clone();
        Signal::derive(move || styles.with(|s| s.header().to_string()))
    };
    let body_css = Signal::derive(move || styles.with(|s| s.body().to_string()));

    let add_section = move |_: ev::MouseEvent| {
        let current = sections.get_untracked();
        if let Some(next) = state.try_update(|s| s.add_section(&current)) {
            on_update.call(next);
        }
    };

    let save_edit = Callback::new(move |_: ()| {
        let current = sections.get_untracked();
        if let Some(next) = state.try_update(|s| s.save_edit(&current)).flatten() {
            on_update.call(next);
        }
    });

    let cancel_edit = Callback::new(move |_: ()| {
        state.update(AccordionState::cancel_edit);
    });

    view! {
        <div class=root_class(class.as_deref()) style=container_css>
            <div class="accordion-items">
            <For
                each=move || sections.get()
                key=|section| section.clone()
                children=move |section: Section| {
                    let id = section.id.clone();

                    let is_editing = {
                        let id = id.clone();
                        move || editing_id.with(|current| current.as_deref() == Some(id.as_str()))
                    };

                    let on_toggle = {
                        let id = id.clone();
                        Callback::new(move |_: ()| {
                            let current = sections.get_untracked();
                            let next = state.with_untracked(|s| s.toggle_section(&current, &id));
                            on_update.call(next);
                        })
                    };

                    let on_edit = {
                        let id = id.clone();
                        Callback::new(move |_: ()| {
                            let current = sections.get_untracked();
                            state.update(|s| {
                                s.start_editing(&current, &id);
                            });
                        })
                    };

                    let on_delete = Callback::new(move |_: ()| {
                        let current = sections.get_untracked();
                        if let Some(next) = state.try_update(|s| s.delete_section(&current, &id)) {
                            on_update.call(next);
                        }
                    });

                    view! {
                        <div class="accordion-item">
                            <Show
                                when=is_editing
                                fallback=move || view! {
                                    <SectionView
                                        section=section.clone()
                                        header_css=header_css
                                        body_css=body_css
                                        on_toggle=on_toggle
                                        on_edit=on_edit
                                        on_delete=on_delete
                                    />
                                }
                            >
                                <SectionEditor
                                    state=state
                                    on_save=save_edit
                                    on_cancel=cancel_edit
                                />
                            </Show>
                        </div>
                    }
                }
            />
            </div>
            <div class="accordion-footer">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Small
                    class="accordion-add"
                    on_click=add_section
                >
                    <span class="accordion-add-icon">"+"</span>
                    "Add Section"
                </Button>
            </div>
        </div>
    }
}

/// Header row plus, when open, the body row of a section.
#[component]
fn SectionView(
    section: Section,
    header_css: Signal<String>,
    body_css: Signal<String>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let Section {
        title,
        content,
        is_open,
        ..
    } = section;

    view! {
        <div
            class="accordion-header"
            role="button"
            tabindex="0"
            aria-expanded=is_open.to_string()
            style=move || header_css.get()
            on:click=move |_| on_toggle.call(())
            on:keydown=move |ev: ev::KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    on_toggle.call(());
                }
            }
        >
            <span class="accordion-title">{title}</span>
            <div class="accordion-header-controls">
                <div class="accordion-actions">
                    <IconButton title="Edit section" on_click=on_edit>
                        "✎"
                    </IconButton>
                    <IconButton
                        variant=IconButtonVariant::Danger
                        title="Delete section"
                        on_click=on_delete
                    >
                        "🗑"
                    </IconButton>
                </div>
                <span class=chevron_class(is_open)>"▾"</span>
            </div>
        </div>
        {is_open.then(move || view! {
            <div class="accordion-body" style=move || body_css.get()>
                {content}
            </div>
        })}
    }
}

/// Inline form shown in place of the section being edited.
#[component]
fn SectionEditor(
    state: RwSignal<AccordionState>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || state.with(|s| s.draft_title()));
    let content = Signal::derive(move || state.with(|s| s.draft_content()));

    view! {
        <div class="accordion-editor">
            <TextInput
                value=title
                on_input=move |value: String| state.update(|s| s.set_draft_title(value))
                placeholder="Section title"
                class="accordion-editor-title"
            />
            <TextArea
                value=content
                on_input=move |value: String| state.update(|s| s.set_draft_content(value))
                placeholder="Section content"
                class="accordion-editor-content"
            />
            <div class="accordion-editor-actions">
                <Button size=ButtonSize::Small on_click=move |_: ev::MouseEvent| on_save.call(())>
                    "Save"
                </Button>
                <Button
                    variant=ButtonVariant::Outline
                    size=ButtonSize::Small
                    on_click=move |_: ev::MouseEvent| on_cancel.call(())
                >
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    type Proposals = Rc<RefCell<Vec<Vec<Section>>>>;

    fn open_section(id: &str, title: &str) -> Section {
        let mut section = Section::new(id, title, format!("{} body", title));
        section.is_open = true;
        section
    }

    /// Mount the widget over a list owned by the test, recording every proposed list.
    fn mount_accordion(initial: Vec<Section>) -> (web_sys::HtmlElement, Proposals) {
        let container = document()
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document().body().unwrap().append_child(&container).unwrap();

        let proposals: Proposals = Rc::new(RefCell::new(Vec::new()));
        let recorded = Rc::clone(&proposals);
        mount_to(container.clone(), move || {
            let sections = create_rw_signal(initial);
            let on_update = move |next: Vec<Section>| {
                recorded.borrow_mut().push(next.clone());
                sections.set(next);
            };
            view! { <DynamicAccordion sections=sections on_update=on_update /> }
        });

        (container, proposals)
    }

    fn count(container: &web_sys::HtmlElement, selector: &str) -> u32 {
        container.query_selector_all(selector).unwrap().length()
    }

    fn element(container: &web_sys::HtmlElement, selector: &str, index: u32) -> web_sys::HtmlElement {
        container
            .query_selector_all(selector)
            .unwrap()
            .item(index)
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>()
    }

    fn key_down(target: &web_sys::HtmlElement, key: &str) {
        let init = web_sys::KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        let event = web_sys::KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_root_class_appends_caller_class() {
        assert_eq!(root_class(None), "dynamic-accordion");
        assert_eq!(root_class(Some("")), "dynamic-accordion");
        assert_eq!(root_class(Some("editor-block")), "dynamic-accordion editor-block");
    }

    #[wasm_bindgen_test]
    fn test_chevron_rotates_when_open() {
        assert_eq!(chevron_class(false), "accordion-chevron");
        assert_eq!(chevron_class(true), "accordion-chevron rotated");
    }

    #[wasm_bindgen_test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("a"));
    }

    #[wasm_bindgen_test]
    fn test_body_rendered_only_for_open_sections() {
        let (container, proposals) = mount_accordion(vec![
            open_section("a", "Alpha"),
            Section::new("b", "Beta", "Beta body"),
            open_section("c", "Gamma"),
        ]);

        assert_eq!(count(&container, ".accordion-header"), 3);
        assert_eq!(count(&container, ".accordion-body"), 2);
        assert_eq!(element(&container, ".accordion-body", 0).text_content().unwrap(), "Alpha body");
        assert_eq!(element(&container, ".accordion-body", 1).text_content().unwrap(), "Gamma body");
        assert_eq!(count(&container, ".accordion-chevron.rotated"), 2);
        assert!(proposals.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_add_row_always_rendered_after_items() {
        let (container, _) = mount_accordion(Vec::new());
        assert_eq!(count(&container, ".accordion-header"), 0);
        assert_eq!(count(&container, ".accordion-add"), 1);

        let (container, _) = mount_accordion(vec![Section::new("a", "Alpha", "")]);
        assert_eq!(count(&container, ".accordion-items > .accordion-item"), 1);
        assert_eq!(count(&container, ".dynamic-accordion > .accordion-footer .accordion-add"), 1);
    }

    #[wasm_bindgen_test]
    fn test_header_click_toggles_section() {
        let (container, proposals) = mount_accordion(vec![
            Section::new("a", "Alpha", "Alpha body"),
            Section::new("b", "Beta", "Beta body"),
        ]);

        element(&container, ".accordion-header", 1).click();

        let proposals = proposals.borrow();
        assert_eq!(proposals.len(), 1);
        assert!(!proposals[0][0].is_open);
        assert!(proposals[0][1].is_open);
        assert_eq!(count(&container, ".accordion-body"), 1);
    }

    #[wasm_bindgen_test]
    fn test_header_keyboard_toggles_section() {
        let (container, proposals) = mount_accordion(vec![Section::new("a", "Alpha", "Alpha body")]);

        key_down(&element(&container, ".accordion-header", 0), "Enter");

        assert_eq!(proposals.borrow().len(), 1);
        assert!(proposals.borrow()[0][0].is_open);
    }

    #[wasm_bindgen_test]
    fn test_delete_click_does_not_toggle() {
        let (container, proposals) = mount_accordion(vec![
            Section::new("a", "Alpha", "Alpha body"),
            Section::new("b", "Beta", "Beta body"),
        ]);

        // Icon buttons per row: edit, then delete
        element(&container, ".accordion-header .btn-icon", 1).click();

        let proposals = proposals.borrow();
        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0], vec![Section::new("b", "Beta", "Beta body")]);
        assert_eq!(count(&container, ".accordion-header"), 1);
    }

    #[wasm_bindgen_test]
    fn test_edit_form_replaces_header_and_cancel_proposes_nothing() {
        let (container, proposals) = mount_accordion(vec![
            Section::new("a", "Alpha", "Alpha body"),
            Section::new("b", "Beta", "Beta body"),
        ]);

        element(&container, ".accordion-header .btn-icon", 0).click();

        assert!(proposals.borrow().is_empty());
        assert_eq!(count(&container, ".accordion-editor"), 1);
        assert_eq!(count(&container, ".accordion-header"), 1);
        assert_eq!(element(&container, ".accordion-header .accordion-title", 0).text_content().unwrap(), "Beta");

        element(&container, ".accordion-editor .btn-outline", 0).click();

        assert!(proposals.borrow().is_empty());
        assert_eq!(count(&container, ".accordion-editor"), 0);
        assert_eq!(count(&container, ".accordion-header"), 2);
    }

    #[wasm_bindgen_test]
    fn test_save_proposes_edited_text() {
        let (container, proposals) = mount_accordion(vec![Section::new("a", "Alpha", "Alpha body")]);

        element(&container, ".accordion-header .btn-icon", 0).click();
        element(&container, ".accordion-editor .btn-primary", 0).click();

        assert_eq!(proposals.borrow().len(), 1);
        assert_eq!(proposals.borrow()[0], vec![Section::new("a", "Alpha", "Alpha body")]);
        assert_eq!(count(&container, ".accordion-editor"), 0);
    }

    #[wasm_bindgen_test]
    fn test_add_section_opens_editor_for_new_row() {
        let (container, proposals) = mount_accordion(vec![Section::new("a", "Alpha", "")]);

        element(&container, ".accordion-add", 0).click();

        let proposals = proposals.borrow();
        assert_eq!(proposals.len(), 1);
        assert_eq!(proposals[0].len(), 2);
        assert_eq!(proposals[0][1].title, "New Section");
        assert_eq!(count(&container, ".accordion-editor"), 1);
        assert_eq!(count(&container, ".accordion-header"), 1);
    }
}
