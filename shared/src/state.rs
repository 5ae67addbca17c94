//! Widget-level state machine.
//!
//! `AccordionState` owns the edit buffer and turns each user interaction into
//! a proposed replacement list. Forwarding that list to `on_update` is left to
//! the rendering layer.

use crate::edit::EditState;
use crate::ops;
use crate::types::Section;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionState {
    edit: EditState,
}

impl AccordionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(&self) -> &EditState {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.edit.editing_id()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.edit.is_editing(id)
    }

    pub fn draft_title(&self) -> String {
        self.edit
            .draft()
            .map(|draft| draft.title.clone())
            .unwrap_or_default()
    }

    pub fn draft_content(&self) -> String {
        self.edit
            .draft()
            .map(|draft| draft.content.clone())
            .unwrap_or_default()
    }

    pub fn set_draft_title(&mut self, title: String) {
        self.edit.set_title(title);
    }

    pub fn set_draft_content(&mut self, content: String) {
        self.edit.set_content(content);
    }

    /// Append a default section and immediately start editing it.
    pub fn add_section(&mut self, sections: &[Section]) -> Vec<Section> {
        let (next, added) = ops::append_new(sections);
        log::debug!("Section added: {}", added.id);
        self.edit = EditState::start(&added);
        next
    }

    /// Start editing `id`. Returns false when the id is not in the list.
    pub fn start_editing(&mut self, sections: &[Section], id: &str) -> bool {
        match ops::find(sections, id) {
            Some(section) => {
                log::debug!("Editing section: {}", id);
                self.edit = EditState::start(section);
                true
            }
            None => {
                log::warn!("Cannot edit unknown section: {}", id);
                false
            }
        }
    }

    /// Commit the draft. `None` when nothing is being edited.
    pub fn save_edit(&mut self, sections: &[Section]) -> Option<Vec<Section>> {
        let draft = self.edit.take()?;
        if !ops::contains(sections, &draft.id) {
            log::warn!("Saved draft for vanished section: {}", draft.id);
        } else {
            log::debug!("Section saved: {}", draft.id);
        }
        Some(ops::replace_text(
            sections,
            &draft.id,
            &draft.title,
            &draft.content,
        ))
    }

    pub fn cancel_edit(&mut self) {
        if let Some(draft) = self.edit.take() {
            log::debug!("Edit cancelled: {}", draft.id);
        }
    }

    /// Remove `id`. Clears the edit buffer only if it referenced the removed section.
    pub fn delete_section(&mut self, sections: &[Section], id: &str) -> Vec<Section> {
        if self.edit.is_editing(id) {
            self.edit = EditState::Idle;
        }
        if ops::contains(sections, id) {
            log::debug!("Section deleted: {}", id);
        } else {
            log::warn!("Cannot delete unknown section: {}", id);
        }
        ops::remove(sections, id)
    }

    pub fn toggle_section(&self, sections: &[Section], id: &str) -> Vec<Section> {
        if !ops::contains(sections, id) {
            log::warn!("Cannot toggle unknown section: {}", id);
        }
        ops::toggle(sections, id)
    }
}
