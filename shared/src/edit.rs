use crate::types::Section;

/// Draft values for the section currently in edit mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Local edit buffer of one widget instance.
///
/// At most one section can be under edit: the buffer is either idle or holds
/// exactly one draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing(Draft),
}

impl EditState {
    /// Enter edit mode for `section`, seeding the draft from its current values.
    pub fn start(section: &Section) -> Self {
        EditState::Editing(Draft {
            id: section.id.clone(),
            title: section.title.clone(),
            content: section.content.clone(),
        })
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            EditState::Idle => None,
            EditState::Editing(draft) => Some(draft),
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.draft().map(|draft| draft.id.as_str())
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn set_title(&mut self, title: String) {
        if let EditState::Editing(draft) = self {
            draft.title = title;
        }
    }

    pub fn set_content(&mut self, content: String) {
        if let EditState::Editing(draft) = self {
            draft.content = content;
        }
    }

    /// Take the draft out, leaving the buffer idle.
    pub fn take(&mut self) -> Option<Draft> {
        match std::mem::take(self) {
            EditState::Idle => None,
            EditState::Editing(draft) => Some(draft),
        }
    }
}
