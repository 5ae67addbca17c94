//! Pure transformations over a section list.
//!
//! Every function borrows the caller's list and returns a fresh one; the
//! input is never mutated in place.

use crate::types::Section;

pub fn find<'a>(sections: &'a [Section], id: &str) -> Option<&'a Section> {
    sections.iter().find(|section| section.id == id)
}

pub fn contains(sections: &[Section], id: &str) -> bool {
    find(sections, id).is_some()
}

/// Append a default section, returning the new list and a copy of the appended section.
pub fn append_new(sections: &[Section]) -> (Vec<Section>, Section) {
    let section = Section::with_defaults(sections);
    let mut next = sections.to_vec();
    next.push(section.clone());
    (next, section)
}

/// Flip `is_open` on the section with `id`. Other sections are untouched.
pub fn toggle(sections: &[Section], id: &str) -> Vec<Section> {
    sections
        .iter()
        .map(|section| {
            if section.id == id {
                Section {
                    is_open: !section.is_open,
                    ..section.clone()
                }
            } else {
                section.clone()
            }
        })
        .collect()
}

/// Drop the section with `id`; a missing id yields an equal list.
pub fn remove(sections: &[Section], id: &str) -> Vec<Section> {
    sections
        .iter()
        .filter(|section| section.id != id)
        .cloned()
        .collect()
}

/// Replace title and content of the section with `id`, keeping its id and open state.
pub fn replace_text(sections: &[Section], id: &str, title: &str, content: &str) -> Vec<Section> {
    sections
        .iter()
        .map(|section| {
            if section.id == id {
                Section {
                    title: title.to_string(),
                    content: content.to_string(),
                    ..section.clone()
                }
            } else {
                section.clone()
            }
        })
        .collect()
}
