use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::AccordionError;

pub const DEFAULT_SECTION_TITLE: &str = "New Section";
pub const DEFAULT_SECTION_CONTENT: &str = "Add your content here...";
pub const SECTION_ID_PREFIX: &str = "section-";

// ============================================================================
// Section Types
// ============================================================================

/// One accordion entry.
///
/// The list of sections is owned by the embedding application; the widget only
/// ever proposes replacement lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_open: bool,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            is_open: false,
        }
    }

    /// A closed section with the default title and content and an id that is
    /// not used by any section in `existing`.
    pub fn with_defaults(existing: &[Section]) -> Self {
        Self::new(
            generate_section_id(existing),
            DEFAULT_SECTION_TITLE,
            DEFAULT_SECTION_CONTENT,
        )
    }
}

/// Generate a `section-<token>` id that does not collide with `existing`.
pub fn generate_section_id(existing: &[Section]) -> String {
    loop {
        let id = format!("{}{}", SECTION_ID_PREFIX, Uuid::new_v4().simple());
        if !existing.iter().any(|section| section.id == id) {
            return id;
        }
    }
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

// ============================================================================
// JSON Boundary
// ============================================================================

/// Parse a section list handed over by the embedding editor.
pub fn parse_sections(json: &str) -> Result<Vec<Section>, AccordionError> {
    serde_json::from_str(json).map_err(AccordionError::InvalidSections)
}

/// Serialize a section list for the embedding editor.
pub fn sections_to_json(sections: &[Section]) -> Result<String, AccordionError> {
    serde_json::to_string_pretty(sections).map_err(AccordionError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_with_defaults() {
        let section = Section::with_defaults(&[]);
        assert!(section.id.starts_with(SECTION_ID_PREFIX));
        assert!(section.id.len() > SECTION_ID_PREFIX.len());
        assert_eq!(section.title, "New Section");
        assert_eq!(section.content, "Add your content here...");
        assert!(!section.is_open);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut sections: Vec<Section> = Vec::new();
        for _ in 0..64 {
            let section = Section::with_defaults(&sections);
            assert!(sections.iter().all(|s| s.id != section.id));
            sections.push(section);
        }
    }

    #[test]
    fn test_parse_sections_camel_case() {
        let json = r#"[
            {"id": "a", "title": "First", "content": "One", "isOpen": true},
            {"id": "b", "title": "Second", "content": "Two"},
            {"id": "c", "title": "Third", "content": "Three", "isOpen": null}
        ]"#;

        let sections = parse_sections(json).unwrap();
        assert_eq!(sections.len(), 3);
        assert!(sections[0].is_open);
        assert!(!sections[1].is_open);
        assert!(!sections[2].is_open);
        assert_eq!(sections[1].title, "Second");
    }

    #[test]
    fn test_parse_sections_rejects_garbage() {
        let err = parse_sections(r#"{"id": "a"}"#).unwrap_err();
        assert!(matches!(err, AccordionError::InvalidSections(_)));
    }

    #[test]
    fn test_sections_to_json_uses_is_open_key() {
        let mut section = Section::new("a", "Title", "Body");
        section.is_open = true;

        let json = sections_to_json(&[section.clone()]).unwrap();
        assert!(json.contains("\"isOpen\": true"));
        assert_eq!(parse_sections(&json).unwrap(), vec![section]);
    }
}
