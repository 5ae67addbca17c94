use thiserror::Error;

/// Errors raised at the JSON boundary between the widget and its embedding editor.
#[derive(Debug, Error)]
pub enum AccordionError {
    #[error("invalid section list: {0}")]
    InvalidSections(#[source] serde_json::Error),

    #[error("invalid styles: {0}")]
    InvalidStyles(#[source] serde_json::Error),

    #[error("failed to serialize sections: {0}")]
    Serialize(#[source] serde_json::Error),
}
