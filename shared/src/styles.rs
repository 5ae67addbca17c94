//! Caller supplied visual configuration and its resolution against defaults.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::AccordionError;

pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_BORDER: &str = "1px solid #e5e7eb";
pub const DEFAULT_BORDER_RADIUS: &str = "8px";
pub const DEFAULT_FONT_FAMILY: &str = "inherit";
pub const DEFAULT_FONT_SIZE: &str = "14px";
pub const DEFAULT_FONT_WEIGHT: &str = "400";
pub const DEFAULT_COLOR: &str = "#374151";
pub const DEFAULT_PADDING: &str = "0px";
pub const DEFAULT_MARGIN: &str = "0px";
pub const DEFAULT_WIDTH: &str = "auto";
pub const DEFAULT_HEIGHT: &str = "auto";
pub const DEFAULT_TEXT_ALIGN: &str = "left";
pub const DEFAULT_TEXT_DECORATION: &str = "none";
pub const DEFAULT_CURSOR: &str = "pointer";

/// CSS properties that take bare numbers.
const UNITLESS_PROPERTIES: &[&str] = &[
    "flex",
    "flex-grow",
    "flex-shrink",
    "font-weight",
    "line-height",
    "opacity",
    "order",
    "z-index",
];

/// Style overrides for the accordion, keyed like the editor's style objects.
///
/// Every recognized field falls back to its default when absent or empty.
/// Unrecognized keys end up in `extra` and are applied to the root container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccordionStyles {
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, deserialize_with = "css_length", skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, deserialize_with = "css_length", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "css_length", skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, deserialize_with = "css_length", skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(default, deserialize_with = "css_length", skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, deserialize_with = "css_length", skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
    #[serde(default, deserialize_with = "css_keyword", skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl AccordionStyles {
    pub fn from_json(json: &str) -> Result<Self, AccordionError> {
        serde_json::from_str(json).map_err(AccordionError::InvalidStyles)
    }

    /// Declarations for the root element.
    pub fn container(&self) -> Declarations {
        let mut decls = Declarations::default();
        decls.set("background-color", pick(&self.background_color, DEFAULT_BACKGROUND_COLOR));
        decls.set("border", pick(&self.border, DEFAULT_BORDER));
        decls.set("border-radius", pick(&self.border_radius, DEFAULT_BORDER_RADIUS));
        decls.set("font-family", pick(&self.font_family, DEFAULT_FONT_FAMILY));
        decls.set("font-size", pick(&self.font_size, DEFAULT_FONT_SIZE));
        decls.set("font-weight", pick(&self.font_weight, DEFAULT_FONT_WEIGHT));
        decls.set("color", pick(&self.color, DEFAULT_COLOR));
        decls.set("padding", pick(&self.padding, DEFAULT_PADDING));
        decls.set("margin", pick(&self.margin, DEFAULT_MARGIN));
        decls.set("width", pick(&self.width, DEFAULT_WIDTH));
        decls.set("height", pick(&self.height, DEFAULT_HEIGHT));
        decls.set("text-align", pick(&self.text_align, DEFAULT_TEXT_ALIGN));
        decls.set("position", "relative");

        if let Some(value) = non_empty(&self.text_decoration) {
            decls.set("text-decoration", value);
        }
        if let Some(value) = non_empty(&self.cursor) {
            decls.set("cursor", value);
        }

        for (key, value) in &self.extra {
            let property = css_property_name(key);
            if let Some(value) = render_extra(&property, value) {
                decls.set(&property, value);
            }
        }

        decls
    }

    /// Declarations for each section's clickable header row.
    pub fn header(&self) -> Declarations {
        let mut decls = Declarations::default();
        decls.set("text-decoration", pick(&self.text_decoration, DEFAULT_TEXT_DECORATION));
        decls.set("cursor", pick(&self.cursor, DEFAULT_CURSOR));
        decls.set("font-family", pick(&self.font_family, DEFAULT_FONT_FAMILY));
        decls.set("font-size", pick(&self.font_size, DEFAULT_FONT_SIZE));
        decls.set("font-weight", pick(&self.font_weight, DEFAULT_FONT_WEIGHT));
        decls.set("color", pick(&self.color, DEFAULT_COLOR));
        decls.set("text-align", pick(&self.text_align, DEFAULT_TEXT_ALIGN));
        decls
    }

    /// Declarations for an expanded section's body.
    pub fn body(&self) -> Declarations {
        let mut decls = Declarations::default();
        decls.set("font-family", pick(&self.font_family, DEFAULT_FONT_FAMILY));
        decls.set("font-size", pick(&self.font_size, DEFAULT_FONT_SIZE));
        decls.set("color", pick(&self.color, DEFAULT_COLOR));
        decls
    }
}

/// Ordered CSS declarations; setting an existing property replaces it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations(Vec<(String, String)>);

impl Declarations {
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(name, _)| name == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property.to_string(), value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl fmt::Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", name, value)?;
            first = false;
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn pick(value: &Option<String>, default: &'static str) -> String {
    non_empty(value).unwrap_or(default).to_string()
}

/// `backgroundImage` -> `background-image`, `WebkitBoxShadow` -> `-webkit-box-shadow`.
fn css_property_name(key: &str) -> String {
    let mut property = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            property.push('-');
            property.push(ch.to_ascii_lowercase());
        } else {
            property.push(ch);
        }
    }
    property
}

fn render_extra(property: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if UNITLESS_PROPERTIES.contains(&property) => Some(n.to_string()),
        Value::Number(n) => Some(format!("{}px", n)),
        _ => None,
    }
}

fn css_value<'de, D>(deserializer: D, unit: &str) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(format!("{}{}", n, unit))),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

fn css_length<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    css_value(deserializer, "px")
}

fn css_keyword<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    css_value(deserializer, "")
}
