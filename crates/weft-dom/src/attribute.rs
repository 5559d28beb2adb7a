use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::css::CssProperty;

/// The value carried by an HTML attribute.
///
/// Equality is structural and only holds between values of the same
/// variant; a `String` never equals an `InlineCss` with the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AttributeValue {
    #[default]
    None,
    String(String),
    InlineCss(Vec<CssProperty>),
}

impl AttributeValue {
    /// Separator between inline CSS declarations.
    pub const CSS_PROPERTY_SEPARATOR: &'static str = "; ";

    /// Interprets a raw attribute value.
    ///
    /// Components split on `"; "` that parse as CSS declarations produce
    /// [`AttributeValue::InlineCss`]; otherwise the first component is kept
    /// as a plain string.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::None;
        };

        let components: Vec<&str> = raw.split(Self::CSS_PROPERTY_SEPARATOR).collect();
        let properties: Vec<CssProperty> = components
            .iter()
            .filter_map(|component| CssProperty::parse(component))
            .collect();

        if !properties.is_empty() {
            if properties.len() < components.len() {
                trace!(
                    raw,
                    kept = properties.len(),
                    "dropped non-css components from attribute value"
                );
            }
            return Self::InlineCss(properties);
        }

        Self::String(components.first().copied().unwrap_or_default().to_owned())
    }

    /// The plain string, if this is a [`AttributeValue::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_css(&self) -> Option<&[CssProperty]> {
        match self {
            Self::InlineCss(properties) => Some(properties),
            _ => None,
        }
    }

    /// The serialized form, or `None` for a valueless attribute.
    pub fn to_html_value(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::String(value) => Some(value.clone()),
            Self::InlineCss(properties) => Some(
                properties
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(Self::CSS_PROPERTY_SEPARATOR),
            ),
        }
    }
}

/// A named HTML attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "AttributeRecord", into = "AttributeRecord")]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

impl Attribute {
    /// An attribute with no value, e.g. `disabled`.
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::None,
        }
    }

    pub fn new(name: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Builds an attribute from its raw string value.
    pub fn parse(name: impl Into<String>, raw: Option<&str>) -> Self {
        Self::new(name, AttributeValue::parse(raw))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.to_html_value() {
            Some(value) => write!(f, "{}=\"{}\"", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// Persisted form: the value is stored as its serialized string.
#[derive(Serialize, Deserialize)]
struct AttributeRecord {
    name: String,
    #[serde(default)]
    value: Option<String>,
}

impl From<AttributeRecord> for Attribute {
    fn from(record: AttributeRecord) -> Self {
        Self::parse(record.name, record.value.as_deref())
    }
}

impl From<Attribute> for AttributeRecord {
    fn from(attribute: Attribute) -> Self {
        Self {
            value: attribute.value.to_html_value(),
            name: attribute.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_none() {
        assert_eq!(AttributeValue::parse(None), AttributeValue::None);
    }

    #[test]
    fn parses_plain_string() {
        let value = AttributeValue::parse(Some("images/photo.jpg"));
        assert_eq!(value.as_str(), Some("images/photo.jpg"));
        assert_eq!(value.as_css(), None);
    }

    #[test]
    fn parses_inline_css() {
        let value = AttributeValue::parse(Some("color: red; font-weight: bold"));
        assert_eq!(
            value,
            AttributeValue::InlineCss(vec![
                CssProperty::new("color", "red"),
                CssProperty::new("font-weight", "bold"),
            ])
        );
        assert_eq!(
            value.to_html_value().as_deref(),
            Some("color: red; font-weight: bold")
        );
    }

    #[test]
    fn equality_is_per_variant() {
        let css = AttributeValue::parse(Some("color: red"));
        let string = AttributeValue::String("color: red".to_owned());
        assert_ne!(css, string);
        assert_eq!(css.as_str(), None);
        assert_ne!(AttributeValue::None, AttributeValue::String(String::new()));
    }

    #[test]
    fn renders_attributes() {
        assert_eq!(Attribute::flag("disabled").to_string(), "disabled");
        assert_eq!(
            Attribute::parse("href", Some("a.html")).to_string(),
            "href=\"a.html\""
        );
        assert_eq!(
            Attribute::parse("style", Some("color: red")).to_string(),
            "style=\"color: red\""
        );
    }

    #[test]
    fn serde_round_trip() {
        let attribute = Attribute::parse("style", Some("color: red; margin: 0"));
        let json = serde_json::to_string(&attribute).unwrap();
        assert_eq!(json, r#"{"name":"style","value":"color: red; margin: 0"}"#);
        let back: Attribute = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attribute);

        let flag: Attribute = serde_json::from_str(r#"{"name":"hidden"}"#).unwrap();
        assert_eq!(flag, Attribute::flag("hidden"));
    }
}
