use core::fmt;

/// A single `name: value` declaration from an inline `style` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssProperty {
    pub name: String,
    pub value: String,
}

impl CssProperty {
    pub const SEPARATOR: char = ':';

    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parses one declaration. The name must be a CSS identifier and the
    /// value non-empty after trimming.
    pub fn parse(declaration: &str) -> Option<Self> {
        let (name, value) = declaration.split_once(Self::SEPARATOR)?;
        let name = name.trim();
        let value = value.trim().trim_end_matches(';').trim_end();
        if !is_identifier(name) || value.is_empty() {
            return None;
        }
        Some(Self::new(name, value))
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl fmt::Display for CssProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}
