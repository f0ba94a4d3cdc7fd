// Abstract Syntax Tree types for path templates

/// Represents a parsed template as a list of parts
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub parts: Vec<TemplatePart>,
}

impl Template {
    pub fn new(parts: Vec<TemplatePart>) -> Self {
        Self { parts }
    }

    /// Get all parameter keys in declaration order
    pub fn keys(&self) -> Vec<&ParamKey> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                TemplatePart::Param { key, .. } => Some(key),
                _ => None,
            })
            .collect()
    }
}

/// A template consists of literal text and named parameter segments
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    Literal(String),
    Param {
        key: ParamKey,
        /// Separator (`/` or `.`) owned by the segment, dropped with an omitted optional value
        prefix: Option<char>,
    },
}

/// Name and optionality of a declared parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamKey {
    pub name: String,
    pub optional: bool,
}

impl ParamKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }
}
