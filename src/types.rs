//! Core types shared by the parser, the model and the generator.

use std::fmt::Display;

use serde::Serialize;

/// A single named string resource, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    /// Accessor name. Never empty or whitespace-only; not trimmed.
    pub name: String,

    /// Inner text of the `<value>` element, unmodified.
    pub value: String,

    /// Optional translator comment from a `<comment>` element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ResourceEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl Display for ResourceEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ResourceEntry {{ name: {}, value: {} }}", self.name, self.value)
    }
}

/// Rendered output for one resource file, keyed by `{namespace}.{className}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedSource {
    pub key: String,
    pub text: String,
}

impl GeneratedSource {
    /// File name used when the text is written to disk.
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.key)
    }
}
