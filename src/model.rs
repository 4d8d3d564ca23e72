//! The per-file resource model: a class name, a namespace and the parsed entries.

use tracing::debug;

use crate::{
    error::Error,
    parser,
    source::AdditionalFile,
    template::ClassTemplate,
    types::{GeneratedSource, ResourceEntry},
};

/// Namespace used until the caller sets one.
pub const DEFAULT_NAMESPACE: &str = "Generated";

/// A resource file ready to be rendered as Rust source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceModel {
    class_name: String,
    namespace: String,
    entries: Vec<ResourceEntry>,
}

impl ResourceModel {
    /// Builds a model from a file path and its (possibly absent) content.
    ///
    /// The class name is the last path segment with its final extension
    /// removed, so `/my/resources.en.resx` gives `resources.en`. Parser
    /// errors are returned unchanged.
    pub fn new(path: &str, content: Option<&str>) -> Result<Self, Error> {
        if path.trim().is_empty() {
            return Err(Error::InvalidPath(path.to_string()));
        }
        let class_name = class_name_from_path(path)
            .ok_or_else(|| Error::InvalidPath(path.to_string()))?
            .to_string();
        let entries = parser::parse(content)?;

        debug!(path, class_name = %class_name, entries = entries.len(), "built resource model");
        Ok(Self {
            class_name,
            namespace: DEFAULT_NAMESPACE.to_string(),
            entries,
        })
    }

    /// Builds a model from an input file, failing with [`Error::NullSource`]
    /// when there is none.
    pub fn from_source<F: AdditionalFile + ?Sized>(source: Option<&F>) -> Result<Self, Error> {
        let source = source.ok_or(Error::NullSource)?;
        let content = source.content()?;
        Self::new(source.path(), content.as_deref())
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = namespace.into();
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.set_namespace(namespace);
        self
    }

    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    /// `{namespace}.{className}`, used both as the manager base name and as
    /// the output key.
    pub fn key(&self) -> String {
        format!("{}.{}", self.namespace, self.class_name)
    }

    /// Renders the generated Rust source for the current namespace.
    pub fn render(&self) -> String {
        ClassTemplate::from_model(self).render()
    }

    pub fn to_source(&self) -> GeneratedSource {
        GeneratedSource {
            key: self.key(),
            text: self.render(),
        }
    }
}

/// File name without directory and without its final extension.
fn class_name_from_path(path: &str) -> Option<&str> {
    let file_name = path.rsplit(|c: char| c == '/' || c == '\\').next()?;
    let stem = match file_name.rfind('.') {
        Some(dot) => &file_name[..dot],
        None => file_name,
    };
    (!stem.is_empty()).then_some(stem)
}
