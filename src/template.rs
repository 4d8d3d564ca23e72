//! Typed template for the generated Rust source.
//!
//! A [`ClassTemplate`] is built from a [`ResourceModel`] and holds one slot per
//! structural piece of the output. Each slot renders itself into a
//! [`CodeWriter`], so every embedded field can be checked on its own.
//!
//! Names, keys and values are embedded verbatim. Resource names must already
//! be valid Rust identifiers and must not be one of [`RESERVED_NAMES`], which
//! the generated type defines itself.
//!
//! Every namespace segment adds one level of nesting, so changing the number
//! of segments re-indents the type body. Apart from that indentation, the
//! namespace only affects the module wrapper and the manager key.

use indoc::indoc;

use crate::{model::ResourceModel, types::ResourceEntry};

/// Path of the runtime module that generated code links against.
pub const RUNTIME_PATH: &str = "::resxgen::runtime";

/// Associated functions emitted on every generated type.
pub const RESERVED_NAMES: &[&str] = &[
    "new",
    "resource_manager",
    "culture_override",
    "culture",
    "set_culture",
    "get_string",
];

const INDENT: &str = "    ";

/// Line-oriented text sink that tracks brace indentation.
#[derive(Debug, Default)]
pub struct CodeWriter {
    out: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Writes `header {` and indents what follows.
    pub fn open(&mut self, header: &str) {
        self.line(&format!("{header} {{"));
        self.depth += 1;
    }

    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Writes `text` as `///` doc lines, one per source line.
    pub fn doc(&mut self, text: &str) {
        if text.is_empty() {
            self.line("///");
            return;
        }
        for line in text.lines() {
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(&format!("/// {line}"));
            }
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// A piece of the generated source.
pub trait Slot {
    fn render(&self, out: &mut CodeWriter);
}

/// File header naming the generator, the `@generated` marker tools look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorHeader {
    pub name: &'static str,
    pub version: &'static str,
}

impl Default for GeneratorHeader {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl Slot for GeneratorHeader {
    fn render(&self, out: &mut CodeWriter) {
        let header = format!(
            indoc! {"
            // @generated by {} {}
            // Do not edit it manually, as your changes will be overwritten."},
            self.name, self.version
        );
        for line in header.lines() {
            out.line(line);
        }
        out.blank();
    }
}

/// Module nesting for a dotted namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSlot<'a> {
    pub segments: Vec<&'a str>,
}

impl<'a> NamespaceSlot<'a> {
    pub fn new(namespace: &'a str) -> Self {
        Self {
            segments: namespace.split('.').filter(|s| !s.is_empty()).collect(),
        }
    }

    pub fn open(&self, out: &mut CodeWriter) {
        for segment in &self.segments {
            out.line("#[allow(non_snake_case)]");
            out.open(&format!("pub mod {segment}"));
        }
    }

    pub fn close(&self, out: &mut CodeWriter) {
        for _ in &self.segments {
            out.close();
        }
    }
}

/// The generated type and its private constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSlot<'a> {
    pub class_name: &'a str,
}

impl TypeSlot<'_> {
    /// Writes the impl attributes, opens the impl block and adds `new`.
    pub fn open_impl(&self, out: &mut CodeWriter) {
        out.blank();
        out.line("#[rustfmt::skip]");
        out.line("#[allow(dead_code, non_snake_case, clippy::all)]");
        out.open(&format!("impl {}", self.class_name));
        out.doc("Private constructor; the type is only used through its associated functions.");
        out.line("#[allow(dead_code)]");
        out.open("fn new() -> Self");
        out.line("Self { _private: () }");
        out.close();
    }
}

impl Slot for TypeSlot<'_> {
    fn render(&self, out: &mut CodeWriter) {
        out.doc("A strongly-typed resource type, for looking up localized strings.");
        out.line("#[rustfmt::skip]");
        out.line("#[allow(dead_code, non_camel_case_types, clippy::all)]");
        out.open(&format!("pub struct {}", self.class_name));
        out.line("_private: (),");
        out.close();
    }
}

/// Lazily created, process-wide resource manager handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerSlot {
    /// Base name the manager resolves against, `{namespace}.{className}`.
    pub base_name: String,
}

impl Slot for ManagerSlot {
    fn render(&self, out: &mut CodeWriter) {
        let manager = format!("{RUNTIME_PATH}::ResourceManager");
        out.blank();
        out.doc("Returns the cached resource manager used by this type.");
        out.open(&format!("pub fn resource_manager() -> &'static {manager}"));
        out.line(&format!(
            "static RESOURCE_MANAGER: ::std::sync::OnceLock<{manager}> = ::std::sync::OnceLock::new();"
        ));
        out.line(&format!(
            "RESOURCE_MANAGER.get_or_init(|| {manager}::new(\"{}\", module_path!()))",
            self.base_name
        ));
        out.close();
    }
}

/// Settable culture override, unset by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CultureSlot;

impl Slot for CultureSlot {
    fn render(&self, out: &mut CodeWriter) {
        let cell = format!("::std::sync::RwLock<Option<{RUNTIME_PATH}::Culture>>");
        out.blank();
        out.open(&format!("fn culture_override() -> &'static {cell}"));
        out.line(&format!(
            "static CULTURE: {cell} = ::std::sync::RwLock::new(None);"
        ));
        out.line("&CULTURE");
        out.close();

        out.blank();
        out.doc(indoc! {"
            Returns the culture override used for every lookup made through this type.
            `None` means the ambient default resources are used."});
        out.open(&format!("pub fn culture() -> Option<{RUNTIME_PATH}::Culture>"));
        out.line("Self::culture_override().read().unwrap_or_else(|e| e.into_inner()).clone()");
        out.close();

        out.blank();
        out.doc("Sets or clears the culture override.");
        out.open(&format!(
            "pub fn set_culture(culture: Option<{RUNTIME_PATH}::Culture>)"
        ));
        out.line("*Self::culture_override().write().unwrap_or_else(|e| e.into_inner()) = culture;");
        out.close();
    }
}

/// One read-only accessor. The value only appears in documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorSlot<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub comment: Option<&'a str>,
}

impl<'a> From<&'a ResourceEntry> for AccessorSlot<'a> {
    fn from(entry: &'a ResourceEntry) -> Self {
        Self {
            name: &entry.name,
            value: &entry.value,
            comment: entry.comment.as_deref(),
        }
    }
}

impl Slot for AccessorSlot<'_> {
    fn render(&self, out: &mut CodeWriter) {
        out.blank();
        out.doc(&format!(
            "Looks up a localized string similar to: {}",
            self.value
        ));
        if let Some(comment) = self.comment {
            out.doc("");
            out.doc(&format!("Comment: {comment}"));
        }
        out.open(&format!("pub fn {}() -> String", self.name));
        out.line(&format!("Self::get_string(\"{}\")", self.name));
        out.close();
    }
}

/// Private lookup shared by all accessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupSlot;

impl Slot for LookupSlot {
    fn render(&self, out: &mut CodeWriter) {
        out.blank();
        out.doc("Returns the resource string for `key`, or `key` itself when no resource matches.");
        out.open("fn get_string(key: &str) -> String");
        out.line("Self::resource_manager()");
        out.line(&format!("{INDENT}.get_string(key, Self::culture().as_ref())"));
        out.line(&format!("{INDENT}.unwrap_or_else(|| key.to_owned())"));
        out.close();
    }
}

/// The whole generated file, slot by slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassTemplate<'a> {
    pub header: GeneratorHeader,
    pub namespace: NamespaceSlot<'a>,
    pub type_decl: TypeSlot<'a>,
    pub manager: ManagerSlot,
    pub culture: CultureSlot,
    pub accessors: Vec<AccessorSlot<'a>>,
    pub lookup: LookupSlot,
}

impl<'a> ClassTemplate<'a> {
    pub fn from_model(model: &'a ResourceModel) -> Self {
        Self {
            header: GeneratorHeader::default(),
            namespace: NamespaceSlot::new(model.namespace()),
            type_decl: TypeSlot {
                class_name: model.class_name(),
            },
            manager: ManagerSlot {
                base_name: model.key(),
            },
            culture: CultureSlot,
            accessors: model.entries().iter().map(AccessorSlot::from).collect(),
            lookup: LookupSlot,
        }
    }

    pub fn render(&self) -> String {
        let mut out = CodeWriter::new();
        self.header.render(&mut out);
        self.namespace.open(&mut out);
        self.type_decl.render(&mut out);
        self.type_decl.open_impl(&mut out);
        self.manager.render(&mut out);
        self.culture.render(&mut out);
        for accessor in &self.accessors {
            accessor.render(&mut out);
        }
        self.lookup.render(&mut out);
        out.close();
        self.namespace.close(&mut out);
        out.finish()
    }
}
