#![forbid(unsafe_code)]
//! Strongly-typed accessors for `.resx` string resources.
//!
//! `resxgen` reads a `.resx` document, validates its `<data>` entries and
//! renders a Rust type with one accessor per entry. Accessors never embed the
//! resource value; they resolve through [`runtime::ResourceManager`] so the
//! string can be localized at run time.
//!
//! # Quick Start
//!
//! ```rust
//! use resxgen::ResourceModel;
//!
//! let content = r#"<root><data name="Greeting"><value>Hello</value></data></root>"#;
//! let mut model = ResourceModel::new("res/Strings.resx", Some(content))?;
//! model.set_namespace("app");
//!
//! let source = model.render();
//! assert!(source.contains("pub fn Greeting() -> String"));
//! # Ok::<(), resxgen::Error>(())
//! ```
//!
//! From a build script, use [`Generator`] and include the output:
//!
//! ```rust,ignore
//! include!(concat!(env!("OUT_DIR"), "/app.Strings.rs"));
//! ```

pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod runtime;
pub mod source;
pub mod template;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::{Error, ErrorKind},
    generator::{Generator, generate},
    model::{DEFAULT_NAMESPACE, ResourceModel},
    parser::parse,
    source::{AdditionalFile, DiskFile, InMemoryFile},
    types::{GeneratedSource, ResourceEntry},
};
