//! Runtime support linked by generated code.
//!
//! Generated types hold a [`ResourceManager`] keyed by `{namespace}.{className}`.
//! Applications install string tables for that base name, one per culture,
//! with [`register_resx`] or [`register_table`]. Lookups match the culture
//! exactly; `None` selects the invariant table. There is no parent-culture
//! fallback.

use std::{collections::HashMap, sync::RwLock};

use lazy_static::lazy_static;
use tracing::debug;
use unic_langid::LanguageIdentifier;

use crate::{error::Error, parser};

/// Culture used to select a string table.
pub type Culture = LanguageIdentifier;

type Table = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TableKey {
    base_name: String,
    culture: Option<Culture>,
}

lazy_static! {
    static ref TABLES: RwLock<HashMap<TableKey, Table>> = RwLock::new(HashMap::new());
}

/// Installs a string table, replacing any table already registered for the
/// same base name and culture.
pub fn register_table(base_name: &str, culture: Option<Culture>, table: Table) {
    let key = TableKey {
        base_name: base_name.to_string(),
        culture,
    };
    debug!(base_name, culture = ?key.culture, strings = table.len(), "registered string table");
    TABLES
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .insert(key, table);
}

/// Parses `.resx` content and installs it as a string table.
///
/// When a name appears twice, the later value wins. Returns the number of
/// distinct names registered.
pub fn register_resx(
    base_name: &str,
    culture: Option<Culture>,
    content: &str,
) -> Result<usize, Error> {
    let table: Table = parser::parse(Some(content))?
        .into_iter()
        .map(|entry| (entry.name, entry.value))
        .collect();
    let count = table.len();
    register_table(base_name, culture, table);
    Ok(count)
}

/// Resolves resource keys for one base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceManager {
    base_name: String,
    module: String,
}

impl ResourceManager {
    /// `module` identifies the code that owns the resources, usually
    /// `module_path!()` of the generated type.
    pub fn new(base_name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            module: module.into(),
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn get_string(&self, key: &str, culture: Option<&Culture>) -> Option<String> {
        let table_key = TableKey {
            base_name: self.base_name.clone(),
            culture: culture.cloned(),
        };
        TABLES
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&table_key)
            .and_then(|table| table.get(key))
            .cloned()
    }
}
