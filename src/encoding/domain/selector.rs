//! Encoding selection: resolving a requested encoding name to a wire format.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::qualified_name::QualifiedName;
use crate::encoding::error::EncodingError;

/// Browse name of the default binary data encoding.
pub const DEFAULT_BINARY_NAME: &str = "Default Binary";

/// Browse name of the default XML data encoding.
pub const DEFAULT_XML_NAME: &str = "Default XML";

/// The wire encoding a value is converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodingSelector {
    /// The binary encoding.
    Binary,
    /// The XML encoding.
    Xml,
}

impl EncodingSelector {
    /// Returns the registered default name for this encoding.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::Binary => DEFAULT_BINARY_NAME,
            Self::Xml => DEFAULT_XML_NAME,
        }
    }
}

impl fmt::Display for EncodingSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Binary => "binary",
            Self::Xml => "xml",
        })
    }
}

/// Table of data encoding names recognised in namespace 0.
///
/// Lookup is table-driven so additional names can be registered without
/// touching the dispatcher. The result is always one of the two
/// [`EncodingSelector`] values.
///
/// # Examples
///
/// ```
/// use ua_dataencoding::encoding::domain::{DataEncodingTable, EncodingSelector, QualifiedName};
///
/// let table = DataEncodingTable::default();
/// let resolved = table.resolve(&QualifiedName::new(0, "Default XML"));
/// assert_eq!(resolved, Ok(Some(EncodingSelector::Xml)));
///
/// // A null name means no encoding was requested.
/// assert_eq!(table.resolve(&QualifiedName::null()), Ok(None));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEncodingTable {
    entries: Vec<(String, EncodingSelector)>,
}

impl Default for DataEncodingTable {
    fn default() -> Self {
        Self {
            entries: vec![
                (DEFAULT_BINARY_NAME.to_owned(), EncodingSelector::Binary),
                (DEFAULT_XML_NAME.to_owned(), EncodingSelector::Xml),
            ],
        }
    }
}

impl DataEncodingTable {
    /// Creates a table with no registered names.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `name` as selecting `selector`.
    ///
    /// If the name is already registered, its selector is replaced.
    pub fn register(&mut self, name: impl Into<String>, selector: EncodingSelector) {
        let key = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            entry.1 = selector;
        } else {
            self.entries.push((key, selector));
        }
    }

    /// Registers `name` and returns the table, for chained construction.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>, selector: EncodingSelector) -> Self {
        self.register(name, selector);
        self
    }

    /// Returns the selector registered for `name`, ignoring namespaces.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<EncodingSelector> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, selector)| *selector)
    }

    /// Resolves a requested encoding name.
    ///
    /// Returns `Ok(None)` when `name` is null: no encoding was requested.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::DataEncodingUnsupported`] if the name is in a
    /// namespace other than 0 or is not registered.
    pub fn resolve(&self, name: &QualifiedName) -> Result<Option<EncodingSelector>, EncodingError> {
        if name.is_null() {
            return Ok(None);
        }
        if name.namespace_index != 0 {
            return Err(EncodingError::unsupported(format!(
                "data encoding '{name}' is not in namespace 0"
            )));
        }
        self.lookup(&name.name).map(Some).ok_or_else(|| {
            EncodingError::unsupported(format!("data encoding '{name}' is not recognised"))
        })
    }
}
