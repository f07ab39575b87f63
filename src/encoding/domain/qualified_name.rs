//! Namespace-qualified names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A name scoped to a namespace index.
///
/// Data encodings are requested by qualified name; a null name means that no
/// encoding was requested.
///
/// # Examples
///
/// ```
/// use ua_dataencoding::encoding::domain::QualifiedName;
///
/// let name = QualifiedName::new(0, "Default Binary");
/// assert!(!name.is_null());
/// assert!(QualifiedName::null().is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Namespace index of the name.
    pub namespace_index: u16,
    /// The unqualified name text.
    pub name: String,
}

impl QualifiedName {
    /// Creates a qualified name.
    #[must_use]
    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        Self {
            namespace_index,
            name: name.into(),
        }
    }

    /// Returns the null qualified name.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            namespace_index: 0,
            name: String::new(),
        }
    }

    /// Returns `true` for namespace 0 with an empty name text.
    ///
    /// An empty name in any other namespace is not null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.namespace_index == 0 && self.name.is_empty()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace_index == 0 {
            f.write_str(&self.name)
        } else {
            write!(f, "{}:{}", self.namespace_index, self.name)
        }
    }
}

/// Error returned when qualified name text cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid qualified name '{0}'")]
pub struct ParseQualifiedNameError(pub String);

impl FromStr for QualifiedName {
    type Err = ParseQualifiedNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((prefix, name)) if is_namespace_prefix(prefix) => {
                let namespace_index = prefix
                    .parse::<u16>()
                    .map_err(|_| ParseQualifiedNameError(s.to_owned()))?;
                Ok(Self::new(namespace_index, name))
            }
            _ => Ok(Self::new(0, s)),
        }
    }
}

fn is_namespace_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.bytes().all(|byte| byte.is_ascii_digit())
}
