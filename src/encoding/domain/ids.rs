//! Node identifiers used to name types and their wire-format encodings.
//!
//! A [`NodeId`] pairs a namespace index with one of four identifier kinds.
//! Encodeable types expose three of them: the abstract type id plus one id per
//! supported wire encoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// The identifier part of a [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Identifier {
    /// A numeric identifier.
    Numeric(u32),
    /// A string identifier.
    String(String),
    /// A GUID identifier.
    Guid(Uuid),
    /// An opaque byte-string identifier.
    Opaque(Vec<u8>),
}

/// Identifies a type, or one of its encodings, within a namespace.
///
/// # Examples
///
/// ```
/// use ua_dataencoding::encoding::domain::NodeId;
///
/// let id = NodeId::numeric(2, 5001);
/// assert_eq!(id.to_string(), "ns=2;i=5001");
/// assert_eq!("ns=2;i=5001".parse::<NodeId>(), Ok(id));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
    /// Index into the namespace table of the encoding context.
    pub namespace_index: u16,
    /// The identifier within that namespace.
    pub identifier: Identifier,
}

impl NodeId {
    /// Creates a numeric node identifier.
    #[must_use]
    pub const fn numeric(namespace_index: u16, value: u32) -> Self {
        Self {
            namespace_index,
            identifier: Identifier::Numeric(value),
        }
    }

    /// Creates a string node identifier.
    #[must_use]
    pub fn string(namespace_index: u16, value: impl Into<String>) -> Self {
        Self {
            namespace_index,
            identifier: Identifier::String(value.into()),
        }
    }

    /// Creates a GUID node identifier.
    #[must_use]
    pub const fn guid(namespace_index: u16, value: Uuid) -> Self {
        Self {
            namespace_index,
            identifier: Identifier::Guid(value),
        }
    }

    /// Creates an opaque node identifier.
    #[must_use]
    pub const fn opaque(namespace_index: u16, value: Vec<u8>) -> Self {
        Self {
            namespace_index,
            identifier: Identifier::Opaque(value),
        }
    }

    /// Returns the null node identifier (`ns=0;i=0`).
    #[must_use]
    pub const fn null() -> Self {
        Self::numeric(0, 0)
    }

    /// Returns `true` if this is the null identifier.
    ///
    /// Empty string, nil GUID and empty opaque identifiers in namespace 0 also
    /// count as null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        if self.namespace_index != 0 {
            return false;
        }
        match &self.identifier {
            Identifier::Numeric(value) => *value == 0,
            Identifier::String(value) => value.is_empty(),
            Identifier::Guid(value) => value.is_nil(),
            Identifier::Opaque(value) => value.is_empty(),
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace_index != 0 {
            write!(f, "ns={};", self.namespace_index)?;
        }
        match &self.identifier {
            Identifier::Numeric(value) => write!(f, "i={value}"),
            Identifier::String(value) => write!(f, "s={value}"),
            Identifier::Guid(value) => write!(f, "g={value}"),
            Identifier::Opaque(value) => write!(f, "b={}", hex::encode(value)),
        }
    }
}

/// Error returned when node identifier text cannot be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid node id '{0}'")]
pub struct ParseNodeIdError(pub String);

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseNodeIdError(s.to_owned());

        let (namespace_index, rest) = match s.strip_prefix("ns=") {
            Some(tail) => {
                let (ns, id) = tail.split_once(';').ok_or_else(invalid)?;
                (ns.parse::<u16>().map_err(|_| invalid())?, id)
            }
            None => (0, s),
        };

        let (kind, value) = rest.split_once('=').ok_or_else(invalid)?;
        let identifier = match kind {
            "i" => Identifier::Numeric(value.parse().map_err(|_| invalid())?),
            "s" => Identifier::String(value.to_owned()),
            "g" => Identifier::Guid(Uuid::parse_str(value).map_err(|_| invalid())?),
            "b" => Identifier::Opaque(hex::decode(value).map_err(|_| invalid())?),
            _ => return Err(invalid()),
        };

        Ok(Self {
            namespace_index,
            identifier,
        })
    }
}
