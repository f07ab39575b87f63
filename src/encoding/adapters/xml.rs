//! Reference XML codec.
//!
//! Each field becomes a child element named after the field. Primitives are
//! written as text content, byte strings as base64, node identifiers as an
//! `Identifier` child holding the text form.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::str::FromStr;

use crate::encoding::domain::{NodeId, QualifiedName, XmlElement};
use crate::encoding::error::CodecError;
use crate::encoding::ports::{CodecResult, Decoder, Encodeable, Encoder, EncodingLimits};

/// Builds an XML text tree from encodeable fields.
#[derive(Debug)]
pub struct XmlEncoder {
    stack: Vec<XmlElement>,
    limits: EncodingLimits,
}

impl XmlEncoder {
    /// Creates an encoder that writes fields under `root`.
    #[must_use]
    pub fn new(root: XmlElement, limits: EncodingLimits) -> Self {
        Self {
            stack: vec![root],
            limits,
        }
    }

    /// Returns the root element.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if a nested structure was left open.
    pub fn into_element(mut self) -> CodecResult<XmlElement> {
        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(root), true) => Ok(root),
            _ => Err(CodecError::encoding("unbalanced XML element stack")),
        }
    }

    /// Encodes a whole structure under a root element named after its type.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if any field cannot be encoded.
    pub fn encode(
        value: &dyn Encodeable,
        namespace: Option<&str>,
        limits: &EncodingLimits,
    ) -> CodecResult<XmlElement> {
        let mut root = XmlElement::new(value.type_name());
        if let Some(uri) = namespace {
            root = root.with_namespace(uri);
        }
        let mut encoder = Self::new(root, limits.clone());
        value.encode(&mut encoder)?;
        encoder.into_element()
    }

    fn current(&mut self) -> CodecResult<&mut XmlElement> {
        self.stack
            .last_mut()
            .ok_or_else(|| CodecError::encoding("no open XML element"))
    }

    fn push_child(&mut self, child: XmlElement) -> CodecResult<()> {
        self.current()?.children.push(child);
        Ok(())
    }

    fn push_text(&mut self, field: &str, text: impl Into<String>) -> CodecResult<()> {
        self.push_child(XmlElement::new(field).with_text(text))
    }
}

impl Encoder for XmlEncoder {
    fn write_boolean(&mut self, field: &str, value: bool) -> CodecResult<()> {
        self.push_text(field, value.to_string())
    }

    fn write_int32(&mut self, field: &str, value: i32) -> CodecResult<()> {
        self.push_text(field, value.to_string())
    }

    fn write_uint32(&mut self, field: &str, value: u32) -> CodecResult<()> {
        self.push_text(field, value.to_string())
    }

    fn write_double(&mut self, field: &str, value: f64) -> CodecResult<()> {
        self.push_text(field, value.to_string())
    }

    fn write_string(&mut self, field: &str, value: &str) -> CodecResult<()> {
        self.limits.check_string(value.len())?;
        self.push_text(field, value)
    }

    fn write_byte_string(&mut self, field: &str, value: &[u8]) -> CodecResult<()> {
        self.limits.check_byte_string(value.len())?;
        self.push_text(field, STANDARD.encode(value))
    }

    fn write_node_id(&mut self, field: &str, value: &NodeId) -> CodecResult<()> {
        self.push_child(
            XmlElement::new(field)
                .with_child(XmlElement::new("Identifier").with_text(value.to_string())),
        )
    }

    fn write_qualified_name(&mut self, field: &str, value: &QualifiedName) -> CodecResult<()> {
        self.limits.check_string(value.name.len())?;
        self.push_child(
            XmlElement::new(field)
                .with_child(
                    XmlElement::new("NamespaceIndex").with_text(value.namespace_index.to_string()),
                )
                .with_child(XmlElement::new("Name").with_text(value.name.clone())),
        )
    }

    fn write_encodeable(&mut self, field: &str, value: &dyn Encodeable) -> CodecResult<()> {
        self.limits.check_depth(self.stack.len())?;
        self.stack.push(XmlElement::new(field));
        let result = value.encode(self);
        let child = self
            .stack
            .pop()
            .ok_or_else(|| CodecError::encoding("unbalanced XML element stack"))?;
        result?;
        self.push_child(child)
    }
}

#[derive(Debug)]
struct Frame<'a> {
    element: &'a XmlElement,
    cursor: usize,
}

/// Reads encodeable fields from an XML text tree.
///
/// Fields are located by element name, in document order.
#[derive(Debug)]
pub struct XmlDecoder<'a> {
    stack: Vec<Frame<'a>>,
    limits: EncodingLimits,
}

impl<'a> XmlDecoder<'a> {
    /// Creates a decoder that reads fields from the children of `root`.
    #[must_use]
    pub fn new(root: &'a XmlElement, limits: EncodingLimits) -> Self {
        Self {
            stack: vec![Frame {
                element: root,
                cursor: 0,
            }],
            limits,
        }
    }

    /// Decodes a whole structure from `root` into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError`] if the root element does not name the target's
    /// type or any field is missing or malformed.
    pub fn decode(
        root: &'a XmlElement,
        target: &mut dyn Encodeable,
        limits: &EncodingLimits,
    ) -> CodecResult<()> {
        if root.name != target.type_name() {
            return Err(CodecError::decoding(format!(
                "expected element <{}>, found <{}>",
                target.type_name(),
                root.name
            )));
        }
        let mut decoder = Self::new(root, limits.clone());
        target.decode(&mut decoder)
    }

    fn next_child(&mut self, field: &str) -> CodecResult<&'a XmlElement> {
        let frame = self
            .stack
            .last_mut()
            .ok_or_else(|| CodecError::decoding("no open XML element"))?;
        let element = frame.element;
        let (offset, child) = element
            .children
            .iter()
            .enumerate()
            .skip(frame.cursor)
            .find(|(_, child)| child.name == field)
            .ok_or_else(|| {
                CodecError::decoding(format!("missing element <{field}> in <{}>", element.name))
            })?;
        frame.cursor = offset.saturating_add(1);
        Ok(child)
    }

    fn read_text(&mut self, field: &str) -> CodecResult<&'a str> {
        Ok(self.next_child(field)?.text.as_deref().unwrap_or_default())
    }

    fn read_parsed<T: FromStr>(&mut self, field: &str) -> CodecResult<T> {
        let text = self.read_text(field)?;
        text.trim()
            .parse()
            .map_err(|_| CodecError::decoding(format!("invalid value '{text}' in <{field}>")))
    }
}

fn child_text<'e>(element: &'e XmlElement, name: &str) -> CodecResult<&'e str> {
    element
        .child(name)
        .map(|child| child.text.as_deref().unwrap_or_default())
        .ok_or_else(|| CodecError::decoding(format!("missing element <{name}> in <{}>", element.name)))
}

impl Decoder for XmlDecoder<'_> {
    fn read_boolean(&mut self, field: &str) -> CodecResult<bool> {
        match self.read_text(field)?.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(CodecError::decoding(format!(
                "invalid boolean '{other}' in <{field}>"
            ))),
        }
    }

    fn read_int32(&mut self, field: &str) -> CodecResult<i32> {
        self.read_parsed(field)
    }

    fn read_uint32(&mut self, field: &str) -> CodecResult<u32> {
        self.read_parsed(field)
    }

    fn read_double(&mut self, field: &str) -> CodecResult<f64> {
        self.read_parsed(field)
    }

    fn read_string(&mut self, field: &str) -> CodecResult<String> {
        let text = self.read_text(field)?;
        self.limits.check_string(text.len())?;
        Ok(text.to_owned())
    }

    fn read_byte_string(&mut self, field: &str) -> CodecResult<Vec<u8>> {
        let text = self.read_text(field)?;
        let bytes = STANDARD
            .decode(text.trim())
            .map_err(|error| CodecError::decoding(format!("invalid base64 in <{field}>: {error}")))?;
        self.limits.check_byte_string(bytes.len())?;
        Ok(bytes)
    }

    fn read_node_id(&mut self, field: &str) -> CodecResult<NodeId> {
        let element = self.next_child(field)?;
        let text = child_text(element, "Identifier")?;
        text.trim()
            .parse::<NodeId>()
            .map_err(|error| CodecError::decoding(format!("{error} in <{field}>")))
    }

    fn read_qualified_name(&mut self, field: &str) -> CodecResult<QualifiedName> {
        let element = self.next_child(field)?;
        let namespace_text = child_text(element, "NamespaceIndex")?;
        let namespace_index = namespace_text.trim().parse::<u16>().map_err(|_| {
            CodecError::decoding(format!("invalid namespace index '{namespace_text}' in <{field}>"))
        })?;
        let name = child_text(element, "Name")?;
        self.limits.check_string(name.len())?;
        Ok(QualifiedName::new(namespace_index, name))
    }

    fn read_encodeable(&mut self, field: &str, target: &mut dyn Encodeable) -> CodecResult<()> {
        self.limits.check_depth(self.stack.len())?;
        let element = self.next_child(field)?;
        self.stack.push(Frame {
            element,
            cursor: 0,
        });
        let result = target.decode(self);
        self.stack.pop();
        result
    }
}
