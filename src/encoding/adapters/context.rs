//! Default encoding context built on the reference codecs.

use super::binary::BinaryEncoder;
use super::xml::XmlEncoder;
use crate::encoding::domain::XmlElement;
use crate::encoding::ports::{CodecResult, Encodeable, EncodingContext, EncodingLimits};

/// URI of namespace 0.
pub const UA_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/";

/// An [`EncodingContext`] backed by [`BinaryEncoder`] and [`XmlEncoder`].
///
/// Holds the namespace table used to qualify XML bodies and the limits both
/// codecs enforce.
///
/// # Examples
///
/// ```
/// use ua_dataencoding::encoding::adapters::DefaultEncodingContext;
/// use ua_dataencoding::encoding::ports::EncodingLimits;
///
/// let context = DefaultEncodingContext::new()
///     .with_namespace("urn:example:types")
///     .with_limits(EncodingLimits::strict());
/// assert_eq!(context.namespace_uri(1), Some("urn:example:types"));
/// ```
#[derive(Debug, Clone)]
pub struct DefaultEncodingContext {
    namespace_uris: Vec<String>,
    limits: EncodingLimits,
}

impl DefaultEncodingContext {
    /// Creates a context with only namespace 0 and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace_uris: vec![UA_NAMESPACE_URI.to_owned()],
            limits: EncodingLimits::default(),
        }
    }

    /// Appends a namespace URI to the namespace table.
    #[must_use]
    pub fn with_namespace(mut self, uri: impl Into<String>) -> Self {
        self.namespace_uris.push(uri.into());
        self
    }

    /// Replaces the codec limits.
    #[must_use]
    pub fn with_limits(mut self, limits: EncodingLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the codec limits.
    #[must_use]
    pub const fn limits(&self) -> &EncodingLimits {
        &self.limits
    }

    /// Returns the namespace table.
    #[must_use]
    pub fn namespace_uris(&self) -> &[String] {
        &self.namespace_uris
    }

    /// Returns the URI registered for a namespace index.
    #[must_use]
    pub fn namespace_uri(&self, index: u16) -> Option<&str> {
        self.namespace_uris
            .get(usize::from(index))
            .map(String::as_str)
    }
}

impl Default for DefaultEncodingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodingContext for DefaultEncodingContext {
    fn encode_binary(&self, value: &dyn Encodeable) -> CodecResult<Vec<u8>> {
        BinaryEncoder::encode(value, &self.limits)
    }

    fn encode_xml(&self, value: &dyn Encodeable) -> CodecResult<XmlElement> {
        let namespace = self.namespace_uri(value.data_type_id().namespace_index);
        XmlEncoder::encode(value, namespace, &self.limits)
    }
}
