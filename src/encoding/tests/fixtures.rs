//! Shared encodeable types and fixtures for encoding tests.

use std::any::Any;

use rstest::fixture;

use crate::encoding::{
    adapters::{DefaultEncodingContext, TypeCatalog},
    domain::{NodeId, QualifiedName, XmlElement},
    error::CodecError,
    ports::{CodecResult, Decoder, Encodeable, Encoder, EncodingContext},
    services::DataEncodingService,
};

pub const TEST_NAMESPACE: &str = "urn:ua-dataencoding:tests";

/// A closed numeric interval.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Range {
    pub low: f64,
    pub high: f64,
}

impl Range {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn boxed() -> Box<dyn Encodeable> {
        Box::new(Self::default())
    }
}

impl Encodeable for Range {
    fn data_type_id(&self) -> NodeId {
        NodeId::numeric(1, 3001)
    }

    fn binary_encoding_id(&self) -> Option<NodeId> {
        Some(NodeId::numeric(1, 3003))
    }

    fn xml_encoding_id(&self) -> Option<NodeId> {
        Some(NodeId::numeric(1, 3002))
    }

    fn type_name(&self) -> &'static str {
        "Range"
    }

    fn encode(&self, encoder: &mut dyn Encoder) -> CodecResult<()> {
        encoder.write_double("Low", self.low)?;
        encoder.write_double("High", self.high)
    }

    fn decode(&mut self, decoder: &mut dyn Decoder) -> CodecResult<()> {
        self.low = decoder.read_double("Low")?;
        self.high = decoder.read_double("High")?;
        Ok(())
    }

    fn is_equal(&self, other: &dyn Encodeable) -> bool {
        other.as_any().downcast_ref::<Self>() == Some(self)
    }

    fn clone_box(&self) -> Box<dyn Encodeable> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A structure exercising every field kind the codecs support.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub enabled: bool,
    pub count: u32,
    pub offset: i32,
    pub payload: Vec<u8>,
    pub source: NodeId,
    pub label: QualifiedName,
    pub range: Range,
}

impl Measurement {
    pub fn sample() -> Self {
        Self {
            name: "Boiler <1> & \"drum\"".to_owned(),
            enabled: true,
            count: 42,
            offset: -7,
            payload: vec![0xde, 0xad, 0xbe, 0xef],
            source: NodeId::string(2, "Boiler.Drum"),
            label: QualifiedName::new(2, "Level"),
            range: Range::new(0.5, 99.5),
        }
    }

    pub fn boxed() -> Box<dyn Encodeable> {
        Box::new(Self::default())
    }
}

impl Encodeable for Measurement {
    fn data_type_id(&self) -> NodeId {
        NodeId::numeric(1, 4001)
    }

    fn binary_encoding_id(&self) -> Option<NodeId> {
        Some(NodeId::numeric(1, 4003))
    }

    fn xml_encoding_id(&self) -> Option<NodeId> {
        Some(NodeId::numeric(1, 4002))
    }

    fn type_name(&self) -> &'static str {
        "Measurement"
    }

    fn encode(&self, encoder: &mut dyn Encoder) -> CodecResult<()> {
        encoder.write_string("Name", &self.name)?;
        encoder.write_boolean("Enabled", self.enabled)?;
        encoder.write_uint32("Count", self.count)?;
        encoder.write_int32("Offset", self.offset)?;
        encoder.write_byte_string("Payload", &self.payload)?;
        encoder.write_node_id("Source", &self.source)?;
        encoder.write_qualified_name("Label", &self.label)?;
        encoder.write_encodeable("Range", &self.range)
    }

    fn decode(&mut self, decoder: &mut dyn Decoder) -> CodecResult<()> {
        self.name = decoder.read_string("Name")?;
        self.enabled = decoder.read_boolean("Enabled")?;
        self.count = decoder.read_uint32("Count")?;
        self.offset = decoder.read_int32("Offset")?;
        self.payload = decoder.read_byte_string("Payload")?;
        self.source = decoder.read_node_id("Source")?;
        self.label = decoder.read_qualified_name("Label")?;
        decoder.read_encodeable("Range", &mut self.range)
    }

    fn is_equal(&self, other: &dyn Encodeable) -> bool {
        other.as_any().downcast_ref::<Self>() == Some(self)
    }

    fn clone_box(&self) -> Box<dyn Encodeable> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A type that only defines a binary encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryOnly {
    pub value: i32,
}

impl Encodeable for BinaryOnly {
    fn data_type_id(&self) -> NodeId {
        NodeId::numeric(1, 5001)
    }

    fn binary_encoding_id(&self) -> Option<NodeId> {
        Some(NodeId::numeric(1, 5003))
    }

    fn xml_encoding_id(&self) -> Option<NodeId> {
        None
    }

    fn type_name(&self) -> &'static str {
        "BinaryOnly"
    }

    fn encode(&self, encoder: &mut dyn Encoder) -> CodecResult<()> {
        encoder.write_int32("Value", self.value)
    }

    fn decode(&mut self, decoder: &mut dyn Decoder) -> CodecResult<()> {
        self.value = decoder.read_int32("Value")?;
        Ok(())
    }

    fn is_equal(&self, other: &dyn Encodeable) -> bool {
        other.as_any().downcast_ref::<Self>() == Some(self)
    }

    fn clone_box(&self) -> Box<dyn Encodeable> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A type whose serialisation always fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unwritable;

impl Encodeable for Unwritable {
    fn data_type_id(&self) -> NodeId {
        NodeId::numeric(1, 6001)
    }

    fn binary_encoding_id(&self) -> Option<NodeId> {
        Some(NodeId::numeric(1, 6003))
    }

    fn xml_encoding_id(&self) -> Option<NodeId> {
        Some(NodeId::numeric(1, 6002))
    }

    fn type_name(&self) -> &'static str {
        "Unwritable"
    }

    fn encode(&self, _encoder: &mut dyn Encoder) -> CodecResult<()> {
        Err(CodecError::encoding("field cannot be represented"))
    }

    fn decode(&mut self, _decoder: &mut dyn Decoder) -> CodecResult<()> {
        Ok(())
    }

    fn is_equal(&self, other: &dyn Encodeable) -> bool {
        other.as_any().is::<Self>()
    }

    fn clone_box(&self) -> Box<dyn Encodeable> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// An encoding context whose codecs panic.
#[derive(Debug, Default)]
pub struct PanickingContext;

#[expect(
    clippy::panic_in_result_fn,
    reason = "the context stands in for a codec that crashes"
)]
impl EncodingContext for PanickingContext {
    fn encode_binary(&self, _value: &dyn Encodeable) -> CodecResult<Vec<u8>> {
        panic!("binary writer crashed");
    }

    fn encode_xml(&self, _value: &dyn Encodeable) -> CodecResult<XmlElement> {
        panic!("xml writer crashed");
    }
}

#[fixture]
pub fn context() -> DefaultEncodingContext {
    DefaultEncodingContext::new().with_namespace(TEST_NAMESPACE)
}

#[fixture]
pub fn service() -> DataEncodingService {
    DataEncodingService::new()
}

#[fixture]
pub fn catalog() -> TypeCatalog {
    TypeCatalog::new()
        .with_type(Range::boxed)
        .with_type(Measurement::boxed)
}

pub fn binary_name() -> QualifiedName {
    QualifiedName::new(0, "Default Binary")
}

pub fn xml_name() -> QualifiedName {
    QualifiedName::new(0, "Default XML")
}

pub fn boxed<T: Encodeable>(value: T) -> Box<dyn Encodeable> {
    Box::new(value)
}
