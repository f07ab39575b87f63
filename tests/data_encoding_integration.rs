//! Behavioural integration tests for applying data encodings.
//!
//! These tests exercise the public API end to end: a structured value is
//! encoded by the dispatcher, carried as an extension object and decoded
//! again through a type catalog.

use std::any::Any;

use ua_dataencoding::encoding::{
    adapters::{DefaultEncodingContext, TypeCatalog},
    domain::{
        BodyKind, DataEncodingTable, EncodingSelector, NodeId, QualifiedName, Variant, XmlElement,
    },
    error::{CodecError, EncodingError, StatusCode},
    ports::{CodecResult, Decoder, Encodeable, Encoder, EncodingContext, EncodingLimits},
    services::{DataEncodingService, EncodingOutcome},
};

/// A temperature sample published by a field device.
#[derive(Debug, Clone, Default, PartialEq)]
struct Reading {
    sensor: String,
    celsius: f64,
    alarm: bool,
}

impl Reading {
    fn new(sensor: &str, celsius: f64, alarm: bool) -> Self {
        Self {
            sensor: sensor.to_owned(),
            celsius,
            alarm,
        }
    }

    fn boxed() -> Box<dyn Encodeable> {
        Box::new(Self::default())
    }
}

impl Encodeable for Reading {
    fn data_type_id(&self) -> NodeId {
        NodeId::string(1, "Reading")
    }

    fn binary_encoding_id(&self) -> Option<NodeId> {
        Some(NodeId::string(1, "Reading.Binary"))
    }

    fn xml_encoding_id(&self) -> Option<NodeId> {
        Some(NodeId::string(1, "Reading.Xml"))
    }

    fn type_name(&self) -> &'static str {
        "Reading"
    }

    fn encode(&self, encoder: &mut dyn Encoder) -> CodecResult<()> {
        encoder.write_string("Sensor", &self.sensor)?;
        encoder.write_double("Celsius", self.celsius)?;
        encoder.write_boolean("Alarm", self.alarm)
    }

    fn decode(&mut self, decoder: &mut dyn Decoder) -> CodecResult<()> {
        self.sensor = decoder.read_string("Sensor")?;
        self.celsius = decoder.read_double("Celsius")?;
        self.alarm = decoder.read_boolean("Alarm")?;
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

/// A context whose codecs are unavailable.
struct OfflineContext;

impl EncodingContext for OfflineContext {
    fn encode_binary(&self, _value: &dyn Encodeable) -> CodecResult<Vec<u8>> {
        Err(CodecError::encoding("codec offline"))
    }

    fn encode_xml(&self, _value: &dyn Encodeable) -> CodecResult<XmlElement> {
        Err(CodecError::encoding("codec offline"))
    }
}

fn present(reading: Reading) -> Option<Box<dyn Encodeable>> {
    Some(Box::new(reading))
}

fn readings() -> Vec<Option<Box<dyn Encodeable>>> {
    vec![
        present(Reading::new("TT-101", 21.5, false)),
        None,
        present(Reading::new("TT-102", 88.0, true)),
    ]
}

// ============================================================================
// Scenario: Publisher sends readings in the binary encoding
// ============================================================================

/// When a client reads an array of structures with the binary encoding,
/// each element is serialised and the receiver can restore the originals.
#[test]
fn binary_readings_survive_transmission() {
    // Arrange
    let context = DefaultEncodingContext::new().with_namespace("urn:plant:devices");
    let service = DataEncodingService::new();
    let catalog = TypeCatalog::new().with_type(Reading::boxed);
    let mut value = Variant::EncodeableArray(readings());

    // Act
    let outcome = service
        .apply_data_encoding(&context, &QualifiedName::new(0, "Default Binary"), &mut value)
        .expect("readings should encode");

    // Assert
    assert_eq!(outcome, EncodingOutcome::Encoded(EncodingSelector::Binary));
    let Variant::ExtensionObjectArray(objects) = value else {
        panic!("dispatcher should produce an extension object array");
    };
    assert_eq!(objects.len(), 3);

    let restored: Vec<_> = objects
        .into_iter()
        .map(|object| {
            catalog
                .decode(object, context.limits())
                .expect("catalog should decode every element")
        })
        .collect();
    let kinds: Vec<_> = restored.iter().map(|object| object.body_kind()).collect();
    assert_eq!(
        kinds,
        vec![BodyKind::Encodeable, BodyKind::None, BodyKind::Encodeable]
    );
    let last = restored
        .last()
        .and_then(|object| object.encodeable())
        .expect("last reading should decode");
    assert!(last.is_equal(&Reading::new("TT-102", 88.0, true)));
}

// ============================================================================
// Scenario: Publisher sends a reading in the XML encoding
// ============================================================================

/// When a client asks for the XML encoding, the body is an XML fragment
/// qualified by the namespace of the reading's type.
#[test]
fn xml_reading_is_namespace_qualified() {
    // Arrange
    let context = DefaultEncodingContext::new().with_namespace("urn:plant:devices");
    let mut value = Variant::Encodeable(Box::new(Reading::new("TT-101", 21.5, false)));

    // Act
    DataEncodingService::new()
        .apply_data_encoding(&context, &QualifiedName::new(0, "Default XML"), &mut value)
        .expect("reading should encode");

    // Assert
    let Variant::ExtensionObject(object) = value else {
        panic!("dispatcher should produce an extension object");
    };
    assert_eq!(object.type_id(), &NodeId::string(1, "Reading.Xml"));
    let text = object.xml().expect("body should be XML").to_xml_string();
    assert_eq!(
        text,
        "<Reading xmlns=\"urn:plant:devices\"><Sensor>TT-101</Sensor>\
         <Celsius>21.5</Celsius><Alarm>false</Alarm></Reading>"
    );
}

// ============================================================================
// Scenario: Client requests an encoding the server does not know
// ============================================================================

/// An unknown encoding name is reported as unsupported and the value is
/// left exactly as it was.
#[test]
fn unknown_encoding_is_reported() {
    // Arrange
    let context = DefaultEncodingContext::new();
    let mut value = Variant::EncodeableArray(readings());

    // Act
    let error = DataEncodingService::new()
        .apply_data_encoding(&context, &QualifiedName::new(0, "Default JSON"), &mut value)
        .expect_err("JSON is not a registered encoding");

    // Assert
    assert_eq!(error.status_code(), StatusCode::BadDataEncodingUnsupported);
    assert_eq!(value, Variant::EncodeableArray(readings()));
}

// ============================================================================
// Scenario: Server registers an additional encoding name
// ============================================================================

/// A server can recognise vendor names that map onto the built-in encodings.
#[test]
fn vendor_encoding_name_is_recognised() {
    // Arrange
    let table = DataEncodingTable::default().with_name("Vendor XML", EncodingSelector::Xml);
    let service = DataEncodingService::with_table(table);
    let context = DefaultEncodingContext::new().with_limits(EncodingLimits::strict());
    let mut value = Variant::Encodeable(Box::new(Reading::new("TT-103", -4.0, false)));

    // Act
    let outcome = service
        .apply_data_encoding(&context, &QualifiedName::new(0, "Vendor XML"), &mut value)
        .expect("vendor name should resolve");

    // Assert
    assert_eq!(outcome, EncodingOutcome::Encoded(EncodingSelector::Xml));
}

// ============================================================================
// Scenario: Codec fails while encoding
// ============================================================================

/// A codec failure is reported as a type mismatch and never escapes as a
/// panic; the caller's value is unchanged.
#[test]
fn codec_failure_is_reported_as_type_mismatch() {
    // Arrange
    let mut value = Variant::EncodeableArray(readings());

    // Act
    let error = DataEncodingService::new()
        .apply_data_encoding(
            &OfflineContext,
            &QualifiedName::new(0, "Default Binary"),
            &mut value,
        )
        .expect_err("offline codec should fail");

    // Assert
    assert!(matches!(error, EncodingError::TypeMismatch { .. }));
    assert!(error.to_string().contains("codec offline"));
    assert_eq!(value, Variant::EncodeableArray(readings()));
}
