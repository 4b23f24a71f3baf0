#![allow(dead_code)]

use crate::prelude::*;
use crate::schema::{Schema, SchemaRef, ShapeId, ShapeType};
use crate::serde::shapes::SchemaShape;
use crate::{BigDecimal, BigInt, ByteBuffer, Instant};
use crate::{lazy_schema, traits};
use indexmap::IndexMap;
use std::error::Error;
use thiserror::Error;

/// A Smithy document type, representing untyped data from the Smithy data model.
///
/// Document types are a protocol-agnostic view of untyped data. Protocols should attempt
/// to smooth over protocol incompatibilities with the Smithy data model.
///
/// Schemas are shared via [`SchemaRef`] (an `Arc`), so a `Document` owns a cheap clone of
/// its schema rather than borrowing one with a lifetime.
#[derive(Clone, PartialEq, Debug)]
pub struct Document {
    pub(crate) schema: SchemaRef,
    pub(crate) value: DocumentValue,
    pub(crate) discriminator: Option<ShapeId>,
}

impl Document {
    /// Construct a document directly from its parts.
    #[must_use]
    pub fn new(schema: SchemaRef, value: DocumentValue, discriminator: Option<ShapeId>) -> Self {
        Document {
            schema,
            value,
            discriminator,
        }
    }

    /// Get the Schema of the document
    #[must_use]
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Get the value of the document
    #[must_use]
    pub fn value(&self) -> &DocumentValue {
        &self.value
    }

    /// Get the discriminator (type ID) of a type document
    ///
    /// The discriminator is primarily used to implement polymorphism using documents in deserialization.
    ///
    /// *Impl note*: It is expected that protocols set the discriminator on deserialization if applicable
    #[must_use]
    pub fn discriminator(&self) -> Option<&ShapeId> {
        self.discriminator.as_ref()
    }

    /// Get the size of the document.
    ///
    /// **NOTE**: Scalar documents always return a size of 1
    #[must_use]
    pub fn size(&self) -> usize {
        match self.value {
            DocumentValue::List(ref array) => array.len(),
            DocumentValue::Map(ref map) => map.len(),
            DocumentValue::Null => 0,
            _ => 1,
        }
    }
}

impl SchemaShape for Document {
    fn schema(&self) -> &SchemaRef {
        &self.schema
    }
}

/// The value carried by a [`Document`].
#[derive(Clone, PartialEq, Debug)]
pub enum DocumentValue {
    Null,
    Number(NumberValue),
    Boolean(bool),
    Blob(ByteBuffer),
    String(String),
    Timestamp(Instant),
    List(Vec<Document>),
    Map(IndexMap<String, Document>),
}

/// Lightweight value type used for trait metadata ([`crate::schema::SmithyTrait::value`]).
///
/// Traits never need the full [`Document`]/[`DocumentValue`] aggregate machinery (schema,
/// discriminator, nested documents with their own schemas) -- just the handful of JSON-ish
/// scalar shapes trait arguments are expressed as in a Smithy model.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultDocumentValue {
    Null,
    Boolean(bool),
    Integer(i32),
    String(String),
}

/// Represents numbers in the smithy data model
///
/// Smithy numbers types include: byte, short, integer, long, float, double, bigInteger, bigDecimal.
///
/// *Note*: `IntEnum` shapes are represented as integers in the Smithy data model.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberValue {
    Integer(NumberInteger),
    Float(NumberFloat),
}

/// Represents an Integer numeric types in the Smithy data model
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInteger {
    Byte(i8),
    Short(i16),
    Integer(i32),
    Long(i64),
    BigInt(BigInt),
}

/// Represents Floating-point numeric type in the Smithy data model
#[derive(Debug, Clone, PartialEq)]
pub enum NumberFloat {
    Float(f32),
    Double(f64),
    BigDecimal(BigDecimal),
}

/// Errors encountered converting to/from [`Document`] values.
#[derive(Error, Debug, Default)]
pub enum DocumentError {
    #[error("Failed to convert document to type {0}")]
    DocumentSerialization(String),
    #[error("Failed to convert document to type {0}")]
    DocumentConversion(String),
    #[error("Encountered unknown error")]
    Unknown(#[from] Box<dyn Error>),
    #[default]
    #[error("Unknown document error")]
    Default,
}

/// Get the shape type of the Document
///
/// If the Document is a member, then returns the type of the member target.
pub(crate) fn get_shape_type(schema: &Schema) -> Result<&ShapeType, Box<dyn Error>> {
    let shape_type = schema.shape_type();
    if shape_type == &ShapeType::Member {
        let Some(member) = schema.as_member() else {
            return Err(conversion_error(
                "Expected memberSchema for member shape type",
            ));
        };
        Ok(member.target.shape_type())
    } else {
        Ok(shape_type)
    }
}

pub(crate) fn conversion_error(expected: &'static str) -> Box<dyn Error> {
    Box::new(DocumentError::DocumentConversion(expected.to_string())) as Box<dyn Error>
}

//////////////////////////////////////////////////////////////////
// AS-ers to borrow document value as type if possible
//////////////////////////////////////////////////////////////////
impl Document {
    /// Get the blob value of the Document if it is a blob.
    #[must_use]
    pub fn as_blob(&self) -> Option<&ByteBuffer> {
        if let DocumentValue::Blob(b) = &self.value {
            Some(b)
        } else {
            None
        }
    }

    /// Get the boolean value of the Document if it is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let &DocumentValue::Boolean(b) = &self.value {
            Some(b)
        } else {
            None
        }
    }

    /// Get the string value of the Document if it is a string.
    #[must_use]
    pub fn as_string(&self) -> Option<&String> {
        if let DocumentValue::String(s) = &self.value {
            Some(s)
        } else {
            None
        }
    }

    /// Get the timestamp value of the Document if it is a timestamp.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<&Instant> {
        if let DocumentValue::Timestamp(t) = &self.value {
            Some(t)
        } else {
            None
        }
    }

    /// Get the byte value of the Document if it is a byte or can be converted into one.
    #[must_use]
    pub fn as_byte(&self) -> Option<i8> {
        match &self.value {
            DocumentValue::Number(NumberValue::Integer(ni)) => match ni {
                &NumberInteger::Byte(b) => Some(b),
                &NumberInteger::Short(s) => s.try_into().ok(),
                &NumberInteger::Integer(i) => i.try_into().ok(),
                &NumberInteger::Long(l) => l.try_into().ok(),
                NumberInteger::BigInt(b) => b.try_into().ok(),
            },
            _ => None,
        }
    }

    /// Get the short value of the Document if it is a short or can be converted into one.
    #[must_use]
    pub fn as_short(&self) -> Option<i16> {
        match &self.value {
            DocumentValue::Number(NumberValue::Integer(ni)) => match ni {
                &NumberInteger::Byte(b) => Some(b.into()),
                &NumberInteger::Short(s) => Some(s),
                &NumberInteger::Integer(i) => i.try_into().ok(),
                &NumberInteger::Long(l) => l.try_into().ok(),
                NumberInteger::BigInt(b) => b.try_into().ok(),
            },
            _ => None,
        }
    }

    /// Get the integer value of the Document if it is an integer or can be converted into one.
    #[must_use]
    pub fn as_integer(&self) -> Option<i32> {
        match &self.value {
            DocumentValue::Number(NumberValue::Integer(ni)) => match ni {
                &NumberInteger::Byte(b) => Some(b.into()),
                &NumberInteger::Short(s) => Some(s.into()),
                &NumberInteger::Integer(i) => Some(i),
                &NumberInteger::Long(l) => l.try_into().ok(),
                NumberInteger::BigInt(b) => b.try_into().ok(),
            },
            _ => None,
        }
    }

    /// Get the long value of the Document if it is a long or can be converted into one.
    #[must_use]
    pub fn as_long(&self) -> Option<i64> {
        match &self.value {
            DocumentValue::Number(NumberValue::Integer(ni)) => match ni {
                &NumberInteger::Byte(b) => Some(b.into()),
                &NumberInteger::Short(s) => Some(s.into()),
                &NumberInteger::Integer(i) => Some(i.into()),
                &NumberInteger::Long(l) => Some(l),
                NumberInteger::BigInt(b) => b.try_into().ok(),
            },
            _ => None,
        }
    }

    /// Get the float value of the Document if it is a float or can be converted into one.
    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match &self.value {
            DocumentValue::Number(NumberValue::Float(nf)) => match nf {
                &NumberFloat::Float(f) => Some(f),
                &NumberFloat::Double(d) => Some(d as f32),
                NumberFloat::BigDecimal(bd) => bd.to_string().parse().ok(),
            },
            _ => None,
        }
    }

    /// Get the decimal value of the Document if it is a decimal or can be converted into one.
    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match &self.value {
            DocumentValue::Number(NumberValue::Float(nf)) => match nf {
                &NumberFloat::Float(f) => Some(f.into()),
                &NumberFloat::Double(d) => Some(d),
                NumberFloat::BigDecimal(bd) => bd.to_string().parse().ok(),
            },
            _ => None,
        }
    }

    #[must_use]
    pub fn as_big_integer(&self) -> Option<BigInt> {
        match &self.value {
            DocumentValue::Number(NumberValue::Integer(ni)) => Some(match ni {
                &NumberInteger::Byte(b) => BigInt::from(b),
                &NumberInteger::Short(s) => BigInt::from(s),
                &NumberInteger::Integer(i) => BigInt::from(i),
                &NumberInteger::Long(l) => BigInt::from(l),
                NumberInteger::BigInt(b) => b.clone(),
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_big_decimal(&self) -> Option<BigDecimal> {
        match &self.value {
            DocumentValue::Number(NumberValue::Float(nf)) => Some(match nf {
                &NumberFloat::Float(f) => BigDecimal::try_from(f).ok()?,
                &NumberFloat::Double(d) => BigDecimal::try_from(d).ok()?,
                NumberFloat::BigDecimal(bd) => bd.clone(),
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Document>> {
        if let DocumentValue::List(document_list) = &self.value {
            Some(document_list)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, Document>> {
        if let DocumentValue::Map(document_map) = &self.value {
            Some(document_map)
        } else {
            None
        }
    }
}

//////////////////////////////////////////////////////////////////
// Conversions of documents to other types
//////////////////////////////////////////////////////////////////

impl TryFrom<Document> for ByteBuffer {
    type Error = DocumentError;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        if let DocumentValue::Blob(b) = value.value {
            Ok(b)
        } else {
            Err(DocumentError::DocumentConversion("blob".to_string()))
        }
    }
}

impl TryFrom<Document> for bool {
    type Error = DocumentError;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        if let DocumentValue::Boolean(b) = value.value {
            Ok(b)
        } else {
            Err(DocumentError::DocumentConversion("boolean".to_string()))
        }
    }
}

impl TryFrom<Document> for String {
    type Error = DocumentError;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        if let DocumentValue::String(s) = value.value {
            Ok(s)
        } else {
            Err(DocumentError::DocumentConversion("string".to_string()))
        }
    }
}

impl TryFrom<Document> for Instant {
    type Error = DocumentError;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        if let DocumentValue::Timestamp(t) = value.value {
            Ok(t)
        } else {
            Err(DocumentError::DocumentConversion("timestamp".to_string()))
        }
    }
}

macro_rules! int_try_from_document {
    ($t:ty, $name:literal) => {
        impl TryFrom<Document> for $t {
            type Error = DocumentError;

            fn try_from(value: Document) -> Result<Self, Self::Error> {
                match value.value {
                    DocumentValue::Number(NumberValue::Integer(ni)) => match ni {
                        NumberInteger::Byte(b) => Ok(b as $t),
                        NumberInteger::Short(s) => Ok(s as $t),
                        NumberInteger::Integer(i) => Ok(i as $t),
                        NumberInteger::Long(l) => Ok(l as $t),
                        NumberInteger::BigInt(b) => TryInto::<$t>::try_into(&b)
                            .map_err(|_| DocumentError::DocumentConversion($name.to_string())),
                    },
                    _ => Err(DocumentError::DocumentConversion($name.to_string())),
                }
            }
        }
    };
}
int_try_from_document!(i8, "i8");
int_try_from_document!(i16, "i16");
int_try_from_document!(i32, "i32");
int_try_from_document!(i64, "i64");

impl TryFrom<Document> for f32 {
    type Error = DocumentError;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        match value.value {
            DocumentValue::Number(NumberValue::Float(nf)) => match nf {
                NumberFloat::Float(f) => Ok(f),
                NumberFloat::Double(d) => Ok(d as f32),
                NumberFloat::BigDecimal(bd) => bd
                    .to_string()
                    .parse()
                    .map_err(|_| DocumentError::DocumentConversion("f32".to_string())),
            },
            _ => Err(DocumentError::DocumentConversion("f32".to_string())),
        }
    }
}

impl TryFrom<Document> for f64 {
    type Error = DocumentError;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        match value.value {
            DocumentValue::Number(NumberValue::Float(nf)) => match nf {
                NumberFloat::Float(f) => Ok(f64::from(f)),
                NumberFloat::Double(d) => Ok(d),
                NumberFloat::BigDecimal(bd) => bd
                    .to_string()
                    .parse()
                    .map_err(|_| DocumentError::DocumentConversion("f64".to_string())),
            },
            _ => Err(DocumentError::DocumentConversion("f64".to_string())),
        }
    }
}

impl TryFrom<Document> for BigInt {
    type Error = DocumentError;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        value
            .as_big_integer()
            .ok_or_else(|| DocumentError::DocumentConversion("BigInteger".to_string()))
    }
}

impl TryFrom<Document> for BigDecimal {
    type Error = DocumentError;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        value
            .as_big_decimal()
            .ok_or_else(|| DocumentError::DocumentConversion("BigDecimal".to_string()))
    }
}

impl<T: TryFrom<Document, Error = DocumentError>> TryFrom<Document> for Vec<T> {
    type Error = DocumentError;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        let DocumentValue::List(vec) = value.value else {
            return Err(DocumentError::DocumentConversion("Vec".to_string()));
        };
        let mut result: Vec<T> = Vec::with_capacity(vec.len());
        for doc in vec {
            result.push(T::try_from(doc)?);
        }
        Ok(result)
    }
}

impl<T: TryFrom<Document, Error = DocumentError>> TryFrom<Document> for IndexMap<String, T> {
    type Error = DocumentError;

    fn try_from(value: Document) -> Result<Self, Self::Error> {
        let DocumentValue::Map(map) = value.value else {
            return Err(DocumentError::DocumentConversion("Map".to_string()));
        };
        let mut result: IndexMap<String, T> = IndexMap::with_capacity(map.len());
        for (key, val) in map {
            result.insert(key, T::try_from(val)?);
        }
        Ok(result)
    }
}

//////////////////////////////////////////////////////////////////
// Conversions INTO Document types
//////////////////////////////////////////////////////////////////

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document {
            schema: BOOLEAN.clone(),
            value: DocumentValue::Boolean(value),
            discriminator: None,
        }
    }
}

impl From<i8> for Document {
    fn from(value: i8) -> Self {
        Document {
            schema: BYTE.clone(),
            value: DocumentValue::Number(NumberValue::Integer(NumberInteger::Byte(value))),
            discriminator: None,
        }
    }
}

impl From<i16> for Document {
    fn from(value: i16) -> Self {
        Document {
            schema: SHORT.clone(),
            value: DocumentValue::Number(NumberValue::Integer(NumberInteger::Short(value))),
            discriminator: None,
        }
    }
}

impl From<i32> for Document {
    fn from(value: i32) -> Self {
        Document {
            schema: INTEGER.clone(),
            value: DocumentValue::Number(NumberValue::Integer(NumberInteger::Integer(value))),
            discriminator: None,
        }
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Document {
            schema: LONG.clone(),
            value: DocumentValue::Number(NumberValue::Integer(NumberInteger::Long(value))),
            discriminator: None,
        }
    }
}

impl From<f32> for Document {
    fn from(value: f32) -> Self {
        Document {
            schema: FLOAT.clone(),
            value: DocumentValue::Number(NumberValue::Float(NumberFloat::Float(value))),
            discriminator: None,
        }
    }
}

impl From<f64> for Document {
    fn from(value: f64) -> Self {
        Document {
            schema: DOUBLE.clone(),
            value: DocumentValue::Number(NumberValue::Float(NumberFloat::Double(value))),
            discriminator: None,
        }
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document {
            schema: STRING.clone(),
            value: DocumentValue::String(value.to_string()),
            discriminator: None,
        }
    }
}

impl From<BigInt> for Document {
    fn from(value: BigInt) -> Self {
        Document {
            schema: BIG_INTEGER.clone(),
            value: DocumentValue::Number(NumberValue::Integer(NumberInteger::BigInt(value))),
            discriminator: None,
        }
    }
}

impl From<BigDecimal> for Document {
    fn from(value: BigDecimal) -> Self {
        Document {
            schema: BIG_DECIMAL.clone(),
            value: DocumentValue::Number(NumberValue::Float(NumberFloat::BigDecimal(value))),
            discriminator: None,
        }
    }
}

impl From<ByteBuffer> for Document {
    fn from(value: ByteBuffer) -> Self {
        Document {
            schema: BLOB.clone(),
            value: DocumentValue::Blob(value),
            discriminator: None,
        }
    }
}

impl From<Instant> for Document {
    fn from(value: Instant) -> Self {
        Document {
            schema: TIMESTAMP.clone(),
            value: DocumentValue::Timestamp(value),
            discriminator: None,
        }
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document {
            schema: STRING.clone(),
            value: DocumentValue::String(value),
            discriminator: None,
        }
    }
}

lazy_schema!(
    LIST_DOCUMENT_SCHEMA,
    Schema::list_builder(DOCUMENT.id().clone(), traits![])
        .put_member("member", &DOCUMENT, traits![])
        .build()
);
impl<T: Into<Document>> From<Vec<T>> for Document {
    fn from(value: Vec<T>) -> Self {
        let result = value.into_iter().map(Into::into).collect();
        Document {
            schema: LIST_DOCUMENT_SCHEMA.clone(),
            value: DocumentValue::List(result),
            discriminator: None,
        }
    }
}

lazy_schema!(
    MAP_DOCUMENT_SCHEMA,
    Schema::map_builder(DOCUMENT.id().clone(), traits![])
        .put_member("key", &STRING, traits![])
        .put_member("value", &DOCUMENT, traits![])
        .build()
);
impl<T: Into<Document>> From<IndexMap<String, T>> for Document {
    fn from(value: IndexMap<String, T>) -> Self {
        let mut result = IndexMap::with_capacity(value.len());
        for (key, value) in value {
            result.insert(key, value.into());
        }
        Document {
            schema: MAP_DOCUMENT_SCHEMA.clone(),
            value: DocumentValue::Map(result),
            discriminator: None,
        }
    }
}
