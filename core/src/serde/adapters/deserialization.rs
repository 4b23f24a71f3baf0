//========================================================================
// Bridge value
// -------------
// A schema-less intermediate form that an arbitrary `serde::Deserializer`
// is materialized into, so that it can then be walked by a schema-driven
// `Deserializer` impl. Only self-describing formats (the ones `deserialize_any`
// works for, e.g. JSON, XML) are supported through this bridge.
//========================================================================

use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::mem;

use bigdecimal::BigDecimal;
use bytebuffer::ByteBuffer;
use indexmap::IndexMap;
use num_bigint::BigInt;
use serde::de::{
    self, Deserialize as SerdeDeserialize, DeserializeSeed, Deserializer as SerdeDeserializer,
    Error as SerdeError, MapAccess, SeqAccess, Visitor,
};
use temporal_rs::Instant;

use crate::schema::{Document, DocumentValue, Schema, SchemaRef};
use crate::serde::de::{Deserializer as SmithyDeserializer, Error as SmithyError};
use crate::serde::deserializers::DeserializeWithSchema;

#[derive(Clone, Debug, PartialEq, Default)]
enum BridgeValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    Seq(Vec<BridgeValue>),
    Map(IndexMap<String, BridgeValue>),
}

impl BridgeValue {
    /// Name used in "expected X, found Y" error messages.
    const fn kind(&self) -> &'static str {
        match self {
            BridgeValue::Null => "null",
            BridgeValue::Bool(_) => "boolean",
            BridgeValue::Int(_) | BridgeValue::UInt(_) => "integer",
            BridgeValue::Float(_) => "float",
            BridgeValue::String(_) => "string",
            BridgeValue::Bytes(_) => "bytes",
            BridgeValue::Seq(_) => "list",
            BridgeValue::Map(_) => "map",
        }
    }
}

impl<'de> SerdeDeserialize<'de> for BridgeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: SerdeDeserializer<'de>,
    {
        deserializer.deserialize_any(BridgeValueVisitor)
    }
}

struct BridgeValueVisitor;
impl<'de> Visitor<'de> for BridgeValueVisitor {
    type Value = BridgeValue;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("any value representable as a Smithy shape")
    }

    fn visit_bool<E: SerdeError>(self, v: bool) -> Result<Self::Value, E> {
        Ok(BridgeValue::Bool(v))
    }

    fn visit_i64<E: SerdeError>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BridgeValue::Int(v))
    }

    fn visit_u64<E: SerdeError>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BridgeValue::UInt(v))
    }

    fn visit_f64<E: SerdeError>(self, v: f64) -> Result<Self::Value, E> {
        Ok(BridgeValue::Float(v))
    }

    fn visit_str<E: SerdeError>(self, v: &str) -> Result<Self::Value, E> {
        Ok(BridgeValue::String(v.to_owned()))
    }

    fn visit_string<E: SerdeError>(self, v: String) -> Result<Self::Value, E> {
        Ok(BridgeValue::String(v))
    }

    fn visit_bytes<E: SerdeError>(self, v: &[u8]) -> Result<Self::Value, E> {
        Ok(BridgeValue::Bytes(v.to_vec()))
    }

    fn visit_byte_buf<E: SerdeError>(self, v: Vec<u8>) -> Result<Self::Value, E> {
        Ok(BridgeValue::Bytes(v))
    }

    fn visit_unit<E: SerdeError>(self) -> Result<Self::Value, E> {
        Ok(BridgeValue::Null)
    }

    fn visit_none<E: SerdeError>(self) -> Result<Self::Value, E> {
        Ok(BridgeValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: SerdeDeserializer<'de>,
    {
        BridgeValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(BridgeValue::Seq(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut result = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, BridgeValue>()? {
            result.insert(key, value);
        }
        Ok(BridgeValue::Map(result))
    }
}

/// Converts a materialized value into a (schema-less) [`Document`], using the fixed
/// prelude schema for each scalar kind -- the same approach the `From<T> for Document`
/// impls use.
fn bridge_value_to_document(value: BridgeValue) -> Document {
    use crate::prelude::DOCUMENT;
    match value {
        BridgeValue::Null => Document::new(DOCUMENT.clone(), DocumentValue::Null, None),
        BridgeValue::Bool(b) => b.into(),
        BridgeValue::Int(i) => i.into(),
        BridgeValue::UInt(u) => i64::try_from(u).unwrap_or(i64::MAX).into(),
        BridgeValue::Float(f) => f.into(),
        BridgeValue::String(s) => s.into(),
        BridgeValue::Bytes(b) => ByteBuffer::from_bytes(&b).into(),
        BridgeValue::Seq(items) => items
            .into_iter()
            .map(bridge_value_to_document)
            .collect::<Vec<_>>()
            .into(),
        BridgeValue::Map(map) => map
            .into_iter()
            .map(|(k, v)| (k, bridge_value_to_document(v)))
            .collect::<IndexMap<_, _>>()
            .into(),
    }
}

//========================================================================
// Errors
//========================================================================

/// Error type produced while walking a [`BridgeValue`] tree.
///
/// Decoupled from whatever `serde::Deserializer` materialized the tree: [`SchemaSeed`]
/// converts this back into the caller's `D::Error` once schema-driven deserialization
/// is done.
#[derive(Debug)]
pub struct BridgeError(String);
impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
impl StdError for BridgeError {}
impl SmithyError for BridgeError {
    fn custom<T: Display>(msg: T) -> Self {
        BridgeError(msg.to_string())
    }
}

fn type_mismatch(expected: &str, found: &BridgeValue) -> BridgeError {
    BridgeError::custom(format!("expected {expected}, found {}", found.kind()))
}

//========================================================================
// Bridge deserializer
//========================================================================

/// Walks a materialized [`BridgeValue`] as a [`SmithyDeserializer`].
///
/// Holds a single "current" value; aggregate reads swap it out for each
/// member/element/entry before handing `&mut self` back to the caller's consumer.
struct BridgeDeserializer {
    value: BridgeValue,
}
impl BridgeDeserializer {
    const fn new(value: BridgeValue) -> Self {
        BridgeDeserializer { value }
    }

    fn take_map(&mut self, expected: &str) -> Result<IndexMap<String, BridgeValue>, BridgeError> {
        match mem::take(&mut self.value) {
            BridgeValue::Map(map) => Ok(map),
            other => Err(type_mismatch(expected, &other)),
        }
    }
}

impl<'de> SmithyDeserializer<'de> for BridgeDeserializer {
    type Error = BridgeError;

    fn read_struct<T>(
        &mut self,
        schema: &SchemaRef,
        mut state: T,
        mut consumer: impl FnMut(T, SchemaRef, &mut Self) -> Result<T, Self::Error>,
    ) -> Result<T, Self::Error> {
        let map = self.take_map("a structure")?;
        for (key, value) in map {
            // Members absent from the schema fall back to the struct's own schema, which
            // can never equal a real member schema, so generated code's fixed comparisons
            // route it to their "unknown member" branch instead of matching anything.
            let member_schema = schema.get_member(&key).cloned().unwrap_or_else(|| schema.clone());
            self.value = value;
            state = consumer(state, member_schema, self)?;
        }
        Ok(state)
    }

    fn read_list<T>(
        &mut self,
        _schema: &SchemaRef,
        mut state: T,
        mut consumer: impl FnMut(T, &mut Self) -> Result<T, Self::Error>,
    ) -> Result<T, Self::Error> {
        let items = match mem::take(&mut self.value) {
            BridgeValue::Seq(items) => items,
            other => return Err(type_mismatch("a list", &other)),
        };
        for item in items {
            self.value = item;
            state = consumer(state, self)?;
        }
        Ok(state)
    }

    fn read_map<T>(
        &mut self,
        _schema: &SchemaRef,
        mut state: T,
        mut consumer: impl FnMut(T, String, &mut Self) -> Result<T, Self::Error>,
    ) -> Result<T, Self::Error> {
        let map = self.take_map("a map")?;
        for (key, value) in map {
            self.value = value;
            state = consumer(state, key, self)?;
        }
        Ok(state)
    }

    fn read_boolean(&mut self, _schema: &SchemaRef) -> Result<bool, Self::Error> {
        match mem::take(&mut self.value) {
            BridgeValue::Bool(b) => Ok(b),
            other => Err(type_mismatch("a boolean", &other)),
        }
    }

    fn read_byte(&mut self, schema: &SchemaRef) -> Result<i8, Self::Error> {
        self.read_long(schema).map(|v| v as i8)
    }

    fn read_short(&mut self, schema: &SchemaRef) -> Result<i16, Self::Error> {
        self.read_long(schema).map(|v| v as i16)
    }

    fn read_integer(&mut self, schema: &SchemaRef) -> Result<i32, Self::Error> {
        self.read_long(schema).map(|v| v as i32)
    }

    fn read_long(&mut self, _schema: &SchemaRef) -> Result<i64, Self::Error> {
        match mem::take(&mut self.value) {
            BridgeValue::Int(i) => Ok(i),
            BridgeValue::UInt(u) => Ok(u as i64),
            other => Err(type_mismatch("an integer", &other)),
        }
    }

    fn read_float(&mut self, schema: &SchemaRef) -> Result<f32, Self::Error> {
        self.read_double(schema).map(|v| v as f32)
    }

    fn read_double(&mut self, _schema: &SchemaRef) -> Result<f64, Self::Error> {
        match mem::take(&mut self.value) {
            BridgeValue::Float(f) => Ok(f),
            BridgeValue::Int(i) => Ok(i as f64),
            BridgeValue::UInt(u) => Ok(u as f64),
            other => Err(type_mismatch("a float", &other)),
        }
    }

    fn read_big_integer(&mut self, _schema: &SchemaRef) -> Result<BigInt, Self::Error> {
        match mem::take(&mut self.value) {
            BridgeValue::Int(i) => Ok(BigInt::from(i)),
            BridgeValue::UInt(u) => Ok(BigInt::from(u)),
            BridgeValue::String(s) => s
                .parse()
                .map_err(|e| BridgeError::custom(format!("invalid big integer {s:?}: {e}"))),
            other => Err(type_mismatch("a big integer", &other)),
        }
    }

    fn read_big_decimal(&mut self, _schema: &SchemaRef) -> Result<BigDecimal, Self::Error> {
        match mem::take(&mut self.value) {
            BridgeValue::Int(i) => Ok(BigDecimal::from(i)),
            BridgeValue::UInt(u) => Ok(BigDecimal::from(u)),
            BridgeValue::Float(f) => BigDecimal::try_from(f)
                .map_err(|e| BridgeError::custom(format!("invalid big decimal: {e}"))),
            BridgeValue::String(s) => s
                .parse()
                .map_err(|e| BridgeError::custom(format!("invalid big decimal {s:?}: {e}"))),
            other => Err(type_mismatch("a big decimal", &other)),
        }
    }

    fn read_string(&mut self, _schema: &SchemaRef) -> Result<String, Self::Error> {
        match mem::take(&mut self.value) {
            BridgeValue::String(s) => Ok(s),
            other => Err(type_mismatch("a string", &other)),
        }
    }

    fn read_blob(&mut self, _schema: &SchemaRef) -> Result<ByteBuffer, Self::Error> {
        match mem::take(&mut self.value) {
            // Only binary formats (e.g. CBOR) visit raw bytes; self-describing formats
            // that encode blobs as (e.g. base64) strings aren't supported by this bridge.
            BridgeValue::Bytes(b) => Ok(ByteBuffer::from_bytes(&b)),
            other => Err(type_mismatch("blob bytes", &other)),
        }
    }

    fn read_timestamp(&mut self, _schema: &SchemaRef) -> Result<Instant, Self::Error> {
        let millis = match mem::take(&mut self.value) {
            BridgeValue::Int(i) => i.saturating_mul(1000),
            BridgeValue::UInt(u) => (u as i64).saturating_mul(1000),
            BridgeValue::Float(f) => (f * 1000.0) as i64,
            other => return Err(type_mismatch("a timestamp", &other)),
        };
        Instant::from_epoch_milliseconds(millis)
            .map_err(|e| BridgeError::custom(format!("invalid timestamp: {e:?}")))
    }

    fn read_document(&mut self, _schema: &SchemaRef) -> Result<Document, Self::Error> {
        Ok(bridge_value_to_document(mem::take(&mut self.value)))
    }

    fn is_null(&mut self) -> bool {
        matches!(self.value, BridgeValue::Null)
    }

    fn read_null(&mut self) -> Result<(), Self::Error> {
        self.value = BridgeValue::Null;
        Ok(())
    }
}

//========================================================================
// Deserialization Adapter
//========================================================================

/// Bridges `serde` deserialization into schema-guided deserialization.
///
/// Used inside generated `serde::Deserialize` implementations when the `serde-adapter`
/// feature is enabled. Unlike [`super::serialization::SerAdapter`], this can't stream:
/// it materializes the whole input into a schema-less [`BridgeValue`] tree up front
/// (via `deserialize_any`), then walks that tree using the target shape's schema. This
/// only works against self-describing formats (JSON, XML) -- the same ones the derived
/// `serde::Serialize`/`Deserialize` impls are tested against.
pub struct SchemaSeed<T> {
    schema: SchemaRef,
    _marker: std::marker::PhantomData<T>,
}
impl<T> SchemaSeed<T> {
    #[must_use]
    pub fn new(schema: &SchemaRef) -> Self {
        SchemaSeed {
            schema: schema.clone(),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<'de, T> DeserializeSeed<'de> for SchemaSeed<T>
where
    T: DeserializeWithSchema<'de>,
{
    type Value = T;

    fn deserialize<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: SerdeDeserializer<'de>,
    {
        let value = BridgeValue::deserialize(deserializer)?;
        let mut bridge = BridgeDeserializer::new(value);
        T::deserialize_with_schema(&self.schema, &mut bridge).map_err(de::Error::custom)
    }
}
