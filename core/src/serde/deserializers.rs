#![allow(dead_code)]

use std::fmt::Display;

use crate::schema::{Document, SchemaRef};
use crate::{BigDecimal, BigInt, ByteBuffer, Instant};
use indexmap::IndexMap;

/// Error type bound required of every [`Deserializer::Error`].
///
/// Mirrors `serde::de::Error`: codec-specific error types need a way to be
/// constructed from an arbitrary display-able message for schema mismatches
/// and other runtime-detected deserialization failures.
pub trait Error: std::error::Error + Sized {
    fn custom<T: Display>(msg: T) -> Self;
}

/// A value that knows how to read itself out of a [`Deserializer`] given a [`Schema`].
///
/// Mirrors [`crate::serde::se::SerializeWithSchema`]; implemented once per generated
/// shape (via its builder) and for the handful of primitive/collection types below.
pub trait DeserializeWithSchema<'de>: Sized {
    fn deserialize_with_schema<D>(schema: &SchemaRef, deserializer: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>;
}

/// Visitor protocol driven by a shape's [`Schema`], symmetric to [`crate::serde::se::Serializer`].
///
/// Aggregate reads are callback-driven rather than reader-object-driven: `read_struct`
/// and friends fold a piece of state (usually a generated builder) across each member
/// as it is encountered, which keeps the API free of extra reader types per codec.
pub trait Deserializer<'de>: Sized {
    type Error: Error;

    /// Reads a structure or union, folding `state` (typically a shape builder) across
    /// each member present in the input. `consumer` receives the member's [`SchemaRef`]
    /// by value so it can be compared against the shape's static member schemas.
    fn read_struct<T>(
        &mut self,
        schema: &SchemaRef,
        state: T,
        consumer: impl FnMut(T, SchemaRef, &mut Self) -> Result<T, Self::Error>,
    ) -> Result<T, Self::Error>;

    /// Reads a list, folding `state` across each element.
    fn read_list<T>(
        &mut self,
        schema: &SchemaRef,
        state: T,
        consumer: impl FnMut(T, &mut Self) -> Result<T, Self::Error>,
    ) -> Result<T, Self::Error>;

    /// Reads a map, folding `state` across each entry. The key is always read as a
    /// `String`; the consumer is responsible for reading the value off `self`.
    fn read_map<T>(
        &mut self,
        schema: &SchemaRef,
        state: T,
        consumer: impl FnMut(T, String, &mut Self) -> Result<T, Self::Error>,
    ) -> Result<T, Self::Error>;

    fn read_boolean(&mut self, schema: &SchemaRef) -> Result<bool, Self::Error>;
    fn read_byte(&mut self, schema: &SchemaRef) -> Result<i8, Self::Error>;
    fn read_short(&mut self, schema: &SchemaRef) -> Result<i16, Self::Error>;
    fn read_integer(&mut self, schema: &SchemaRef) -> Result<i32, Self::Error>;
    fn read_long(&mut self, schema: &SchemaRef) -> Result<i64, Self::Error>;
    fn read_float(&mut self, schema: &SchemaRef) -> Result<f32, Self::Error>;
    fn read_double(&mut self, schema: &SchemaRef) -> Result<f64, Self::Error>;
    fn read_big_integer(&mut self, schema: &SchemaRef) -> Result<BigInt, Self::Error>;
    fn read_big_decimal(&mut self, schema: &SchemaRef) -> Result<BigDecimal, Self::Error>;
    fn read_string(&mut self, schema: &SchemaRef) -> Result<String, Self::Error>;
    fn read_blob(&mut self, schema: &SchemaRef) -> Result<ByteBuffer, Self::Error>;
    fn read_timestamp(&mut self, schema: &SchemaRef) -> Result<Instant, Self::Error>;
    fn read_document(&mut self, schema: &SchemaRef) -> Result<Document, Self::Error>;

    /// Peeks at the next value to determine if it is null, without consuming it.
    fn is_null(&mut self) -> bool;

    /// Consumes a value already known to be null via [`Deserializer::is_null`].
    fn read_null(&mut self) -> Result<(), Self::Error>;
}

macro_rules! primitive_deserialize_with_schema {
    ($ty:ty, $method:ident) => {
        impl<'de> DeserializeWithSchema<'de> for $ty {
            fn deserialize_with_schema<D>(
                schema: &SchemaRef,
                deserializer: &mut D,
            ) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.$method(schema)
            }
        }
    };
}
primitive_deserialize_with_schema!(bool, read_boolean);
primitive_deserialize_with_schema!(i8, read_byte);
primitive_deserialize_with_schema!(i16, read_short);
primitive_deserialize_with_schema!(i32, read_integer);
primitive_deserialize_with_schema!(i64, read_long);
primitive_deserialize_with_schema!(f32, read_float);
primitive_deserialize_with_schema!(f64, read_double);
primitive_deserialize_with_schema!(String, read_string);
primitive_deserialize_with_schema!(BigInt, read_big_integer);
primitive_deserialize_with_schema!(BigDecimal, read_big_decimal);
primitive_deserialize_with_schema!(ByteBuffer, read_blob);
primitive_deserialize_with_schema!(Instant, read_timestamp);
primitive_deserialize_with_schema!(Document, read_document);

impl<'de, T: DeserializeWithSchema<'de>> DeserializeWithSchema<'de> for Vec<T> {
    fn deserialize_with_schema<D>(schema: &SchemaRef, deserializer: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let member_schema = schema.expect_member("member").clone();
        deserializer.read_list(schema, Vec::new(), |mut state, de| {
            state.push(T::deserialize_with_schema(&member_schema, de)?);
            Ok(state)
        })
    }
}

impl<'de, T: DeserializeWithSchema<'de>> DeserializeWithSchema<'de> for IndexMap<String, T> {
    fn deserialize_with_schema<D>(schema: &SchemaRef, deserializer: &mut D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value_schema = schema.expect_member("value").clone();
        deserializer.read_map(schema, IndexMap::new(), |mut state, key, de| {
            let value = T::deserialize_with_schema(&value_schema, de)?;
            state.insert(key, value);
            Ok(state)
        })
    }
}

pub(crate) fn invalid_variant_error<E: Error>(schema: &crate::schema::Schema) -> E {
    E::custom(format!("Unsupported shape type: {:?}", schema.shape_type()))
}
