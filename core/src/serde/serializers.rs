#![allow(dead_code)]

use crate::schema::{Schema, SchemaRef};
use crate::serde::shapes::SchemaShape;
use crate::{BigDecimal, BigInt, ByteBuffer, Instant};
use indexmap::IndexMap;
use std::fmt::Display;

/// Error type bound required of every [`Serializer::Error`].
///
/// Mirrors `serde::ser::Error`: any codec-specific error type needs a way to
/// be constructed from an arbitrary display-able message (used for schema
/// mismatches and other runtime-detected serialization failures).
pub trait Error: std::error::Error + Sized {
    fn custom<T: Display>(msg: T) -> Self;
}

/// A value that knows how to write itself into a [`Serializer`] given a [`Schema`].
///
/// Implemented once per generated shape (and for the handful of primitive/collection
/// types below); the schema argument lets a single implementation support renamed
/// members, sensitivity redaction, etc. without the value type needing to know about it.
pub trait SerializeWithSchema {
    fn serialize_with_schema<S: Serializer>(
        &self,
        schema: &SchemaRef,
        serializer: S,
    ) -> Result<S::Ok, S::Error>;
}

/// Convenience entry point for shapes that carry their own [`SchemaShape::schema`].
pub trait Serialize: SerializeWithSchema + SchemaShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize_with_schema(self.schema(), serializer)
    }
}
impl<T: SerializeWithSchema + SchemaShape> Serialize for T {}

/// Visitor protocol driven by a shape's [`Schema`].
///
/// Unlike `serde::Serializer`, every method is schema-aware: implementations use the
/// passed-in [`SchemaRef`] to look up traits (`@sensitive`, `@jsonName`, ...) that
/// change how a value is written. Consuming `self` (rather than `&mut self`) mirrors
/// `serde::Serializer` and lets nested serializers be distinct types per aggregate.
pub trait Serializer: Sized {
    type Ok;
    type Error: Error;

    type SerializeStruct: StructSerializer<Ok = Self::Ok, Error = Self::Error>;
    type SerializeList: ListSerializer<Ok = Self::Ok, Error = Self::Error>;
    type SerializeMap: MapSerializer<Ok = Self::Ok, Error = Self::Error>;

    fn write_struct(self, schema: &SchemaRef, size: usize) -> Result<Self::SerializeStruct, Self::Error>;
    fn write_list(self, schema: &SchemaRef, size: usize) -> Result<Self::SerializeList, Self::Error>;
    fn write_map(self, schema: &SchemaRef, size: usize) -> Result<Self::SerializeMap, Self::Error>;

    fn write_boolean(self, schema: &SchemaRef, value: bool) -> Result<Self::Ok, Self::Error>;
    fn write_byte(self, schema: &SchemaRef, value: i8) -> Result<Self::Ok, Self::Error>;
    fn write_short(self, schema: &SchemaRef, value: i16) -> Result<Self::Ok, Self::Error>;
    fn write_integer(self, schema: &SchemaRef, value: i32) -> Result<Self::Ok, Self::Error>;
    fn write_long(self, schema: &SchemaRef, value: i64) -> Result<Self::Ok, Self::Error>;
    fn write_float(self, schema: &SchemaRef, value: f32) -> Result<Self::Ok, Self::Error>;
    fn write_double(self, schema: &SchemaRef, value: f64) -> Result<Self::Ok, Self::Error>;
    fn write_big_integer(self, schema: &SchemaRef, value: &BigInt) -> Result<Self::Ok, Self::Error>;
    fn write_big_decimal(self, schema: &SchemaRef, value: &BigDecimal) -> Result<Self::Ok, Self::Error>;
    fn write_string(self, schema: &SchemaRef, value: &str) -> Result<Self::Ok, Self::Error>;
    fn write_blob(self, schema: &SchemaRef, value: &ByteBuffer) -> Result<Self::Ok, Self::Error>;
    fn write_timestamp(self, schema: &SchemaRef, value: &Instant) -> Result<Self::Ok, Self::Error>;
    fn write_document(self, schema: &SchemaRef, value: &crate::schema::Document) -> Result<Self::Ok, Self::Error>;
    fn write_null(self, schema: &SchemaRef) -> Result<Self::Ok, Self::Error>;

    /// Called for an absent optional member. Most implementations simply write nothing.
    fn skip(self, schema: &SchemaRef) -> Result<Self::Ok, Self::Error>;

    fn flush(self) -> Result<Self::Ok, Self::Error>;
}

/// Returned by [`Serializer::write_struct`]; writes each present member in turn.
pub trait StructSerializer {
    type Ok;
    type Error: Error;

    fn serialize_member<T>(&mut self, member_schema: &SchemaRef, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + SerializeWithSchema;

    /// Writes the member only if present; absent members are simply omitted.
    fn serialize_optional_member<T>(
        &mut self,
        member_schema: &SchemaRef,
        value: &Option<T>,
    ) -> Result<(), Self::Error>
    where
        T: SerializeWithSchema,
    {
        match value {
            Some(v) => self.serialize_member(member_schema, v),
            None => Ok(()),
        }
    }

    fn end(self, schema: &SchemaRef) -> Result<Self::Ok, Self::Error>;
}

/// Returned by [`Serializer::write_list`].
pub trait ListSerializer {
    type Ok;
    type Error: Error;

    fn serialize_element<T>(&mut self, element_schema: &SchemaRef, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + SerializeWithSchema;

    fn end(self, schema: &SchemaRef) -> Result<Self::Ok, Self::Error>;
}

/// Returned by [`Serializer::write_map`].
pub trait MapSerializer {
    type Ok;
    type Error: Error;

    fn serialize_entry<K, V>(
        &mut self,
        key_schema: &SchemaRef,
        value_schema: &SchemaRef,
        key: &K,
        value: &V,
    ) -> Result<(), Self::Error>
    where
        K: ?Sized + SerializeWithSchema,
        V: ?Sized + SerializeWithSchema;

    fn end(self, schema: &SchemaRef) -> Result<Self::Ok, Self::Error>;
}

macro_rules! primitive_serialize_with_schema {
    ($ty:ty, $method:ident) => {
        impl SerializeWithSchema for $ty {
            fn serialize_with_schema<S: Serializer>(
                &self,
                schema: &SchemaRef,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.$method(schema, *self)
            }
        }
    };
}
primitive_serialize_with_schema!(bool, write_boolean);
primitive_serialize_with_schema!(i8, write_byte);
primitive_serialize_with_schema!(i16, write_short);
primitive_serialize_with_schema!(i32, write_integer);
primitive_serialize_with_schema!(i64, write_long);
primitive_serialize_with_schema!(f32, write_float);
primitive_serialize_with_schema!(f64, write_double);

impl SerializeWithSchema for str {
    fn serialize_with_schema<S: Serializer>(
        &self,
        schema: &SchemaRef,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.write_string(schema, self)
    }
}

impl SerializeWithSchema for String {
    fn serialize_with_schema<S: Serializer>(
        &self,
        schema: &SchemaRef,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.write_string(schema, self.as_str())
    }
}

impl SerializeWithSchema for BigInt {
    fn serialize_with_schema<S: Serializer>(
        &self,
        schema: &SchemaRef,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.write_big_integer(schema, self)
    }
}

impl SerializeWithSchema for BigDecimal {
    fn serialize_with_schema<S: Serializer>(
        &self,
        schema: &SchemaRef,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.write_big_decimal(schema, self)
    }
}

impl SerializeWithSchema for ByteBuffer {
    fn serialize_with_schema<S: Serializer>(
        &self,
        schema: &SchemaRef,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.write_blob(schema, self)
    }
}

impl SerializeWithSchema for Instant {
    fn serialize_with_schema<S: Serializer>(
        &self,
        schema: &SchemaRef,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.write_timestamp(schema, self)
    }
}

impl<T: SerializeWithSchema> SerializeWithSchema for Vec<T> {
    fn serialize_with_schema<S: Serializer>(
        &self,
        schema: &SchemaRef,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let member_schema = schema.expect_member("member");
        let mut ser = serializer.write_list(schema, self.len())?;
        for value in self {
            ser.serialize_element(member_schema, value)?;
        }
        ser.end(schema)
    }
}

impl<T: SerializeWithSchema> SerializeWithSchema for IndexMap<String, T> {
    fn serialize_with_schema<S: Serializer>(
        &self,
        schema: &SchemaRef,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let key_schema = schema.expect_member("key");
        let value_schema = schema.expect_member("value");
        let mut ser = serializer.write_map(schema, self.len())?;
        for (key, value) in self {
            ser.serialize_entry(key_schema, value_schema, key, value)?;
        }
        ser.end(schema)
    }
}

pub(crate) fn invalid_variant_error<E: Error>(schema: &Schema) -> E {
    E::custom(format!("Unsupported shape type: {:?}", schema.shape_type()))
}
