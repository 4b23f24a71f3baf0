use smithy4rs_core::schema::{Document, DocumentValue, SchemaRef};
use smithy4rs_core::serde::se::{
    ListSerializer, MapSerializer, SerializeWithSchema, Serializer, StructSerializer,
};
use smithy4rs_core::{BigDecimal, BigInt, ByteBuffer, Instant};

use crate::errors::CborSerdeError;
use crate::get_member_name;

/// Writing to an in-memory `Vec<u8>` cannot fail; `minicbor`'s own runtime
/// crate treats this the same way (see `aws-smithy-cbor::encode::Encoder`).
const INFALLIBLE_WRITE: &str = "write to Vec<u8> failed";

pub fn to_bytes<T: SerializeWithSchema + ?Sized>(
    schema: &SchemaRef,
    value: &T,
) -> Result<Vec<u8>, CborSerdeError> {
    let mut ser = CborSerializer::new();
    value.serialize_with_schema(schema, &mut ser)?;
    Ok(ser.into_bytes())
}

/// Buffer-backed CBOR serializer built directly on `minicbor`'s low-level encoder.
pub struct CborSerializer {
    encoder: minicbor::Encoder<Vec<u8>>,
}

impl CborSerializer {
    pub fn new() -> Self {
        CborSerializer {
            encoder: minicbor::Encoder::new(Vec::with_capacity(128)),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.encoder.into_writer()
    }
}

impl Default for CborSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl<'w> Serializer for &'w mut CborSerializer {
    type Ok = ();
    type Error = CborSerdeError;

    type SerializeStruct = CborAggregateSerializer<'w>;
    type SerializeList = CborAggregateSerializer<'w>;
    type SerializeMap = CborAggregateSerializer<'w>;

    #[inline]
    fn write_struct(self, _: &SchemaRef, _: usize) -> Result<Self::SerializeStruct, Self::Error> {
        // Member count isn't reliable here (absent optionals are skipped), so
        // struct members are always written as an indefinite-length map.
        self.encoder.begin_map().expect(INFALLIBLE_WRITE);
        Ok(CborAggregateSerializer {
            ser: self,
            indefinite: true,
        })
    }

    #[inline]
    fn write_list(self, _: &SchemaRef, size: usize) -> Result<Self::SerializeList, Self::Error> {
        self.encoder.array(size as u64).expect(INFALLIBLE_WRITE);
        Ok(CborAggregateSerializer {
            ser: self,
            indefinite: false,
        })
    }

    #[inline]
    fn write_map(self, _: &SchemaRef, size: usize) -> Result<Self::SerializeMap, Self::Error> {
        self.encoder.map(size as u64).expect(INFALLIBLE_WRITE);
        Ok(CborAggregateSerializer {
            ser: self,
            indefinite: false,
        })
    }

    #[inline]
    fn write_boolean(self, _: &SchemaRef, value: bool) -> Result<(), Self::Error> {
        self.encoder.bool(value).expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_byte(self, _: &SchemaRef, value: i8) -> Result<(), Self::Error> {
        self.encoder.i8(value).expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_short(self, _: &SchemaRef, value: i16) -> Result<(), Self::Error> {
        self.encoder.i16(value).expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_integer(self, _: &SchemaRef, value: i32) -> Result<(), Self::Error> {
        self.encoder.i32(value).expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_long(self, _: &SchemaRef, value: i64) -> Result<(), Self::Error> {
        self.encoder.i64(value).expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_float(self, _: &SchemaRef, value: f32) -> Result<(), Self::Error> {
        self.encoder.f32(value).expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_double(self, _: &SchemaRef, value: f64) -> Result<(), Self::Error> {
        self.encoder.f64(value).expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_big_integer(self, _: &SchemaRef, value: &BigInt) -> Result<(), Self::Error> {
        self.encoder
            .str(&value.to_string())
            .expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_big_decimal(self, _: &SchemaRef, value: &BigDecimal) -> Result<(), Self::Error> {
        self.encoder
            .str(&value.to_string())
            .expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_string(self, _: &SchemaRef, value: &str) -> Result<(), Self::Error> {
        self.encoder.str(value).expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_blob(self, _: &SchemaRef, value: &ByteBuffer) -> Result<(), Self::Error> {
        self.encoder
            .bytes(&value.to_bytes())
            .expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_timestamp(self, _: &SchemaRef, value: &Instant) -> Result<(), Self::Error> {
        let seconds = value.epoch_milliseconds() as f64 / 1000.0;
        self.encoder
            .tag(minicbor::data::Tag::Timestamp)
            .expect(INFALLIBLE_WRITE);
        self.encoder.f64(seconds).expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn write_document(self, schema: &SchemaRef, value: &Document) -> Result<(), Self::Error> {
        if matches!(value.value(), DocumentValue::Null) {
            return self.write_null(schema);
        }
        value.serialize_with_schema(value.schema(), self)
    }

    #[inline]
    fn write_null(self, _: &SchemaRef) -> Result<(), Self::Error> {
        self.encoder.null().expect(INFALLIBLE_WRITE);
        Ok(())
    }

    #[inline]
    fn skip(self, _: &SchemaRef) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn flush(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[doc(hidden)]
pub struct CborAggregateSerializer<'w> {
    ser: &'w mut CborSerializer,
    indefinite: bool,
}

impl ListSerializer for CborAggregateSerializer<'_> {
    type Ok = ();
    type Error = CborSerdeError;

    #[inline]
    fn serialize_element<T>(
        &mut self,
        element_schema: &SchemaRef,
        value: &T,
    ) -> Result<(), Self::Error>
    where
        T: ?Sized + SerializeWithSchema,
    {
        value.serialize_with_schema(element_schema, &mut *self.ser)
    }

    #[inline]
    fn end(self, _: &SchemaRef) -> Result<Self::Ok, Self::Error> {
        if self.indefinite {
            self.ser.encoder.end().expect(INFALLIBLE_WRITE);
        }
        Ok(())
    }
}

impl MapSerializer for CborAggregateSerializer<'_> {
    type Ok = ();
    type Error = CborSerdeError;

    #[inline]
    fn serialize_entry<K, V>(
        &mut self,
        key_schema: &SchemaRef,
        value_schema: &SchemaRef,
        key: &K,
        value: &V,
    ) -> Result<(), Self::Error>
    where
        K: ?Sized + SerializeWithSchema,
        V: ?Sized + SerializeWithSchema,
    {
        key.serialize_with_schema(key_schema, &mut *self.ser)?;
        value.serialize_with_schema(value_schema, &mut *self.ser)
    }

    #[inline]
    fn end(self, _: &SchemaRef) -> Result<Self::Ok, Self::Error> {
        if self.indefinite {
            self.ser.encoder.end().expect(INFALLIBLE_WRITE);
        }
        Ok(())
    }
}

impl StructSerializer for CborAggregateSerializer<'_> {
    type Ok = ();
    type Error = CborSerdeError;

    #[inline]
    fn serialize_member<T>(
        &mut self,
        member_schema: &SchemaRef,
        value: &T,
    ) -> Result<(), Self::Error>
    where
        T: ?Sized + SerializeWithSchema,
    {
        let name = get_member_name(member_schema)?;
        self.ser.encoder.str(name).expect(INFALLIBLE_WRITE);
        value.serialize_with_schema(member_schema, &mut *self.ser)
    }

    #[inline]
    fn end(self, _: &SchemaRef) -> Result<Self::Ok, Self::Error> {
        if self.indefinite {
            self.ser.encoder.end().expect(INFALLIBLE_WRITE);
        }
        Ok(())
    }
}
