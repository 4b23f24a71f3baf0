use std::io;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use smithy4rs_core::schema::{Document, DocumentValue, SchemaRef};
use smithy4rs_core::serde::se::{
    ListSerializer, MapSerializer, SerializeWithSchema, Serializer, StructSerializer,
};
use smithy4rs_core::{BigDecimal, BigInt, ByteBuffer, Instant};

use crate::errors::JsonSerdeError;
use crate::get_member_name;

pub fn to_string<T: SerializeWithSchema + ?Sized>(
    schema: &SchemaRef,
    value: &T,
) -> Result<String, JsonSerdeError> {
    let mut buf: Vec<u8> = Vec::with_capacity(128);
    let mut ser = JsonSerializer::new(&mut buf);
    value.serialize_with_schema(schema, &mut ser)?;
    String::from_utf8(buf).map_err(|e| JsonSerdeError::SerializationError(e.to_string()))
}

fn write_escaped_string<W: io::Write>(writer: &mut W, value: &str) -> Result<(), JsonSerdeError> {
    writer.write_all(b"\"")?;
    for c in value.chars() {
        match c {
            '"' => writer.write_all(b"\\\"")?,
            '\\' => writer.write_all(b"\\\\")?,
            '\n' => writer.write_all(b"\\n")?,
            '\r' => writer.write_all(b"\\r")?,
            '\t' => writer.write_all(b"\\t")?,
            c if (c as u32) < 0x20 => write!(writer, "\\u{:04x}", c as u32)?,
            c => {
                let mut buf = [0u8; 4];
                writer.write_all(c.encode_utf8(&mut buf).as_bytes())?;
            }
        }
    }
    writer.write_all(b"\"")?;
    Ok(())
}

/// Writer-backed JSON serializer. Writes directly into `W` rather than building
/// an intermediate value tree.
pub struct JsonSerializer<W: io::Write> {
    writer: W,
}

impl<W: io::Write> JsonSerializer<W> {
    pub const fn new(writer: W) -> Self {
        JsonSerializer { writer }
    }
}

impl<'w, W: io::Write> Serializer for &'w mut JsonSerializer<W> {
    type Ok = ();
    type Error = JsonSerdeError;

    type SerializeStruct = JsonAggregateSerializer<'w, W>;
    type SerializeList = JsonAggregateSerializer<'w, W>;
    type SerializeMap = JsonAggregateSerializer<'w, W>;

    #[inline]
    fn write_struct(self, _: &SchemaRef, _: usize) -> Result<Self::SerializeStruct, Self::Error> {
        self.writer.write_all(b"{")?;
        Ok(JsonAggregateSerializer {
            ser: self,
            state: State::First,
        })
    }

    #[inline]
    fn write_list(self, _: &SchemaRef, _: usize) -> Result<Self::SerializeList, Self::Error> {
        self.writer.write_all(b"[")?;
        Ok(JsonAggregateSerializer {
            ser: self,
            state: State::First,
        })
    }

    #[inline]
    fn write_map(self, _: &SchemaRef, _: usize) -> Result<Self::SerializeMap, Self::Error> {
        self.writer.write_all(b"{")?;
        Ok(JsonAggregateSerializer {
            ser: self,
            state: State::First,
        })
    }

    #[inline]
    fn write_boolean(self, _: &SchemaRef, value: bool) -> Result<(), Self::Error> {
        self.writer
            .write_all(if value { b"true" } else { b"false" })?;
        Ok(())
    }

    #[inline]
    fn write_byte(self, _: &SchemaRef, value: i8) -> Result<(), Self::Error> {
        let mut buf = itoa::Buffer::new();
        self.writer.write_all(buf.format(value).as_bytes())?;
        Ok(())
    }

    #[inline]
    fn write_short(self, _: &SchemaRef, value: i16) -> Result<(), Self::Error> {
        let mut buf = itoa::Buffer::new();
        self.writer.write_all(buf.format(value).as_bytes())?;
        Ok(())
    }

    #[inline]
    fn write_integer(self, _: &SchemaRef, value: i32) -> Result<(), Self::Error> {
        let mut buf = itoa::Buffer::new();
        self.writer.write_all(buf.format(value).as_bytes())?;
        Ok(())
    }

    #[inline]
    fn write_long(self, _: &SchemaRef, value: i64) -> Result<(), Self::Error> {
        let mut buf = itoa::Buffer::new();
        self.writer.write_all(buf.format(value).as_bytes())?;
        Ok(())
    }

    #[inline]
    fn write_float(self, _: &SchemaRef, value: f32) -> Result<(), Self::Error> {
        if value.is_nan() {
            self.writer.write_all(b"\"NaN\"")?;
        } else if value.is_infinite() {
            self.writer.write_all(if value > 0.0 {
                b"\"Infinity\""
            } else {
                b"\"-Infinity\""
            })?;
        } else {
            let mut buf = ryu::Buffer::new();
            self.writer.write_all(buf.format(value).as_bytes())?;
        }
        Ok(())
    }

    #[inline]
    fn write_double(self, _: &SchemaRef, value: f64) -> Result<(), Self::Error> {
        if value.is_nan() {
            self.writer.write_all(b"\"NaN\"")?;
        } else if value.is_infinite() {
            self.writer.write_all(if value > 0.0 {
                b"\"Infinity\""
            } else {
                b"\"-Infinity\""
            })?;
        } else {
            let mut buf = ryu::Buffer::new();
            self.writer.write_all(buf.format(value).as_bytes())?;
        }
        Ok(())
    }

    #[inline]
    fn write_big_integer(self, _: &SchemaRef, value: &BigInt) -> Result<(), Self::Error> {
        self.writer.write_all(value.to_string().as_bytes())?;
        Ok(())
    }

    #[inline]
    fn write_big_decimal(self, _: &SchemaRef, value: &BigDecimal) -> Result<(), Self::Error> {
        self.writer.write_all(value.to_string().as_bytes())?;
        Ok(())
    }

    #[inline]
    fn write_string(self, _: &SchemaRef, value: &str) -> Result<(), Self::Error> {
        write_escaped_string(&mut self.writer, value)
    }

    #[inline]
    fn write_blob(self, _: &SchemaRef, value: &ByteBuffer) -> Result<(), Self::Error> {
        let encoded = BASE64.encode(value.to_bytes());
        write_escaped_string(&mut self.writer, &encoded)
    }

    #[inline]
    fn write_timestamp(self, _: &SchemaRef, value: &Instant) -> Result<(), Self::Error> {
        let seconds = value.epoch_milliseconds() as f64 / 1000.0;
        let mut buf = ryu::Buffer::new();
        self.writer.write_all(buf.format(seconds).as_bytes())?;
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
        self.writer.write_all(b"null")?;
        Ok(())
    }

    #[inline]
    fn skip(self, _: &SchemaRef) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline]
    fn flush(self) -> Result<(), Self::Error> {
        self.writer.flush()?;
        Ok(())
    }
}

#[doc(hidden)]
pub struct JsonAggregateSerializer<'w, W: io::Write> {
    ser: &'w mut JsonSerializer<W>,
    state: State,
}

#[derive(PartialEq, Eq)]
enum State {
    First,
    Rest,
}

macro_rules! start_value {
    ($self:ident) => {
        if $self.state == State::First {
            $self.state = State::Rest;
        } else {
            $self.ser.writer.write_all(b",")?;
        }
    };
}

impl<W: io::Write> ListSerializer for JsonAggregateSerializer<'_, W> {
    type Ok = ();
    type Error = JsonSerdeError;

    #[inline]
    fn serialize_element<T>(
        &mut self,
        element_schema: &SchemaRef,
        value: &T,
    ) -> Result<(), Self::Error>
    where
        T: ?Sized + SerializeWithSchema,
    {
        start_value!(self);
        value.serialize_with_schema(element_schema, &mut *self.ser)
    }

    #[inline]
    fn end(self, _: &SchemaRef) -> Result<Self::Ok, Self::Error> {
        self.ser.writer.write_all(b"]")?;
        Ok(())
    }
}

impl<W: io::Write> MapSerializer for JsonAggregateSerializer<'_, W> {
    type Ok = ();
    type Error = JsonSerdeError;

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
        start_value!(self);
        key.serialize_with_schema(key_schema, &mut *self.ser)?;
        self.ser.writer.write_all(b":")?;
        value.serialize_with_schema(value_schema, &mut *self.ser)
    }

    #[inline]
    fn end(self, _: &SchemaRef) -> Result<Self::Ok, Self::Error> {
        self.ser.writer.write_all(b"}")?;
        Ok(())
    }
}

impl<W: io::Write> StructSerializer for JsonAggregateSerializer<'_, W> {
    type Ok = ();
    type Error = JsonSerdeError;

    #[inline]
    fn serialize_member<T>(
        &mut self,
        member_schema: &SchemaRef,
        value: &T,
    ) -> Result<(), Self::Error>
    where
        T: ?Sized + SerializeWithSchema,
    {
        start_value!(self);
        let name = get_member_name(member_schema)?;
        write_escaped_string(&mut self.ser.writer, name)?;
        self.ser.writer.write_all(b":")?;
        value.serialize_with_schema(member_schema, &mut *self.ser)
    }

    #[inline]
    fn end(self, _: &SchemaRef) -> Result<Self::Ok, Self::Error> {
        self.ser.writer.write_all(b"}")?;
        Ok(())
    }
}
