#![allow(dead_code)]

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use indexmap::IndexMap;
use jiter::{Jiter, NumberAny, NumberInt, Peek};
use smithy4rs_core::prelude::DOCUMENT;
use smithy4rs_core::schema::{Document, DocumentValue, SchemaRef};
use smithy4rs_core::serde::de::Deserializer;
use smithy4rs_core::{BigDecimal, BigInt, ByteBuffer, Instant};

use crate::errors::JsonSerdeError;

/// Reads a single JSON value, pulled lazily off a [`Jiter`].
pub struct JsonDeserializer<'de> {
    jiter: &'de mut Jiter<'de>,
}

impl<'de> JsonDeserializer<'de> {
    pub fn new(jiter: &'de mut Jiter<'de>) -> Self {
        JsonDeserializer { jiter }
    }

    fn known_int(&mut self) -> Result<i64, JsonSerdeError> {
        let peek = self.jiter.peek()?;
        match self.jiter.known_number(peek)? {
            NumberAny::Int(NumberInt::Int(i)) => Ok(i),
            NumberAny::Int(NumberInt::BigInt(_)) => Err(JsonSerdeError::DeserializationError(
                "Unexpected big integer value".to_string(),
            )),
            NumberAny::Float(_) => Err(JsonSerdeError::DeserializationError(
                "Unexpected float value".to_string(),
            )),
        }
    }

    fn known_float(&mut self) -> Result<f64, JsonSerdeError> {
        let peek = self.jiter.peek()?;
        match self.jiter.known_number(peek)? {
            NumberAny::Float(f) => Ok(f),
            NumberAny::Int(NumberInt::Int(i)) => Ok(i as f64),
            NumberAny::Int(NumberInt::BigInt(i)) => i.to_string().parse().map_err(|e| {
                JsonSerdeError::DeserializationError(format!("invalid number: {e}"))
            }),
        }
    }
}

impl<'de> Deserializer<'de> for JsonDeserializer<'de> {
    type Error = JsonSerdeError;

    fn read_struct<T>(
        &mut self,
        schema: &SchemaRef,
        mut state: T,
        mut consumer: impl FnMut(T, SchemaRef, &mut Self) -> Result<T, Self::Error>,
    ) -> Result<T, Self::Error> {
        let mut next_key = self.jiter.next_object()?;
        while let Some(key) = next_key {
            match schema.get_member(key) {
                Some(member_schema) => {
                    let member_schema = member_schema.clone();
                    state = consumer(state, member_schema, self)?;
                }
                None => self.jiter.next_skip()?,
            }
            next_key = self.jiter.next_key()?;
        }
        Ok(state)
    }

    fn read_list<T>(
        &mut self,
        _schema: &SchemaRef,
        mut state: T,
        mut consumer: impl FnMut(T, &mut Self) -> Result<T, Self::Error>,
    ) -> Result<T, Self::Error> {
        let mut next = self.jiter.next_array()?;
        while next.is_some() {
            state = consumer(state, self)?;
            next = self.jiter.array_step()?;
        }
        Ok(state)
    }

    fn read_map<T>(
        &mut self,
        _schema: &SchemaRef,
        mut state: T,
        mut consumer: impl FnMut(T, String, &mut Self) -> Result<T, Self::Error>,
    ) -> Result<T, Self::Error> {
        let mut next_key = self.jiter.next_object()?;
        while let Some(key) = next_key {
            let key = key.to_string();
            state = consumer(state, key, self)?;
            next_key = self.jiter.next_key()?;
        }
        Ok(state)
    }

    fn read_boolean(&mut self, _: &SchemaRef) -> Result<bool, Self::Error> {
        let peek = self.jiter.peek()?;
        Ok(self.jiter.known_bool(peek)?)
    }

    fn read_byte(&mut self, _: &SchemaRef) -> Result<i8, Self::Error> {
        Ok(self.known_int()? as i8)
    }

    fn read_short(&mut self, _: &SchemaRef) -> Result<i16, Self::Error> {
        Ok(self.known_int()? as i16)
    }

    fn read_integer(&mut self, _: &SchemaRef) -> Result<i32, Self::Error> {
        Ok(self.known_int()? as i32)
    }

    fn read_long(&mut self, _: &SchemaRef) -> Result<i64, Self::Error> {
        self.known_int()
    }

    fn read_float(&mut self, _: &SchemaRef) -> Result<f32, Self::Error> {
        Ok(self.known_float()? as f32)
    }

    fn read_double(&mut self, _: &SchemaRef) -> Result<f64, Self::Error> {
        self.known_float()
    }

    fn read_big_integer(&mut self, _: &SchemaRef) -> Result<BigInt, Self::Error> {
        let peek = self.jiter.peek()?;
        match self.jiter.known_number(peek)? {
            NumberAny::Int(NumberInt::Int(i)) => Ok(BigInt::from(i)),
            NumberAny::Int(NumberInt::BigInt(i)) => Ok(i),
            NumberAny::Float(_) => Err(JsonSerdeError::DeserializationError(
                "Unexpected float value".to_string(),
            )),
        }
    }

    fn read_big_decimal(&mut self, _: &SchemaRef) -> Result<BigDecimal, Self::Error> {
        let peek = self.jiter.peek()?;
        match self.jiter.known_number(peek)? {
            NumberAny::Int(NumberInt::Int(i)) => Ok(BigDecimal::from(i)),
            NumberAny::Int(NumberInt::BigInt(i)) => Ok(BigDecimal::from(i)),
            NumberAny::Float(f) => BigDecimal::try_from(f).map_err(|e| {
                JsonSerdeError::DeserializationError(format!("invalid big decimal: {e}"))
            }),
        }
    }

    fn read_string(&mut self, _: &SchemaRef) -> Result<String, Self::Error> {
        Ok(self.jiter.known_str()?.to_string())
    }

    fn read_blob(&mut self, schema: &SchemaRef) -> Result<ByteBuffer, Self::Error> {
        let encoded = self.read_string(schema)?;
        let bytes = BASE64.decode(encoded)?;
        Ok(ByteBuffer::from_bytes(&bytes))
    }

    fn read_timestamp(&mut self, _: &SchemaRef) -> Result<Instant, Self::Error> {
        let seconds = self.known_float()?;
        let millis = (seconds * 1000.0) as i64;
        Instant::from_epoch_milliseconds(millis)
            .map_err(|e| JsonSerdeError::DeserializationError(format!("invalid timestamp: {e:?}")))
    }

    fn read_document(&mut self, schema: &SchemaRef) -> Result<Document, Self::Error> {
        let peek = self.jiter.peek()?;
        match peek {
            Peek::Null => {
                self.jiter.known_null()?;
                Ok(Document::new(DOCUMENT.clone(), DocumentValue::Null, None))
            }
            Peek::True | Peek::False => Ok(self.jiter.known_bool(peek)?.into()),
            Peek::String => Ok(self.jiter.known_str()?.to_string().into()),
            Peek::Array => {
                let mut items = Vec::new();
                let mut next = self.jiter.next_array()?;
                while next.is_some() {
                    items.push(self.read_document(schema)?);
                    next = self.jiter.array_step()?;
                }
                Ok(items.into())
            }
            Peek::Object => {
                let mut map = IndexMap::new();
                let mut next_key = self.jiter.next_object()?;
                while let Some(key) = next_key {
                    let key = key.to_string();
                    let value = self.read_document(schema)?;
                    map.insert(key, value);
                    next_key = self.jiter.next_key()?;
                }
                Ok(map.into())
            }
            other => match self.jiter.known_number(other)? {
                NumberAny::Int(NumberInt::Int(i)) => Ok(i.into()),
                NumberAny::Int(NumberInt::BigInt(i)) => Ok(i.into()),
                NumberAny::Float(f) => Ok(f.into()),
            },
        }
    }

    fn is_null(&mut self) -> bool {
        matches!(self.jiter.peek(), Ok(Peek::Null))
    }

    fn read_null(&mut self) -> Result<(), Self::Error> {
        Ok(self.jiter.known_null()?)
    }
}
