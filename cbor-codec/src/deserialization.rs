use indexmap::IndexMap;
use minicbor::data::Type;

use smithy4rs_core::prelude::DOCUMENT;
use smithy4rs_core::schema::{Document, DocumentValue, SchemaRef};
use smithy4rs_core::serde::de::Deserializer;
use smithy4rs_core::{BigDecimal, BigInt, ByteBuffer, Instant};

use crate::errors::CborSerdeError;

/// Reads a single CBOR value off a `minicbor::Decoder`.
pub struct CborDeserializer<'de> {
    decoder: &'de mut minicbor::Decoder<'de>,
}

impl<'de> CborDeserializer<'de> {
    pub fn new(decoder: &'de mut minicbor::Decoder<'de>) -> Self {
        CborDeserializer { decoder }
    }

    fn timestamp_seconds(&mut self) -> Result<f64, CborSerdeError> {
        let _ = self.decoder.tag()?;
        Ok(self.decoder.f64()?)
    }
}

impl<'de> Deserializer<'de> for CborDeserializer<'de> {
    type Error = CborSerdeError;

    fn read_struct<T>(
        &mut self,
        schema: &SchemaRef,
        mut state: T,
        mut consumer: impl FnMut(T, SchemaRef, &mut Self) -> Result<T, Self::Error>,
    ) -> Result<T, Self::Error> {
        let len = self.decoder.map()?;
        let mut remaining = len;
        loop {
            match remaining {
                Some(0) => break,
                Some(n) => remaining = Some(n - 1),
                None => {
                    if matches!(self.decoder.datatype()?, Type::Break) {
                        self.decoder.skip()?;
                        break;
                    }
                }
            }
            let key = self.decoder.str()?;
            match schema.get_member(key) {
                Some(member_schema) => {
                    let member_schema = member_schema.clone();
                    state = consumer(state, member_schema, self)?;
                }
                None => self.decoder.skip()?,
            }
        }
        Ok(state)
    }

    fn read_list<T>(
        &mut self,
        _schema: &SchemaRef,
        mut state: T,
        mut consumer: impl FnMut(T, &mut Self) -> Result<T, Self::Error>,
    ) -> Result<T, Self::Error> {
        let len = self.decoder.array()?;
        let mut remaining = len;
        loop {
            match remaining {
                Some(0) => break,
                Some(n) => remaining = Some(n - 1),
                None => {
                    if matches!(self.decoder.datatype()?, Type::Break) {
                        self.decoder.skip()?;
                        break;
                    }
                }
            }
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
        let len = self.decoder.map()?;
        let mut remaining = len;
        loop {
            match remaining {
                Some(0) => break,
                Some(n) => remaining = Some(n - 1),
                None => {
                    if matches!(self.decoder.datatype()?, Type::Break) {
                        self.decoder.skip()?;
                        break;
                    }
                }
            }
            let key = self.decoder.str()?.to_string();
            state = consumer(state, key, self)?;
        }
        Ok(state)
    }

    fn read_boolean(&mut self, _: &SchemaRef) -> Result<bool, Self::Error> {
        Ok(self.decoder.bool()?)
    }

    fn read_byte(&mut self, _: &SchemaRef) -> Result<i8, Self::Error> {
        Ok(self.decoder.i8()?)
    }

    fn read_short(&mut self, _: &SchemaRef) -> Result<i16, Self::Error> {
        Ok(self.decoder.i16()?)
    }

    fn read_integer(&mut self, _: &SchemaRef) -> Result<i32, Self::Error> {
        Ok(self.decoder.i32()?)
    }

    fn read_long(&mut self, _: &SchemaRef) -> Result<i64, Self::Error> {
        Ok(self.decoder.i64()?)
    }

    fn read_float(&mut self, _: &SchemaRef) -> Result<f32, Self::Error> {
        Ok(self.decoder.f32()?)
    }

    fn read_double(&mut self, _: &SchemaRef) -> Result<f64, Self::Error> {
        Ok(self.decoder.f64()?)
    }

    fn read_big_integer(&mut self, _: &SchemaRef) -> Result<BigInt, Self::Error> {
        self.decoder
            .str()?
            .parse()
            .map_err(|e| CborSerdeError::DeserializationError(format!("invalid big integer: {e}")))
    }

    fn read_big_decimal(&mut self, _: &SchemaRef) -> Result<BigDecimal, Self::Error> {
        self.decoder
            .str()?
            .parse()
            .map_err(|e| CborSerdeError::DeserializationError(format!("invalid big decimal: {e}")))
    }

    fn read_string(&mut self, _: &SchemaRef) -> Result<String, Self::Error> {
        Ok(self.decoder.str()?.to_string())
    }

    fn read_blob(&mut self, _: &SchemaRef) -> Result<ByteBuffer, Self::Error> {
        Ok(ByteBuffer::from_bytes(self.decoder.bytes()?))
    }

    fn read_timestamp(&mut self, _: &SchemaRef) -> Result<Instant, Self::Error> {
        let seconds = self.timestamp_seconds()?;
        let millis = (seconds * 1000.0) as i64;
        Instant::from_epoch_milliseconds(millis)
            .map_err(|e| CborSerdeError::DeserializationError(format!("invalid timestamp: {e:?}")))
    }

    fn read_document(&mut self, schema: &SchemaRef) -> Result<Document, Self::Error> {
        match self.decoder.datatype()? {
            Type::Null | Type::Undefined => {
                self.decoder.skip()?;
                Ok(Document::new(DOCUMENT.clone(), DocumentValue::Null, None))
            }
            Type::Bool => Ok(self.decoder.bool()?.into()),
            Type::String | Type::StringIndef => Ok(self.decoder.str()?.to_string().into()),
            Type::Bytes | Type::BytesIndef => {
                Ok(ByteBuffer::from_bytes(self.decoder.bytes()?).into())
            }
            Type::Array | Type::ArrayIndef => {
                let len = self.decoder.array()?;
                let mut items = Vec::new();
                let mut remaining = len;
                loop {
                    match remaining {
                        Some(0) => break,
                        Some(n) => remaining = Some(n - 1),
                        None => {
                            if matches!(self.decoder.datatype()?, Type::Break) {
                                self.decoder.skip()?;
                                break;
                            }
                        }
                    }
                    items.push(self.read_document(schema)?);
                }
                Ok(items.into())
            }
            Type::Map | Type::MapIndef => {
                let len = self.decoder.map()?;
                let mut map = IndexMap::new();
                let mut remaining = len;
                loop {
                    match remaining {
                        Some(0) => break,
                        Some(n) => remaining = Some(n - 1),
                        None => {
                            if matches!(self.decoder.datatype()?, Type::Break) {
                                self.decoder.skip()?;
                                break;
                            }
                        }
                    }
                    let key = self.decoder.str()?.to_string();
                    let value = self.read_document(schema)?;
                    map.insert(key, value);
                }
                Ok(map.into())
            }
            Type::Tag => {
                let seconds = self.timestamp_seconds()?;
                let millis = (seconds * 1000.0) as i64;
                let instant = Instant::from_epoch_milliseconds(millis).map_err(|e| {
                    CborSerdeError::DeserializationError(format!("invalid timestamp: {e:?}"))
                })?;
                Ok(instant.into())
            }
            Type::F16 | Type::F32 | Type::F64 => Ok(self.decoder.f64()?.into()),
            Type::U8 | Type::U16 | Type::U32 | Type::U64 | Type::I8 | Type::I16 | Type::I32
            | Type::I64 | Type::Int => Ok(self.decoder.i64()?.into()),
            other => Err(CborSerdeError::DeserializationError(format!(
                "unsupported CBOR type: {other:?}"
            ))),
        }
    }

    fn is_null(&mut self) -> bool {
        matches!(self.decoder.datatype(), Ok(Type::Null))
    }

    fn read_null(&mut self) -> Result<(), Self::Error> {
        self.decoder.null()?;
        Ok(())
    }
}
