#![allow(dead_code)]

use crate::schema::{Document, DocumentValue, Schema, SchemaRef, ShapeType, get_shape_type};
use crate::serde::se::{ListSerializer, MapSerializer, Serializer, StructSerializer};
use crate::serde::serializers::{Error, SerializeWithSchema};

/// Marker trait used to differentiate generated shapes from documents for blanket
/// serde-adapter implementations.
///
/// In general you should not need to implement this yourself; it is blanket-implemented
/// for every [`crate::serde::se::Serialize`].
pub trait SerializableShape: crate::serde::se::Serialize {}
impl<T: crate::serde::se::Serialize> SerializableShape for T {}

impl SerializeWithSchema for Document {
    fn serialize_with_schema<S: Serializer>(
        &self,
        schema: &SchemaRef,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match get_shape_type(schema).map_err(|_| Error::custom("invalid member schema"))? {
            ShapeType::Blob => serializer.write_blob(schema, self.as_blob().unwrap()),
            ShapeType::Boolean => serializer.write_boolean(schema, self.as_bool().unwrap()),
            ShapeType::String | ShapeType::Enum => {
                serializer.write_string(schema, self.as_string().unwrap())
            }
            ShapeType::Timestamp => {
                serializer.write_timestamp(schema, self.as_timestamp().unwrap())
            }
            ShapeType::Byte => serializer.write_byte(schema, self.as_byte().unwrap()),
            ShapeType::Short => serializer.write_short(schema, self.as_short().unwrap()),
            ShapeType::Integer | ShapeType::IntEnum => {
                serializer.write_integer(schema, self.as_integer().unwrap())
            }
            ShapeType::Long => serializer.write_long(schema, self.as_long().unwrap()),
            ShapeType::Float => serializer.write_float(schema, self.as_float().unwrap()),
            ShapeType::Double => serializer.write_double(schema, self.as_double().unwrap()),
            ShapeType::BigInteger => {
                let value = self.as_big_integer().unwrap();
                serializer.write_big_integer(schema, &value)
            }
            ShapeType::BigDecimal => {
                let value = self.as_big_decimal().unwrap();
                serializer.write_big_decimal(schema, &value)
            }
            ShapeType::Document => serializer.write_document(schema, self),
            ShapeType::List => self.as_list().unwrap().serialize_with_schema(schema, serializer),
            ShapeType::Map => {
                let document_map = self.as_map().unwrap();
                let key_schema = schema.expect_member("key");
                let value_schema = schema.expect_member("value");
                let mut map_ser = serializer.write_map(schema, document_map.len())?;
                for (key, value) in document_map {
                    map_ser.serialize_entry(key_schema, value_schema, key, value)?;
                }
                map_ser.end(schema)
            }
            ShapeType::Structure | ShapeType::Union => {
                let document_map = self.as_map().unwrap();
                let mut struct_serializer = serializer.write_struct(schema, self.size())?;
                for (key, value) in document_map {
                    if let Some(member_schema) = schema.get_member(key) {
                        struct_serializer.serialize_member(member_schema, value)?;
                    }
                    // Unknown members (no matching schema) are silently dropped.
                }
                struct_serializer.end(schema)
            }
            _ => Err(S::Error::custom("Unsupported shape type")),
        }
    }
}
