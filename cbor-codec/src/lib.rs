pub mod deserialization;
pub mod errors;
pub mod serialization;

pub use deserialization::CborDeserializer;
pub use errors::CborSerdeError;
pub use serialization::{CborSerializer, to_bytes};

use smithy4rs_core::prelude::JsonNameTrait;
use smithy4rs_core::schema::SchemaRef;

/// Resolves the wire name a struct/union member is written under.
///
/// `rpcv2Cbor` follows the same member-naming rules as the JSON protocols,
/// honoring `@jsonName` where present.
fn get_member_name(schema: &SchemaRef) -> Result<&str, CborSerdeError> {
    let Some(member) = schema.as_member() else {
        return Err(CborSerdeError::SerializationError(
            "Expected member schema when serializing CBOR field".to_string(),
        ));
    };
    Ok(schema
        .get_trait_as::<JsonNameTrait>()
        .map_or(member.name.as_str(), |name_trait| name_trait.name()))
}
