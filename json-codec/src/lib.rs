pub mod deserialization;
pub mod errors;
pub mod serialization;

pub use deserialization::JsonDeserializer;
pub use errors::JsonSerdeError;
pub use serialization::{JsonSerializer, to_string};

use smithy4rs_core::prelude::JsonNameTrait;
use smithy4rs_core::schema::SchemaRef;

/// Resolves the wire name a struct/union member is written under, honoring `@jsonName`.
fn get_member_name(schema: &SchemaRef) -> Result<&str, JsonSerdeError> {
    let Some(member) = schema.as_member() else {
        return Err(JsonSerdeError::SerializationError(
            "Expected member schema when serializing JSON field".to_string(),
        ));
    };
    Ok(schema
        .get_trait_as::<JsonNameTrait>()
        .map_or(member.name.as_str(), |name_trait| name_trait.name()))
}
