use smithy4rs_core::schema::DocumentError;
use thiserror::Error;

#[derive(Error, Debug, Default)]
pub enum CborSerdeError {
    #[error("Failed to serialize member to CBOR: {0}")]
    SerializationError(String),
    #[error("Failed to deserialize member from CBOR: {0}")]
    DeserializationError(String),
    #[error("Failed Document conversion")]
    DocumentConversionError(#[from] DocumentError),
    #[error("Failed serializing")]
    #[default]
    Default,
}

impl From<minicbor::decode::Error> for CborSerdeError {
    fn from(value: minicbor::decode::Error) -> Self {
        CborSerdeError::DeserializationError(value.to_string())
    }
}

impl smithy4rs_core::serde::se::Error for CborSerdeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        CborSerdeError::SerializationError(msg.to_string())
    }
}

impl smithy4rs_core::serde::de::Error for CborSerdeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        CborSerdeError::DeserializationError(msg.to_string())
    }
}
