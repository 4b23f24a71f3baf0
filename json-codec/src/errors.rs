use jiter::JiterError;
use smithy4rs_core::schema::DocumentError;
use thiserror::Error;

#[derive(Error, Debug, Default)]
pub enum JsonSerdeError {
    #[error("Failed to serialize member to JSON: {0}")]
    SerializationError(String),
    #[error("Failed to deserialize member from JSON: {0}")]
    DeserializationError(String),
    #[error("Failed to convert integer type")]
    IntConversionError(#[from] std::num::TryFromIntError),
    #[error("Failed serializing")]
    #[default]
    Default,
    #[error("Failed Document conversion")]
    DocumentConversionError(#[from] DocumentError),
    #[error("Invalid base64 blob: {0}")]
    Base64Error(#[from] base64::DecodeError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<JiterError> for JsonSerdeError {
    fn from(value: JiterError) -> Self {
        JsonSerdeError::DeserializationError(format!("{}", value))
    }
}

impl smithy4rs_core::serde::se::Error for JsonSerdeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        JsonSerdeError::SerializationError(msg.to_string())
    }
}

impl smithy4rs_core::serde::de::Error for JsonSerdeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        JsonSerdeError::DeserializationError(msg.to_string())
    }
}
