use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("Unknown conversion: {name}")]
    UnknownConversion { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Validation error in {field}: {message}")]
    ValidationError { field: String, message: String },
}

pub type Result<T> = std::result::Result<T, CaseError>;
