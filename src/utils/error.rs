use thiserror::Error;

#[derive(Error, Debug)]
pub enum VolumeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl VolumeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            VolumeError::IoError(e) => format!("Could not read or write a file: {}", e),
            VolumeError::SerializationError(_) => "Could not encode the result".to_string(),
            VolumeError::ConfigError { message } => message.clone(),
            VolumeError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is invalid: {}", field, message)
            }
            VolumeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            VolumeError::IoError(_) | VolumeError::SerializationError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, VolumeError>;
