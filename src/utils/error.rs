use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ClientError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::SerializationError(_) => {
                "The server response could not be understood".to_string()
            }
            ClientError::ConfigError { message } => format!("Configuration problem: {}", message),
            ClientError::MissingConfigError { field } => {
                format!("Configuration value '{}' is not set", field)
            }
            ClientError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ClientError::SerializationError(_) => {
                "Check that the endpoint serves the expected API version".to_string()
            }
            ClientError::ConfigError { .. } => "Review the client configuration".to_string(),
            ClientError::MissingConfigError { field } => {
                format!("Export {} before starting the client", field)
            }
            ClientError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of {} and retry", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
