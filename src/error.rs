use std::fmt;

#[derive(Debug)]
pub enum SdGateError {
    ConfigError(String),
    SelectionError(String),
    RequestError(String),
    BackendError(String),
    ResponseError(String),
    PersistenceError(String),
    SerializationError(String),
}

impl fmt::Display for SdGateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdGateError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SdGateError::SelectionError(msg) => write!(f, "Selection error: {}", msg),
            SdGateError::RequestError(msg) => write!(f, "Request error: {}", msg),
            SdGateError::BackendError(msg) => write!(f, "Backend error: {}", msg),
            SdGateError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            SdGateError::PersistenceError(msg) => write!(f, "Persistence error: {}", msg),
            SdGateError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SdGateError {}

pub type Result<T> = std::result::Result<T, SdGateError>;
