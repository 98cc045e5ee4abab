use thiserror::Error;

/// Every failure the containers and their configuration can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DsaError {
    #[error("stack is empty")]
    EmptyStack,

    #[error("list is empty")]
    EmptyList,

    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl DsaError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for DsaError {
    fn from(err: std::io::Error) -> Self {
        DsaError::config(format!("failed to read config: {err}"))
    }
}

impl From<toml::de::Error> for DsaError {
    fn from(err: toml::de::Error) -> Self {
        DsaError::config(err.to_string())
    }
}

impl From<serde_json::Error> for DsaError {
    fn from(err: serde_json::Error) -> Self {
        DsaError::config(format!(
            "line {}, column {}: {err}",
            err.line(),
            err.column()
        ))
    }
}

pub type Result<T> = std::result::Result<T, DsaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(DsaError::EmptyStack.to_string(), "stack is empty");
        assert_eq!(DsaError::EmptyList.to_string(), "list is empty");
        assert_eq!(
            DsaError::IndexOutOfBounds { index: 5, len: 3 }.to_string(),
            "index 5 is out of bounds for length 3"
        );
        assert_eq!(
            DsaError::InvalidCapacity(0).to_string(),
            "capacity must be at least 1, got 0"
        );
    }

    #[test]
    fn test_json_error_keeps_position() {
        let err: DsaError = serde_json::from_str::<serde_json::Value>("{\n  oops")
            .unwrap_err()
            .into();
        match err {
            DsaError::Config { message } => assert!(message.starts_with("line 2")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
