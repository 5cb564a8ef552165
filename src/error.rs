use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The document does not have the shape an option expects.
    #[error("Malformed configuration: {0}")]
    MalformedConfiguration(String),
}

impl OptionsError {
    pub(crate) fn malformed(key: &str, reason: impl std::fmt::Display) -> Self {
        Self::MalformedConfiguration(format!("'{}': {}", key, reason))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::MalformedConfiguration(message) => message,
        }
    }
}

pub type Result<T, E = OptionsError> = std::result::Result<T, E>;
