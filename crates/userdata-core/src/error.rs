//! Errors raised while loading or emitting userdata configs.

use thiserror::Error;

/// Failure while loading or emitting an operating-system config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The payload is not valid JSON or a field has the wrong type.
    #[error("Failed to parse config payload: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// A credential is absent from both the payload and the environment.
    #[error("{var} env variable is not found")]
    MissingCredential { var: &'static str },

    /// The encoder rejected the config.
    #[error("Failed to encode config payload: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Coarse classification of a [`ConfigError`], for callers that branch on
/// the failure without matching on messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Deserialization,
    MissingCredential,
    Serialization,
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::Deserialize(_) => ErrorKind::Deserialization,
            ConfigError::MissingCredential { .. } => ErrorKind::MissingCredential,
            ConfigError::Serialize(_) => ErrorKind::Serialization,
        }
    }

    /// Name of the environment variable that was needed, if any.
    pub fn missing_var(&self) -> Option<&'static str> {
        match self {
            ConfigError::MissingCredential { var } => Some(*var),
            _ => None,
        }
    }
}
