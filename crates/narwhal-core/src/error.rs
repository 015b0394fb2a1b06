//! Error types for configuration handling

use thiserror::Error;

/// Errors raised while validating or obtaining a configuration snapshot
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("configuration has not been loaded")]
    NotLoaded,

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
