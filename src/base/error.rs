use thiserror::Error;

/// Errors raised by the consent ledger and its configuration.
///
/// Everything except [`ConsentError::InvalidHeaderValue`] is a configuration
/// error: a deployment mistake that is surfaced to the operator and never
/// retried.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConsentError {
    // Configuration Errors
    #[error("The cookie group '{group}' is not configured, add it to the cookie consent config")]
    GroupNotConfigured { group: String },
    #[error("The required default cookie group is missing, make sure to configure the 'Necessary' group")]
    MissingRequiredGroup,
    #[error("The cookie group '{group}' is configured more than once")]
    DuplicateGroup { group: String },
    #[error("Invalid cookie consent config: {message}")]
    InvalidConfig { message: String },
    #[error("Unable to read cookie consent config {path}: {message}")]
    ConfigIo { path: String, message: String },

    // Response Errors
    #[error("Cookie '{name}' cannot be written as a header value")]
    InvalidHeaderValue { name: String },
}

impl ConsentError {
    pub fn group_not_configured(group: impl Into<String>) -> Self {
        ConsentError::GroupNotConfigured {
            group: group.into(),
        }
    }

    pub fn duplicate_group(group: impl Into<String>) -> Self {
        ConsentError::DuplicateGroup {
            group: group.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        ConsentError::InvalidConfig {
            message: message.into(),
        }
    }

    /// True for errors caused by a missing or malformed configuration.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, ConsentError::InvalidHeaderValue { .. })
    }
}

impl From<serde_json::Error> for ConsentError {
    fn from(err: serde_json::Error) -> Self {
        ConsentError::invalid_config(err.to_string())
    }
}

pub type ConsentResult<T> = Result<T, ConsentError>;
