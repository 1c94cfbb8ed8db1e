use std::fmt;

use thiserror::Error;

/// Failures raised while talking to the SmartSaver backend.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request to {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("{path} returned HTTP {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },
    #[error("could not decode response from {path}: {message}")]
    Decode { path: String, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors produced while loading or saving the local configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Field-level messages collected by form validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub category: Option<String>,
    pub amount: Option<String>,
    pub general: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.amount.is_none() && self.general.is_none()
    }

    /// Messages in display order, skipping empty fields.
    pub fn messages(&self) -> Vec<&str> {
        [&self.category, &self.amount, &self.general]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_keep_field_order() {
        let errors = ValidationErrors {
            category: Some("Please select a category".into()),
            amount: Some("Please enter an amount".into()),
            general: None,
        };
        assert!(!errors.is_empty());
        assert_eq!(
            errors.to_string(),
            "Please select a category; Please enter an amount"
        );
    }
}
