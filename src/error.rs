/// Errors raised by the reading list store and the host browser
use thiserror::Error;

/// No variant is fatal: loads are retried by the user, mutations leave the
/// last confirmed state in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Load(String),

    #[error("failed to update {url}: {message}")]
    Mutation { url: String, message: String },

    #[error("host call failed: {0}")]
    Host(String),

    #[error("unexpected data from host: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn mutation(url: &str, message: impl Into<String>) -> Self {
        StoreError::Mutation {
            url: url.to_string(),
            message: message.into(),
        }
    }
}
