use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LookupError {
    #[error("Metadata lookup is not configured")]
    NotConfigured,
    #[error("Metadata transport error: {0}")]
    Transport(String),
    #[error("Metadata provider returned status {0}")]
    Status(u16),
    #[error("Metadata decode error: {0}")]
    Decode(String),
    #[error("No metadata match for title: {0}")]
    NoMatch(String),
}
