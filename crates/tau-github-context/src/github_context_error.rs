use thiserror::Error;

/// Fatal configuration failures raised while building a [`crate::CanonicalContext`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GithubContextError {
    #[error("Invalid mode: {mode}.")]
    InvalidMode { mode: String },
    #[error("Unsupported event type: {event_name}")]
    UnsupportedEvent { event_name: String },
    #[error("event '{event_name}' payload is missing numeric field '{field}'")]
    MissingEntityNumber {
        event_name: String,
        field: &'static str,
    },
}
