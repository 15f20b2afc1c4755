//! Error types for panel transitions.

/// Result type alias for transition operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a panel transition.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The tweening engine rejected or could not schedule an animation request.
    ///
    /// There is no fallback interpolation path; callers own retry policy.
    #[error("tween engine rejected {property} animation request: {message}")]
    EngineRejected {
        property: &'static str,
        message: String,
    },
}

impl Error {
    /// Create an engine rejection error.
    pub fn engine_rejected(property: &'static str, message: impl Into<String>) -> Self {
        Self::EngineRejected {
            property,
            message: message.into(),
        }
    }
}
