//! Error types for the truss scene model

use thiserror::Error;

use crate::action::Action;

/// Main error type for scene operations
#[derive(Error, Debug)]
pub enum SceneError {
    /// An action was constructed with a missing or unusable field.
    #[error("{action} must have all parameters set: {reason}")]
    MalformedAction {
        /// Name of the action variant being constructed
        action: &'static str,
        /// Which field was rejected and why
        reason: String,
    },

    /// A well-formed action could not be applied without violating an
    /// invariant. The scene is left unchanged.
    #[error("{action} failed: {reason}")]
    ActionFailed {
        /// The offending action
        action: Box<Action>,
        /// Human-readable reason the action was rejected
        reason: String,
    },

    /// Generator parameters describe a span that does not divide into a
    /// whole number of panels. Raised before any joint is created.
    #[error(
        "bridge length {bridge_length} is not an integer multiple of member length {member_length}"
    )]
    InvalidSpan {
        /// Total bridge span
        bridge_length: f64,
        /// Length of a single panel
        member_length: f64,
    },

    /// Generator parameters are outside the usable range (non-positive or
    /// non-finite lengths).
    #[error("invalid generator input: {0}")]
    InvalidInput(String),

    /// JSON encoding of the solver query payload failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for scene operations
pub type SceneResult<T> = Result<T, SceneError>;
