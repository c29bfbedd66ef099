use thiserror::Error;

/// Errors that can occur while building or configuring a detector.
///
/// Detection itself never fails; these only surface at the edges
/// (pattern compilation, scheme parsing, configuration).
#[derive(Debug, Error)]
pub enum LipikaError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// A scheme label did not name any known scheme.
    #[error("unknown scheme: {name:?}")]
    UnknownScheme {
        /// The label that could not be parsed.
        name: String,
    },

    /// An invalid detector configuration was provided.
    #[error("invalid detector config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for Lipika operations.
pub type Result<T> = std::result::Result<T, LipikaError>;
