//! Error types for the modexp-cost benchmark.

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid group parameters were provided.
    #[error("Invalid group parameters: {0}")]
    InvalidParams(String),

    /// The benchmark configuration violates one of its preconditions.
    #[error("Invalid benchmark configuration: {0}")]
    InvalidConfig(String),
}
