//! Error types for the eligibility engine

use thiserror::Error;

/// Eligibility engine error
///
/// Evaluation itself never fails; every disqualifying input is a normal
/// rejection result. The only fallible operation is policy validation.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid policy configuration
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
