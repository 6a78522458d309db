use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures surfaced while building or synthesizing a deployment graph.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SynthError {
    /// The caller handed us something malformed: an empty identifier, a pool
    /// name outside the provider charset, a duplicate redirect URL.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The graph refused a declaration, e.g. a logical id or output name that
    /// is already taken. The original diagnostic is preserved.
    #[error("framework error: {0}")]
    Framework(String),
}

impl<T> From<std::sync::PoisonError<T>> for SynthError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        SynthError::Framework(format!("poisoned graph lock: {err}"))
    }
}
