//! Model-wide error type.
//!
//! Sub-crates define their own error enums and wrap `CcError` as one variant
//! (see `cc-sim::SimError`).

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `cc-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq)]
pub enum CcError {
    /// The population race category has no sentence distribution.
    #[error("configuration error: unsupported race category {0:?} (expected \"black\" or \"white\")")]
    UnsupportedRace(String),

    /// A probability distribution rejected its parameters.
    #[error("distribution error: {0}")]
    Distribution(String),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),
}

/// Shorthand result type for all `cc-*` crates.
pub type CcResult<T> = Result<T, CcError>;
