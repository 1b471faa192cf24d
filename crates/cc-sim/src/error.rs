use thiserror::Error;

use cc_core::{AgentId, CcError};
use cc_network::NetworkError;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CcError),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("{what} length {got} does not match population size {expected}")]
    PopulationMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("outbreak seed {0} is outside the population")]
    OutbreakOutOfRange(AgentId),
}

pub type SimResult<T> = Result<T, SimError>;
