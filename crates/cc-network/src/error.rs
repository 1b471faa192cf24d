//! Network error type.

use thiserror::Error;

use cc_core::NodeId;

/// Errors produced by `cc-network`.
#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("self-loop on {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("{node} is out of range for a network of {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
