//! Graph construction errors.
//!
//! All of them signal a misuse of the building API and are raised eagerly,
//! before any sweep runs. Numeric degeneracies found while sampling are
//! clamped where they occur and never surface here.

use crate::arena::NodeId;

pub type Result<T> = std::result::Result<T, NetError>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum NetError {
    #[error("gibbs_net: expected at least 2 categories, got {0}")]
    TooFewCategories(usize),
    #[error("gibbs_net: expected {expected} weights for a table row, got {given}")]
    WrongWeightCount { expected: usize, given: usize },
    #[error("gibbs_net: row {row} out of range, the node has {rows} parent configurations")]
    RowOutOfRange { row: usize, rows: usize },
    #[error("gibbs_net: node {0} does not belong to this network")]
    UnknownNode(NodeId),
    #[error("gibbs_net: node {0} is not a categorical variable")]
    NotCategorical(NodeId),
    #[error("gibbs_net: node {0} is not a variable")]
    NotVariable(NodeId),
    #[error("gibbs_net: value {value} is not a category of node {node}")]
    ObservationOutOfRange { node: NodeId, value: f64 },
}
