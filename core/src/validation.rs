// Validation for position requests

use crate::models::GraphPositions;

/// Validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("graph ID must not be empty")]
    EmptyGraphId,

    #[error("node ID must not be empty")]
    EmptyNodeId,

    #[error("position of node '{node_id}' is not a finite coordinate")]
    NonFiniteCoordinate { node_id: String },
}

/// Validate a graph ID
///
/// # Rules
/// - Must not be empty (it would address the collection, not a graph)
///
/// Any other string is allowed, whitespace included; the client
/// percent-encodes the ID as a single path segment.
pub fn validate_graph_id(graph_id: &str) -> Result<(), ValidationError> {
    if graph_id.is_empty() {
        return Err(ValidationError::EmptyGraphId);
    }
    Ok(())
}

/// Validate a position set
///
/// # Rules
/// - Node IDs must not be empty
/// - Coordinates must be finite
///
/// An empty set is valid: it clears the layout server-side.
pub fn validate_positions(positions: &GraphPositions) -> Result<(), ValidationError> {
    for (node_id, position) in positions {
        if node_id.is_empty() {
            return Err(ValidationError::EmptyNodeId);
        }
        if !position.is_finite() {
            return Err(ValidationError::NonFiniteCoordinate {
                node_id: node_id.clone(),
            });
        }
    }
    Ok(())
}
