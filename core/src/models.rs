// Core data models for graph position persistence

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// 2D coordinate of a single graph node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

impl NodePosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite (JSON has no NaN or infinity)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Node ID -> position for one graph. Key order carries no meaning.
pub type GraphPositions = HashMap<String, NodePosition>;

/// Optional information stored alongside a position set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionsMetadata {
    /// Layout algorithm that produced the positions (e.g. "dagre")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_algorithm: Option<String>,

    /// RFC 3339 timestamp of the save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,

    /// Who saved the layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_by: Option<String>,
}

impl PositionsMetadata {
    /// Metadata stamped with the current UTC time
    pub fn now() -> Self {
        Self {
            saved_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            ..Self::default()
        }
    }

    pub fn with_layout_algorithm(mut self, layout_algorithm: impl Into<String>) -> Self {
        self.layout_algorithm = Some(layout_algorithm.into());
        self
    }

    pub fn with_saved_by(mut self, saved_by: impl Into<String>) -> Self {
        self.saved_by = Some(saved_by.into());
        self
    }
}

/// API Request: POST /api/graph/positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePositionsRequest {
    /// Graph whose position set is created or replaced
    pub graph_id: String,

    /// Node positions to persist
    pub positions: GraphPositions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PositionsMetadata>,
}

impl SavePositionsRequest {
    pub fn new(graph_id: impl Into<String>, positions: GraphPositions) -> Self {
        Self {
            graph_id: graph_id.into(),
            positions,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: PositionsMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Validate request before sending
    pub fn validate(&self) -> Result<(), crate::validation::ValidationError> {
        crate::validation::validate_graph_id(&self.graph_id)?;
        crate::validation::validate_positions(&self.positions)
    }
}

/// API Response: POST /api/graph/positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePositionsResponse {
    pub success: bool,
    pub message: String,
    pub graph_id: String,
    pub node_count: usize,

    /// Save time exactly as reported by the server
    pub saved_at: String,
}

impl SavePositionsResponse {
    /// Parse `saved_at` as an RFC 3339 timestamp
    pub fn saved_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.saved_at)
    }
}

/// API Response: GET /api/graph/positions/{graphId}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPositionsResponse {
    pub success: bool,
    pub graph_id: String,
    pub positions: GraphPositions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PositionsMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl GetPositionsResponse {
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Save time from the top-level field, falling back to the metadata
    pub fn saved_at_utc(&self) -> Option<DateTime<Utc>> {
        self.saved_at
            .as_deref()
            .or_else(|| self.metadata.as_ref()?.saved_at.as_deref())
            .and_then(parse_timestamp)
    }
}

/// API Error Response (any non-2xx status)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub success: bool,

    /// Short error identifier
    #[serde(default)]
    pub error: String,

    /// Human readable explanation
    #[serde(default)]
    pub message: String,
}

impl ErrorResponse {
    /// The server's `message`, or `fallback` when it is missing or blank.
    /// `error` is a machine code and never shown.
    pub fn into_message(self, fallback: &str) -> String {
        if self.message.trim().is_empty() {
            fallback.to_string()
        } else {
            self.message
        }
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}
