// Helpers behind the CLI subcommands

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use educator_graph_api_client::{BearerToken, ClientConfig, PositionStoreClient};
use educator_graph_core::{GraphPositions, PositionsMetadata, SavePositionsRequest};

/// Client for `base_url` (default URL when `None`), with a bearer token if given
pub fn build_client(base_url: Option<&str>, token: Option<&str>) -> PositionStoreClient {
    let config = match base_url {
        Some(url) if !url.trim().is_empty() => ClientConfig::new(url.trim()),
        _ => ClientConfig::default(),
    };

    let client = PositionStoreClient::new(config);
    match token {
        Some(token) => client.with_credentials(BearerToken::new(token)),
        None => client,
    }
}

/// Read a `{node_id: {x, y}}` JSON object
pub fn read_positions(path: &Path) -> Result<GraphPositions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading positions file {}", path.display()))?;

    serde_json::from_str(&text)
        .with_context(|| format!("parsing positions file {}", path.display()))
}

/// Save request stamped with the current time
pub fn save_request(
    graph_id: &str,
    positions: GraphPositions,
    layout_algorithm: Option<String>,
    saved_by: Option<String>,
) -> SavePositionsRequest {
    let metadata = PositionsMetadata {
        layout_algorithm,
        saved_by,
        ..PositionsMetadata::now()
    };

    SavePositionsRequest::new(graph_id, positions).with_metadata(metadata)
}
