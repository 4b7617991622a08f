// HTTP client for the graph position service

use std::sync::Arc;

use crate::auth::CredentialProvider;
use crate::config::ClientConfig;
use crate::errors::ApiError;
use educator_graph_core::{
    validate_graph_id, ErrorResponse, GetPositionsResponse, SavePositionsRequest,
    SavePositionsResponse,
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, Url};
use serde::{de::DeserializeOwned, Serialize};

const POSITIONS_PATH: [&str; 3] = ["api", "graph", "positions"];

/// Position service operations, used for logging and fallback messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Save,
    Get,
    Delete,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Save => "save",
            Operation::Get => "get",
            Operation::Delete => "delete",
        }
    }

    /// Message used when the server's error body has nothing usable
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Save => "Failed to save positions",
            Operation::Get => "Failed to get positions",
            Operation::Delete => "Failed to delete positions",
        }
    }
}

/// Client for `/api/graph/positions`
///
/// Holds no position data: every call is a fresh round trip.
#[derive(Clone)]
pub struct PositionStoreClient {
    http: reqwest::Client,
    config: ClientConfig,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

impl PositionStoreClient {
    /// Create a client with its own connection pool
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client on top of a prepared `reqwest::Client`
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            config,
            credentials: None,
        }
    }

    /// Attach an `Authorization` header provider
    pub fn with_credentials(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.credentials = Some(Arc::new(provider));
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create or replace the position set of `request.graph_id`
    ///
    /// # Returns
    /// The server's confirmation, parsed as-is
    pub async fn save_graph_positions(
        &self,
        request: &SavePositionsRequest,
    ) -> Result<SavePositionsResponse, ApiError> {
        let op = Operation::Save;
        let result: Result<SavePositionsResponse, ApiError> = async {
            request.validate()?;
            let url = self.positions_url(None)?;
            let response = self.dispatch(op, Method::POST, url, Some(request)).await?;
            decode_body(op, response).await
        }
        .await;

        log_failure(op, &request.graph_id, result)
    }

    /// Load the position set of `graph_id`
    ///
    /// # Returns
    /// `Ok(None)` when the server answers 404 (nothing saved yet)
    pub async fn get_graph_positions(
        &self,
        graph_id: &str,
    ) -> Result<Option<GetPositionsResponse>, ApiError> {
        let op = Operation::Get;
        let result: Result<Option<GetPositionsResponse>, ApiError> = async {
            let url = self.positions_url(Some(graph_id))?;
            match self.dispatch(op, Method::GET, url, None::<&()>).await {
                Ok(response) => decode_body(op, response).await.map(Some),
                Err(error) if error.is_not_found() => {
                    tracing::debug!(graph_id, "no positions saved for graph");
                    Ok(None)
                }
                Err(error) => Err(error),
            }
        }
        .await;

        log_failure(op, graph_id, result)
    }

    /// Delete the position set of `graph_id`
    pub async fn delete_graph_positions(&self, graph_id: &str) -> Result<(), ApiError> {
        let op = Operation::Delete;
        let result: Result<(), ApiError> = async {
            let url = self.positions_url(Some(graph_id))?;
            self.dispatch(op, Method::DELETE, url, None::<&()>).await?;
            Ok(())
        }
        .await;

        log_failure(op, graph_id, result)
    }

    /// `{base}/api/graph/positions[/{graph_id}]`, with the ID encoded as one segment
    fn positions_url(&self, graph_id: Option<&str>) -> Result<Url, ApiError> {
        let base_url = self.config.base_url();
        let mut url = Url::parse(base_url)
            .map_err(|e| ApiError::Network(format!("invalid base URL '{}': {}", base_url, e)))?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::Network(format!("base URL '{}' cannot carry a path", base_url))
            })?;
            segments.pop_if_empty().extend(POSITIONS_PATH);

            if let Some(graph_id) = graph_id {
                validate_graph_id(graph_id)?;
                segments.push(graph_id);
            }
        }

        Ok(url)
    }

    /// Send one request and turn any non-2xx status into `ApiError::Server`
    async fn dispatch<B>(
        &self,
        op: Operation,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!(operation = op.name(), %method, %url, "sending position request");

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(value) = self.credentials.as_ref().and_then(|p| p.authorization()) {
            builder = builder.header(AUTHORIZATION, value);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(error_body) => error_body.into_message(op.fallback_message()),
            Err(_) => op.fallback_message().to_string(),
        };

        Err(ApiError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

impl std::fmt::Debug for PositionStoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PositionStoreClient")
            .field("base_url", &self.config.base_url())
            .field("credentials", &self.credentials.is_some())
            .finish()
    }
}

async fn decode_body<T: DeserializeOwned>(op: Operation, response: Response) -> Result<T, ApiError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::InvalidResponse(format!("{} response: {}", op.name(), e)))
}

fn log_failure<T>(op: Operation, graph_id: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(error) = &result {
        tracing::error!(operation = op.name(), graph_id, %error, "graph position request failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> PositionStoreClient {
        PositionStoreClient::new(ClientConfig::new(base_url))
    }

    #[test]
    fn test_collection_url() {
        let url = client("http://localhost:8080").positions_url(None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/graph/positions");
    }

    #[test]
    fn test_graph_id_is_one_encoded_segment() {
        let url = client("http://localhost:8080")
            .positions_url(Some("course/intro one?"))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/graph/positions/course%2Fintro%20one%3F"
        );
    }

    #[test]
    fn test_base_path_prefix_preserved() {
        let url = client("https://edu.example.com/backend/")
            .positions_url(Some("g1"))
            .unwrap();
        assert_eq!(url.as_str(), "https://edu.example.com/backend/api/graph/positions/g1");
    }

    #[test]
    fn test_empty_graph_id_rejected() {
        let result = client("http://localhost:8080").positions_url(Some(""));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_whitespace_graph_id_encoded() {
        let url = client("http://localhost:8080").positions_url(Some(" ")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/graph/positions/%20");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = client("not a url").positions_url(None);
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(Operation::Save.fallback_message(), "Failed to save positions");
        assert_eq!(Operation::Get.fallback_message(), "Failed to get positions");
        assert_eq!(Operation::Delete.fallback_message(), "Failed to delete positions");
    }
}
