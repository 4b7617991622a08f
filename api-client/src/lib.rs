// API client library for the Educator graph position service
//
// This crate provides the HTTP client used by the browser frontend
// and the command line tool to save, load and delete node layouts.

pub mod auth;
pub mod config;
pub mod errors;
pub mod http_client;

// Re-export commonly used items
pub use auth::{BearerToken, CredentialProvider};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use errors::ApiError;
pub use http_client::{Operation, PositionStoreClient};
