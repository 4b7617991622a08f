// Educator Graph - Core Library
//
// Wire types for the graph position service and the validation
// applied to them before they leave the client.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
