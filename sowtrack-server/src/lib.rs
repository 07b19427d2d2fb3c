//! sowtrack-server: HTTP surface and storage layer for milestone tracking
//!
//! A thin translation layer: request shape is validated at the boundary,
//! every statement is parameterized SQL against the `milestones` table,
//! and rows map back into response payloads field by field.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ApiError, ServerConfig};
