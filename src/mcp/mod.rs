//! MCP (Model Context Protocol) module.
//!
//! Stateless JSON-RPC 2.0 over HTTP POST exposing contract generation and
//! loan simulation as tools.

pub mod content;
pub mod handlers;
pub mod rpc;
pub mod service;
pub mod tools;

pub use handlers::{config, McpState};
pub use service::McpService;
