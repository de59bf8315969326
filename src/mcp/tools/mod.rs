//! MCP tools exposed via JSON-RPC.
//!
//! Each tool file provides its `TOOL_NAME` and descriptor; argument parsing
//! and execution live in the registry.

mod loan_contract;
mod loan_simulation;
pub mod registry;

pub use registry::{ToolDescriptor, ToolRegistry};
