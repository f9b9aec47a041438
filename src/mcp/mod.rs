//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the schema commands as MCP tools. Sessions outlive a single
//! call, so the snapshot taken by `update_schema` is still there for
//! `show_translation_schema_changes`.
//!
//! ## Module Structure
//!
//! - `helpers`: Parameter resolution and result serialization
//! - `host`: Host implementation that records notices for the tool result
//! - `server`: Main MCP server implementation
//! - `types`: MCP-specific type definitions

mod helpers;
pub mod host;
mod server;
pub mod types;

pub use server::{I18nTagMcpServer, run_server};
