//! i18ntag - regenerate and inspect i18n translation schemas
//!
//! i18ntag drives an external schema generator, shows its progress, and
//! keeps the previous schema around so changes can be diffed. It runs as a
//! CLI or as an MCP server.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (terminal host and output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Regeneration engine (indicator, snapshot, session)
//! - `logging`: Diagnostic logging setup
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod mcp;
