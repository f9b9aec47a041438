//! Helper functions for MCP server operations.

use std::{fs, path::Path};

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

use crate::config::{ConfigOverrides, Settings, load_settings};

/// Resolve a project root parameter into loaded settings.
pub fn project_settings(project_root_path: &str) -> Result<Settings, McpError> {
    let path = Path::new(project_root_path);
    let project_root = fs::canonicalize(path).map_err(|e| {
        McpError::invalid_params(
            format!("Project root not found: {}: {}", path.display(), e),
            None,
        )
    })?;

    load_settings(&project_root, ConfigOverrides::default())
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))
}

/// Serialize a tool result as pretty JSON text content.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}
