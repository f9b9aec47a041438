use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::host::HostActivity;
use crate::config::Config;
use crate::core::{Document, Outcome, SchemaDiff};

// ============================================================
// Parameter Types
// ============================================================

/// Parameters for tools that act on a whole project.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectParams {
    /// Absolute path of the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadSchemaDocumentParams {
    /// Absolute path of the project root
    pub project_root_path: String,
    /// Document path: "old.json" or the schema file name, optionally
    /// prefixed with "i18n-schema:"
    pub path: String,
}

// ============================================================
// Result Types
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: Config,
}

/// Result of update_schema
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSchemaResult {
    pub outcome: Outcome,
    /// Whether show_translation_schema_changes has a snapshot to diff
    pub has_snapshot: bool,
    pub activity: HostActivity,
}

/// Result of show_translation_schema
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowSchemaResult {
    pub document: Document,
}

/// Result of show_translation_schema_changes
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaChangesResult {
    pub has_snapshot: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<SchemaDiff>,
}
