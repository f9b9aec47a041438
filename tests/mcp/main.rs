use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use tempfile::TempDir;

mod tools;

pub const UPDATED: &str = "i18n tag json schema has been updated";

/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a `.git` marker and an optional
/// shell-script generator.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;
        fs::create_dir(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a project whose generator runs `script` with `sh -c`
    ///
    /// The script gets `<src> <filter> <schema>` as `$1 $2 $3`.
    pub fn with_generator(script: &str) -> Result<Self> {
        let fixture = Self::new()?;
        fixture.write_config(&json!({
            "generator": ["sh", "-c", script, "generator"]
        }))?;
        Ok(fixture)
    }

    /// Write a .i18ntagrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".i18ntagrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Write the default schema file
    pub fn write_schema(&self, content: &str) -> Result<()> {
        let path = self.schema_path();
        fs::write(&path, content)
            .with_context(|| format!("Failed to write schema: {}", path.display()))
    }

    pub fn schema_path(&self) -> PathBuf {
        self.project_root.join("translation.schema.json")
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

/// Script writing `schema` to the schema path and reporting an update.
pub fn updating_script(schema: &str) -> String {
    format!(
        r#"printf '%s' '{schema}' > "$3"; echo '{{"type":"success","message":"{UPDATED}"}}'"#
    )
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
