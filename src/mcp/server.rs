use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    config::load_config,
    core::{CommandGenerator, ContentError, Document, NO_LOCAL_CHANGES, SessionRegistry},
};

use super::helpers::{json_result, project_settings};
use super::host::McpHost;
use super::types::{
    ConfigDto, ProjectParams, ReadSchemaDocumentParams, SchemaChangesResult, ShowSchemaResult,
    UpdateSchemaResult,
};

#[derive(Clone)]
pub struct I18nTagMcpServer {
    tool_router: ToolRouter<Self>,
    sessions: SessionRegistry,
}

impl Default for I18nTagMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl I18nTagMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            sessions: SessionRegistry::new(),
        }
    }

    /// Regenerate the translation schema
    #[tool(
        description = "Regenerate the i18n translation schema by running the configured generator. The previous schema is kept as a snapshot for show_translation_schema_changes. Fails if a regeneration is already running for the project."
    )]
    pub async fn update_schema(
        &self,
        params: Parameters<ProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let settings = project_settings(&params.0.project_root_path)?;
        let generator = CommandGenerator::new(&settings.generator)
            .map_err(|e| McpError::internal_error(format!("Invalid generator: {}", e), None))?;

        let mut session = self
            .sessions
            .try_begin(settings)
            .map_err(|e| McpError::invalid_request(e.to_string(), None))?;

        let host = McpHost::new();
        let outcome = session.regenerate(&host, &generator).await;
        let has_snapshot = session.snapshot().exists();
        drop(session);

        json_result(&UpdateSchemaResult {
            outcome,
            has_snapshot,
            activity: host.into_activity(),
        })
    }

    /// Return the schema file
    #[tool(description = "Return the current content of the translation schema file.")]
    pub async fn show_translation_schema(
        &self,
        params: Parameters<ProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let settings = project_settings(&params.0.project_root_path)?;
        let session = self.sessions.get(settings).await;

        let host = McpHost::new();
        match session.show_schema(&host).await {
            Some(document) => json_result(&ShowSchemaResult { document }),
            None => Err(McpError::internal_error(first_error(host), None)),
        }
    }

    /// Diff the snapshot against the schema file
    #[tool(
        description = "Return the schema as it was before the last update_schema call next to the current schema file, for a two-way diff."
    )]
    pub async fn show_translation_schema_changes(
        &self,
        params: Parameters<ProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let settings = project_settings(&params.0.project_root_path)?;
        let session = self.sessions.get(settings).await;

        if !session.snapshot().exists() {
            return json_result(&SchemaChangesResult {
                has_snapshot: false,
                message: Some(NO_LOCAL_CHANGES.to_string()),
                diff: None,
            });
        }

        let host = McpHost::new();
        match session.show_changes(&host).await {
            Some(diff) => json_result(&SchemaChangesResult {
                has_snapshot: true,
                message: None,
                diff: Some(diff),
            }),
            None => Err(McpError::internal_error(first_error(host), None)),
        }
    }

    /// Read one of the virtual schema documents
    #[tool(
        description = "Read a virtual schema document: \"i18n-schema:old.json\" is the snapshot taken before the last update, \"i18n-schema:<schema file name>\" is the schema on disk."
    )]
    pub async fn read_schema_document(
        &self,
        params: Parameters<ReadSchemaDocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        let settings = project_settings(&params.0.project_root_path)?;
        let session = self.sessions.get(settings).await;
        let provider = session.provider();

        let document = provider
            .resolve(&params.0.path)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        let content = provider.provide(document).await.map_err(|e| match e {
            ContentError::NoSnapshot => McpError::invalid_request(e.to_string(), None),
            e => McpError::internal_error(e.to_string(), None),
        })?;

        json_result(&Document {
            uri: provider.uri(document),
            content,
        })
    }

    /// Get the current i18ntag configuration
    #[tool(description = "Get the i18ntag configuration for a project.")]
    pub async fn get_config(
        &self,
        params: Parameters<ProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: result.config,
        })
    }
}

fn first_error(host: McpHost) -> String {
    host.into_activity()
        .notices
        .into_iter()
        .next()
        .map(|notice| notice.message)
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[tool_handler]
impl ServerHandler for I18nTagMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "i18ntag MCP regenerates and inspects the i18n translation schema of a project.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration (filter, src, schema, generator)\n\
                 2. update_schema - Regenerate the schema; keeps the previous schema as a snapshot\n\
                 3. show_translation_schema - Get the current schema file\n\
                 4. show_translation_schema_changes - Get the snapshot and the current schema for a diff\n\
                 5. read_schema_document - Read i18n-schema:old.json or i18n-schema:<schema file name>\n\n\
                 When update_schema offers the showDiff action, call show_translation_schema_changes \
                 to see what changed."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            tracing::info!("starting MCP server on stdio");
            let service = I18nTagMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
