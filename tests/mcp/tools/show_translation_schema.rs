use i18ntag::mcp::I18nTagMcpServer;
use i18ntag::mcp::types::ProjectParams;
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_show_schema() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_schema(r#"{"type":"object"}"#).unwrap();
    let server = I18nTagMcpServer::new();

    let result = server
        .show_translation_schema(Parameters(ProjectParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(
        json["document"]["uri"],
        "i18n-schema:translation.schema.json"
    );
    assert_eq!(json["document"]["content"], r#"{"type":"object"}"#);
}

#[tokio::test]
async fn test_show_missing_schema() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nTagMcpServer::new();

    let err = server
        .show_translation_schema(Parameters(ProjectParams {
            project_root_path: fixture.root(),
        }))
        .await
        .expect_err("missing schema should fail");
    assert!(err.message.starts_with("failed to read"), "{}", err.message);
}
