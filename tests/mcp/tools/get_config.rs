use i18ntag::mcp::I18nTagMcpServer;
use i18ntag::mcp::types::ProjectParams;
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = I18nTagMcpServer::new();

    let result = server
        .get_config(Parameters(ProjectParams {
            project_root_path: fixture.root(),
        }))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(
        json,
        json!({
            "fromFile": false,
            "config": {
                "filter": "\\.jsx?",
                "src": ".",
                "schema": "./translation.schema.json",
                "generator": ["i18n-tag-schema"]
            }
        })
    );
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "filter": "\\.tsx?",
            "schema": "./i18n/schema.json",
            "timeoutSecs": 30
        }))
        .unwrap();
    let server = I18nTagMcpServer::new();

    let result = server
        .get_config(Parameters(ProjectParams {
            project_root_path: fixture.root_path().display().to_string(),
        }))
        .await
        .unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["fromFile"], true);
    assert_eq!(json["config"]["filter"], "\\.tsx?");
    assert_eq!(json["config"]["schema"], "./i18n/schema.json");
    assert_eq!(json["config"]["src"], ".");
    assert_eq!(json["config"]["timeoutSecs"], 30);
}

#[tokio::test]
async fn test_get_config_invalid_json() {
    let fixture = McpTestFixture::new().unwrap();
    std::fs::write(fixture.root_path().join(".i18ntagrc.json"), "{ not json").unwrap();
    let server = I18nTagMcpServer::new();

    let err = server
        .get_config(Parameters(ProjectParams {
            project_root_path: fixture.root(),
        }))
        .await
        .expect_err("invalid config should fail");
    assert!(err.message.starts_with("Failed to load config"));
}
