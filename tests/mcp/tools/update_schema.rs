use i18ntag::mcp::I18nTagMcpServer;
use i18ntag::mcp::types::ProjectParams;
use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, UPDATED, extract_tool_result_json, updating_script};

fn params(fixture: &McpTestFixture) -> Parameters<ProjectParams> {
    Parameters(ProjectParams {
        project_root_path: fixture.root(),
    })
}

#[tokio::test]
async fn test_update_first_run() {
    let fixture = McpTestFixture::with_generator(&updating_script(r#"{"a":1}"#)).unwrap();
    let server = I18nTagMcpServer::new();

    let result = server.update_schema(params(&fixture)).await.unwrap();
    let json = extract_tool_result_json(&result);

    // Nothing to diff against on the first run
    assert_eq!(
        json["outcome"],
        json!({
            "status": "succeeded",
            "message": UPDATED,
            "affordances": []
        })
    );
    assert_eq!(json["hasSnapshot"], false);
    assert_eq!(
        json["activity"]["notices"],
        json!([{"level": "info", "message": UPDATED}])
    );
    assert_eq!(
        std::fs::read_to_string(fixture.schema_path()).unwrap(),
        r#"{"a":1}"#
    );
}

#[tokio::test]
async fn test_update_offers_diff() {
    let fixture = McpTestFixture::with_generator(&updating_script(r#"{"a":2}"#)).unwrap();
    fixture.write_schema(r#"{"a":1}"#).unwrap();
    let server = I18nTagMcpServer::new();

    let result = server.update_schema(params(&fixture)).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["outcome"]["status"], "succeeded");
    assert_eq!(json["outcome"]["affordances"], json!(["showDiff"]));
    assert_eq!(json["hasSnapshot"], true);
}

#[tokio::test]
async fn test_update_reports_error() {
    let fixture = McpTestFixture::with_generator(
        r#"echo '{"type":"info","message":"scanning"}'; echo '{"type":"error","message":"disk full"}'"#,
    )
    .unwrap();
    let server = I18nTagMcpServer::new();

    let result = server.update_schema(params(&fixture)).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(
        json["outcome"],
        json!({"status": "failed", "message": "disk full"})
    );
    assert_eq!(
        json["activity"]["notices"],
        json!([{"level": "error", "message": "disk full"}])
    );
    assert_eq!(json["activity"]["log"], json!(["scanning"]));
    assert_eq!(json["activity"]["logRevealed"], false);
}

#[tokio::test]
async fn test_update_unknown_output_reveals_log() {
    let script = format!("echo 'raw output'; {}", updating_script("{}"));
    let fixture = McpTestFixture::with_generator(&script).unwrap();
    let server = I18nTagMcpServer::new();

    let result = server.update_schema(params(&fixture)).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["outcome"]["status"], "succeeded");
    assert_eq!(json["activity"]["log"], json!(["raw output"]));
    assert_eq!(json["activity"]["logRevealed"], true);
}

#[tokio::test]
async fn test_update_timeout() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "generator": ["sh", "-c", "sleep 5"],
            "timeoutSecs": 1
        }))
        .unwrap();
    let server = I18nTagMcpServer::new();

    let result = server.update_schema(params(&fixture)).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(
        json["outcome"],
        json!({"status": "failed", "message": "Schema generation timed out after 1s"})
    );
}

#[tokio::test]
async fn test_update_rejects_overlapping_attempt() {
    let script = format!("sleep 1; {}", updating_script("{}"));
    let fixture = McpTestFixture::with_generator(&script).unwrap();
    let server = I18nTagMcpServer::new();

    let (first, second) = tokio::join!(
        server.update_schema(params(&fixture)),
        async {
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
            server.update_schema(params(&fixture)).await
        }
    );

    let first = extract_tool_result_json(&first.unwrap());
    assert_eq!(first["outcome"]["status"], "succeeded");

    let err = second.expect_err("overlapping attempt should be rejected");
    assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_REQUEST);
    assert!(
        err.message.contains("already running"),
        "unexpected error: {}",
        err.message
    );
}

#[tokio::test]
async fn test_update_missing_project() {
    let server = I18nTagMcpServer::new();

    let err = server
        .update_schema(Parameters(ProjectParams {
            project_root_path: "/nonexistent/i18ntag-project".to_string(),
        }))
        .await
        .expect_err("missing project should fail");
    assert!(err.message.contains("Project root not found"));
}
