//! MCP tools and resources driven end to end against a mock SmartHR API.

use crate::common::{connect_mcp_client, error_code, fixtures, mcp_server_for, no_content_marker};
use rmcp::model::{ErrorCode, ReadResourceRequestParam};
use rmcp::service::ServiceError;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_crews_tool_forwards_filters() {
    let mock_server = MockServer::start().await;
    let server = mcp_server_for(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/crews"))
        .and(query_param("emp_type", "full_timer"))
        .and(query_param("per_page", "25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([fixtures::crew("c-001")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = server
        .execute_tool(
            "smarthr_list_crews",
            json!({"emp_type": "full_timer", "per_page": 25}),
        )
        .await;

    assert!(result.success, "{}", result.content);
    assert_eq!(result.content[0]["id"], "c-001");
    assert_eq!(result.metadata.unwrap()["operation"], "list_crews");
}

#[tokio::test]
async fn test_remote_error_becomes_tool_failure() {
    let mock_server = MockServer::start().await;
    let server = mcp_server_for(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/departments/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let result = server
        .execute_tool("smarthr_get_department", json!({"department_id": "missing"}))
        .await;

    assert!(!result.success);
    assert_eq!(error_code(&result.content), "HTTP_ERROR");
    assert_eq!(result.content["status"], 404);
    assert_eq!(result.content["body"], "Not Found");
    assert_eq!(result.metadata.unwrap()["local"], false);
}

#[tokio::test]
async fn test_lookup_tool_dispatch() {
    let mock_server = MockServer::start().await;
    let server = mcp_server_for(&mock_server);

    Mock::given(method("PATCH"))
        .and(path("/api/v1/job_titles/jt-1"))
        .and(body_json(json!({"rank": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::job_title("jt-1", 5)))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/employment_types/et-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let patched = server
        .execute_tool(
            "smarthr_partial_update_job_title",
            json!({"job_title_id": "jt-1", "rank": 5}),
        )
        .await;
    assert!(patched.success, "{}", patched.content);
    assert_eq!(patched.content["rank"], 5);

    let deleted = server
        .execute_tool(
            "smarthr_delete_employment_type",
            json!({"employment_type_id": "et-1"}),
        )
        .await;
    assert!(deleted.success);
    assert_eq!(deleted.content, no_content_marker());
}

#[tokio::test]
async fn test_department_create_tool_drops_null_code() {
    let mock_server = MockServer::start().await;
    let server = mcp_server_for(&mock_server);

    Mock::given(method("POST"))
        .and(path("/api/v1/departments"))
        .and(body_json(json!({"name": "Eng"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(fixtures::department("d-1", "Eng")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = server
        .execute_tool("smarthr_create_department", json!({"name": "Eng", "code": null}))
        .await;
    assert!(result.success, "{}", result.content);
}

#[tokio::test]
async fn test_list_relations_tool_defaults_to_one_large_page() {
    let mock_server = MockServer::start().await;
    let server = mcp_server_for(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/dependent_relations"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = server.execute_tool("smarthr_list_relations", json!({})).await;
    assert!(result.success);
}

#[tokio::test]
async fn test_crew_profiles_resource_read() {
    let mock_server = MockServer::start().await;
    let server = mcp_server_for(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/crews"))
        .and(query_param("per_page", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::crew_listing(
            120,
            vec![fixtures::crew("c-001"), fixtures::crew("c-002")],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = connect_mcp_client(server).await;
    let result = client
        .read_resource(ReadResourceRequestParam {
            uri: "smarthr://crew_profiles".to_string(),
        })
        .await
        .expect("resource read succeeds");

    let encoded = serde_json::to_value(&result).unwrap();
    let content = &encoded["contents"][0];
    assert_eq!(content["uri"], "smarthr://crew_profiles");

    let profiles: Value = serde_json::from_str(content["text"].as_str().unwrap()).unwrap();
    assert_eq!(profiles["crew_profiles"]["total_crews"], 120);
    assert_eq!(
        profiles["crew_profiles"]["sample_crews"].as_array().unwrap().len(),
        2
    );

    let _ = client.cancel().await;
}

#[tokio::test]
async fn test_crew_profiles_failure_is_protocol_error() {
    let mock_server = MockServer::start().await;
    let server = mcp_server_for(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/crews"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = connect_mcp_client(server).await;
    let failure = client
        .read_resource(ReadResourceRequestParam {
            uri: "smarthr://crew_profiles".to_string(),
        })
        .await;

    match failure {
        Err(ServiceError::McpError(error)) => {
            assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
            assert!(error.message.contains("smarthr://crew_profiles"));
            assert!(error.message.contains("401"));
        }
        other => panic!("expected an internal error, got {other:?}"),
    }

    let _ = client.cancel().await;
}
