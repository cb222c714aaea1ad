//! Crew operations against a mock SmartHR API.

use crate::common::{TEST_TOKEN, fixtures, mock_client, no_content_marker};
use serde_json::json;
use smarthr_mcp_server::models::{
    CrewCreateRequest, CrewInviteRequest, CrewListQuery, CrewSearchQuery, EmploymentStatus,
};
use smarthr_mcp_server::{Field, RequestModel, SmartHrError};
use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_crew_sends_bearer_token() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crews/c-001"))
        .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::crew("c-001")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crew = client.get_crew("c-001", None).await.unwrap().into_value();
    assert_eq!(crew["id"], "c-001");
    assert_eq!(crew["last_name"], "山田");
}

#[tokio::test]
async fn test_get_crew_with_fields_filter() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crews/c-001"))
        .and(query_param("fields", "id,emp_code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "c-001"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crew = client
        .get_crew("c-001", Some("id,emp_code"))
        .await
        .unwrap()
        .into_value();
    assert_eq!(crew, json!({"id": "c-001"}));
}

#[tokio::test]
async fn test_get_missing_crew_is_http_error_with_body() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crews/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"code":404,"message":"Not Found"}"#))
        .mount(&mock_server)
        .await;

    let error = client.get_crew("missing", None).await.unwrap_err();
    match &error {
        SmartHrError::Http { status, body } => {
            assert_eq!(*status, 404);
            assert!(body.contains("Not Found"));
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
    assert!(!error.is_local());
}

#[tokio::test]
async fn test_create_crew_omits_unset_and_null_fields() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/crews"))
        .and(body_json(json!({
            "last_name": "山田",
            "first_name": "太郎",
            "entered_at": "2015-04-01"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(fixtures::crew("c-new")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crew = CrewCreateRequest::from_value(json!({
        "last_name": "山田",
        "first_name": "太郎",
        "entered_at": "2015-04-01",
        "resigned_at": null
    }))
    .unwrap();

    let created = client.create_crew(&crew).await.unwrap().into_value();
    assert_eq!(created["id"], "c-new");
}

#[tokio::test]
async fn test_invalid_crew_is_rejected_before_sending() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let crew: CrewCreateRequest = serde_json::from_value(json!({
        "last_name": "山田",
        "birth_at": "1990/04/01"
    }))
    .unwrap();

    let error = client.create_crew(&crew).await.unwrap_err();
    match error {
        SmartHrError::Validation(errors) => assert!(errors.contains_field("birth_at")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_crew_patches_supplied_fields_only() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/crews/c-001"))
        .and(body_json(json!({"emp_status": "retired", "resigned_at": "2024-03-31"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::crew("c-001")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crew = CrewCreateRequest {
        emp_status: Field::Value(EmploymentStatus::Retired),
        resigned_at: Field::Value("2024-03-31".to_string()),
        ..Default::default()
    };
    client.update_crew("c-001", &crew).await.unwrap();
}

#[tokio::test]
async fn test_list_crews_sends_filters() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crews"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "50"))
        .and(query_param("emp_status", "employed"))
        .and(query_param("sort", "emp_code"))
        .and(query_param_is_missing("emp_code"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([fixtures::crew("c-001")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let query: CrewListQuery = serde_json::from_value(json!({
        "page": 2,
        "per_page": 50,
        "emp_status": "employed",
        "emp_code": "",
        "sort": "emp_code"
    }))
    .unwrap();

    let crews = client.list_crews(&query).await.unwrap().into_value();
    assert_eq!(crews.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_search_crews_uses_q_parameter() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crews"))
        .and(query_param("q", "山田"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .search_crews(&CrewSearchQuery::new("山田"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invite_crew_sends_only_given_ids() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/crews/c-001/invite"))
        .and(body_json(json!({"inviter_user_id": "u-9"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let invite = CrewInviteRequest {
        inviter_user_id: Some("u-9".to_string()),
        crew_input_form_id: Some(String::new()),
    };
    let response = client.invite_crew("c-001", &invite).await.unwrap();
    assert_eq!(response.into_value(), no_content_marker());
}

#[tokio::test]
async fn test_delete_crew_no_content() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/crews/c-001"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client.delete_crew("c-001").await.unwrap();
    assert!(response.is_no_content());
    assert_eq!(response.into_value(), no_content_marker());
}
