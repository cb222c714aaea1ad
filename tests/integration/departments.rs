//! Department operations against a mock SmartHR API.

use crate::common::{fixtures, mock_client};
use chrono::NaiveDate;
use serde_json::json;
use smarthr_mcp_server::client::DEPARTMENT_DISCONTINUED_MESSAGE;
use smarthr_mcp_server::models::{
    DepartmentCreateRequest, DepartmentDiscontinueRequest, DepartmentListQuery,
    DepartmentPartialUpdateRequest, DepartmentUpdateRequest,
};
use smarthr_mcp_server::{Field, RequestModel, SmartHrError};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_create_department_drops_null_code() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/departments"))
        .and(body_json(json!({"name": "Eng"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(fixtures::department("d-1", "Eng")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let department =
        DepartmentCreateRequest::from_value(json!({"name": "Eng", "code": null})).unwrap();
    let created = client.create_department(&department).await.unwrap().into_value();
    assert_eq!(created["id"], "d-1");
}

#[tokio::test]
async fn test_department_name_with_slash_never_sent() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let error = client
        .create_department(&DepartmentCreateRequest::new("Sales/East"))
        .await
        .unwrap_err();
    assert_eq!(error.error_code(), "VALIDATION_FAILED");
}

#[tokio::test]
async fn test_update_department_sends_every_field() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/departments/d-1"))
        .and(body_json(json!({
            "name": "Platform",
            "position": 2,
            "code": null,
            "parent_id": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::department("d-1", "Platform")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let department = DepartmentUpdateRequest {
        position: Field::Value(2),
        ..DepartmentUpdateRequest::new("Platform")
    };
    client.update_department("d-1", &department).await.unwrap();
}

#[tokio::test]
async fn test_partial_update_department_sends_supplied_fields() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/departments/d-1"))
        .and(body_json(json!({"code": "ENG"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::department("d-1", "Eng")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let department = DepartmentPartialUpdateRequest {
        code: Field::Value("ENG".to_string()),
        ..Default::default()
    };
    client
        .partial_update_department("d-1", &department)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_departments_with_code_filter() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/departments"))
        .and(query_param("code", "ENG"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([fixtures::department("d-1", "Eng")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = DepartmentListQuery {
        code: Some("ENG".to_string()),
        ..Default::default()
    };
    let departments = client.list_departments(&query).await.unwrap().into_value();
    assert_eq!(departments[0]["name"], "Eng");
}

#[tokio::test]
async fn test_get_department() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/departments/d-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::department("d-1", "Eng")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let department = client.get_department("d-1").await.unwrap().into_value();
    assert_eq!(department["id"], "d-1");
}

#[tokio::test]
async fn test_discontinue_past_date() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/departments/d-1/discontinue"))
        .and(body_json(json!({"discontinued_date": "2024-03-31"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .discontinue_department_on(
            "d-1",
            &DepartmentDiscontinueRequest::new("2024-03-31"),
            day(2024, 4, 1),
        )
        .await
        .unwrap();
    assert_eq!(
        response.into_value(),
        json!({"status": 204, "message": DEPARTMENT_DISCONTINUED_MESSAGE})
    );
}

#[tokio::test]
async fn test_discontinue_passes_json_body_through() {
    let (mock_server, client) = mock_client().await;

    let closed = json!({"id": "d-1", "discontinued_date": "2024-03-31"});
    Mock::given(method("POST"))
        .and(path("/api/v1/departments/d-1/discontinue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(closed.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .discontinue_department_on(
            "d-1",
            &DepartmentDiscontinueRequest::new("2024-03-31"),
            day(2024, 4, 1),
        )
        .await
        .unwrap();
    assert_eq!(response.into_value(), closed);
}

#[tokio::test]
async fn test_discontinue_today_or_later_sends_nothing() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&mock_server)
        .await;

    for date in ["2024-04-01", "2024-12-31"] {
        let error = client
            .discontinue_department_on(
                "d-1",
                &DepartmentDiscontinueRequest::new(date),
                day(2024, 4, 1),
            )
            .await
            .unwrap_err();
        assert!(
            matches!(error, SmartHrError::Precondition { .. }),
            "{date}: {error:?}"
        );
    }

    let malformed = client
        .discontinue_department_on(
            "d-1",
            &DepartmentDiscontinueRequest::new("31/03/2024"),
            day(2024, 4, 1),
        )
        .await
        .unwrap_err();
    assert!(matches!(malformed, SmartHrError::Validation(_)));
}
