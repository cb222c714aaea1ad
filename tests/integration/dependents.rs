//! Dependent and relation operations against a mock SmartHR API.

use crate::common::{fixtures, mock_client, no_content_marker};
use serde_json::json;
use smarthr_mcp_server::client::NO_DEPENDENTS_MESSAGE;
use smarthr_mcp_server::models::{
    DependentCreateRequest, DependentListQuery, DependentPartialUpdateRequest, Gender, ListParams,
    LiveTogetherType,
};
use smarthr_mcp_server::{Field, RequestModel, SmartHrError};
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_create_dependent_fills_support_types() {
    let (mock_server, client) = mock_client().await;

    let mut expected = fixtures::dependent_data();
    expected["social_insurance_support_type"] = json!("supported");
    expected["tax_law_support_type"] = json!("supported");

    Mock::given(method("POST"))
        .and(path("/api/v1/crews/c-001/dependents"))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "dep-1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dependent = DependentCreateRequest::new(
        "rel-child",
        "山田",
        "花子",
        "2018-06-01",
        Gender::Female,
        LiveTogetherType::LivingTogether,
    );
    let created = client
        .create_dependent("c-001", &dependent)
        .await
        .unwrap()
        .into_value();
    assert_eq!(created["id"], "dep-1");
}

#[tokio::test]
async fn test_create_dependent_keeps_caller_support_type() {
    let (mock_server, client) = mock_client().await;

    let mut data = fixtures::dependent_data();
    data["tax_law_support_type"] = json!("not_supported");

    let mut expected = data.clone();
    expected["social_insurance_support_type"] = json!("supported");

    Mock::given(method("POST"))
        .and(path("/api/v1/crews/c-001/dependents"))
        .and(body_json(expected))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "dep-2"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dependent = DependentCreateRequest::from_value(data).unwrap();
    client.create_dependent("c-001", &dependent).await.unwrap();
}

#[tokio::test]
async fn test_list_dependents_normalizes_empty_listing() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crews/c-001/dependents"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let listing = client
        .list_dependents("c-001", &DependentListQuery::default())
        .await
        .unwrap()
        .into_value();
    assert_eq!(
        listing,
        json!({"message": NO_DEPENDENTS_MESSAGE, "dependents": []})
    );
}

#[tokio::test]
async fn test_list_dependents_passes_through_results() {
    let (mock_server, client) = mock_client().await;

    let dependents = json!([{"id": "dep-1", "last_name": "山田"}]);
    Mock::given(method("GET"))
        .and(path("/api/v1/crews/c-001/dependents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dependents.clone()))
        .mount(&mock_server)
        .await;

    let listing = client
        .list_dependents("c-001", &DependentListQuery::default())
        .await
        .unwrap()
        .into_value();
    assert_eq!(listing, dependents);
}

#[tokio::test]
async fn test_partial_update_requires_identifying_fields() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dependent = DependentPartialUpdateRequest::from_value(json!({
        "last_name": "佐藤",
        "gender": "female"
    }))
    .unwrap();

    let error = client
        .partial_update_dependent("c-001", "dep-1", &dependent)
        .await
        .unwrap_err();
    match error {
        SmartHrError::Precondition { message } => {
            assert!(message.ends_with("missing: first_name, birth_at, live_together_type, relation_id"));
        }
        other => panic!("expected precondition error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_partial_update_sends_exact_patch_body() {
    let (mock_server, client) = mock_client().await;

    let mut expected = fixtures::dependent_data();
    expected["job"] = json!("student");

    Mock::given(method("PATCH"))
        .and(path("/api/v1/crews/c-001/dependents/dep-1"))
        .and(body_json(expected.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "dep-1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut data = expected;
    data["tel_number"] = json!(null);
    let dependent = DependentPartialUpdateRequest::from_value(data).unwrap();
    assert!(dependent.has_required_patch_fields());
    assert_eq!(dependent.details.tel_number, Field::Null);

    client
        .partial_update_dependent("c-001", "dep-1", &dependent)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_and_delete_dependent() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crews/c-001/dependents/dep-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "dep-1"})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/crews/c-001/dependents/dep-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dependent = client.get_dependent("c-001", "dep-1").await.unwrap();
    assert_eq!(dependent.into_value()["id"], "dep-1");

    let deleted = client.delete_dependent("c-001", "dep-1").await.unwrap();
    assert_eq!(deleted.into_value(), no_content_marker());
}

#[tokio::test]
async fn test_list_relations_paging() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/dependent_relations"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": "rel-child", "name": "子", "is_child": true}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let relations = client
        .list_relations(&ListParams::page(1, 100))
        .await
        .unwrap()
        .into_value();
    assert_eq!(relations[0]["id"], "rel-child");
}

#[tokio::test]
async fn test_update_dependent_puts_without_defaults() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/crews/c-001/dependents/dep-1"))
        .and(body_json(fixtures::dependent_data()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "dep-1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dependent = DependentCreateRequest::from_value(fixtures::dependent_data()).unwrap();
    client
        .update_dependent("c-001", "dep-1", &dependent)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_dependents_bodiless_200_is_an_empty_listing() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crews/c-001/dependents"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let listing = client
        .list_dependents("c-001", &DependentListQuery::default())
        .await
        .unwrap()
        .into_value();
    assert_eq!(
        listing,
        json!({"message": NO_DEPENDENTS_MESSAGE, "dependents": []})
    );
}

#[tokio::test]
async fn test_list_dependents_forwards_extra_filters() {
    let (mock_server, client) = mock_client().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/crews/c-001/dependents"))
        .and(query_param("page", "2"))
        .and(query_param("fields", "id,last_name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "dep-1"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = DependentListQuery::from(ListParams::page(2, 10)).with_filter("fields", "id,last_name");
    client.list_dependents("c-001", &query).await.unwrap();
}

#[tokio::test]
async fn test_list_dependents_tool_forwards_filters_but_not_crew_id() {
    let mock_server = wiremock::MockServer::start().await;
    let server = crate::common::mcp_server_for(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/crews/c-001/dependents"))
        .and(query_param("fields", "id"))
        .and(query_param_is_missing("crew_id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "dep-1"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = server
        .execute_tool(
            "smarthr_list_dependents",
            json!({"crew_id": "c-001", "fields": "id"}),
        )
        .await;
    assert!(result.success, "{}", result.content);
    assert_eq!(result.content[0]["id"], "dep-1");
}
