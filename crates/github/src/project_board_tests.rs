use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

async fn board_for(server: &MockServer) -> GraphQlProjectBoard {
    GraphQlProjectBoard::connect("test-token", format!("{}/graphql", server.uri())).unwrap()
}

fn owner(name: &str) -> OwnerName {
    OwnerName::new(name).unwrap()
}

#[test]
fn test_lookup_query_uses_owner_root_field() {
    assert!(project_lookup_query(OwnerType::Organization)
        .contains("organization(login: $ownerName)"));
    assert!(project_lookup_query(OwnerType::User).contains("user(login: $ownerName)"));
}

#[tokio::test]
async fn test_resolve_project_id_for_organization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("organization(login: $ownerName)"))
        .and(body_partial_json(json!({
            "variables": { "ownerName": "my-org", "projectNumber": 5 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "organization": { "projectNext": { "id": "PN_org" } } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = board_for(&server)
        .await
        .resolve_project_id(OwnerType::Organization, &owner("my-org"), ProjectNumber::new(5))
        .await
        .unwrap();

    assert_eq!(id, ProjectId::new("PN_org").unwrap());
}

#[tokio::test]
async fn test_resolve_project_id_for_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("user(login: $ownerName)"))
        .and(body_partial_json(json!({
            "variables": { "ownerName": "alice", "projectNumber": 3 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "user": { "projectNext": { "id": "PN_user" } } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = board_for(&server)
        .await
        .resolve_project_id(OwnerType::User, &owner("alice"), ProjectNumber::new(3))
        .await
        .unwrap();

    assert_eq!(id.as_str(), "PN_user");
}

#[tokio::test]
async fn test_resolve_project_id_reports_missing_project() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "organization": { "projectNext": null } }
        })))
        .mount(&server)
        .await;

    let err = board_for(&server)
        .await
        .resolve_project_id(OwnerType::Organization, &owner("my-org"), ProjectNumber::new(9))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        BoardError::ProjectNotFound {
            owner_type: OwnerType::Organization,
            owner_name: owner("my-org"),
            number: ProjectNumber::new(9),
        }
    );
}

#[tokio::test]
async fn test_resolve_project_id_ignores_other_owner_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "organization": { "projectNext": { "id": "PN_org" } } }
        })))
        .mount(&server)
        .await;

    let err = board_for(&server)
        .await
        .resolve_project_id(OwnerType::User, &owner("alice"), ProjectNumber::new(1))
        .await
        .unwrap_err();

    assert!(matches!(err, BoardError::ProjectNotFound { .. }));
}

#[tokio::test]
async fn test_resolve_project_id_maps_graphql_errors_to_remote() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "organization": null },
            "errors": [{ "message": "Could not resolve to an Organization with the login of 'nope'." }]
        })))
        .mount(&server)
        .await;

    let err = board_for(&server)
        .await
        .resolve_project_id(OwnerType::Organization, &owner("nope"), ProjectNumber::new(1))
        .await
        .unwrap_err();

    match err {
        BoardError::Remote { operation, message } => {
            assert_eq!(operation, "resolve project id");
            assert!(message.contains("login of 'nope'"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_add_item_sends_content_and_project_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("addProjectNextItem(input: $input)"))
        .and(body_partial_json(json!({
            "variables": { "input": { "contentId": "I_content", "projectId": "PN_org" } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "addProjectNextItem": { "projectNextItem": { "id": "PNI_new" } } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let item_id = board_for(&server)
        .await
        .add_item(
            &ProjectId::new("PN_org").unwrap(),
            &ContentId::new("I_content").unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(item_id, ProjectItemId::new("PNI_new").unwrap());
}

#[tokio::test]
async fn test_add_item_maps_http_failure_to_remote() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = board_for(&server)
        .await
        .add_item(
            &ProjectId::new("PN_org").unwrap(),
            &ContentId::new("I_content").unwrap(),
        )
        .await
        .unwrap_err();

    match err {
        BoardError::Remote { operation, message } => {
            assert_eq!(operation, "add project item");
            assert!(message.contains("502"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_add_item_surfaces_graphql_error_with_null_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("addProjectNextItem(input: $input)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "addProjectNextItem": null },
            "errors": [{
                "type": "FORBIDDEN",
                "message": "Resource not accessible by integration"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = board_for(&server)
        .await
        .add_item(
            &ProjectId::new("PN_org").unwrap(),
            &ContentId::new("I_content").unwrap(),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err,
        BoardError::Remote {
            operation: "add project item".to_string(),
            message: "GraphQL errors: Resource not accessible by integration".to_string(),
        }
    );
}
