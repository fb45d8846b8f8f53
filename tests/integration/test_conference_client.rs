// Integration tests for the conference client (fail-open track reads)

use crate::common::*;
use mockito::Server;
use peerlink::clients::ConferenceClient;
use peerlink::config::PeerService;
use serde_json::json;

#[tokio::test]
async fn test_track_members_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tracks/3/members")
        .with_status(200)
        .with_body(
            json!({
                "data": [
                    {"user_id": 7, "role": "chair"},
                    {"user_id": 9, "role": "reviewer"}
                ]
            })
            .to_string(),
        )
        .create();

    let client = ConferenceClient::new(mock_transport(PeerService::Conference, &server));
    let members = client.track_members(3, None).await.unwrap();

    mock.assert();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].user_id, 7);
    assert_eq!(members[0].role.as_deref(), Some("chair"));
}

#[tokio::test]
async fn test_track_assignments_server_failure_is_empty() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tracks/3/assignments")
        .with_status(500)
        .with_body("internal error")
        .create();

    let client = ConferenceClient::new(mock_transport(PeerService::Conference, &server));
    let assignments = client.track_assignments(3, None).await.unwrap();

    mock.assert();
    assert!(assignments.is_empty());
}

#[tokio::test]
async fn test_track_assignments_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tracks/3/assignments")
        .with_status(200)
        .with_body(
            json!({"data": [{"submission_id": 31, "reviewer_id": 7}]}).to_string(),
        )
        .create();

    let client = ConferenceClient::new(mock_transport(PeerService::Conference, &server));
    let assignments = client.track_assignments(3, None).await.unwrap();

    mock.assert();
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].reviewer_id, 7);
}

#[tokio::test]
async fn test_track_members_unreachable_peer_is_empty() {
    let transport = short_timeout_transport(PeerService::Conference, "http://127.0.0.1:9/api");
    let client = ConferenceClient::new(transport);

    let members = client.track_members(3, None).await.unwrap();
    assert!(members.is_empty());
}

#[tokio::test]
async fn test_track_members_not_found_is_empty() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tracks/99/members")
        .with_status(404)
        .with_body(json!({"error": "no such track"}).to_string())
        .create();

    let client = ConferenceClient::new(mock_transport(PeerService::Conference, &server));
    let members = client.track_members(99, None).await.unwrap();

    mock.assert();
    assert!(members.is_empty());
}
