// Integration tests for batch user resolution through the identity client

use crate::common::*;
use async_trait::async_trait;
use mockito::Server;
use peerlink::clients::{batch, IdentityClient, UserLookup};
use peerlink::config::PeerService;
use peerlink::core::errors::PeerError;
use peerlink::core::models::User;
use serde_json::json;

fn user_body(id: i64, name: &str) -> String {
    json!({"data": {"id": id, "name": name}}).to_string()
}

#[tokio::test]
async fn test_users_by_ids_omits_failed_lookup() {
    let mut server = Server::new_async().await;
    let ok2 = server
        .mock("GET", "/users/2")
        .with_status(200)
        .with_body(user_body(2, "Ada"))
        .create();
    let fail3 = server
        .mock("GET", "/users/3")
        .with_status(500)
        .with_body("internal error")
        .create();
    let ok4 = server
        .mock("GET", "/users/4")
        .with_status(200)
        .with_body(user_body(4, "Edsger"))
        .create();

    let client = IdentityClient::new(mock_transport(PeerService::Identity, &server));
    let users = client.users_by_ids(&[2, 3, 4], None).await;

    ok2.assert();
    fail3.assert();
    ok4.assert();

    // Key 3 is silently omitted, not surfaced as a partial failure
    assert_eq!(users.len(), 2);
    assert_eq!(users.get(&2).unwrap().display_label(), "Ada");
    assert_eq!(users.get(&4).unwrap().display_label(), "Edsger");
    assert!(!users.contains_key(&3));
}

#[tokio::test]
async fn test_users_by_ids_forwards_token_to_every_lookup() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Regex(r"^/users/\d+$".to_string()))
        .match_header("authorization", "Bearer caller-token")
        .with_status(200)
        .with_body(user_body(1, "Grace"))
        .expect(2)
        .create();

    let client = IdentityClient::new(mock_transport(PeerService::Identity, &server));
    let users = client.users_by_ids(&[1, 2], Some("caller-token")).await;

    mock.assert();
    assert_eq!(users.len(), 2);
}

struct StubDirectory;

#[async_trait]
impl UserLookup for StubDirectory {
    async fn user_by_id(&self, id: i64, _token: Option<&str>) -> Result<Option<User>, PeerError> {
        match id {
            3 => Err(PeerError::PeerUnavailable {
                service: PeerService::Identity,
                operation: "user_by_id",
                subject: format!("user {}", id),
                status: None,
            }),
            id => Ok(Some(User {
                id,
                name: None,
                email: None,
                affiliation: None,
            })),
        }
    }
}

#[tokio::test]
async fn test_resolve_many_over_the_lookup_seam() {
    let directory = StubDirectory;
    let users = batch::resolve_many([2i64, 3, 4], |id| directory.user_by_id(id, None)).await;

    assert_eq!(users.len(), 2);
    assert_eq!(users.get(&2).unwrap().display_label(), "User #2");
    assert!(!users.contains_key(&3));
}
