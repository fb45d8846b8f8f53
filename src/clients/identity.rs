// Identity service client - user lookups for display enrichment.
//
// Every operation here is fail-open: a missing or unreachable identity
// service degrades the caller's display (id-based placeholder labels),
// it never blocks a request.

use crate::clients::{batch, PeerTransport};
use crate::config::{EndpointConfig, PeerService};
use crate::core::errors::PeerError;
use crate::core::models::User;
use crate::core::outcome::{resolve_outcome, CallContext, CallPolicy};
use async_trait::async_trait;
use std::collections::HashMap;

/// Seam over single-user lookup, so callers and tests can substitute the
/// directory backing a batch resolution.
#[async_trait]
pub trait UserLookup {
    async fn user_by_id(&self, id: i64, token: Option<&str>) -> Result<Option<User>, PeerError>;
}

pub struct IdentityClient {
    transport: PeerTransport,
}

impl IdentityClient {
    /// Wrap a transport resolved for the identity service
    pub fn new(transport: PeerTransport) -> Self {
        Self { transport }
    }

    /// Construct against the environment-resolved identity endpoint
    pub fn from_env() -> Result<Self, PeerError> {
        let endpoint = EndpointConfig::resolve(PeerService::Identity);
        Ok(Self::new(PeerTransport::new(endpoint)?))
    }

    /// Fetch one user by id. Fail-open: not-found, unreachable, forbidden
    /// and peer errors all resolve to `None`.
    pub async fn user_by_id(&self, id: i64, token: Option<&str>) -> Result<Option<User>, PeerError> {
        let ctx = CallContext::new(PeerService::Identity, "user_by_id", format!("user {}", id));
        let outcome = self.transport.get(&format!("/users/{}", id), token).await;

        resolve_outcome(CallPolicy::FailOpen, outcome, &ctx, None, |payload| {
            serde_json::from_value::<User>(payload).ok().map(Some)
        })
    }

    /// Batch-fetch users by id, concurrently. Ids that fail to resolve are
    /// omitted from the map; callers substitute placeholder labels for them.
    pub async fn users_by_ids(&self, ids: &[i64], token: Option<&str>) -> HashMap<i64, User> {
        batch::resolve_many(ids.iter().copied(), |id| self.user_by_id(id, token)).await
    }
}

#[async_trait]
impl UserLookup for IdentityClient {
    async fn user_by_id(&self, id: i64, token: Option<&str>) -> Result<Option<User>, PeerError> {
        IdentityClient::user_by_id(self, id, token).await
    }
}
