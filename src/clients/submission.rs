// Submission service client.
//
// The author-count lookup gates user deletion and is therefore fail-secure:
// any ambiguity about the peer's state blocks the deletion rather than risk
// orphaning submissions. A confirmed not-found is a count of zero.

use crate::clients::PeerTransport;
use crate::config::{EndpointConfig, PeerService};
use crate::core::errors::PeerError;
use crate::core::outcome::{resolve_outcome, CallContext, CallPolicy};
use serde_json::Value;

pub struct SubmissionClient {
    transport: PeerTransport,
}

impl SubmissionClient {
    /// Wrap a transport resolved for the submission service
    pub fn new(transport: PeerTransport) -> Self {
        Self { transport }
    }

    /// Construct against the environment-resolved submission endpoint
    pub fn from_env() -> Result<Self, PeerError> {
        let endpoint = EndpointConfig::resolve(PeerService::Submission);
        Ok(Self::new(PeerTransport::new(endpoint)?))
    }

    /// Count submissions authored by `user_id`.
    ///
    /// Fail-secure: an unreachable or failing peer raises `PeerUnavailable`
    /// and the caller's deletion must not proceed. A 404 is a confirmed
    /// absence and resolves to zero.
    pub async fn count_by_author(
        &self,
        user_id: i64,
        token: Option<&str>,
    ) -> Result<u64, PeerError> {
        let ctx = CallContext::new(
            PeerService::Submission,
            "count_by_author",
            format!("user {}", user_id),
        );
        let outcome = self
            .transport
            .get(&format!("/submissions/author/{}/count", user_id), token)
            .await;

        resolve_outcome(CallPolicy::FailSecure, outcome, &ctx, 0, |payload| {
            // Peers answer either a bare number or `{ "count": n }`
            payload
                .as_u64()
                .or_else(|| payload.get("count").and_then(Value::as_u64))
        })
    }
}
