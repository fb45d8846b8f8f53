// Review service client.
//
// Two postures against the same peer: workload statistics gate an
// irreversible action (deleting an active reviewer) and are fail-secure,
// while the review listing is display-only and fails open to an empty list.

use crate::clients::PeerTransport;
use crate::config::{EndpointConfig, PeerService};
use crate::core::errors::PeerError;
use crate::core::models::{ReviewSummary, ReviewerStats};
use crate::core::outcome::{resolve_outcome, CallContext, CallPolicy};

pub struct ReviewClient {
    transport: PeerTransport,
}

impl ReviewClient {
    /// Wrap a transport resolved for the review service
    pub fn new(transport: PeerTransport) -> Self {
        Self { transport }
    }

    /// Construct against the environment-resolved review endpoint
    pub fn from_env() -> Result<Self, PeerError> {
        let endpoint = EndpointConfig::resolve(PeerService::Review);
        Ok(Self::new(PeerTransport::new(endpoint)?))
    }

    /// Fetch a reviewer's workload statistics.
    ///
    /// Fail-secure: this gates deletion of an active reviewer, so an
    /// unreachable peer blocks the caller. A 404 means the user has no
    /// review record and resolves to zeroed stats.
    pub async fn reviewer_stats(
        &self,
        user_id: i64,
        token: Option<&str>,
    ) -> Result<ReviewerStats, PeerError> {
        let ctx = CallContext::new(
            PeerService::Review,
            "reviewer_stats",
            format!("user {}", user_id),
        );
        let outcome = self
            .transport
            .get(&format!("/reviews/reviewer/{}/stats", user_id), token)
            .await;

        resolve_outcome(
            CallPolicy::FailSecure,
            outcome,
            &ctx,
            ReviewerStats::default(),
            |payload| serde_json::from_value(payload).ok(),
        )
    }

    /// List reviews assigned to a reviewer, for display.
    ///
    /// Fail-open: peer unavailability degrades to an empty list rather than
    /// failing the caller's read.
    pub async fn reviews_by_reviewer(
        &self,
        user_id: i64,
        token: Option<&str>,
    ) -> Result<Vec<ReviewSummary>, PeerError> {
        let ctx = CallContext::new(
            PeerService::Review,
            "reviews_by_reviewer",
            format!("user {}", user_id),
        );
        let outcome = self
            .transport
            .get(&format!("/reviews/reviewer/{}", user_id), token)
            .await;

        resolve_outcome(CallPolicy::FailOpen, outcome, &ctx, Vec::new(), |payload| {
            serde_json::from_value(payload).ok()
        })
    }
}
