// Conference service client - track data for read-only display.
//
// Both operations fail open: an unreachable conference service renders an
// empty member or assignment list, never an error page.

use crate::clients::PeerTransport;
use crate::config::{EndpointConfig, PeerService};
use crate::core::errors::PeerError;
use crate::core::models::{TrackAssignment, TrackMember};
use crate::core::outcome::{resolve_outcome, CallContext, CallPolicy};

pub struct ConferenceClient {
    transport: PeerTransport,
}

impl ConferenceClient {
    /// Wrap a transport resolved for the conference service
    pub fn new(transport: PeerTransport) -> Self {
        Self { transport }
    }

    /// Construct against the environment-resolved conference endpoint
    pub fn from_env() -> Result<Self, PeerError> {
        let endpoint = EndpointConfig::resolve(PeerService::Conference);
        Ok(Self::new(PeerTransport::new(endpoint)?))
    }

    /// List the members of a track. Fail-open, defaults to an empty list.
    pub async fn track_members(
        &self,
        track_id: i64,
        token: Option<&str>,
    ) -> Result<Vec<TrackMember>, PeerError> {
        let ctx = CallContext::new(
            PeerService::Conference,
            "track_members",
            format!("track {}", track_id),
        );
        let outcome = self
            .transport
            .get(&format!("/tracks/{}/members", track_id), token)
            .await;

        resolve_outcome(CallPolicy::FailOpen, outcome, &ctx, Vec::new(), |payload| {
            serde_json::from_value(payload).ok()
        })
    }

    /// List reviewer assignments within a track. Fail-open, defaults to an
    /// empty list.
    pub async fn track_assignments(
        &self,
        track_id: i64,
        token: Option<&str>,
    ) -> Result<Vec<TrackAssignment>, PeerError> {
        let ctx = CallContext::new(
            PeerService::Conference,
            "track_assignments",
            format!("track {}", track_id),
        );
        let outcome = self
            .transport
            .get(&format!("/tracks/{}/assignments", track_id), token)
            .await;

        resolve_outcome(CallPolicy::FailOpen, outcome, &ctx, Vec::new(), |payload| {
            serde_json::from_value(payload).ok()
        })
    }
}
