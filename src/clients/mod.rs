// Peer service client adapters.
//
// One adapter per peer service, each exposing narrow typed read operations.
// Every operation pairs a resource path with a call policy declared at the
// call site; the shared transport below stays policy-agnostic.

pub mod batch;
pub mod conference;
pub mod identity;
pub mod review;
pub mod submission;

pub use conference::ConferenceClient;
pub use identity::{IdentityClient, UserLookup};
pub use review::ReviewClient;
pub use submission::SubmissionClient;

use crate::config::{EndpointConfig, PeerService};
use crate::core::errors::PeerError;
use crate::core::outcome::{classify_status, classify_transport, CallOutcome};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Every outbound peer call is bounded by this before it is treated as a
/// transport failure.
pub const PEER_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Bounded-time GET transport shared by all peer clients.
///
/// Owns one pooled HTTP client plus the endpoint resolved at construction;
/// the endpoint is never re-resolved per call. Each call owns its own
/// request/response lifecycle, so no locking is needed across calls.
pub struct PeerTransport {
    http_client: Client,
    endpoint: EndpointConfig,
}

impl PeerTransport {
    /// Create a transport with the standard 10-second request timeout
    pub fn new(endpoint: EndpointConfig) -> Result<Self, PeerError> {
        Self::with_timeout(endpoint, PEER_REQUEST_TIMEOUT)
    }

    /// Create a transport with an explicit request timeout
    pub fn with_timeout(endpoint: EndpointConfig, timeout: Duration) -> Result<Self, PeerError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .tcp_nodelay(true)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| {
                PeerError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn service(&self) -> PeerService {
        self.endpoint.service
    }

    /// Issue one GET against the peer and classify the attempt.
    ///
    /// The bearer token is forwarded when present; absence is never itself a
    /// failure, the peer decides what an unauthenticated read may see.
    pub async fn get(&self, path: &str, token: Option<&str>) -> CallOutcome {
        let url = format!("{}{}", self.endpoint.base_url, path);

        debug!(service = %self.endpoint.service, url = %url, "calling peer");

        let mut request = self.http_client.get(&url);
        if let Some(token) = token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return classify_transport(&e),
        };

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        classify_status(status, body)
    }
}
