// Peer service identity and endpoint resolution

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::debug;
use url::Url;

/// The independently deployed peer services this layer queries.
///
/// The identity is fixed for the lifetime of a process and selects which
/// endpoint resolution defaults apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeerService {
    Identity,
    Submission,
    Review,
    Conference,
}

impl PeerService {
    /// Lowercase service name, used in logs and error details
    pub fn name(&self) -> &'static str {
        match self {
            PeerService::Identity => "identity",
            PeerService::Submission => "submission",
            PeerService::Review => "review",
            PeerService::Conference => "conference",
        }
    }

    /// Environment variable holding an explicit base-URL override
    pub fn env_key(&self) -> &'static str {
        match self {
            PeerService::Identity => "IDENTITY_SERVICE_URL",
            PeerService::Submission => "SUBMISSION_SERVICE_URL",
            PeerService::Review => "REVIEW_SERVICE_URL",
            PeerService::Conference => "CONFERENCE_SERVICE_URL",
        }
    }

    /// Hostname the service answers to on the shared container network
    pub fn network_host(&self) -> &'static str {
        match self {
            PeerService::Identity => "identity-service",
            PeerService::Submission => "submission-service",
            PeerService::Review => "review-service",
            PeerService::Conference => "conference-service",
        }
    }

    /// Fixed default port, identical under both topologies.
    /// These are part of the platform's interop contract and must not drift.
    pub fn default_port(&self) -> u16 {
        match self {
            PeerService::Identity => 3001,
            PeerService::Conference => 3002,
            PeerService::Submission => 3003,
            PeerService::Review => 3004,
        }
    }
}

impl fmt::Display for PeerService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved base address for one peer service.
///
/// Computed once at client construction and held for the process lifetime;
/// an unreachable address is only discovered at call time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub service: PeerService,
    pub base_url: String,
}

impl EndpointConfig {
    /// Resolve the base address for `service` from the process environment.
    ///
    /// Precedence:
    /// 1. explicit `<SERVICE>_URL` override, used verbatim;
    /// 2. the in-network default when a shared-network topology is indicated
    ///    (`DOCKER_ENV=true`, or the override names the in-network hostname);
    /// 3. the local-loopback default on the service's fixed port.
    ///
    /// Never fails: there is always a fallback address.
    pub fn resolve(service: PeerService) -> Self {
        // Load .env file if present (development).
        // Skip in test builds to avoid interfering with test environment variables.
        #[cfg(not(test))]
        {
            dotenv::dotenv().ok();
        }

        let override_url = Self::get_optional_env(service.env_key());
        let docker_env = env::var("DOCKER_ENV")
            .map(|v| v == "true")
            .unwrap_or(false);

        Self::resolve_with(service, override_url.as_deref(), docker_env)
    }

    /// Resolution core, pure given its inputs.
    fn resolve_with(service: PeerService, override_url: Option<&str>, docker_env: bool) -> Self {
        let networked = docker_env
            || override_url.is_some_and(|value| Self::names_network_host(value, service));

        let base_url = match override_url {
            // An explicit override always wins, topology inference never
            // rewrites it. Trailing slashes are trimmed so path joining
            // stays uniform.
            Some(value) => value.trim_end_matches('/').to_string(),
            None if networked => format!(
                "http://{}:{}/api",
                service.network_host(),
                service.default_port()
            ),
            None => format!("http://localhost:{}/api", service.default_port()),
        };

        debug!(
            service = %service,
            base_url = %base_url,
            networked,
            "resolved peer endpoint"
        );

        Self { service, base_url }
    }

    /// Whether a configured value points at the service's in-network hostname.
    ///
    /// Parses the value as a URL and compares the host exactly; falls back to
    /// a substring check for values that are not parseable URLs.
    fn names_network_host(value: &str, service: PeerService) -> bool {
        match Url::parse(value) {
            // Values like "identity-service:3001" parse as a scheme with no
            // host, so a parse without a host also falls back to substring.
            Ok(url) => match url.host_str() {
                Some(host) => host == service.network_host(),
                None => value.contains(service.network_host()),
            },
            Err(_) => value.contains(service.network_host()),
        }
    }

    /// Get optional environment variable, treating empty as unset
    fn get_optional_env(key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }
}
