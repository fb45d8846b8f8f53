// Cross-service error types - what fail-secure operations surface to callers

use crate::config::PeerService;
use serde::Serialize;
use thiserror::Error;

/// Failure surfaced past the client layer.
///
/// Fail-open operations never raise one of these; fail-secure operations
/// raise them whenever the peer's answer could not be positively confirmed.
#[derive(Error, Debug)]
pub enum PeerError {
    /// Peer unreachable, timed out, or answered 5xx (HTTP 503)
    #[error("{service} service unavailable while checking {subject}")]
    PeerUnavailable {
        service: PeerService,
        operation: &'static str,
        subject: String,
        status: Option<u16>,
    },

    /// Peer answered, but the check could not be performed (HTTP 502)
    #[error("{service} service returned an error while checking {subject}")]
    VerificationFailed {
        service: PeerService,
        operation: &'static str,
        subject: String,
        status: Option<u16>,
    },

    /// Client construction failure (HTTP 500)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Machine-readable detail bag attached to a caller's error envelope
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetails {
    pub service: Option<PeerService>,
    pub operation: Option<&'static str>,
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl PeerError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            PeerError::PeerUnavailable { .. } => "peer_unavailable",
            PeerError::VerificationFailed { .. } => "peer_verification_error",
            PeerError::Configuration(_) => "configuration_error",
        }
    }

    /// HTTP status code the calling service should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            PeerError::PeerUnavailable { .. } => 503,
            PeerError::VerificationFailed { .. } => 502,
            PeerError::Configuration(_) => 500,
        }
    }

    /// User-friendly error message (no upstream detail disclosure)
    pub fn user_message(&self) -> String {
        match self {
            PeerError::PeerUnavailable { service, .. } => format!(
                "The {} service is currently unavailable. Please try again later.",
                service
            ),
            PeerError::VerificationFailed { service, .. } => format!(
                "The {} service could not verify this request. Please try again later.",
                service
            ),
            PeerError::Configuration(_) => "Internal error".to_string(),
        }
    }

    /// Detail bag for the caller's structured error response
    pub fn details(&self) -> ErrorDetails {
        match self {
            PeerError::PeerUnavailable {
                service,
                operation,
                subject,
                status,
            }
            | PeerError::VerificationFailed {
                service,
                operation,
                subject,
                status,
            } => ErrorDetails {
                service: Some(*service),
                operation: Some(operation),
                subject: Some(subject.clone()),
                upstream_status: *status,
            },
            PeerError::Configuration(_) => ErrorDetails {
                service: None,
                operation: None,
                subject: None,
                upstream_status: None,
            },
        }
    }
}
