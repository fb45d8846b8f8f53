// Outcome classification and call-policy resolution.
//
// Two composable pure steps: classify the raw attempt into a CallOutcome,
// then reduce the outcome under the call site's declared policy. Keeping
// both free of transport code keeps the decision table unit-testable
// without a live network.

use crate::config::PeerService;
use crate::core::errors::PeerError;
use serde_json::Value;
use tracing::warn;

/// Classified 4xx responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientErrorKind {
    NotFound,
    Unauthorized,
    Forbidden,
    Other,
}

/// The result of one outbound call attempt. Exactly one variant per attempt.
#[derive(Debug, Clone)]
pub enum CallOutcome {
    /// Peer answered 2xx; payload already unwrapped from the envelope
    Success(Value),
    /// No response obtained: connection refused, DNS failure, timeout
    TransportFailure(String),
    /// Peer answered 4xx
    ClientError {
        kind: ClientErrorKind,
        status: u16,
        body: String,
    },
    /// Peer answered 5xx, or no usable status
    ServerFailure { status: u16, body: String },
}

/// Per-call-site risk posture.
///
/// The same peer may be queried under different policies by different
/// callers; the policy is an argument of each operation, never client-level
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPolicy {
    /// Ambiguity about peer state must block the caller's downstream action
    FailSecure,
    /// Ambiguity about peer state is treated as "no data" and the caller proceeds
    FailOpen,
}

/// Identifies the call for error details and logs
#[derive(Debug, Clone)]
pub struct CallContext {
    pub service: PeerService,
    pub operation: &'static str,
    pub subject: String,
}

impl CallContext {
    pub fn new(service: PeerService, operation: &'static str, subject: impl Into<String>) -> Self {
        Self {
            service,
            operation,
            subject: subject.into(),
        }
    }
}

/// Classify a send-level failure. No response was received, so every cause
/// lands in the transport bucket; the cause string is kept for logs.
pub fn classify_transport(err: &reqwest::Error) -> CallOutcome {
    let cause = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        "connection failed".to_string()
    } else {
        err.to_string()
    };
    CallOutcome::TransportFailure(cause)
}

/// Classify a completed response by status code.
pub fn classify_status(status: u16, body: String) -> CallOutcome {
    match status {
        200..=299 => CallOutcome::Success(extract_payload(&body)),
        404 => CallOutcome::ClientError {
            kind: ClientErrorKind::NotFound,
            status,
            body,
        },
        401 => CallOutcome::ClientError {
            kind: ClientErrorKind::Unauthorized,
            status,
            body,
        },
        403 => CallOutcome::ClientError {
            kind: ClientErrorKind::Forbidden,
            status,
            body,
        },
        400..=499 => CallOutcome::ClientError {
            kind: ClientErrorKind::Other,
            status,
            body,
        },
        // 5xx, plus informational/redirect codes a GET should never see
        _ => CallOutcome::ServerFailure { status, body },
    }
}

/// Unwrap the peer's response envelope: the payload lives at the `data`
/// field when the body is an object carrying one, else it is the body
/// itself. A body that is not JSON is "no data", not a parse failure.
fn extract_payload(body: &str) -> Value {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(mut map)) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        Ok(value) => value,
        Err(_) => Value::Null,
    }
}

/// Reduce a classified outcome under the declared policy.
///
/// `default` is the operation's documented safe default; `parse` turns the
/// success payload into the typed value, returning `None` when the expected
/// shape is absent (which also resolves to the default).
pub fn resolve_outcome<T>(
    policy: CallPolicy,
    outcome: CallOutcome,
    ctx: &CallContext,
    default: T,
    parse: impl FnOnce(Value) -> Option<T>,
) -> Result<T, PeerError> {
    match outcome {
        CallOutcome::Success(payload) => Ok(parse(payload).unwrap_or(default)),

        // A confirmed absence is never ambiguous: safe default under both
        // policies.
        CallOutcome::ClientError {
            kind: ClientErrorKind::NotFound,
            ..
        } => Ok(default),

        CallOutcome::ClientError {
            kind: ClientErrorKind::Unauthorized | ClientErrorKind::Forbidden,
            status,
            ..
        } => match policy {
            CallPolicy::FailOpen => {
                warn!(
                    service = %ctx.service,
                    operation = ctx.operation,
                    status,
                    "peer refused authorization, degrading to default"
                );
                Ok(default)
            }
            // Inability to authorize the check is itself evidence the check
            // could not be performed.
            CallPolicy::FailSecure => Err(verification_failed(ctx, Some(status))),
        },

        // Ambiguous business error, never silently swallowed.
        CallOutcome::ClientError { status, .. } => Err(verification_failed(ctx, Some(status))),

        CallOutcome::TransportFailure(cause) => match policy {
            CallPolicy::FailOpen => {
                warn!(
                    service = %ctx.service,
                    operation = ctx.operation,
                    cause = %cause,
                    "peer unreachable, degrading to default"
                );
                Ok(default)
            }
            CallPolicy::FailSecure => Err(unavailable(ctx, None)),
        },

        CallOutcome::ServerFailure { status, .. } => match policy {
            CallPolicy::FailOpen => {
                warn!(
                    service = %ctx.service,
                    operation = ctx.operation,
                    status,
                    "peer failed, degrading to default"
                );
                Ok(default)
            }
            CallPolicy::FailSecure => Err(unavailable(ctx, Some(status))),
        },
    }
}

fn unavailable(ctx: &CallContext, status: Option<u16>) -> PeerError {
    PeerError::PeerUnavailable {
        service: ctx.service,
        operation: ctx.operation,
        subject: ctx.subject.clone(),
        status,
    }
}

fn verification_failed(ctx: &CallContext, status: Option<u16>) -> PeerError {
    PeerError::VerificationFailed {
        service: ctx.service,
        operation: ctx.operation,
        subject: ctx.subject.clone(),
        status,
    }
}
