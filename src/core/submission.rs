//! Contact submission protocol
//!
//! Submissions go to a third-party form relay. The primary path is a scripted
//! multipart POST whose response can be inspected. When that request fails at
//! the transport level (the relay is unreachable from script, e.g. CORS or a
//! blocked connection) the same fields are sent through a legacy full-page
//! form post whose result cannot be observed.
//!
//! # Outcome rules
//!
//! - 2xx from the primary path: [`SubmissionOutcome::Delivered`]
//! - non-2xx from the primary path: [`SubmissionOutcome::Rejected`], never
//!   routed to the fallback and never retried
//! - transport failure: fallback post, then
//!   [`SubmissionOutcome::DeliveredUnconfirmed`] if it could be dispatched or
//!   [`SubmissionOutcome::FallbackFailed`] if dispatching it threw
//! - anything else: [`SubmissionOutcome::Errored`]
//!
//! `DeliveredUnconfirmed` is optimistic: a legacy post that was dispatched but
//! then failed on the wire looks exactly like one that succeeded. The form
//! treats both as success.

use std::fmt;

use serde::Deserialize;

/// Field values sent to the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactPayload {
    /// Form field name/value pairs in submission order
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("company", self.company.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}

/// Failure of the primary (scripted) submission path
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response ("failed to fetch")
    #[error("Network error: {0}")]
    Network(String),

    /// The relay answered with a non-success status
    #[error("Relay rejected submission with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// Any other failure while building or sending the request
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl TransportError {
    /// Classify a raw error message from the platform fetch layer.
    pub fn from_fetch_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if is_transport_failure(&message) {
            TransportError::Network(message)
        } else {
            TransportError::Unexpected(message)
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        matches!(self, TransportError::Network(_))
    }
}

/// Failure to construct or dispatch the fallback form post
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Fallback form post failed: {0}")]
pub struct FallbackError(pub String);

/// Browsers word fetch rejections differently; these all mean the request
/// never reached a server.
const TRANSPORT_FAILURE_MARKERS: [&str; 4] = [
    "failed to fetch",
    "networkerror",
    "load failed",
    "network request failed",
];

/// Whether a fetch error message describes a network-level failure
pub fn is_transport_failure(message: &str) -> bool {
    let lower = message.to_lowercase();
    TRANSPORT_FAILURE_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

#[derive(Debug, Default, Deserialize)]
struct RelayErrorBody {
    error: Option<String>,
    #[serde(default)]
    errors: Vec<RelayFieldError>,
}

#[derive(Debug, Deserialize)]
struct RelayFieldError {
    message: Option<String>,
}

/// Extract a human-readable reason from a relay error body.
///
/// Understands `{"error": "..."}` and `{"errors": [{"message": "..."}]}`.
pub fn detail_from_body(body: &str) -> Option<String> {
    let parsed: RelayErrorBody = serde_json::from_str(body).ok()?;
    if let Some(error) = parsed.error.filter(|e| !e.trim().is_empty()) {
        return Some(error);
    }
    let joined = parsed
        .errors
        .into_iter()
        .filter_map(|e| e.message)
        .collect::<Vec<_>>()
        .join("; ");
    (!joined.is_empty()).then_some(joined)
}

/// Scripted submission whose response can be inspected.
///
/// Implementations return `Ok(())` for a 2xx response,
/// [`TransportError::Rejected`] for any other status and
/// [`TransportError::Network`] when no response was received.
#[allow(async_fn_in_trait)]
pub trait SubmissionTransport {
    async fn send(&self, endpoint: &str, payload: &ContactPayload) -> Result<(), TransportError>;
}

/// Fire-and-forget submission used when the scripted path cannot reach the relay.
pub trait FallbackTransport {
    fn post(&self, endpoint: &str, payload: &ContactPayload) -> Result<(), FallbackError>;
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// Relay confirmed receipt
    Delivered,
    /// Fallback post dispatched; actual delivery unknown
    DeliveredUnconfirmed,
    /// Relay answered with a non-success status
    Rejected { status: u16, detail: Option<String> },
    /// Fallback post could not be dispatched
    FallbackFailed(String),
    /// Primary path failed for a reason other than transport
    Errored(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SubmissionOutcome::Delivered | SubmissionOutcome::DeliveredUnconfirmed
        )
    }

    /// Banner text for failed outcomes
    pub fn failure_message(&self, fallback_email: &str) -> Option<String> {
        match self {
            SubmissionOutcome::Delivered | SubmissionOutcome::DeliveredUnconfirmed => None,
            SubmissionOutcome::Rejected {
                status,
                detail: Some(detail),
            } => Some(format!("Submission failed ({}): {}", status, detail)),
            SubmissionOutcome::Rejected { status, detail: None } => Some(format!(
                "Submission failed with status {}. Please try again.",
                status
            )),
            SubmissionOutcome::FallbackFailed(_) => Some(format!(
                "We couldn't send your message. Please email us directly at {}.",
                fallback_email
            )),
            SubmissionOutcome::Errored(_) => Some(format!(
                "Something went wrong. Please try again or email us at {}.",
                fallback_email
            )),
        }
    }
}

/// One-line log summary naming the path that was taken
impl fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionOutcome::Delivered => write!(f, "delivered via relay request"),
            SubmissionOutcome::DeliveredUnconfirmed => {
                write!(f, "relay unreachable, dispatched via form post (unconfirmed)")
            }
            SubmissionOutcome::Rejected { status, detail } => match detail {
                Some(detail) => write!(f, "rejected by relay with status {}: {}", status, detail),
                None => write!(f, "rejected by relay with status {}", status),
            },
            SubmissionOutcome::FallbackFailed(reason) => {
                write!(f, "relay unreachable and form post failed: {}", reason)
            }
            SubmissionOutcome::Errored(reason) => write!(f, "relay request errored: {}", reason),
        }
    }
}

/// Run the two-path submission protocol. Never fails: every error is
/// folded into the returned outcome.
pub async fn submit_with_fallback<P, F>(
    endpoint: &str,
    payload: &ContactPayload,
    primary: &P,
    fallback: &F,
) -> SubmissionOutcome
where
    P: SubmissionTransport,
    F: FallbackTransport,
{
    match primary.send(endpoint, payload).await {
        Ok(()) => {
            tracing::info!("Contact submission delivered");
            SubmissionOutcome::Delivered
        }
        Err(TransportError::Rejected { status, detail }) => {
            tracing::error!("Relay rejected contact submission: status={}", status);
            SubmissionOutcome::Rejected { status, detail }
        }
        Err(TransportError::Network(reason)) => {
            tracing::warn!("Primary submission unreachable ({}), using form post", reason);
            match fallback.post(endpoint, payload) {
                Ok(()) => SubmissionOutcome::DeliveredUnconfirmed,
                Err(e) => {
                    tracing::error!("{}", e);
                    SubmissionOutcome::FallbackFailed(e.0)
                }
            }
        }
        Err(TransportError::Unexpected(reason)) => {
            tracing::error!("Contact submission failed: {}", reason);
            SubmissionOutcome::Errored(reason)
        }
    }
}
