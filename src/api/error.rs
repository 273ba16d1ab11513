//! Fetch failure taxonomy.
//!
//! Failures from the two-tier fetch path are classified at the transport
//! boundary into tagged variants; the view-state machine turns them into
//! user-facing guidance. The `Display` forms keep the upstream kind
//! strings (`HTTP_<code>`, `DIRECT_HTTP_<code>`, `FAILED_TO_FETCH`,
//! `EMPTY_RESPONSE`) so a generic message can embed the raw kind text.

use thiserror::Error;

/// Classified failure from fetching a page of attractions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The relay transport answered with a non-success HTTP status.
    ///
    /// Never terminal on its own: a relay status failure always triggers
    /// the direct fallback, so this variant surfaces in logs and in the
    /// relay attempt's result, not from a full fetch.
    #[error("HTTP_{status}")]
    RelayStatus {
        /// Status code returned by the relay.
        status: u16,
    },

    /// The direct transport answered with a non-success HTTP status after
    /// the relay attempt had already failed.
    #[error("DIRECT_HTTP_{status}")]
    DirectStatus {
        /// Status code returned by the direct endpoint.
        status: u16,
    },

    /// The final transport attempt failed at the network level
    /// (connection refused, DNS, timeout). With both transports down this
    /// is the connectivity case the UI gives CORS/network guidance for.
    #[error("FAILED_TO_FETCH ({detail})")]
    Unreachable {
        /// Transport error description from the failing attempt.
        detail: String,
    },

    /// A response parsed but the expected envelope shape was absent.
    /// Produced by the state machine when a success carries `data: null`.
    #[error("EMPTY_RESPONSE")]
    MissingData,

    /// Any other failure; the message is surfaced verbatim.
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    /// True when the failure is connectivity-shaped (transport-level
    /// failure on the final attempt), the case that receives the
    /// connectivity/CORS guidance message.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, FetchError::Unreachable { .. })
    }

    /// True when either transport was refused with HTTP 401. Covers both
    /// `HTTP_401` and `DIRECT_HTTP_401`, matching the original substring
    /// rule this taxonomy replaces.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            FetchError::RelayStatus { status: 401 } | FetchError::DirectStatus { status: 401 }
        )
    }
}
