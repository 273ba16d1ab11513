//! Blocking HTTP client for the attractions endpoint.
//!
//! The browser original calls the tourism API through a CORS relay and
//! falls back to a direct request when the relay path fails for any
//! reason. That two-tier shape is kept here: relay first, one direct
//! attempt second, no retries beyond that substitution, no caching.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, warn};

use crate::api::error::FetchError;
use crate::model::ApiResponse;

/// Default locale segment sent to the API.
pub const DEFAULT_LANG: &str = "zh-tw";

/// Client-level request timeout. The fetch algorithm itself imposes no
/// deadline; this is the transport default the algorithm relies on.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Base URLs for the two transports.
///
/// Production values are compile-time constants; tests inject local
/// listeners to exercise the relay→direct order.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Relay (forwarding service) base. Queried as
    /// `{relay_base}/?{url-encoded target}`.
    pub relay_base: String,
    /// Tourism API base. Extended with `/{lang}/Attractions/All?page={page}`.
    pub api_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            relay_base: "https://corsproxy.io".to_string(),
            api_base: "https://www.travel.taipei/open-api".to_string(),
        }
    }
}

/// Source of attraction pages.
///
/// The seam between the state-machine driver and the network: the real
/// client implements it with HTTP, tests implement it with canned
/// outcomes. One method, one page per call.
pub trait AttractionSource: Send + Sync {
    /// Fetch one page of attractions for the given locale.
    fn fetch_page(&self, page: u32, lang: &str) -> Result<ApiResponse, FetchError>;
}

/// Which transport an attempt went through. Selects the status-error
/// flavor and is carried into log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transport {
    Relay,
    Direct,
}

impl Transport {
    fn status_error(self, status: u16) -> FetchError {
        match self {
            Transport::Relay => FetchError::RelayStatus { status },
            Transport::Direct => FetchError::DirectStatus { status },
        }
    }
}

/// Map a transport-level reqwest failure into the taxonomy: connection
/// and timeout failures are the connectivity case; everything else (body
/// decode, protocol errors) surfaces its message verbatim.
fn classify_request_error(err: reqwest::Error) -> FetchError {
    if err.is_connect() || err.is_timeout() {
        FetchError::Unreachable {
            detail: err.to_string(),
        }
    } else {
        FetchError::Other(err.to_string())
    }
}

/// Blocking client implementing the relay-first, direct-fallback fetch.
#[derive(Debug, Clone)]
pub struct AttractionsClient {
    http: Client,
    endpoints: Endpoints,
}

impl AttractionsClient {
    /// Create a client against the production endpoints.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_endpoints(Endpoints::default())
    }

    /// Create a client against explicit endpoints.
    pub fn with_endpoints(endpoints: Endpoints) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("taiview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Other(e.to_string()))?;
        Ok(Self { http, endpoints })
    }

    /// The direct URL for a page: `{api_base}/{lang}/Attractions/All?page={page}`.
    fn target_url(&self, page: u32, lang: &str) -> String {
        format!(
            "{}/{}/Attractions/All?page={}",
            self.endpoints.api_base, lang, page
        )
    }

    /// The relay URL wrapping `target`: `{relay_base}/?{encoded target}`.
    fn relay_url(&self, target: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
        format!("{}/?{}", self.endpoints.relay_base, encoded)
    }

    /// One GET against `url`, classified for `transport`.
    fn attempt(&self, url: &str, transport: Transport) -> Result<ApiResponse, FetchError> {
        let response = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(classify_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport.status_error(status.as_u16()));
        }

        response
            .json::<ApiResponse>()
            .map_err(classify_request_error)
    }
}

impl AttractionSource for AttractionsClient {
    fn fetch_page(&self, page: u32, lang: &str) -> Result<ApiResponse, FetchError> {
        let target = self.target_url(page, lang);
        let relay = self.relay_url(&target);

        debug!(page, lang, "fetching attractions page via relay");
        match self.attempt(&relay, Transport::Relay) {
            Ok(response) => Ok(response),
            Err(relay_err) => {
                warn!(%target, error = %relay_err, "relay fetch failed, trying direct connection");
                self.attempt(&target, Transport::Direct)
            }
        }
    }
}
