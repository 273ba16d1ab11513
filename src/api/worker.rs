//! Background fetch execution.
//!
//! The event loop is synchronous and poll-driven, so each page load runs
//! on a short-lived worker thread that reports back over a channel. The
//! loop drains the channel on its timer tick, the same way it would poll
//! any other input source.
//!
//! Outcomes carry the request sequence number they were spawned under;
//! the state machine uses it to discard replies from superseded requests
//! (rapid page flips do not get overwritten by a slow stale response).

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use tracing::debug;

use crate::api::client::AttractionSource;
use crate::api::error::FetchError;
use crate::model::ApiResponse;

/// A completed fetch attempt, tagged with its request sequence number.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Sequence number assigned when the load was started.
    pub seq: u64,
    /// Page that was requested.
    pub page: u32,
    /// The fetch result.
    pub result: Result<ApiResponse, FetchError>,
}

/// Spawns fetch threads and collects their outcomes without blocking.
pub struct FetchWorker<S> {
    source: Arc<S>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl<S: AttractionSource + 'static> FetchWorker<S> {
    /// Wrap a source for background execution.
    pub fn new(source: S) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source: Arc::new(source),
            tx,
            rx,
        }
    }

    /// Start a fetch for `page` under the given sequence number.
    ///
    /// Returns immediately; the outcome arrives via [`FetchWorker::poll`].
    /// An in-flight prior request is not cancelled, it is superseded: its
    /// outcome will carry a stale sequence number and be dropped.
    pub fn spawn_fetch(&self, seq: u64, page: u32, lang: &str) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let lang = lang.to_string();
        thread::spawn(move || {
            debug!(seq, page, "fetch worker started");
            let result = source.fetch_page(page, &lang);
            // A closed receiver means the app is shutting down.
            let _ = tx.send(FetchOutcome { seq, page, result });
        });
    }

    /// Drain completed outcomes without blocking.
    pub fn poll(&self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(outcome) => outcomes.push(outcome),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        outcomes
    }
}
