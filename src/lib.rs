//! Taipei attractions catalog browser (taiview)
//!
//! TUI application for browsing the attraction catalog served by the
//! Taipei Travel Open API, one page at a time.
//!
//! The crate is split into a pure core (model, state) and an impure shell
//! (api, view): state transitions are plain functions testable without a
//! terminal or a network, while the shell owns the event loop, the HTTP
//! transports, and the ratatui rendering.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
