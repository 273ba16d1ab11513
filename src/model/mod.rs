//! Domain model types (pure).
//!
//! Records as served by the attractions endpoint, plus the domain-level
//! keyboard actions. No I/O and no UI state lives here.

pub mod attraction;
pub mod key_action;

// Re-export for convenience
pub use attraction::{ApiResponse, Attraction, CategoryTag, ImageRef, PAGE_SIZE};
pub use key_action::KeyAction;
