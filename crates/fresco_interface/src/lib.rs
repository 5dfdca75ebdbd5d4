//! Collaborator trait definitions for the Fresco library.
//!
//! The orchestrator consumes two external operations: a single content call
//! that produces posts for all platforms at once, and a per-platform image
//! call. Backends implement these traits; tests substitute mocks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ContentGenerator, ImageGenerator};
