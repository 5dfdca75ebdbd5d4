//! Error types for the Fresco library.
//!
//! This crate provides the foundation error types used throughout the Fresco
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use fresco_error::{ContentError, ContentErrorKind, FrescoResult};
//!
//! fn fetch_posts() -> FrescoResult<String> {
//!     Err(ContentError::new(ContentErrorKind::Transport(
//!         "Connection refused".to_string(),
//!     )))?
//! }
//!
//! match fetch_posts() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod busy;
mod config;
mod content;
mod error;
mod image;
mod validation;

pub use busy::BusyError;
pub use config::ConfigError;
pub use content::{ContentError, ContentErrorKind};
pub use error::{FrescoError, FrescoErrorKind, FrescoResult};
pub use image::{ImageError, ImageErrorKind};
pub use validation::ValidationError;
