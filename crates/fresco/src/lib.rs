//! Fresco — platform-tailored social content generation.
//!
//! Fresco turns a single content idea and a tone into one post per supported
//! platform (LinkedIn, Twitter/X, Instagram) plus a matching generated image
//! per platform. One content call produces all posts atomically; image
//! generation then fans out per platform, and each completion is merged into
//! an observable [`GenerationState`] so results reveal progressively.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fresco::{GeminiClient, Studio, Tone};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     fresco::init_tracing();
//!
//!     let client = GeminiClient::new()?;
//!     let studio = Studio::new(client.clone(), client);
//!
//!     let mut updates = studio.subscribe();
//!     studio.generate("launch of a productivity app", Tone::Witty).await?;
//!
//!     let state = updates.borrow();
//!     for card in fresco::cards(&state) {
//!         println!("{card:?}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Fresco is organized as a workspace with focused crates:
//!
//! - `fresco_error` - Error types
//! - `fresco_core` - Core data types (platform registry, posts, state)
//! - `fresco_interface` - Collaborator trait definitions
//! - `fresco_models` - Generation backend implementations
//!
//! This crate adds the orchestration layer and re-exports everything for
//! convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cards;
pub mod prompt;
mod studio;
mod telemetry;

pub use cards::{CardContent, CardImage, PostCard, card, cards, cards_visible};
pub use studio::Studio;
pub use telemetry::init_tracing;

pub use fresco_core::{
    AspectRatio, GenerationRequest, GenerationState, GenerationStatus, ImageRef, Platform,
    PlatformImages, PlatformSpec, SocialPost, SocialPostSet, Tone,
};
pub use fresco_error::{
    BusyError, ConfigError, ContentError, ContentErrorKind, FrescoError, FrescoErrorKind,
    FrescoResult, ImageError, ImageErrorKind, ValidationError,
};
pub use fresco_interface::{ContentGenerator, ImageGenerator};
pub use fresco_models::{GeminiClient, GeminiSettings, GeminiSettingsBuilder};
