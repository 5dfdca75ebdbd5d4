//! Core data types for the Fresco social content generation library.
//!
//! This crate provides the foundation data types used across the Fresco
//! workspace: the platform registry, post content, image references, the
//! validated generation request, and the progressive-reveal generation state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod platform;
mod post;
mod request;
mod state;
mod tone;

pub use image::ImageRef;
pub use platform::{AspectRatio, Platform, PlatformSpec};
pub use post::{SocialPost, SocialPostSet};
pub use request::GenerationRequest;
pub use state::{GenerationState, GenerationStatus, PlatformImages};
pub use tone::Tone;
