//! Generation backend implementations for Fresco.
//!
//! Backends implement the [`fresco_interface`] traits. The only production
//! backend is Google Gemini: text through `generateContent` with a strict
//! JSON response schema, images through the Imagen `:predict` endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod gemini;

pub use gemini::{GeminiClient, GeminiSettings, GeminiSettingsBuilder};
