//! Google Gemini backend.
//!
//! One [`GeminiClient`] serves both collaborator seams: the content call
//! goes to `models/<model>:generateContent` with a response schema that
//! forces the three-platform post shape, and each image call goes to
//! `models/<model>:predict` with the platform's aspect ratio.

mod client;
mod conversion;
mod dto;

pub use client::{GeminiClient, GeminiSettings, GeminiSettingsBuilder};
