//! Validated generation request.

use crate::Tone;
use fresco_error::ValidationError;
use serde::{Deserialize, Serialize};

/// A validated content idea plus tone, immutable once issued.
///
/// The idea is trimmed on construction and must be non-empty; violating this
/// fails with a [`ValidationError`] before any network activity.
///
/// # Examples
///
/// ```
/// use fresco_core::{GenerationRequest, Tone};
///
/// let request = GenerationRequest::new("  launch of a productivity app  ", Tone::Witty).unwrap();
/// assert_eq!(request.idea(), "launch of a productivity app");
///
/// assert!(GenerationRequest::new("   ", Tone::Professional).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    idea: String,
    tone: Tone,
}

impl GenerationRequest {
    /// Build a request from raw user input, trimming the idea.
    pub fn new(idea: impl AsRef<str>, tone: Tone) -> Result<Self, ValidationError> {
        let idea = idea.as_ref().trim();
        if idea.is_empty() {
            return Err(ValidationError::new("Please enter an idea."));
        }
        Ok(Self {
            idea: idea.to_string(),
            tone,
        })
    }

    /// The trimmed content idea.
    pub fn idea(&self) -> &str {
        &self.idea
    }

    /// The requested tone of voice.
    pub fn tone(&self) -> Tone {
        self.tone
    }
}
