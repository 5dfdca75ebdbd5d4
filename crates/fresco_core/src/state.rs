//! Progressive-reveal generation state.
//!
//! One [`GenerationState`] value describes a single generation run: content
//! arrives atomically for all platforms, images arrive independently per
//! platform and are merged one entry at a time. The orchestrator is the sole
//! writer; observers only read snapshots.

use crate::{ImageRef, Platform, SocialPost, SocialPostSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Aggregate status of a generation run.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum GenerationStatus {
    /// No run has started (or the previous one was reset)
    #[default]
    Idle,
    /// A run is in flight
    Loading,
    /// Content is present; individual images may still be absent
    Succeeded,
    /// The content call failed; content and images are cleared
    Failed,
}

/// Per-platform image slots with disjoint-field merge semantics.
///
/// Each platform's entry is written at most once per run, independently of
/// its siblings, so updates commute: applying completions in any arrival
/// order yields the same final map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformImages {
    linked_in: Option<ImageRef>,
    twitter: Option<ImageRef>,
    instagram: Option<ImageRef>,
}

impl PlatformImages {
    /// Look up a platform's image, if it has arrived.
    pub fn get(&self, platform: Platform) -> Option<&ImageRef> {
        match platform {
            Platform::LinkedIn => self.linked_in.as_ref(),
            Platform::Twitter => self.twitter.as_ref(),
            Platform::Instagram => self.instagram.as_ref(),
        }
    }

    /// Store one platform's image without touching the other entries.
    pub fn insert(&mut self, platform: Platform, image: ImageRef) {
        let slot = match platform {
            Platform::LinkedIn => &mut self.linked_in,
            Platform::Twitter => &mut self.twitter,
            Platform::Instagram => &mut self.instagram,
        };
        *slot = Some(image);
    }

    /// Reset all entries to absent.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of platforms whose image has arrived.
    pub fn count(&self) -> usize {
        Platform::ALL
            .iter()
            .filter(|p| self.get(**p).is_some())
            .count()
    }

    /// True when no image has arrived.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// The aggregate state of one generation run.
///
/// Owned exclusively by the orchestrator for the lifetime of a request;
/// images are only ever populated after content is present, and starting a
/// new run resets every entry before any new data arrives.
///
/// # Examples
///
/// ```
/// use fresco_core::{GenerationState, GenerationStatus, Platform};
///
/// let mut state = GenerationState::default();
/// assert_eq!(state.status(), GenerationStatus::Idle);
///
/// state.begin();
/// assert_eq!(state.status(), GenerationStatus::Loading);
/// assert!(state.post(Platform::Twitter).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationState {
    status: GenerationStatus,
    content: Option<SocialPostSet>,
    images: PlatformImages,
    error: Option<String>,
}

impl GenerationState {
    /// Aggregate status of the run.
    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    /// The full content set, once the content call has succeeded.
    pub fn content(&self) -> Option<&SocialPostSet> {
        self.content.as_ref()
    }

    /// Per-platform image slots.
    pub fn images(&self) -> &PlatformImages {
        &self.images
    }

    /// User-facing error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// One platform's post, once content is present.
    pub fn post(&self, platform: Platform) -> Option<&SocialPost> {
        self.content.as_ref().map(|set| set.get(platform))
    }

    /// One platform's image, once it has arrived.
    pub fn image(&self, platform: Platform) -> Option<&ImageRef> {
        self.images.get(platform)
    }

    /// Whether a platform's content block can be shown.
    pub fn content_ready(&self, platform: Platform) -> bool {
        self.post(platform).is_some()
    }

    /// Whether a platform's image can be shown.
    pub fn image_ready(&self, platform: Platform) -> bool {
        self.image(platform).is_some()
    }

    /// Transition to `Loading`, clearing all prior content, images, and error.
    ///
    /// No stale entry from an earlier run survives past this point.
    pub fn begin(&mut self) {
        debug!("generation state: begin");
        self.status = GenerationStatus::Loading;
        self.content = None;
        self.images.clear();
        self.error = None;
    }

    /// Store the atomically-arriving content for all platforms.
    pub fn set_content(&mut self, content: SocialPostSet) {
        debug!("generation state: content arrived");
        self.content = Some(content);
    }

    /// Merge one platform's image without overwriting sibling entries.
    ///
    /// Images are requested only once content generation has succeeded; a
    /// merge with no content present indicates a sequencing bug upstream.
    pub fn merge_image(&mut self, platform: Platform, image: ImageRef) {
        debug_assert!(
            self.content.is_some(),
            "image merged before content arrived"
        );
        debug!(platform = %platform, "generation state: image arrived");
        self.images.insert(platform, image);
    }

    /// Transition to `Failed`: set the message, clear content and images.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(message = %message, "generation state: failed");
        self.status = GenerationStatus::Failed;
        self.content = None;
        self.images.clear();
        self.error = Some(message);
    }

    /// Terminal success: content is present, images may individually be absent.
    pub fn complete(&mut self) {
        debug!(images = self.images.count(), "generation state: complete");
        self.status = GenerationStatus::Succeeded;
    }

    /// Surface a message without disturbing the rest of the state.
    ///
    /// Used for validation failures, which leave any previous run's result
    /// on screen.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }
}
