//! Trait definitions for generation backends.

use async_trait::async_trait;
use fresco_core::{AspectRatio, GenerationRequest, ImageRef, SocialPostSet};
use fresco_error::FrescoResult;

/// Backend operation producing platform-tailored copy.
///
/// The call requests content for all platforms in a single round trip and
/// fails as a unit; partial per-platform content is not a supported outcome.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate one post per platform from the idea and tone.
    async fn generate_posts(&self, request: &GenerationRequest) -> FrescoResult<SocialPostSet>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Backend operation producing one generated image.
///
/// Issued once per platform after content generation succeeds; calls for
/// different platforms are independent and may complete in any order.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate a single image for the prompt at the given aspect ratio.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> FrescoResult<ImageRef>;

    /// Provider name (e.g., "imagen").
    fn provider_name(&self) -> &'static str;
}
