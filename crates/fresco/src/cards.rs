//! Presentation binder: project generation state onto renderable cards.
//!
//! A deterministic projection with no side effects and no failure mode,
//! recomputed on every state change. Each platform's card reveals its
//! content block and image independently as they arrive, showing skeleton
//! placeholders until then.

use fresco_core::{AspectRatio, GenerationState, GenerationStatus, ImageRef, Platform};

/// The content area of a card: a skeleton until the content call succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardContent {
    /// Loading placeholder
    Skeleton,
    /// Revealed post copy
    Ready {
        /// Post body
        body: String,
        /// Hashtags without the `#` symbol
        hashtags: Vec<String>,
    },
}

/// The image area of a card: a skeleton until this platform's image arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    /// Loading placeholder, sized by the platform's aspect ratio
    Skeleton,
    /// Revealed image
    Ready(ImageRef),
}

/// One renderable card for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    platform: Platform,
    aspect_ratio: AspectRatio,
    content: CardContent,
    image: CardImage,
}

impl PostCard {
    /// The platform this card renders.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Aspect ratio shaping the image area.
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// The card's content area.
    pub fn content(&self) -> &CardContent {
        &self.content
    }

    /// The card's image area.
    pub fn image(&self) -> &CardImage {
        &self.image
    }

    /// Whether the content block has been revealed.
    pub fn content_ready(&self) -> bool {
        matches!(self.content, CardContent::Ready { .. })
    }

    /// Whether the image has been revealed.
    pub fn image_ready(&self) -> bool {
        matches!(self.image, CardImage::Ready(_))
    }
}

/// Project one platform's card from the current state.
pub fn card(state: &GenerationState, platform: Platform) -> PostCard {
    let content = match state.post(platform) {
        Some(post) => CardContent::Ready {
            body: post.body().clone(),
            hashtags: post.hashtags().clone(),
        },
        None => CardContent::Skeleton,
    };
    let image = match state.image(platform) {
        Some(image) => CardImage::Ready(image.clone()),
        None => CardImage::Skeleton,
    };
    PostCard {
        platform,
        aspect_ratio: platform.spec().aspect_ratio(),
        content,
        image,
    }
}

/// Project one card per platform, in display order.
pub fn cards(state: &GenerationState) -> Vec<PostCard> {
    Platform::ALL
        .iter()
        .map(|platform| card(state, *platform))
        .collect()
}

/// Whether the card section should be rendered at all.
///
/// Cards appear while a run is loading or once content is present; an idle
/// or failed session shows none.
pub fn cards_visible(state: &GenerationState) -> bool {
    state.status() == GenerationStatus::Loading || state.content().is_some()
}
