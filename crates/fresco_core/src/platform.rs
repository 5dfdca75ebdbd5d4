//! Supported platforms and their static generation parameters.

use serde::{Deserialize, Serialize};

/// A supported social media platform.
///
/// The set of platforms is fixed; both the orchestrator (to build the image
/// fan-out) and the presentation layer (to shape each card) consult the
/// per-platform [`PlatformSpec`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Platform {
    /// LinkedIn: longer-form, business audience
    LinkedIn,
    /// Twitter/X: short, punchy, 280 characters
    Twitter,
    /// Instagram: visually-focused caption with hashtags
    Instagram,
}

/// Aspect ratio constraint passed to image generation, fixed per platform.
///
/// # Examples
///
/// ```
/// use fresco_core::AspectRatio;
///
/// assert_eq!(AspectRatio::Wide.as_str(), "16:9");
/// assert_eq!(AspectRatio::Square.to_string(), "1:1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum AspectRatio {
    /// 16:9
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9")]
    Wide,
    /// 4:3
    #[serde(rename = "4:3")]
    #[strum(serialize = "4:3")]
    Standard,
    /// 1:1
    #[serde(rename = "1:1")]
    #[strum(serialize = "1:1")]
    Square,
}

impl AspectRatio {
    /// The wire form of the ratio, e.g. `"16:9"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            AspectRatio::Wide => "16:9",
            AspectRatio::Standard => "4:3",
            AspectRatio::Square => "1:1",
        }
    }
}

/// Static per-platform generation parameters.
///
/// Process-wide constant; never mutated. Obtained through [`Platform::spec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformSpec {
    platform: Platform,
    aspect_ratio: AspectRatio,
    content_key: &'static str,
}

impl PlatformSpec {
    /// The platform this spec describes.
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Aspect ratio for this platform's generated image.
    pub const fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Key identifying this platform's entry in the content response.
    pub const fn content_key(&self) -> &'static str {
        self.content_key
    }
}

const LINKED_IN_SPEC: PlatformSpec = PlatformSpec {
    platform: Platform::LinkedIn,
    aspect_ratio: AspectRatio::Standard,
    content_key: "linkedIn",
};

const TWITTER_SPEC: PlatformSpec = PlatformSpec {
    platform: Platform::Twitter,
    aspect_ratio: AspectRatio::Wide,
    content_key: "twitter",
};

const INSTAGRAM_SPEC: PlatformSpec = PlatformSpec {
    platform: Platform::Instagram,
    aspect_ratio: AspectRatio::Square,
    content_key: "instagram",
};

impl Platform {
    /// All supported platforms, in display order.
    pub const ALL: [Platform; 3] = [Platform::LinkedIn, Platform::Twitter, Platform::Instagram];

    /// The immutable generation parameters for this platform.
    ///
    /// # Examples
    ///
    /// ```
    /// use fresco_core::{AspectRatio, Platform};
    ///
    /// let spec = Platform::Instagram.spec();
    /// assert_eq!(spec.aspect_ratio(), AspectRatio::Square);
    /// assert_eq!(spec.content_key(), "instagram");
    /// ```
    pub const fn spec(self) -> &'static PlatformSpec {
        match self {
            Platform::LinkedIn => &LINKED_IN_SPEC,
            Platform::Twitter => &TWITTER_SPEC,
            Platform::Instagram => &INSTAGRAM_SPEC,
        }
    }
}
