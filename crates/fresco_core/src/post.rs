//! Generated post content types.

use crate::Platform;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One platform's generated copy: a body and an ordered list of hashtags.
///
/// Hashtags are stored without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SocialPost {
    /// The main body of the post
    body: String,
    /// Relevant hashtags, in generation order, without the `#` symbol
    hashtags: Vec<String>,
}

impl SocialPost {
    /// Create a post from a body and hashtags.
    pub fn new(body: impl Into<String>, hashtags: Vec<String>) -> Self {
        Self {
            body: body.into(),
            hashtags,
        }
    }
}

/// The full content result: one [`SocialPost`] per platform.
///
/// Produced atomically by a single content-generation call; partial
/// per-platform content is not a supported outcome.
///
/// # Examples
///
/// ```
/// use fresco_core::{Platform, SocialPost, SocialPostSet};
///
/// let post = |body: &str| SocialPost::new(body, vec![]);
/// let set = SocialPostSet::new(post("li"), post("tw"), post("ig"));
/// assert_eq!(set.get(Platform::Twitter).body(), "tw");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SocialPostSet {
    /// LinkedIn post
    linked_in: SocialPost,
    /// Twitter/X post
    twitter: SocialPost,
    /// Instagram post
    instagram: SocialPost,
}

impl SocialPostSet {
    /// Assemble the set from its three per-platform posts.
    pub fn new(linked_in: SocialPost, twitter: SocialPost, instagram: SocialPost) -> Self {
        Self {
            linked_in,
            twitter,
            instagram,
        }
    }

    /// Look up the post for a platform.
    pub fn get(&self, platform: Platform) -> &SocialPost {
        match platform {
            Platform::LinkedIn => &self.linked_in,
            Platform::Twitter => &self.twitter,
            Platform::Instagram => &self.instagram,
        }
    }
}
