//! Tone selection for generated copy.

use serde::{Deserialize, Serialize};

/// Desired tone of voice for all three generated posts.
///
/// # Examples
///
/// ```
/// use fresco_core::Tone;
///
/// assert_eq!(Tone::Witty.to_string(), "Witty");
/// assert_eq!(Tone::default(), Tone::Professional);
/// ```
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
    strum::EnumIter,
)]
pub enum Tone {
    /// Business-appropriate, polished voice
    #[default]
    Professional,
    /// Playful, humorous voice
    Witty,
    /// Time-pressure, call-to-action voice
    Urgent,
}
