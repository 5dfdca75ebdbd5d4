//! Boundary validation for loosely-typed Gemini payloads.
//!
//! Nothing enters the core data model until it has passed through these
//! conversions; a payload that parses but misses a required field is a
//! schema violation, not a partial result.

use fresco_core::{SocialPost, SocialPostSet};
use fresco_error::{ContentError, ContentErrorKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PostDto {
    content: String,
    hashtags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PostSetDto {
    #[serde(rename = "linkedIn")]
    linked_in: PostDto,
    twitter: PostDto,
    instagram: PostDto,
}

impl From<PostDto> for SocialPost {
    fn from(dto: PostDto) -> Self {
        SocialPost::new(dto.content, dto.hashtags)
    }
}

/// Parse the structured content payload into the typed post set.
///
/// Fails with [`ContentErrorKind::SchemaViolation`] when a platform key or a
/// required field (`content`, `hashtags`) is missing or mistyped.
pub fn parse_post_set(text: &str) -> Result<SocialPostSet, ContentError> {
    let dto: PostSetDto = serde_json::from_str(text.trim())
        .map_err(|e| ContentError::new(ContentErrorKind::SchemaViolation(e.to_string())))?;
    Ok(SocialPostSet::new(
        dto.linked_in.into(),
        dto.twitter.into(),
        dto.instagram.into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_core::Platform;

    const VALID: &str = r#"{
        "linkedIn": {"content": "Long-form post", "hashtags": ["Productivity", "SaaS"]},
        "twitter": {"content": "Punchy hook", "hashtags": ["launch"]},
        "instagram": {"content": "Visual caption", "hashtags": []}
    }"#;

    #[test]
    fn parses_valid_payload() {
        let set = parse_post_set(VALID).unwrap();
        assert_eq!(set.get(Platform::LinkedIn).body(), "Long-form post");
        assert_eq!(
            set.get(Platform::LinkedIn).hashtags(),
            &vec!["Productivity".to_string(), "SaaS".to_string()]
        );
        assert_eq!(set.get(Platform::Instagram).hashtags().len(), 0);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let padded = format!("\n  {VALID}  \n");
        assert!(parse_post_set(&padded).is_ok());
    }

    #[test]
    fn missing_platform_key_is_schema_violation() {
        let text = r#"{
            "linkedIn": {"content": "a", "hashtags": []},
            "twitter": {"content": "b", "hashtags": []}
        }"#;
        let err = parse_post_set(text).unwrap_err();
        assert!(matches!(err.kind, ContentErrorKind::SchemaViolation(_)));
    }

    #[test]
    fn missing_hashtags_field_is_schema_violation() {
        let text = r#"{
            "linkedIn": {"content": "a"},
            "twitter": {"content": "b", "hashtags": []},
            "instagram": {"content": "c", "hashtags": []}
        }"#;
        let err = parse_post_set(text).unwrap_err();
        assert!(matches!(err.kind, ContentErrorKind::SchemaViolation(_)));
    }

    #[test]
    fn non_json_is_schema_violation() {
        let err = parse_post_set("I'm sorry, I can't help with that.").unwrap_err();
        assert!(matches!(err.kind, ContentErrorKind::SchemaViolation(_)));
    }
}
