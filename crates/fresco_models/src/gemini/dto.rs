//! Wire types for the Gemini REST API.

use fresco_core::{AspectRatio, GenerationRequest};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Request body for `models/<model>:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation content blocks (a single user prompt here)
    pub contents: Vec<RequestContent>,
    /// Structured-output configuration
    pub generation_config: GenerationConfig,
}

/// One content block of a generation request.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    /// Parts of the block
    pub parts: Vec<RequestPart>,
}

/// A text part of a request content block.
#[derive(Debug, Clone, Serialize)]
pub struct RequestPart {
    /// Prompt text
    pub text: String,
}

/// Generation configuration forcing structured JSON output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Always `application/json`
    pub response_mime_type: String,
    /// Schema the response must satisfy
    pub response_schema: serde_json::Value,
}

impl GenerateContentRequest {
    /// Build the single content call for a generation request.
    pub fn for_posts(request: &GenerationRequest) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: content_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: post_set_schema(),
            },
        }
    }
}

/// Response body for `models/<model>:generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Response candidates, best first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content block
    pub content: CandidateContent,
}

/// The content block of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Parts of the block
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A part of a candidate content block.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    /// Text payload, absent for non-text parts
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// First text part of the first candidate, if any.
    pub fn primary_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|part| part.text.as_deref())
    }
}

/// Request body for `models/<model>:predict` (Imagen).
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    /// Prompt instances (a single prompt here)
    pub instances: Vec<PredictInstance>,
    /// Image generation parameters
    pub parameters: PredictParameters,
}

/// One prompt instance of an image request.
#[derive(Debug, Clone, Serialize)]
pub struct PredictInstance {
    /// Image prompt text
    pub prompt: String,
}

/// Image generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictParameters {
    /// Number of images to generate
    pub sample_count: u32,
    /// Wire-form ratio, e.g. `"16:9"`
    pub aspect_ratio: String,
    /// Output MIME type, e.g. `"image/jpeg"`
    pub output_mime_type: String,
}

impl PredictRequest {
    /// Build a single-image JPEG request at the given aspect ratio.
    pub fn single(prompt: &str, aspect_ratio: AspectRatio) -> Self {
        Self {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: aspect_ratio.as_str().to_string(),
                output_mime_type: "image/jpeg".to_string(),
            },
        }
    }
}

/// Response body for `models/<model>:predict`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    /// Generated images, possibly empty
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// One generated image.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64-encoded image bytes
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
    /// MIME type of the image
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Prompt sent on the content call, tailoring one idea for all platforms.
pub fn content_prompt(request: &GenerationRequest) -> String {
    format!(
        "You are an expert social media manager. Your task is to generate three social media \
         posts from a single idea, tailored for LinkedIn, Twitter/X, and Instagram.\n\
         The user's idea is: \"{idea}\"\n\
         The desired tone is: \"{tone}\"\n\n\
         Please generate content for each platform with the following considerations:\n\
         - LinkedIn: Professional, detailed, and engaging for a business audience. Should be a \
         longer form post.\n\
         - Twitter/X: Short, punchy, and concise. Use a strong hook. Maximum 280 characters.\n\
         - Instagram: Visually-focused caption. Start with a hook, followed by a short \
         paragraph, and include relevant, popular hashtags.\n\n\
         Provide the output in a JSON format that strictly follows the provided schema.",
        idea = request.idea(),
        tone = request.tone(),
    )
}

/// JSON schema for the three-platform post response.
///
/// Mirrors the per-platform shape the parser expects: every platform key and
/// both fields of each post are required.
pub fn post_set_schema() -> serde_json::Value {
    let post = json!({
        "type": "OBJECT",
        "properties": {
            "content": {
                "type": "STRING",
                "description": "The main body of the social media post."
            },
            "hashtags": {
                "type": "ARRAY",
                "items": {
                    "type": "STRING",
                    "description": "A relevant hashtag, without the '#' symbol."
                },
                "description": "An array of relevant hashtags for the post."
            }
        },
        "required": ["content", "hashtags"]
    });
    json!({
        "type": "OBJECT",
        "properties": {
            "linkedIn": post.clone(),
            "twitter": post.clone(),
            "instagram": post,
        },
        "required": ["linkedIn", "twitter", "instagram"]
    })
}
