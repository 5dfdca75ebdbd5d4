//! Gemini REST client implementing both collaborator seams.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use derive_builder::Builder;
use derive_getters::Getters;
use reqwest::Client;
use tracing::{debug, instrument};

use fresco_core::{AspectRatio, GenerationRequest, ImageRef, SocialPostSet};
use fresco_error::{
    ConfigError, ContentError, ContentErrorKind, FrescoResult, ImageError, ImageErrorKind,
};
use fresco_interface::{ContentGenerator, ImageGenerator};

use super::conversion;
use super::dto::{GenerateContentRequest, GenerateContentResponse, PredictRequest, PredictResponse};

fn default_content_model() -> String {
    "gemini-2.5-pro".to_string()
}

fn default_image_model() -> String {
    "imagen-4.0-generate-001".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// Tunable Gemini client settings.
///
/// Every external call runs under the client-wide timeout; a timeout follows
/// that call's ordinary failure path.
///
/// # Examples
///
/// ```
/// use fresco_models::GeminiSettingsBuilder;
///
/// let settings = GeminiSettingsBuilder::default()
///     .content_model("gemini-2.5-flash")
///     .timeout_secs(30u64)
///     .build()
///     .unwrap();
/// assert_eq!(settings.content_model(), "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Builder)]
#[builder(setter(into))]
pub struct GeminiSettings {
    /// Model used for the content call
    #[builder(default = "default_content_model()")]
    content_model: String,
    /// Model used for the image calls
    #[builder(default = "default_image_model()")]
    image_model: String,
    /// API base URL
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// Per-call deadline in seconds
    #[builder(default = "60")]
    timeout_secs: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            content_model: default_content_model(),
            image_model: default_image_model(),
            base_url: default_base_url(),
            timeout_secs: 60,
        }
    }
}

/// Client for the Gemini REST API.
///
/// Serves both the content seam (`generateContent` with a strict response
/// schema) and the image seam (Imagen `:predict`, one JPEG per call).
///
/// # Examples
///
/// ```no_run
/// use fresco_models::GeminiClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Reads GEMINI_API_KEY from the environment.
/// let client = GeminiClient::new()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    settings: GeminiSettings,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("content_model", self.settings.content_model())
            .field("image_model", self.settings.image_model())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client with default settings.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable;
    /// its absence is a hard startup failure.
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> FrescoResult<Self> {
        Self::with_settings(GeminiSettings::default())
    }

    /// Create a client with custom settings, reading the key from the environment.
    ///
    /// A `.env` file is honored when present.
    pub fn with_settings(settings: GeminiSettings) -> FrescoResult<Self> {
        dotenvy::dotenv().ok();
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::new("GEMINI_API_KEY environment variable not set"))?;
        Self::with_api_key(api_key, settings)
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, settings: GeminiSettings) -> FrescoResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(*settings.timeout_secs()))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            settings,
        })
    }
}

fn content_transport_error(e: reqwest::Error) -> ContentError {
    if e.is_timeout() {
        ContentError::new(ContentErrorKind::Timeout)
    } else {
        ContentError::new(ContentErrorKind::Transport(e.to_string()))
    }
}

fn image_transport_error(e: reqwest::Error) -> ImageError {
    if e.is_timeout() {
        ImageError::new(ImageErrorKind::Timeout)
    } else {
        ImageError::new(ImageErrorKind::Transport(e.to_string()))
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    #[instrument(skip(self, request))]
    async fn generate_posts(&self, request: &GenerationRequest) -> FrescoResult<SocialPostSet> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.settings.base_url(),
            self.settings.content_model()
        );
        let body = GenerateContentRequest::for_posts(request);
        debug!(url = %url, "Sending Gemini content request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(content_transport_error)?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ContentError::new(ContentErrorKind::Http {
                status_code,
                message,
            })
            .into());
        }

        let payload: GenerateContentResponse = response.json().await.map_err(|e| {
            ContentError::new(ContentErrorKind::MalformedResponse(format!(
                "Failed to parse response: {e}"
            )))
        })?;
        let text = payload.primary_text().ok_or_else(|| {
            ContentError::new(ContentErrorKind::MalformedResponse(
                "response contained no text part".to_string(),
            ))
        })?;

        conversion::parse_post_set(text).map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    #[instrument(skip(self, prompt))]
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> FrescoResult<ImageRef> {
        let url = format!(
            "{}/models/{}:predict",
            self.settings.base_url(),
            self.settings.image_model()
        );
        let body = PredictRequest::single(prompt, aspect_ratio);
        debug!(url = %url, aspect_ratio = %aspect_ratio, "Sending Imagen request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(image_transport_error)?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ImageError::new(ImageErrorKind::Http {
                status_code,
                message,
            })
            .into());
        }

        let payload: PredictResponse = response.json().await.map_err(|e| {
            ImageError::new(ImageErrorKind::MalformedResponse(format!(
                "Failed to parse response: {e}"
            )))
        })?;

        let encoded = payload
            .predictions
            .into_iter()
            .find_map(|p| p.bytes_base64_encoded)
            .filter(|b| !b.is_empty())
            .ok_or_else(|| ImageError::new(ImageErrorKind::EmptyResult))?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&encoded)
            .map_err(|e| {
                ImageError::new(ImageErrorKind::MalformedResponse(format!(
                    "Base64 decode error: {e}"
                )))
            })?;
        debug!(bytes = bytes.len(), "Imagen returned one image");

        Ok(ImageRef::from_jpeg_base64(encoded))
    }

    fn provider_name(&self) -> &'static str {
        "imagen"
    }
}
