//! Test utilities for Fresco tests.
//!
//! Mock collaborator clients with call recording, scripted failures, and
//! completion-order control.

use async_trait::async_trait;
use fresco::{
    AspectRatio, ContentError, ContentErrorKind, ContentGenerator, FrescoResult,
    GenerationRequest, ImageError, ImageErrorKind, ImageGenerator, ImageRef, SocialPost,
    SocialPostSet,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

/// A fixed three-platform content result for tests.
pub fn post_set() -> SocialPostSet {
    SocialPostSet::new(
        SocialPost::new("LinkedIn body", vec!["Productivity".to_string()]),
        SocialPost::new("Twitter body", vec!["launch".to_string()]),
        SocialPost::new("Instagram body", vec!["app".to_string()]),
    )
}

#[derive(Clone)]
enum ContentBehavior {
    Success(SocialPostSet),
    Error(ContentErrorKind),
    /// Wait for the gate before succeeding; lets tests observe Loading.
    Gated(Arc<Notify>, SocialPostSet),
}

/// Mock content backend with call recording.
#[derive(Clone)]
pub struct MockContentClient {
    behavior: ContentBehavior,
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockContentClient {
    /// Always succeed with the standard post set.
    pub fn new_success() -> Self {
        Self {
            behavior: ContentBehavior::Success(post_set()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fail with the given error.
    pub fn new_error(error: ContentErrorKind) -> Self {
        Self {
            behavior: ContentBehavior::Error(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Block each call on the gate, then succeed.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            behavior: ContentBehavior::Gated(gate, post_set()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of content calls issued.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All recorded requests, in call order.
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentGenerator for MockContentClient {
    async fn generate_posts(&self, request: &GenerationRequest) -> FrescoResult<SocialPostSet> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.behavior {
            ContentBehavior::Success(set) => Ok(set.clone()),
            ContentBehavior::Error(kind) => Err(ContentError::new(kind.clone()).into()),
            ContentBehavior::Gated(gate, set) => {
                gate.notified().await;
                Ok(set.clone())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-content"
    }
}

/// Mock image backend with per-aspect-ratio failures and delays.
#[derive(Clone, Default)]
pub struct MockImageClient {
    failing: Vec<AspectRatio>,
    delays_ms: HashMap<AspectRatio, u64>,
    calls: Arc<Mutex<Vec<(String, AspectRatio)>>>,
}

impl MockImageClient {
    /// Succeed for every platform.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Fail for the given aspect ratios, succeed for the rest.
    pub fn failing_for(ratios: &[AspectRatio]) -> Self {
        Self {
            failing: ratios.to_vec(),
            ..Self::default()
        }
    }

    /// Delay completion for one aspect ratio, controlling arrival order.
    pub fn with_delay(mut self, ratio: AspectRatio, millis: u64) -> Self {
        self.delays_ms.insert(ratio, millis);
        self
    }

    /// Number of image calls issued.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All recorded `(prompt, aspect_ratio)` pairs, in call order.
    pub fn calls(&self) -> Vec<(String, AspectRatio)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImageClient {
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> FrescoResult<ImageRef> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), aspect_ratio));
        if let Some(millis) = self.delays_ms.get(&aspect_ratio) {
            tokio::time::sleep(Duration::from_millis(*millis)).await;
        }
        if self.failing.contains(&aspect_ratio) {
            return Err(ImageError::new(ImageErrorKind::EmptyResult).into());
        }
        Ok(ImageRef::from_jpeg_base64(format!("mock-{aspect_ratio}")))
    }

    fn provider_name(&self) -> &'static str {
        "mock-image"
    }
}
