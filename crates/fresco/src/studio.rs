//! The generation session orchestrator.

use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::join_all;
use tokio::sync::watch;
use tracing::{info, instrument, warn};

use fresco_core::{GenerationRequest, GenerationState, Platform, Tone};
use fresco_error::{BusyError, FrescoErrorKind, FrescoResult};
use fresco_interface::{ContentGenerator, ImageGenerator};

use crate::prompt;

/// Resets the in-flight flag on every exit path of `generate`.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Orchestrates one generation run: a single content call followed by a
/// per-platform image fan-out, merged into an observable [`GenerationState`].
///
/// The studio owns the state exclusively; observers read snapshots through
/// [`Studio::subscribe`]. Only one run may be in flight at a time —
/// overlapping calls are rejected with [`BusyError`] rather than interleaved,
/// since there is no cancellation primitive.
///
/// # Examples
///
/// ```rust,ignore
/// use fresco::{GeminiClient, Studio, Tone};
///
/// let client = GeminiClient::new()?;
/// let studio = Studio::new(client.clone(), client);
/// studio.generate("launch of a productivity app", Tone::Witty).await?;
/// ```
#[derive(Debug)]
pub struct Studio<C, I> {
    content: C,
    images: I,
    state: watch::Sender<GenerationState>,
    in_flight: AtomicBool,
}

impl<C, I> Studio<C, I>
where
    C: ContentGenerator,
    I: ImageGenerator,
{
    /// Create a studio over a content backend and an image backend.
    pub fn new(content: C, images: I) -> Self {
        let (state, _) = watch::channel(GenerationState::default());
        Self {
            content,
            images,
            state,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Subscribe to state changes for this studio's generation runs.
    ///
    /// Every transition and every per-platform image merge publishes a new
    /// state value.
    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GenerationState {
        self.state.borrow().clone()
    }

    /// Whether a generation run is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Run one generation: validate, fetch content, fan out images.
    ///
    /// Transitions the state to `Loading` synchronously (clearing every entry
    /// from any prior run), issues exactly one content call, and on success
    /// issues one image call per platform with a shared prompt. Image calls
    /// are concurrent and independent: each completion merges only its own
    /// platform's entry, and a per-platform failure leaves that entry absent
    /// without affecting the run, which still ends `Succeeded`.
    ///
    /// # Errors
    ///
    /// - [`BusyError`] when a run is already in flight; nothing is touched.
    /// - [`ValidationError`](fresco_error::ValidationError) when the idea is
    ///   empty after trimming; no external call is made and only the state's
    ///   error field changes.
    /// - [`ContentError`](fresco_error::ContentError) when the content call
    ///   fails; the state is `Failed` and no image call is issued.
    #[instrument(skip(self, idea), fields(tone = %tone))]
    pub async fn generate(&self, idea: &str, tone: Tone) -> FrescoResult<()> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(BusyError::new().into());
        }
        let _guard = InFlightGuard(&self.in_flight);

        let request = match GenerationRequest::new(idea, tone) {
            Ok(request) => request,
            Err(e) => {
                let message = e.message.clone();
                self.state.send_modify(|state| state.set_error(message));
                return Err(e.into());
            }
        };

        self.state.send_modify(|state| state.begin());

        let posts = match self.content.generate_posts(&request).await {
            Ok(posts) => posts,
            Err(e) => {
                let message = match e.kind() {
                    FrescoErrorKind::Content(inner) => inner.user_message().to_string(),
                    _ => e.to_string(),
                };
                self.state.send_modify(|state| state.fail(message));
                return Err(e);
            }
        };
        self.state.send_modify(|state| state.set_content(posts));
        info!("content arrived; fanning out image generation");

        let shared_prompt = prompt::image_prompt(request.idea());
        let shared_prompt = shared_prompt.as_str();
        let fan_out = Platform::ALL.map(|platform| async move {
            let aspect_ratio = platform.spec().aspect_ratio();
            match self.images.generate_image(shared_prompt, aspect_ratio).await {
                Ok(image) => {
                    self.state
                        .send_modify(|state| state.merge_image(platform, image));
                }
                Err(e) => {
                    warn!(platform = %platform, error = %e, "image generation failed");
                }
            }
        });
        join_all(fan_out).await;

        self.state.send_modify(|state| state.complete());
        info!("generation run complete");
        Ok(())
    }
}
