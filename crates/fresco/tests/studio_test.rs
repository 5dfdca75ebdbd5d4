// Tests for the generation session orchestrator.

mod test_utils;

use std::sync::Arc;

use fresco::prompt::image_prompt;
use fresco::{
    AspectRatio, ContentErrorKind, FrescoErrorKind, GenerationStatus, Platform, Studio, Tone,
};
use test_utils::{MockContentClient, MockImageClient};
use tokio::sync::Notify;

#[tokio::test]
async fn generate_transitions_to_loading_and_clears_prior_run() -> anyhow::Result<()> {
    let gate = Arc::new(Notify::new());
    let content = MockContentClient::gated(gate.clone());
    let images = MockImageClient::succeeding();
    let studio = Arc::new(Studio::new(content, images));
    let mut updates = studio.subscribe();

    // First run to a terminal state.
    let runner = studio.clone();
    let first = tokio::spawn(async move { runner.generate("first idea", Tone::Professional).await });
    gate.notify_one();
    first.await??;
    assert_eq!(studio.state().status(), GenerationStatus::Succeeded);
    assert!(!studio.state().images().is_empty());

    // Second run must clear everything before any new data arrives.
    let runner = studio.clone();
    let second = tokio::spawn(async move { runner.generate("second idea", Tone::Urgent).await });
    {
        let loading = updates
            .wait_for(|state| state.status() == GenerationStatus::Loading)
            .await?;
        assert!(loading.content().is_none());
        assert!(loading.images().is_empty());
        assert!(loading.error().is_none());
    }
    gate.notify_one();
    second.await??;
    assert_eq!(studio.state().status(), GenerationStatus::Succeeded);
    Ok(())
}

#[tokio::test]
async fn empty_idea_fails_validation_with_zero_calls() {
    let content = MockContentClient::new_success();
    let images = MockImageClient::succeeding();
    let studio = Studio::new(content.clone(), images.clone());

    let err = studio.generate("   \t ", Tone::Professional).await.unwrap_err();
    assert!(matches!(err.kind(), FrescoErrorKind::Validation(_)));

    assert_eq!(content.call_count(), 0);
    assert_eq!(images.call_count(), 0);

    let state = studio.state();
    assert_eq!(state.status(), GenerationStatus::Idle);
    assert!(state.content().is_none());
    assert!(state.images().is_empty());
    assert_eq!(state.error(), Some("Please enter an idea."));
}

#[tokio::test]
async fn content_failure_aborts_run_before_any_image_call() {
    let content = MockContentClient::new_error(ContentErrorKind::Http {
        status_code: 500,
        message: "Internal error".to_string(),
    });
    let images = MockImageClient::succeeding();
    let studio = Studio::new(content.clone(), images.clone());

    let err = studio.generate("a real idea", Tone::Witty).await.unwrap_err();
    assert!(matches!(err.kind(), FrescoErrorKind::Content(_)));

    let state = studio.state();
    assert_eq!(state.status(), GenerationStatus::Failed);
    assert!(state.content().is_none());
    assert!(state.images().is_empty());
    assert_eq!(
        state.error(),
        Some("Failed to generate content from AI. Please check your prompt and try again.")
    );
    assert_eq!(images.call_count(), 0);
}

#[tokio::test]
async fn single_image_failure_leaves_run_succeeded() -> anyhow::Result<()> {
    let content = MockContentClient::new_success();
    // Twitter's 16:9 call rejects; the siblings succeed.
    let images = MockImageClient::failing_for(&[AspectRatio::Wide]);
    let studio = Studio::new(content, images.clone());

    studio.generate("a real idea", Tone::Professional).await?;

    let state = studio.state();
    assert_eq!(state.status(), GenerationStatus::Succeeded);
    for platform in Platform::ALL {
        assert!(state.content_ready(platform));
    }
    assert!(state.image_ready(Platform::LinkedIn));
    assert!(state.image_ready(Platform::Instagram));
    assert!(!state.image_ready(Platform::Twitter));
    assert_eq!(images.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn image_merge_is_commutative_across_completion_orders() -> anyhow::Result<()> {
    let slow_first = MockImageClient::succeeding()
        .with_delay(AspectRatio::Standard, 30)
        .with_delay(AspectRatio::Wide, 20)
        .with_delay(AspectRatio::Square, 10);
    let slow_last = MockImageClient::succeeding()
        .with_delay(AspectRatio::Standard, 10)
        .with_delay(AspectRatio::Wide, 20)
        .with_delay(AspectRatio::Square, 30);

    let studio_a = Studio::new(MockContentClient::new_success(), slow_first);
    let studio_b = Studio::new(MockContentClient::new_success(), slow_last);
    studio_a.generate("same idea", Tone::Urgent).await?;
    studio_b.generate("same idea", Tone::Urgent).await?;

    let state_a = studio_a.state();
    let state_b = studio_b.state();
    assert_eq!(state_a.images(), state_b.images());
    assert_eq!(state_a.images().count(), 3);
    Ok(())
}

#[tokio::test]
async fn productivity_app_scenario_fans_out_three_image_calls() -> anyhow::Result<()> {
    let content = MockContentClient::new_success();
    let images = MockImageClient::succeeding();
    let studio = Studio::new(content.clone(), images.clone());

    studio
        .generate("launch of a productivity app", Tone::Witty)
        .await?;

    let requests = content.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].idea(), "launch of a productivity app");
    assert_eq!(requests[0].tone(), Tone::Witty);

    let calls = images.calls();
    assert_eq!(calls.len(), 3);
    let ratios: Vec<AspectRatio> = calls.iter().map(|(_, ratio)| *ratio).collect();
    assert!(ratios.contains(&AspectRatio::Standard));
    assert!(ratios.contains(&AspectRatio::Wide));
    assert!(ratios.contains(&AspectRatio::Square));

    let expected_prompt = image_prompt("launch of a productivity app");
    for (prompt, _) in &calls {
        assert_eq!(prompt, &expected_prompt);
        assert!(prompt.contains("launch of a productivity app"));
    }

    assert_eq!(studio.state().status(), GenerationStatus::Succeeded);
    assert_eq!(studio.state().images().count(), 3);
    Ok(())
}

#[tokio::test]
async fn overlapping_generate_is_rejected_busy() -> anyhow::Result<()> {
    let gate = Arc::new(Notify::new());
    let content = MockContentClient::gated(gate.clone());
    let images = MockImageClient::succeeding();
    let studio = Arc::new(Studio::new(content.clone(), images));
    let mut updates = studio.subscribe();

    let runner = studio.clone();
    let in_flight = tokio::spawn(async move { runner.generate("an idea", Tone::Witty).await });
    updates
        .wait_for(|state| state.status() == GenerationStatus::Loading)
        .await?;
    assert!(studio.is_busy());

    let err = studio.generate("another idea", Tone::Urgent).await.unwrap_err();
    assert!(matches!(err.kind(), FrescoErrorKind::Busy(_)));
    assert_eq!(content.call_count(), 1);

    gate.notify_one();
    in_flight.await??;
    assert!(!studio.is_busy());

    // The guard released; a fresh run is accepted.
    gate.notify_one();
    studio.generate("third idea", Tone::Professional).await?;
    assert_eq!(studio.state().status(), GenerationStatus::Succeeded);
    Ok(())
}

#[tokio::test]
async fn subscriber_observes_progressive_image_merges() -> anyhow::Result<()> {
    let content = MockContentClient::new_success();
    let images = MockImageClient::succeeding().with_delay(AspectRatio::Square, 25);
    let studio = Arc::new(Studio::new(content, images));
    let mut updates = studio.subscribe();

    let runner = studio.clone();
    let run = tokio::spawn(async move { runner.generate("an idea", Tone::Professional).await });

    // Instagram's delayed image must not block its siblings from revealing.
    {
        let partial = updates
            .wait_for(|state| {
                state.image_ready(Platform::LinkedIn) && state.image_ready(Platform::Twitter)
            })
            .await?;
        assert!(partial.content_ready(Platform::Instagram));
    }

    run.await??;
    assert!(studio.state().image_ready(Platform::Instagram));
    Ok(())
}
