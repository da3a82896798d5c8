//! End-to-end flow through the controller: validate -> generate -> render.
//!
//! Uses a seeded mock generator with no delay, plus a source that always
//! fails, so every path runs without timing dependence.
//!
//! Run with: cargo test -p titlecheck-common --test verdict_flow_test

use std::time::Duration;

use async_trait::async_trait;

use titlecheck_common::render::ScrollTarget;
use titlecheck_common::*;

struct FailingSource;

#[async_trait]
impl VerdictSource for FailingSource {
    async fn generate(&self, _title: &TitleSubmission) -> Result<VerificationResult, TitleCheckError> {
        Err(TitleCheckError::Generator("registry unreachable".to_string()))
    }
}

fn generator(seed: u64) -> MockVerdictGenerator {
    MockVerdictGenerator::seeded(Duration::ZERO, vec!["badword".to_string()], seed)
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn neutral_title_is_approved_and_rendered() {
    let source = generator(1);
    let mut controller = Controller::new();

    let status = controller.verify(&source, "City Post").await.unwrap();

    assert_eq!(status, Status::Approved);
    assert_eq!(controller.state(), UiState::ResultShown);
    let view = controller.view();
    assert!(view.results_visible);
    assert_eq!(view.scroll, Some(ScrollTarget::Results));
    assert_eq!(view.results.badge.text, "Approved");
    assert_eq!(view.results.feedback.len(), 8);
    assert_eq!(view.results.comparisons.len(), 5);
}

#[tokio::test]
async fn morning_title_is_never_approved() {
    for seed in 0..50 {
        let source = generator(seed);
        let mut controller = Controller::new();
        let status = controller.verify(&source, "morning times").await.unwrap();
        assert_ne!(status, Status::Approved, "seed {seed}");
    }
}

#[tokio::test]
async fn status_always_matches_thresholds() {
    let source = generator(99);
    for raw in ["City Post", "Morning Times", "An Extremely Long Newspaper Name", "Weekly Star"] {
        let title = TitleSubmission::parse(raw).unwrap();
        let result = source.generate(&title).await.unwrap();
        let expected = if result.probability > 70 {
            Status::Rejected
        } else if result.probability > 40 {
            Status::Risky
        } else {
            Status::Approved
        };
        assert_eq!(result.status, expected, "{raw}");
    }
}

// ---------------------------------------------------------------------------
// Failure paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_input_never_reaches_the_generator() {
    let mut controller = Controller::new();

    let err = controller.verify(&FailingSource, "No!").await.unwrap_err();

    // FailingSource would have produced Generator; InvalidInput proves it was skipped.
    assert!(matches!(err, TitleCheckError::InvalidInput(_)));
    assert_eq!(controller.view().error.as_deref(), Some(INVALID_TITLE_MESSAGE));
}

#[tokio::test]
async fn generator_failure_surfaces_generic_message() {
    let mut controller = Controller::new();

    let err = controller.verify(&FailingSource, "City Post").await.unwrap_err();

    assert!(matches!(err, TitleCheckError::Generator(_)));
    assert_eq!(controller.state(), UiState::Error);
    assert!(!controller.view().loading);
    assert!(!controller.view().results_visible);
    assert_eq!(controller.view().error.as_deref(), Some(UNEXPECTED_ERROR_MESSAGE));
}

// ---------------------------------------------------------------------------
// Re-render and reset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn second_submission_overwrites_the_first() {
    let mut controller = Controller::new();
    controller.verify(&generator(3), "City Post").await.unwrap();
    controller.verify(&generator(4), "Morning Herald Weekly").await.unwrap();

    let view = controller.view();
    assert_ne!(view.results.badge.text, "Approved");
    assert_eq!(view.results.feedback.len(), 8);
    assert_eq!(view.results.comparisons.len(), 5);
    assert_eq!(view.input, "Morning Herald Weekly");
}

#[tokio::test]
async fn reset_after_result_is_pristine() {
    let mut controller = Controller::new();
    controller.verify(&generator(5), "City Post").await.unwrap();

    controller.reset();

    assert!(controller.is_pristine());
    assert_eq!(controller.view().scroll, Some(ScrollTarget::Top));
}
