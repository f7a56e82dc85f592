//! Integration tests for the randomized mock detector.

use origin_check_capture::{ImageUpload, capture_image, validate_text_submission};
use origin_check_core::InputKind;
use origin_check_detector::{Detector, MockConfig, MockDetector};

fn sample_text() -> String {
    "This is a sample paragraph. It has two sentences and enough characters to pass.".to_string()
}

#[tokio::test]
async fn mock_detector_tests_image_result_is_well_formed() {
    let detector = MockDetector::with_seed(MockConfig::instant(), 7);
    let image = capture_image(ImageUpload {
        file_name: "cat.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: vec![1, 2, 3],
    })
    .expect("png should be accepted");

    for _ in 0..50 {
        let result = detector
            .analyze_image(&image)
            .await
            .expect("mock analysis should succeed");
        assert_eq!(result.kind, InputKind::Image);
        assert!(result.confidence <= 100);
        assert!(result.analysis_time_secs > 0.0);
        assert!(!result.description.is_empty());
        assert_eq!(result.details.len(), 4);
    }
}

#[tokio::test]
async fn mock_detector_tests_text_details_include_word_counts() {
    let detector = MockDetector::with_seed(MockConfig::instant(), 11);
    let submission = validate_text_submission(&sample_text()).expect("text should be valid");

    let result = detector
        .analyze_text(&submission)
        .await
        .expect("mock analysis should succeed");

    assert_eq!(result.kind, InputKind::Text);
    assert_eq!(
        result.details[2],
        "Text contains 14 words with an average sentence length of 7 words"
    );
}

#[tokio::test]
async fn mock_detector_tests_same_seed_gives_same_sequence() {
    let submission = validate_text_submission(&sample_text()).expect("text should be valid");
    let first = MockDetector::with_seed(MockConfig::instant(), 42);
    let second = MockDetector::with_seed(MockConfig::instant(), 42);

    for _ in 0..10 {
        let a = first.analyze_text(&submission).await.expect("analysis");
        let b = second.analyze_text(&submission).await.expect("analysis");
        assert_eq!(a, b);
    }
}

#[test]
fn mock_detector_tests_default_latencies_match_demo() {
    let config = MockConfig::default();
    assert_eq!(config.image_latency.as_millis(), 2_000);
    assert_eq!(config.text_latency.as_millis(), 1_500);
}
