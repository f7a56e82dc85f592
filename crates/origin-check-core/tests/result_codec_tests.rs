//! Tests result record wire names and decode-time validation.

use origin_check_core::{AnalysisResult, CoreError, InputKind};

#[test]
fn result_codec_tests_use_camel_case_wire_names() {
    let result = AnalysisResult::new(
        InputKind::Image,
        true,
        91,
        2.4,
        "Looks generated.",
        vec!["Unusual symmetry".to_string()],
    )
    .expect("result should be valid");

    let encoded = result.to_json_bytes().expect("encoding should succeed");
    let value: serde_json::Value = serde_json::from_slice(&encoded).expect("valid json");

    assert_eq!(value["isAI"], true);
    assert_eq!(value["analysisTime"], 2.4);
    assert_eq!(value["kind"], "image");
    assert_eq!(value["details"][0], "Unusual symmetry");
}

#[test]
fn result_codec_tests_accept_patterns_alias() {
    let raw = br#"{
        "kind":"image",
        "isAI":false,
        "confidence":70,
        "analysisTime":1.5,
        "description":"Human.",
        "patterns":["Natural variations"]
    }"#;

    let decoded = AnalysisResult::from_json_bytes(raw).expect("decoding should succeed");
    assert_eq!(decoded.details, vec!["Natural variations".to_string()]);
}

#[test]
fn result_codec_tests_reject_out_of_range_confidence_on_decode() {
    let raw = br#"{
        "kind":"text",
        "isAI":true,
        "confidence":140,
        "analysisTime":1.0,
        "description":"AI."
    }"#;

    let error = AnalysisResult::from_json_bytes(raw).expect_err("decode should fail");
    assert!(matches!(error, CoreError::ConfidenceOutOfRange(140)));
}
