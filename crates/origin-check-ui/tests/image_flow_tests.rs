//! Integration tests for the image flow state machine.

mod common;

use origin_check_capture::CaptureError;
use origin_check_core::InputKind;
use origin_check_detector::DetectorError;
use origin_check_ui::{Completion, FlowError, FlowState, ImageFlow, Severity};

#[test]
fn image_flow_tests_pdf_upload_stays_empty() {
    let mut flow = ImageFlow::new();
    let error = flow
        .offer(common::pdf_upload())
        .expect_err("pdf should be rejected");

    assert!(matches!(
        error,
        FlowError::Capture(CaptureError::InvalidInputType(_))
    ));
    assert_eq!(flow.flow().state(), FlowState::Empty);
    assert!(flow.preview().is_none());

    let notifications = flow.drain_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Invalid file type");
    assert_eq!(notifications[0].severity, Severity::Destructive);
}

#[test]
fn image_flow_tests_rejected_upload_keeps_previous_image() {
    let mut flow = ImageFlow::new();
    flow.offer(common::png_upload()).expect("png accepted");
    assert!(flow.offer(common::pdf_upload()).is_err());

    assert_eq!(flow.flow().state(), FlowState::Captured);
    assert_eq!(
        flow.flow().input().map(|image| image.file_name.as_str()),
        Some("photo.png")
    );
}

#[test]
fn image_flow_tests_full_success_cycle() {
    let mut flow = ImageFlow::new();
    flow.offer(common::png_upload()).expect("png accepted");
    assert_eq!(flow.flow().state(), FlowState::Captured);
    assert!(flow.preview().is_some_and(|p| p.starts_with("data:image/png;base64,")));

    let ticket = flow.submit().expect("submit should work");
    assert_eq!(flow.flow().state(), FlowState::Analyzing);

    let completion = flow.complete(
        ticket.request_id,
        Ok(common::fixture_result(InputKind::Image, true)),
    );
    assert_eq!(completion, Completion::Applied);
    assert_eq!(flow.flow().state(), FlowState::Resulted);
    assert!(flow.flow().result().is_some());

    let titles: Vec<String> = flow
        .drain_notifications()
        .into_iter()
        .map(|n| n.title)
        .collect();
    assert_eq!(titles, vec!["Analysis Complete".to_string()]);
}

#[test]
fn image_flow_tests_failure_returns_to_captured() {
    let mut flow = ImageFlow::new();
    flow.offer(common::png_upload()).expect("png accepted");
    let ticket = flow.submit().expect("submit should work");

    flow.complete(
        ticket.request_id,
        Err(DetectorError::Failed("backend down".to_string())),
    );

    assert_eq!(flow.flow().state(), FlowState::Captured);
    assert!(flow.flow().result().is_none());
    let notifications = flow.drain_notifications();
    assert_eq!(notifications[0].title, "Analysis Failed");
    assert_eq!(
        notifications[0].description,
        "There was an error analyzing your image. Please try again."
    );
}

#[test]
fn image_flow_tests_reset_clears_everything() {
    let mut flow = ImageFlow::new();
    flow.offer(common::png_upload()).expect("png accepted");
    let ticket = flow.submit().expect("submit");
    flow.complete(
        ticket.request_id,
        Ok(common::fixture_result(InputKind::Image, false)),
    );

    flow.reset();
    assert_eq!(flow.flow().state(), FlowState::Empty);
    assert!(flow.flow().result().is_none());
    assert!(flow.preview().is_none());
}

#[test]
fn image_flow_tests_new_capture_from_resulted_goes_to_captured() {
    let mut flow = ImageFlow::new();
    flow.offer(common::png_upload()).expect("png accepted");
    let ticket = flow.submit().expect("submit");
    flow.complete(
        ticket.request_id,
        Ok(common::fixture_result(InputKind::Image, true)),
    );

    flow.offer(common::png_upload()).expect("png accepted");
    assert_eq!(flow.flow().state(), FlowState::Captured);
    assert!(flow.flow().result().is_none());
}

#[test]
fn image_flow_tests_submit_without_image_is_rejected() {
    let mut flow = ImageFlow::new();
    assert!(matches!(flow.submit(), Err(FlowError::NothingCaptured)));
}

#[test]
fn image_flow_tests_submit_from_resulted_is_rejected() {
    let mut flow = ImageFlow::new();
    flow.offer(common::png_upload()).expect("png accepted");
    let ticket = flow.submit().expect("submit");
    flow.complete(
        ticket.request_id,
        Ok(common::fixture_result(InputKind::Image, true)),
    );

    assert!(matches!(flow.submit(), Err(FlowError::NothingCaptured)));
    assert_eq!(flow.flow().state(), FlowState::Resulted);
}
