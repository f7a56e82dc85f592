//! Integration tests for version display.

use origin_check_app::app_version;

#[test]
fn version_display_tests_matches_version_file() {
    let expected = include_str!("../../../VERSION").trim();
    assert_eq!(app_version(), expected);
}
