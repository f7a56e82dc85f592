//! Integration tests for image capture validation.

use std::path::Path;

use origin_check_capture::{
    CaptureError, ImageUpload, OCTET_STREAM, capture_image, load_image_file, mime_type_for_path,
};

fn upload(file_name: &str, mime_type: &str) -> ImageUpload {
    ImageUpload {
        file_name: file_name.to_string(),
        mime_type: mime_type.to_string(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

#[test]
fn image_capture_tests_rejects_pdf_upload() {
    let error = capture_image(upload("report.pdf", "application/pdf"))
        .expect_err("pdf should be rejected");
    assert!(matches!(error, CaptureError::InvalidInputType(mime) if mime == "application/pdf"));
}

#[test]
fn image_capture_tests_rejects_every_non_image_type() {
    for mime in ["text/plain", "application/octet-stream", "video/mp4", ""] {
        assert!(
            capture_image(upload("file", mime)).is_err(),
            "{mime} should be rejected"
        );
    }
}

#[test]
fn image_capture_tests_accepts_png_with_preview() {
    let captured = capture_image(upload("cat.png", "image/png")).expect("png should be accepted");
    assert_eq!(captured.file_name, "cat.png");
    assert!(captured.preview.starts_with("data:image/png;base64,"));
    assert_eq!(captured.fingerprint().len(), 64);
}

#[test]
fn image_capture_tests_infers_mime_from_extension() {
    assert_eq!(mime_type_for_path(Path::new("a.JPG")), "image/jpeg");
    assert_eq!(mime_type_for_path(Path::new("a.webp")), "image/webp");
    assert_eq!(mime_type_for_path(Path::new("a.pdf")), "application/pdf");
    assert_eq!(mime_type_for_path(Path::new("noext")), OCTET_STREAM);
}

#[test]
fn image_capture_tests_loads_file_from_disk() {
    let path = std::env::temp_dir().join(format!("origin-check-{}.gif", std::process::id()));
    std::fs::write(&path, b"GIF89a").expect("fixture should be written");

    let upload = load_image_file(&path).expect("file should load");
    std::fs::remove_file(&path).expect("fixture should be removed");

    assert_eq!(upload.mime_type, "image/gif");
    assert_eq!(upload.bytes, b"GIF89a");
}

#[test]
fn image_capture_tests_reports_missing_file() {
    let error = load_image_file(Path::new("/definitely/not/here.png"))
        .expect_err("missing file should fail");
    assert!(matches!(error, CaptureError::Io { .. }));
}
