//! Integration tests for `HttpImageLoader`.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made.

use std::io::Cursor;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use swatchcard_preview::{HttpImageLoader, ImageLoader, PreviewError};

/// Builds a loader suitable for tests: 5-second timeout, descriptive UA.
fn test_loader() -> HttpImageLoader {
    HttpImageLoader::new(Duration::from_secs(5), "swatchcard-test/0.1")
        .expect("failed to build test HttpImageLoader")
}

/// A real 2x2 PNG.
fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([0x19, 0x26, 0x4B, 0xFF]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("failed to encode test PNG");
    out.into_inner()
}

#[tokio::test]
async fn load_succeeds_for_image_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/red-back.png"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(png_bytes(), "image/png"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/files/red-back.png", server.uri());
    test_loader().load(&url).await.expect("expected preload to succeed");
}

#[tokio::test]
async fn load_fails_on_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/files/missing.png", server.uri());
    let err = test_loader().load(&url).await.unwrap_err();
    assert!(
        matches!(err, PreviewError::ImageLoadFailed { ref reason, .. } if reason.contains("404")),
        "expected ImageLoadFailed(404), got: {err:?}"
    );
}

#[tokio::test]
async fn load_fails_on_non_image_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/page.png"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/files/page.png", server.uri());
    let err = test_loader().load(&url).await.unwrap_err();
    assert!(
        matches!(err, PreviewError::ImageLoadFailed { ref reason, .. } if reason.contains("not an image")),
        "expected ImageLoadFailed(not an image), got: {err:?}"
    );
}

#[tokio::test]
async fn load_fails_on_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/empty.png"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/png"))
        .mount(&server)
        .await;

    let url = format!("{}/files/empty.png", server.uri());
    let err = test_loader().load(&url).await.unwrap_err();
    assert!(
        matches!(err, PreviewError::ImageLoadFailed { ref reason, .. } if reason.contains("empty")),
        "expected ImageLoadFailed(empty body), got: {err:?}"
    );
}

#[tokio::test]
async fn load_fails_when_server_unreachable() {
    let server = MockServer::start().await;
    let url = format!("{}/files/red-back.png", server.uri());
    drop(server);

    let err = test_loader().load(&url).await.unwrap_err();
    assert!(matches!(err, PreviewError::ImageLoadFailed { .. }));
}

#[tokio::test]
async fn load_fails_on_corrupt_image_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/corrupt.png"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(b"this is not a png at all".to_vec(), "image/png"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/files/corrupt.png", server.uri());
    let err = test_loader().load(&url).await.unwrap_err();
    assert!(
        matches!(err, PreviewError::ImageLoadFailed { ref reason, .. } if reason.contains("undecodable")),
        "expected ImageLoadFailed(undecodable), got: {err:?}"
    );
}

#[tokio::test]
async fn load_fails_on_truncated_png() {
    let mut bytes = png_bytes();
    bytes.truncate(bytes.len() / 2);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/truncated.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(bytes, "image/png"))
        .mount(&server)
        .await;

    let url = format!("{}/files/truncated.png", server.uri());
    let err = test_loader().load(&url).await.unwrap_err();
    assert!(matches!(err, PreviewError::ImageLoadFailed { .. }), "got: {err:?}");
}
