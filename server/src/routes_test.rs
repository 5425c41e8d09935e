use super::*;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

fn options() -> LeptosOptions {
    LeptosOptions::builder().output_name("showcase").build()
}

async fn get(path: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(path).body(Body::empty()).unwrap();
    let response = router(options()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

// =============================================================
// Page rendering
// =============================================================

#[tokio::test]
async fn root_serves_rendered_shell() {
    let (status, html) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.to_lowercase().starts_with("<!doctype html>"));
    assert!(html.contains("aria-roledescription=\"carousel\""));
}

#[tokio::test]
async fn shell_loads_the_hydrate_bundle() {
    let (_, html) = get("/").await;
    assert!(html.contains("/pkg/showcase"));
}

#[tokio::test]
async fn contact_form_lists_every_country() {
    let (_, html) = get("/").await;
    for country in ["Argentina", "Spain", "United States", "Other"] {
        assert!(html.contains(&format!("<option value=\"{country}\"")), "missing {country}");
    }
}

// =============================================================
// Static bundle
// =============================================================

#[tokio::test]
async fn missing_bundle_file_is_not_found() {
    let (status, _) = get("/pkg/does-not-exist.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
