use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use nr_core::{ContentExtractor, ExtractionResult};
use nr_web::{create_app, AppState};
use tower::ServiceExt;

/// Returns a canned result and remembers which URLs were requested.
#[derive(Default)]
struct StubExtractor {
    result: Option<ExtractionResult>,
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl ContentExtractor for StubExtractor {
    async fn extract(&self, url: &str) -> Option<ExtractionResult> {
        self.calls.lock().unwrap().push(url.to_string());
        self.result.clone()
    }
}

fn app(extractor: Arc<StubExtractor>) -> Router {
    create_app(AppState { extractor })
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let cache_control = response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, cache_control, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_no_url_means_no_fetch() {
    let extractor = Arc::new(StubExtractor::default());
    let (status, cache_control, body) = get(
        app(extractor.clone()),
        "/article?url=&title=Local%20Election%20Results&description=Full%20results%20inside.",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(cache_control.as_deref(), Some("no-store"));
    assert!(extractor.calls.lock().unwrap().is_empty());
    assert!(body.contains("<h1>Local Election Results</h1>"));
    assert!(body.contains(r#"<p class="lede">Full results inside.</p>"#));
    assert!(!body.contains("Read original source"));
}

#[tokio::test]
async fn test_extracted_content_is_rendered() {
    let extractor = Arc::new(StubExtractor {
        result: Some(ExtractionResult {
            text: "Turnout hit a record.\n\nCounting ended at midnight.".to_string(),
            title: Some("Election Night Recap".to_string()),
            image: Some("https://cdn.example/page.jpg".to_string()),
        }),
        ..Default::default()
    });
    let (status, _, body) = get(
        app(extractor.clone()),
        "/article?url=https%3A%2F%2Fnews.example%2Fstory&title=Feed%20Title&description=Short&source=Daily%20Example&publishedAt=2024-03-01T10%3A00%3A00Z",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(*extractor.calls.lock().unwrap(), vec!["https://news.example/story".to_string()]);
    assert!(body.contains("<h1>Election Night Recap</h1>"));
    assert!(body.contains("<p>Turnout hit a record.</p>"));
    assert!(body.contains("<p>Counting ended at midnight.</p>"));
    assert!(!body.contains("Short"));
    assert!(body.contains(r#"<img src="https://cdn.example/page.jpg""#));
    assert!(body.contains(r#"<span class="source">Daily Example</span>"#));
    assert!(body.contains(">3/1/2024</time>"));
    assert!(body.contains(r#"href="https://news.example/story" target="_blank""#));
}

#[tokio::test]
async fn test_failed_extraction_falls_back_to_caller_fields() {
    let extractor = Arc::new(StubExtractor::default());
    let (status, _, body) = get(
        app(extractor.clone()),
        "/article?url=https%3A%2F%2Fnews.example%2Fgone&title=Feed%20Title&description=Feed%20description.&content=Snippet%20text%20%5B%2B42%20chars%5D",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(extractor.calls.lock().unwrap().len(), 1);
    assert!(body.contains("<h1>Feed Title</h1>"));
    assert!(body.contains(r#"<p class="lede">Feed description.</p>"#));
    assert!(body.contains("<p>Snippet text</p>"));
    assert!(!body.contains("chars]"));
    assert!(body.contains(r#"<span class="source">Unknown</span>"#));
}

#[tokio::test]
async fn test_missing_query_renders_untitled() {
    let (status, _, body) = get(app(Arc::new(StubExtractor::default())), "/article").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h1>Untitled</h1>"));
    assert!(!body.contains(r#"class="body""#));
}

#[tokio::test]
async fn test_query_values_are_escaped() {
    let (_, _, body) = get(
        app(Arc::new(StubExtractor::default())),
        "/article?title=%3Cscript%3Ealert(1)%3C%2Fscript%3E",
    )
    .await;
    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let extractor = Arc::new(StubExtractor::default());
    let (status, cache_control, body) = get(app(extractor.clone()), "/no/such/page").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(cache_control.as_deref(), Some("no-store"));
    assert!(body.contains("404 &middot; Page Not Found"));
    assert!(extractor.calls.lock().unwrap().is_empty());
}
