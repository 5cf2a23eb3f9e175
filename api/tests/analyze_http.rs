use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use clap::Parser;
use serde_json::{Value, json};

use purilens_api::application::http::server::http_server::{router, state};
use purilens_api::args::Args;

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];

fn completion_reply(content: &str) -> Value {
    json!({ "choices": [ { "message": { "content": content } } ] })
}

/// Stub of the upstream chat-completions endpoint, counting how often it
/// was actually called.
async fn spawn_upstream(status: StatusCode, body: Value, hits: Arc<AtomicUsize>) -> String {
    let app = Router::new().route(
        "/chat/completions",
        post(move || {
            let body = body.clone();
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                (status, Json(body))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    format!("http://{addr}")
}

/// Upstream that never answers within the client timeout.
async fn spawn_stalling_upstream() -> String {
    let app = Router::new().route(
        "/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            (StatusCode::OK, Json(json!({})))
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    format!("http://{addr}")
}

fn upload_dir(test_name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("purilens-http-{test_name}-{}", std::process::id()))
}

fn test_server(base_url: &str, upload_dir: &Path, timeout_secs: u64) -> TestServer {
    let timeout = timeout_secs.to_string();
    let args = Args::parse_from([
        "purilens-api",
        "--api-key",
        "test-key",
        "--model-id",
        "test-model",
        "--base-url",
        base_url,
        "--upload-dir",
        upload_dir.to_str().unwrap(),
        "--timeout-secs",
        timeout.as_str(),
    ]);

    let state = state(Arc::new(args)).unwrap();
    TestServer::new(router(state).unwrap()).unwrap()
}

fn image_form() -> MultipartForm {
    MultipartForm::new().add_part(
        "image",
        Part::bytes(JPEG_BYTES.to_vec())
            .file_name("dish.jpg")
            .mime_type("image/jpeg"),
    )
}

fn remaining_uploads(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

#[tokio::test]
async fn analyzes_an_image_and_cleans_up_the_upload() {
    let content = r#"```json
{"foods":[
  {"name":"crayfish","purine_value":180,"level":"high","bbox":[200,200,500,500],"description":"very high purine"},
  {"name":"broccoli","purine_value":21,"description":"low purine vegetable"}
]}
```"#;
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream = spawn_upstream(StatusCode::OK, completion_reply(content), hits.clone()).await;
    let dir = upload_dir("success");
    let server = test_server(&upstream, &dir, 40);

    let response = server.post("/api/analyze").multipart(image_form()).await;

    response.assert_status_ok();
    let body: Value = response.json();

    let foods = body["foods"].as_array().unwrap();
    assert_eq!(foods.len(), 2);
    assert_eq!(foods[0]["name"], "crayfish");
    assert_eq!(foods[0]["level"], "high");
    assert_eq!(foods[0]["bbox"], json!([200.0, 200.0, 500.0, 500.0]));
    assert_eq!(foods[0]["region"]["top"], 20.0);
    assert_eq!(foods[0]["region"]["width"], 30.0);
    // The second entry has no label: the tier is derived from the value.
    assert_eq!(foods[1]["level"], "low");
    assert!(foods[1].get("bbox").is_none());
    // Not the fallback path, so the flag is absent entirely.
    assert!(body.get("is_mock").is_none());

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(remaining_uploads(&dir), 0);
}

#[tokio::test]
async fn unauthorized_upstream_serves_the_demonstration_result() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream = spawn_upstream(
        StatusCode::UNAUTHORIZED,
        json!({ "error": "AccessDenied" }),
        hits,
    )
    .await;
    let dir = upload_dir("unauthorized");
    let server = test_server(&upstream, &dir, 40);

    let response = server.post("/api/analyze").multipart(image_form()).await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["is_mock"], true);
    let foods = body["foods"].as_array().unwrap();
    assert_eq!(foods.len(), 3);
    assert!(
        foods
            .iter()
            .all(|f| f["name"].as_str().unwrap().starts_with("Demo: "))
    );
    assert_eq!(remaining_uploads(&dir), 0);
}

#[tokio::test]
async fn stalled_upstream_serves_the_demonstration_result() {
    let upstream = spawn_stalling_upstream().await;
    let dir = upload_dir("timeout");
    let server = test_server(&upstream, &dir, 1);

    let response = server.post("/api/analyze").multipart(image_form()).await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["is_mock"], true);
    assert_eq!(body["foods"].as_array().unwrap().len(), 3);
    assert_eq!(remaining_uploads(&dir), 0);
}

#[tokio::test]
async fn failing_upstream_yields_an_opaque_service_error() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream = spawn_upstream(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "boom" }),
        hits,
    )
    .await;
    let dir = upload_dir("upstream-error");
    let server = test_server(&upstream, &dir, 40);

    let response = server.post("/api/analyze").multipart(image_form()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();

    assert!(body["error"].as_str().is_some());
    assert!(body.get("foods").is_none());
    assert_eq!(remaining_uploads(&dir), 0);
}

#[tokio::test]
async fn unparsable_model_reply_yields_a_service_error() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream = spawn_upstream(
        StatusCode::OK,
        completion_reply("the image shows a steak"),
        hits,
    )
    .await;
    let dir = upload_dir("malformed");
    let server = test_server(&upstream, &dir, 40);

    let response = server.post("/api/analyze").multipart(image_form()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().is_some());
    assert_eq!(remaining_uploads(&dir), 0);
}

#[tokio::test]
async fn missing_file_is_rejected_without_an_upstream_call() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream = spawn_upstream(StatusCode::OK, completion_reply("{}"), hits.clone()).await;
    let dir = upload_dir("missing-file");
    let server = test_server(&upstream, &dir, 40);

    let response = server
        .post("/api/analyze")
        .multipart(MultipartForm::new().add_text("note", "no image here"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().is_some());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_image_upload_is_rejected() {
    let hits = Arc::new(AtomicUsize::new(0));
    let upstream = spawn_upstream(StatusCode::OK, completion_reply("{}"), hits.clone()).await;
    let dir = upload_dir("non-image");
    let server = test_server(&upstream, &dir, 40);

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"hello".to_vec())
            .file_name("notes.txt")
            .mime_type("text/plain"),
    );
    let response = server.post("/api/analyze").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn health_endpoint_answers() {
    let dir = upload_dir("health");
    let server = test_server("http://127.0.0.1:1", &dir, 40);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}
