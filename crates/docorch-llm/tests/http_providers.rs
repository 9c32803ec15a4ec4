//! Provider round trips against an in-process HTTP server

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use docorch_domain::traits::LlmProvider;
use docorch_llm::{GeminiProvider, LlmError, OllamaProvider};
use serde_json::{json, Value};
use std::net::SocketAddr;

/// Serve `app` on an ephemeral port from a background thread
fn spawn_server(app: Router) -> String {
    let (tx, rx) = std::sync::mpsc::channel::<SocketAddr>();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}", rx.recv().unwrap())
}

async fn gemini_handler(
    Path(target): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("good-key") {
        return (StatusCode::FORBIDDEN, Json(json!({"error": "bad key"})));
    }
    if target != "gemini-test:generateContent" {
        return (StatusCode::NOT_FOUND, Json(json!({})));
    }
    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{"content": {"parts": [{"text": format!("echo: {}", prompt)}]}}]
        })),
    )
}

#[test]
fn test_gemini_round_trip() {
    let base = spawn_server(Router::new().route("/v1beta/models/:target", post(gemini_handler)));

    let provider = GeminiProvider::new("good-key", "gemini-test")
        .unwrap()
        .with_endpoint(base);

    assert_eq!(provider.generate("hi").unwrap(), "echo: hi");
}

#[test]
fn test_gemini_rejected_key_is_authentication_error() {
    let base = spawn_server(Router::new().route("/v1beta/models/:target", post(gemini_handler)));

    let provider = GeminiProvider::new("wrong-key", "gemini-test")
        .unwrap()
        .with_endpoint(base);

    assert!(matches!(provider.generate("hi"), Err(LlmError::Authentication(_))));
}

#[test]
fn test_gemini_unknown_model() {
    let base = spawn_server(Router::new().route("/v1beta/models/:target", post(gemini_handler)));

    let provider = GeminiProvider::new("good-key", "missing-model")
        .unwrap()
        .with_endpoint(base);

    assert!(matches!(
        provider.generate("hi"),
        Err(LlmError::ModelNotAvailable(m)) if m == "missing-model"
    ));
}

#[test]
fn test_ollama_round_trip() {
    let app = Router::new().route(
        "/api/generate",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "model": body["model"],
                "response": format!("{} says hi", body["model"].as_str().unwrap_or_default()),
                "done": true
            }))
        }),
    );
    let base = spawn_server(app);

    let provider = OllamaProvider::new(base, "llama3").unwrap();
    assert_eq!(provider.generate("hello").unwrap(), "llama3 says hi");
}
