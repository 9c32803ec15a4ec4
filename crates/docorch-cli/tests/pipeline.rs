//! End-to-end runs of the pipeline in stub mode

use axum::routing::post;
use axum::{Json, Router};
use docorch_cli::pipeline::read_document;
use docorch_cli::{Config, Pipeline, DEFAULT_QUESTION};
use docorch_domain::ScalarValue;
use docorch_webhook::WebhookOutcome;
use serde_json::{json, Value};
use std::io::Write;
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

/// Echoes what the workflow would see of the extraction
async fn automation(Json(body): Json<Value>) -> Json<Value> {
    let fields = &body["extracted_json"]["merged_key_fields"];
    Json(json!({
        "final_answer": fields["Account_Holder"],
        "email_body": fields["Closing_Balance"].to_string(),
        "automation_status": body["recipient_email"],
    }))
}

fn statement_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(file, "Account holder: Ankita Sharma\nClosing balance: 64,252").unwrap();
    file
}

#[test]
fn test_text_file_through_stub_extraction() {
    let file = statement_file();
    let pipeline = Pipeline::new(Config::default());

    let text = pipeline.extract_text(read_document(file.path(), None).unwrap());
    assert!(text.starts_with("Account holder: Ankita Sharma"));

    let result = pipeline.extract(&text, DEFAULT_QUESTION, false).unwrap();
    assert_eq!(result.attempts, 0);
    assert_eq!(
        result.merged_key_fields["Total_Credits"],
        ScalarValue::Integer(45000)
    );
}

#[test]
fn test_webhook_receives_sanitized_result() {
    let base = spawn_server(Router::new().route("/hook", post(automation)));
    let file = statement_file();
    let pipeline = Pipeline::new(Config::default());

    let text = pipeline.extract_text(read_document(file.path(), None).unwrap());
    let result = pipeline.extract(&text, DEFAULT_QUESTION, true).unwrap();
    let outcome = pipeline
        .notify(
            &format!("{}/hook", base),
            &text,
            &result,
            DEFAULT_QUESTION,
            "ops@example.com",
        )
        .unwrap();

    match outcome {
        WebhookOutcome::Delivered(reply) => {
            assert_eq!(reply.final_answer, "****arma");
            assert_eq!(reply.email_body, "64252");
            assert_eq!(reply.automation_status, "ops@example.com");
        }
        WebhookOutcome::Failed { error } => panic!("delivery failed: {}", error),
    }
}
