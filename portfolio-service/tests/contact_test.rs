mod common;

use chrono::Utc;
use common::{unreachable_uri, TestApp};
use reqwest::Client;
use serde_json::json;

// =============================================================================
// Contact submissions
// =============================================================================

#[tokio::test]
async fn valid_submission_is_persisted_with_timestamp() {
    let app = TestApp::spawn().await;
    let client = Client::new();
    let before = Utc::now();

    let response = client
        .post(&format!("{}/api/contact", app.address))
        .json(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "subject": "Collaboration",
            "message": "I enjoyed your portfolio."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");

    let stored = app
        .db
        .get_documents("contactmessage")
        .await
        .expect("Failed to read store");
    assert_eq!(stored.len(), 1);

    let record = &stored[0];
    assert_eq!(record.get_str("name").unwrap(), "Ada Lovelace");
    assert_eq!(record.get_str("email").unwrap(), "ada@example.com");

    // BSON datetimes are millisecond precision, so compare at that granularity
    let created_at = record
        .get_datetime("created_at")
        .expect("Missing created_at")
        .to_chrono();
    assert!(created_at.timestamp_millis() >= before.timestamp_millis());
}

#[tokio::test]
async fn submission_without_subject_is_accepted() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/api/contact", app.address))
        .json(&json!({
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "message": "Nice work."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn missing_required_field_is_rejected_before_storage() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/api/contact", app.address))
        .json(&json!({
            "email": "ada@example.com",
            "message": "No name supplied."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 422);

    let stored = app
        .db
        .get_documents("contactmessage")
        .await
        .expect("Failed to read store");
    assert!(stored.is_empty());
}

#[tokio::test]
async fn storage_failure_surfaces_as_server_error() {
    let app = TestApp::spawn_with_uri(unreachable_uri()).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/api/contact", app.address))
        .json(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "This will not be stored."
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Database error");
    assert!(
        !body["details"].as_str().expect("Missing details").is_empty(),
        "Error text should be carried as detail"
    );
}

#[tokio::test]
async fn invalid_email_is_rejected_before_storage() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/api/contact", app.address))
        .json(&json!({
            "name": "Ada Lovelace",
            "email": "not-an-email",
            "message": "Hello"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 422);

    let stored = app
        .db
        .get_documents("contactmessage")
        .await
        .expect("Failed to read store");
    assert!(stored.is_empty());
}
