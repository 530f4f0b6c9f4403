//! Integration tests for the import object wrapper.
//!
//! These tests run every operation against a recording transport and check
//! the exact request each one produces.

mod common;

use common::{write_csv, LogCapture, RecordingTransport};
use pardot_api::clients::PartContent;
use pardot_api::objects::{
    Imports, Options, PardotError, DEFAULT_QUERY_FIELDS, DEFAULT_READ_FIELDS,
};
use pardot_api::{HttpMethod, QueryParams};
use serde_json::json;

fn options(value: serde_json::Value) -> Options {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ============================================================================
// create
// ============================================================================

#[tokio::test]
async fn test_create_without_file_posts_options_as_json() {
    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    let body = json!({"operation": "Upsert", "object": "Prospect", "restoreDeleted": false});
    imports.create(None, options(body.clone())).await.unwrap();

    let request = transport.only_request();
    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.object_name, "imports");
    assert!(request.path.is_none());
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.body.as_json(), Some(&body));
}

#[tokio::test]
async fn test_create_without_file_and_no_options_sends_empty_object() {
    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    imports.create(None, Options::new()).await.unwrap();

    assert_eq!(transport.only_request().body.as_json(), Some(&json!({})));
}

#[tokio::test]
async fn test_create_with_file_sends_default_input_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "prospects.csv", "email\nalice@example.com\n");

    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    imports.create(Some(&path), Options::new()).await.unwrap();

    let request = transport.only_request();
    assert_eq!(request.http_method, HttpMethod::Post);
    assert!(request.path.is_none());
    assert!(request.header("Content-Type").is_none());

    let form = request.body.as_multipart().expect("multipart body");
    let input: serde_json::Value =
        serde_json::from_str(form.text_value("input").unwrap()).unwrap();
    assert_eq!(
        input,
        json!({
            "status": "Ready",
            "operation": "Upsert",
            "object": "Prospect",
            "restoreDeleted": true,
            "createOnNoMatch": true
        })
    );

    assert_eq!(
        form.get("file").map(|part| &part.content),
        Some(&PartContent::File {
            file_name: "prospects.csv".to_string(),
            bytes: b"email\nalice@example.com\n".to_vec(),
        })
    );
}

#[tokio::test]
async fn test_create_with_file_ignores_caller_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "prospects.csv", "email\n");

    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    imports
        .create(
            Some(&path),
            options(json!({"operation": "Insert", "object": "Opportunity"})),
        )
        .await
        .unwrap();

    let request = transport.only_request();
    let form = request.body.as_multipart().unwrap();
    let input: serde_json::Value =
        serde_json::from_str(form.text_value("input").unwrap()).unwrap();
    assert_eq!(input["operation"], "Upsert");
    assert_eq!(input["object"], "Prospect");
    assert_eq!(form.parts().len(), 2);
}

#[tokio::test]
async fn test_create_with_file_warns_when_options_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "prospects.csv", "email\n");
    let logs = LogCapture::default();
    let _guard = logs.install();

    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    imports
        .create(Some(&path), options(json!({"operation": "Insert"})))
        .await
        .unwrap();

    let output = logs.contents();
    assert!(output.contains("WARN"), "expected a warning, got: {output}");
    assert!(output.contains("Ignoring import options"));
    assert!(output.contains("operation"));
}

#[tokio::test]
async fn test_create_with_file_and_no_options_does_not_warn() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "prospects.csv", "email\n");
    let logs = LogCapture::default();
    let _guard = logs.install();

    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    imports.create(Some(&path), Options::new()).await.unwrap();

    assert!(!logs.contents().contains("Ignoring import options"));
}

#[tokio::test]
async fn test_create_with_missing_file_fails_before_sending() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");

    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    let result = imports.create(Some(&path), Options::new()).await;

    match result {
        Err(PardotError::File { path: reported, source }) => {
            assert_eq!(reported, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected File error, got: {other:?}"),
    }
    assert!(transport.requests().is_empty());
}

// ============================================================================
// add_batch
// ============================================================================

#[tokio::test]
async fn test_add_batch_posts_file_to_batches_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "batch-1.csv", "email\nbob@example.com\n");

    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    imports
        .add_batch("42", &path, QueryParams::new())
        .await
        .unwrap();

    let request = transport.only_request();
    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.path.as_deref(), Some("/42/batches"));
    assert_eq!(request.relative_path(), "imports/42/batches");

    let form = request.body.as_multipart().unwrap();
    assert_eq!(form.parts().len(), 1);
    assert_eq!(
        form.get("file").map(|part| &part.content),
        Some(&PartContent::File {
            file_name: "batch-1.csv".to_string(),
            bytes: b"email\nbob@example.com\n".to_vec(),
        })
    );
}

#[tokio::test]
async fn test_add_batch_forwards_query_params_and_accepts_numeric_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "batch.csv", "email\n");

    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    let mut params = QueryParams::new();
    params.insert("fields".to_string(), "id".to_string());

    imports.add_batch(42_u64, &path, params.clone()).await.unwrap();

    let request = transport.only_request();
    assert_eq!(request.path.as_deref(), Some("/42/batches"));
    assert_eq!(request.query, params);
}

#[tokio::test]
async fn test_add_batch_with_missing_file_fails_before_sending() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.csv");

    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    let result = imports.add_batch("42", &path, QueryParams::new()).await;

    assert!(matches!(result, Err(PardotError::File { .. })));
    assert!(transport.requests().is_empty());
}

// ============================================================================
// update
// ============================================================================

#[tokio::test]
async fn test_update_patches_import_with_json_body() {
    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    imports
        .update("7", options(json!({"state": "Ready"})))
        .await
        .unwrap();

    let request = transport.only_request();
    assert_eq!(request.http_method, HttpMethod::Patch);
    assert_eq!(request.path.as_deref(), Some("/7"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.body.as_json(), Some(&json!({"state": "Ready"})));
}

// ============================================================================
// read / query
// ============================================================================

#[tokio::test]
async fn test_read_applies_default_fields() {
    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    imports.read("7", QueryParams::new()).await.unwrap();

    let request = transport.only_request();
    assert_eq!(request.http_method, HttpMethod::Get);
    assert_eq!(request.path.as_deref(), Some("/7"));
    assert_eq!(
        request.query.get("fields").map(String::as_str),
        Some(DEFAULT_READ_FIELDS)
    );
    assert_eq!(
        DEFAULT_READ_FIELDS,
        "id,isExpired,status,createdCount,updatedCount,errorsRef,errorCount"
    );
}

#[tokio::test]
async fn test_read_caller_fields_override_default() {
    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    let mut params = QueryParams::new();
    params.insert("fields".to_string(), "id,status".to_string());

    imports.read("7", params).await.unwrap();

    assert_eq!(
        transport.only_request().query.get("fields"),
        Some(&"id,status".to_string())
    );
}

#[tokio::test]
async fn test_query_targets_collection_with_default_fields() {
    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    let mut params = QueryParams::new();
    params.insert("limit".to_string(), "10".to_string());

    imports.query(params).await.unwrap();

    let request = transport.only_request();
    assert_eq!(request.http_method, HttpMethod::Get);
    assert!(request.path.is_none());
    assert_eq!(
        request.query.get("fields").map(String::as_str),
        Some(DEFAULT_QUERY_FIELDS)
    );
    assert_eq!(request.query.get("limit"), Some(&"10".to_string()));
}

#[tokio::test]
async fn test_query_caller_fields_override_default() {
    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    let mut params = QueryParams::new();
    params.insert("fields".to_string(), "id".to_string());

    imports.query(params).await.unwrap();

    assert_eq!(
        transport.only_request().query.get("fields"),
        Some(&"id".to_string())
    );
}

// ============================================================================
// download_errors / cancel
// ============================================================================

#[tokio::test]
async fn test_download_errors_gets_errors_path() {
    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    imports.download_errors("9", QueryParams::new()).await.unwrap();

    let request = transport.only_request();
    assert_eq!(request.http_method, HttpMethod::Get);
    assert_eq!(request.path.as_deref(), Some("/9/errors"));
    assert!(request.query.is_empty());
}

#[tokio::test]
async fn test_cancel_posts_with_json_header_and_no_body() {
    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    imports.cancel("7", QueryParams::new()).await.unwrap();

    let request = transport.only_request();
    assert_eq!(request.http_method, HttpMethod::Post);
    assert_eq!(request.path.as_deref(), Some("/7/do/cancel"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn test_ids_are_encoded_as_a_single_path_segment() {
    let transport = RecordingTransport::default();
    let imports = Imports::new(&transport);

    imports.read("7/errors?x=1", QueryParams::new()).await.unwrap();

    assert_eq!(
        transport.only_request().path.as_deref(),
        Some("/7%2Ferrors%3Fx%3D1")
    );
}
