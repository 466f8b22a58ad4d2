//! In-process API tests.
//!
//! These drive the full router through `tower::ServiceExt::oneshot` with a
//! temporary data directory, so they need no running server.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use crtdb_server::{
    api,
    config::{AppConfig, AuthConfig, LoggingConfig, ServerConfig, StorageConfig, UploadsConfig},
    repository::Repository,
    services::Services,
    AppState,
};

fn test_state(dir: &TempDir) -> AppState {
    let storage = StorageConfig {
        crts_file: dir.path().join("crts.json").to_string_lossy().into_owned(),
        manufacturers_file: dir
            .path()
            .join("manufacturers.json")
            .to_string_lossy()
            .into_owned(),
        upload_dir: dir.path().join("uploads").to_string_lossy().into_owned(),
        public_upload_prefix: "/uploads".to_string(),
    };
    std::fs::write(&storage.crts_file, b"[]").unwrap();
    std::fs::write(
        &storage.manufacturers_file,
        serde_json::to_vec(&json!([
            { "id": 1, "name": "Sony", "description": "Trinitron", "logo": null }
        ]))
        .unwrap(),
    )
    .unwrap();

    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        storage,
        uploads: UploadsConfig {
            max_files: 10,
            max_file_size_mib: 10,
        },
        auth: AuthConfig {
            admin_password: "admin123".to_string(),
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "pretty".to_string(),
        },
    };

    let repository = Repository::new(&config.storage);
    let services = Services::new(repository, &config);
    AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    }
}

fn test_app(dir: &TempDir) -> Router {
    api::create_router(test_state(dir))
}

fn sample_entry() -> Value {
    json!({
        "brand": "Sony",
        "model": "PVM-20L5",
        "purpose": "Professional",
        "description": "test",
        "screenSize": { "imperial": "20", "metric": "50.80" },
        "videoIO": [],
        "aspectRatio": "4:3"
    })
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder.body(Body::from(value.to_string())).unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn multipart_body(parts: &[(&str, &str, &[u8])]) -> (String, Vec<u8>) {
    let boundary = "xBOUNDARYx";
    let mut body = Vec::new();
    for (file_name, mime, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"images\"; filename=\"{}\"\r\n",
                file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", mime).as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    (
        format!("multipart/form-data; boundary={}", boundary),
        body,
    )
}

#[tokio::test]
async fn health_reports_healthy() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = send_json(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn post_then_get_then_delete_scenario() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = send_json(&app, "POST", "/api/crts", Some(sample_entry())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let id = body["crt"]["id"].as_i64().expect("server-assigned id");

    // Echoed record is deep-equal to the submission outside the id
    for (key, expected) in sample_entry().as_object().unwrap() {
        assert_eq!(&body["crt"][key], expected, "field {} changed", key);
    }

    let (status, listing) = send_json(&app, "GET", "/api/crts", None).await;
    assert_eq!(status, StatusCode::OK);
    let found = listing
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"].as_i64() == Some(id));
    assert!(found);

    let (status, body) = send_json(&app, "DELETE", &format!("/api/crts/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, listing) = send_json(&app, "GET", "/api/crts", None).await;
    assert!(listing.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn put_unknown_id_is_404_and_store_unchanged() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (_, created) = send_json(&app, "POST", "/api/crts", Some(sample_entry())).await;
    let id = created["crt"]["id"].as_i64().unwrap();

    let (status, body) =
        send_json(&app, "PUT", "/api/crts/999999", Some(sample_entry())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "CRT not found");

    let (_, listing) = send_json(&app, "GET", "/api/crts", None).await;
    let stored = listing.as_array().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["id"].as_i64(), Some(id));
}

#[tokio::test]
async fn put_replaces_record_wholesale() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (_, created) = send_json(&app, "POST", "/api/crts", Some(sample_entry())).await;
    let id = created["crt"]["id"].as_i64().unwrap();

    let mut record = created["crt"].clone();
    record["description"] = json!("updated description");
    let (status, body) =
        send_json(&app, "PUT", &format!("/api/crts/{}", id), Some(record)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["crt"]["description"], "updated description");

    let (_, listing) = send_json(&app, "GET", "/api/crts", None).await;
    let stored = &listing.as_array().unwrap()[0];
    assert_eq!(stored["description"], "updated description");
    assert_eq!(stored["model"], "PVM-20L5");
    assert_eq!(stored["screenSize"]["metric"], "50.80");
}

#[tokio::test]
async fn duplicate_client_id_is_409() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let mut entry = sample_entry();
    entry["id"] = json!(1755000000000i64);
    let (status, _) = send_json(&app, "POST", "/api/crts", Some(entry.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(&app, "POST", "/api/crts", Some(entry)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].as_str().unwrap().contains("already exists"));

    let (_, listing) = send_json(&app, "GET", "/api/crts", None).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_only_target_and_keeps_order() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let mut ids = Vec::new();
    for model in ["a", "b", "c"] {
        let mut entry = sample_entry();
        entry["model"] = json!(model);
        let (_, body) = send_json(&app, "POST", "/api/crts", Some(entry)).await;
        ids.push(body["crt"]["id"].as_i64().unwrap());
    }

    let (status, _) =
        send_json(&app, "DELETE", &format!("/api/crts/{}", ids[1]), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listing) = send_json(&app, "GET", "/api/crts", None).await;
    let remaining: Vec<i64> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(remaining, vec![ids[0], ids[2]]);
}

#[tokio::test]
async fn upload_attaches_images_under_public_prefix() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (_, created) = send_json(&app, "POST", "/api/crts", Some(sample_entry())).await;
    let id = created["crt"]["id"].as_i64().unwrap();

    let (content_type, body) = multipart_body(&[
        ("front.gif", "image/gif", b"GIF89a"),
        ("back.png", "image/png", b"\x89PNG\r\n"),
    ]);
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/crts/{}/images", id))
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], true);
    let images = body["images"].as_array().unwrap();
    assert_eq!(images.len(), 2);
    for image in images {
        assert!(image.as_str().unwrap().starts_with("/uploads/crts/"));
    }

    let (_, listing) = send_json(&app, "GET", "/api/crts", None).await;
    assert_eq!(listing[0]["images"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn upload_with_one_bad_file_rejects_all() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (_, created) = send_json(&app, "POST", "/api/crts", Some(sample_entry())).await;
    let id = created["crt"]["id"].as_i64().unwrap();

    let (content_type, body) = multipart_body(&[
        ("front.gif", "image/gif", b"GIF89a"),
        ("manual.pdf", "application/pdf", b"%PDF-1.4"),
    ]);
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/crts/{}/images", id))
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // No partial acceptance: the good file must not be attached either
    let (_, listing) = send_json(&app, "GET", "/api/crts", None).await;
    assert!(listing[0]["images"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn upload_to_unknown_entry_is_404() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (content_type, body) = multipart_body(&[("front.gif", "image/gif", b"GIF89a")]);
    let request = Request::builder()
        .method("POST")
        .uri("/api/crts/42/images")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn detaching_missing_image_path_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (_, created) = send_json(&app, "POST", "/api/crts", Some(sample_entry())).await;
    let id = created["crt"]["id"].as_i64().unwrap();

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/api/crts/{}/images", id),
        Some(json!({ "imagePath": "/uploads/crts/never-existed.jpg" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn admin_login_checks_shared_password() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/admin/login",
        Some(json!({ "password": "admin123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/admin/login",
        Some(json!({ "password": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn manufacturers_are_served_and_slugged() {
    let dir = TempDir::new().unwrap();
    let app = test_app(&dir);

    let (status, listing) = send_json(&app, "GET", "/api/manufacturers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing.as_array().unwrap().len(), 1);

    let (status, body) = send_json(&app, "GET", "/api/manufacturers/sony", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Sony");

    let (status, _) = send_json(&app, "GET", "/api/manufacturers/zenith", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn corrupt_catalog_file_is_a_generic_500() {
    let dir = TempDir::new().unwrap();
    let state = test_state(&dir);
    std::fs::write(dir.path().join("crts.json"), b"{ not json").unwrap();
    let app = api::create_router(state);

    let (status, body) = send_json(&app, "GET", "/api/crts", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to access catalog storage");
}
