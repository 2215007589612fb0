use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use configs::{AppConfig, StorageBackend};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn memory_app() -> anyhow::Result<Router> {
    let mut cfg = AppConfig::default();
    cfg.storage.backend = StorageBackend::Memory;
    Ok(server::startup::build_app(&cfg).await?)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    match body {
        Some(v) => call_raw(app, method, uri, serde_json::to_vec(&v)?).await,
        None => send(app, Request::builder().method(method).uri(uri).body(Body::empty())?).await,
    }
}

/// Sends `body` verbatim as `application/json`.
async fn call_raw(app: &Router, method: Method, uri: &str, body: impl Into<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())?;
    send(app, req).await
}

async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let res = app.clone().oneshot(req).await?;
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

fn user(email: &str) -> Value {
    json!({"email": email, "name": "A", "date_of_birth": "1990-01-01", "postcode": "N1"})
}

#[tokio::test]
async fn health_ok() -> anyhow::Result<()> {
    let app = memory_app().await?;
    let (status, body) = call(&app, Method::GET, "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn crud_walkthrough() -> anyhow::Result<()> {
    let app = memory_app().await?;

    let (status, body) = call(&app, Method::GET, "/users", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, first) = call(&app, Method::POST, "/users", Some(user("a@x.com"))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["id"], 1);
    assert_eq!(first["date_of_birth"], "1990-01-01");

    let (status, second) = call(&app, Method::POST, "/users", Some(user("b@x.com"))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["id"], 2);

    let (status, got) = call(&app, Method::GET, "/users/2", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(got, second);

    let replacement = json!({"email": "b2@x.com", "name": "B", "date_of_birth": "1980-05-17", "postcode": "E2"});
    let (status, updated) = call(&app, Method::PUT, "/users/2", Some(replacement)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({"id": 2, "email": "b2@x.com", "name": "B", "date_of_birth": "1980-05-17", "postcode": "E2"}));

    let (status, body) = call(&app, Method::DELETE, "/users/1", None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, listed) = call(&app, Method::GET, "/users", None).await?;
    assert_eq!(listed, json!([updated]));

    let (status, third) = call(&app, Method::POST, "/users", Some(user("c@x.com"))).await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(third["id"], 3);
    Ok(())
}

#[tokio::test]
async fn missing_user_is_404() -> anyhow::Result<()> {
    let app = memory_app().await?;
    let (status, body) = call(&app, Method::GET, "/users/999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "No user with id=999.");

    let (status, _) = call(&app, Method::PUT, "/users/999", Some(user("a@x.com"))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, Method::DELETE, "/users/999", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = call(&app, Method::GET, "/users", None).await?;
    assert_eq!(listed, json!([]));
    Ok(())
}

#[tokio::test]
async fn invalid_bodies_are_422() -> anyhow::Result<()> {
    let app = memory_app().await?;

    let (status, body) = call(&app, Method::POST, "/users", Some(user("  "))).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Validation Error");

    let no_postcode = json!({"email": "a@x.com", "name": "A", "date_of_birth": "1990-01-01"});
    let (status, body) = call(&app, Method::POST, "/users", Some(no_postcode)).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Invalid Request");

    let bad_date = json!({"email": "a@x.com", "name": "A", "date_of_birth": "01/01/1990", "postcode": "N1"});
    let (status, _) = call(&app, Method::POST, "/users", Some(bad_date)).await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, listed) = call(&app, Method::GET, "/users", None).await?;
    assert_eq!(listed, json!([]));
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_422_with_error_body() -> anyhow::Result<()> {
    let app = memory_app().await?;

    let (status, body) = call_raw(&app, Method::POST, "/users", "{\"email\": \"a@x.com\",").await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Invalid Request");
    assert!(body["detail"].is_string());

    let (_, created) = call(&app, Method::POST, "/users", Some(user("a@x.com"))).await?;
    let (status, body) = call_raw(&app, Method::PUT, "/users/1", "not json").await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Invalid Request");

    let (_, listed) = call(&app, Method::GET, "/users", None).await?;
    assert_eq!(listed, json!([created]));
    Ok(())
}

#[tokio::test]
async fn non_integer_id_is_400_with_error_body() -> anyhow::Result<()> {
    let app = memory_app().await?;
    call(&app, Method::POST, "/users", Some(user("a@x.com"))).await?;

    let (status, body) = call(&app, Method::GET, "/users/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid Request");
    assert!(body["detail"].is_string());

    let (status, body) = call(&app, Method::PUT, "/users/1.5", Some(user("b@x.com"))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid Request");

    let (status, body) = call(&app, Method::DELETE, "/users/x", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid Request");

    let (_, listed) = call(&app, Method::GET, "/users", None).await?;
    assert_eq!(listed[0]["email"], "a@x.com");
    Ok(())
}

#[tokio::test]
async fn openapi_document_lists_user_routes() -> anyhow::Result<()> {
    let app = memory_app().await?;
    let (status, doc) = call(&app, Method::GET, "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "User Account API");
    assert!(doc["paths"]["/users"].is_object());
    assert!(doc["paths"]["/users/{id}"]["delete"].is_object());
    Ok(())
}
