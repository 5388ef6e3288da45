use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use bee_api::api::{self, AppState};
use bee_api::lifecycle::BeeSystem;
use bee_api::model::Bee;
use http_body_util::BodyExt;
use tower::ServiceExt;

fn app(system: &BeeSystem) -> Router {
    api::router(AppState::new(system.bee_client.clone(), None))
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

/// Full create / read / rename / delete walk over HTTP against the real actor.
#[tokio::test]
async fn test_bee_lifecycle_over_http() {
    let system = BeeSystem::new();
    let app = app(&system);

    // Create
    let response = app
        .clone()
        .oneshot(json_request("POST", "/bees", r#"{"name":"Scout"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header missing")
        .to_str()
        .unwrap()
        .to_string();
    let created: Bee = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(created.name, "Scout");
    assert_eq!(location, format!("/bees/{}", created.id));

    // Read back via Location
    let response = app.clone().oneshot(empty_request("GET", &location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Bee = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(fetched, created);

    // Rename
    let response = app
        .clone()
        .oneshot(json_request("PUT", &location, r#"{"name":"Worker"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = app.clone().oneshot(empty_request("GET", &location)).await.unwrap();
    let renamed: Bee = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(renamed, Bee::new(created.id, "Worker"));

    // Delete returns the last state
    let response = app.clone().oneshot(empty_request("DELETE", &location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Bee = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(deleted, renamed);

    let response = app.clone().oneshot(empty_request("GET", &location)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    drop(app);
    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_root_and_listing() {
    let system = BeeSystem::new();
    let app = app(&system);

    let response = app.clone().oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"Hello World!");

    let response = app.clone().oneshot(empty_request("GET", "/bees")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"[]");

    for name in ["Nurse", "Guard"] {
        let body = format!(r#"{{"name":"{}"}}"#, name);
        let response = app.clone().oneshot(json_request("POST", "/bees", &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.clone().oneshot(empty_request("GET", "/bees")).await.unwrap();
    let bees: Vec<Bee> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(bees, vec![Bee::new(1, "Nurse"), Bee::new(2, "Guard")]);

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_bee_routes_return_not_found() {
    let system = BeeSystem::new();
    let app = app(&system);

    let put = json_request("PUT", "/bees/77", r#"{"name":"Ghost"}"#);
    for request in [empty_request("GET", "/bees/77"), put, empty_request("DELETE", "/bees/77")] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let system = BeeSystem::new();
    let app = app(&system);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/bees", "{not json"))
        .await
        .unwrap();
    assert!(response.status().is_client_error());

    let response = app.clone().oneshot(empty_request("GET", "/bees")).await.unwrap();
    assert_eq!(body_bytes(response).await, b"[]");

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_swagger_endpoints_are_served() {
    let system = BeeSystem::new();
    let app = app(&system);

    let response = app.clone().oneshot(empty_request("GET", "/swagger")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/swagger/v1/swagger.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let spec: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(spec["info"]["title"], "Bee API");

    drop(app);
    system.shutdown().await.unwrap();
}
