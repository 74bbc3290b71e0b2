use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use calbridge_backend::{build_app, service_factory::create_scheduling_service};
use calbridge_config::{AppConfig, CalendlyConfig, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(base_url: &str, use_calendly: bool) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        use_calendly,
        calendly: CalendlyConfig::new(base_url, "test-token"),
    }
}

fn app(config: &AppConfig) -> Router {
    let scheduling = create_scheduling_service(config).unwrap();
    build_app(config, scheduling)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<Value>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).ok())
}

#[tokio::test]
async fn root_reports_service_running() {
    let (status, body) = get(app(&config("http://127.0.0.1:1", true)), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        Some(json!({"message": "Calendly Connection Test API is running!"}))
    );
}

#[tokio::test]
async fn calendly_routes_are_nested_under_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resource": {"uri": "https://api.calendly.com/users/AAA", "name": "Ada"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/event_types"))
        .and(query_param("user", "https://api.calendly.com/users/AAA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"collection": []})))
        .expect(1)
        .mount(&server)
        .await;
    let app = app(&config(&server.uri(), true));

    let (status, body) = get(app.clone(), "/api/calendly/events").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Some(json!({"collection": []})));

    let (status, _) = get(app, "/calendly/events").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn disabled_calendly_leaves_only_root() {
    let app = app(&config("http://127.0.0.1:1", false));

    let (status, _) = get(app.clone(), "/api/test-connection").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[cfg(feature = "openapi")]
#[tokio::test]
async fn openapi_document_is_served_under_api_docs() {
    let (status, body) = get(
        app(&config("http://127.0.0.1:1", true)),
        "/api/docs/openapi.json",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let doc = body.unwrap();
    assert_eq!(doc["info"]["version"], "1.2.0");
    assert_eq!(doc["info"]["title"], "Calendly Connection Test API");
    assert!(doc["paths"]["/calendly/book"]["post"].is_object());
}
