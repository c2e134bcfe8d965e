use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        blogs::{create_blog, get_blog, list_blogs},
        health::livez,
        not_found,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // Browsers read posts cross-origin; any origin may call the API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/blogs", get(list_blogs).post(create_blog))
        .route("/blogs/{id}", get(get_blog))
        .route("/livez", get(livez))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use wayfarer_core::auth::{AuthError, Authenticator, Claims, Result};
    use wayfarer_core::blog::seed_records;
    use wayfarer_core::query::CategoryIndex;

    use crate::config::Config;
    use crate::storage::inmemory::InMemoryStore;

    const TOKEN: &str = "valid-token";

    /// Accepts `TOKEN` only.
    struct StaticAuthenticator;

    #[async_trait]
    impl Authenticator for StaticAuthenticator {
        async fn verify(&self, credential: Option<&str>) -> Result<Option<Claims>> {
            let valid = credential.and_then(wayfarer_core::auth::strip_bearer) == Some(TOKEN);
            Ok(valid.then(|| Claims {
                subject: "user-1".to_string(),
                issuer: "test".to_string(),
                username: Some("traveller".to_string()),
                email: None,
                token_use: Some("id".to_string()),
                expires_at: u64::MAX,
            }))
        }
    }

    /// Cannot reach its key set.
    struct DownAuthenticator;

    #[async_trait]
    impl Authenticator for DownAuthenticator {
        async fn verify(&self, _credential: Option<&str>) -> Result<Option<Claims>> {
            Err(AuthError::Unavailable("JWKS endpoint unreachable".to_string()))
        }
    }

    fn state_with(authenticator: Arc<dyn Authenticator>) -> AppState {
        let store = InMemoryStore::with_records(CategoryIndex::default(), seed_records());
        AppState::new(Arc::new(store), authenticator, &Config::default())
    }

    fn app() -> Router {
        create_app(state_with(Arc::new(StaticAuthenticator)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn post_blog(body: &Value, authorization: Option<&str>) -> Request<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri("/blogs")
            .header("Content-Type", "application/json");
        if let Some(authorization) = authorization {
            request = request.header("Authorization", authorization);
        }
        request.body(Body::from(body.to_string())).unwrap()
    }

    fn ids(json: &Value) -> Vec<&str> {
        let mut ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|record| record["id"].as_str().unwrap())
            .collect();
        ids.sort_unstable();
        ids
    }

    #[tokio::test]
    async fn test_livez() {
        let response = app()
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_blog() {
        let (status, json) = get_json(app(), "/blogs/123").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], "123");
        assert_eq!(json["createdAt"], 1_715_318_400_000_i64);
        assert_eq!(json["journey"], "europe");
        assert_eq!(json["title"], "Blog Post 1");
    }

    #[tokio::test]
    async fn test_get_missing_blog() {
        let (status, json) = get_json(app(), "/blogs/non-existent-id").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({"error": "Blog not found"}));
    }

    #[tokio::test]
    async fn test_list_all_blogs() {
        let (status, json) = get_json(app(), "/blogs").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["123", "124", "125", "126", "127"]);
    }

    #[tokio::test]
    async fn test_list_by_journey() {
        let (status, json) = get_json(app(), "/blogs?journey=europe").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["123", "124"]);
    }

    #[tokio::test]
    async fn test_list_by_date_range() {
        let (status, json) = get_json(app(), "/blogs?start=2024-06-01&end=2024-07-31").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["124", "125"]);
    }

    #[tokio::test]
    async fn test_list_by_journey_and_range() {
        let (status, json) =
            get_json(app(), "/blogs?journey=asia&start=2024-07-01&end=2024-08-01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json), vec!["125"]);
    }

    #[tokio::test]
    async fn test_blank_parameters_are_ignored() {
        let (status, json) = get_json(app(), "/blogs?journey=&start=&end=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_malformed_date_is_bad_request() {
        let (status, json) = get_json(app(), "/blogs?start=yesterday").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("yesterday"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, json) = get_json(app(), "/images/upload").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({"error": "Not Found"}));
    }

    #[tokio::test]
    async fn test_create_blog() {
        let app = app();
        let body = json!({
            "title": "Kyoto",
            "journey": "asia",
            "tags": ["temples"],
            "id": "ignored",
        });

        let response = app
            .clone()
            .oneshot(post_blog(&body, Some("Bearer valid-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let created: Value = serde_json::from_slice(&bytes).unwrap();
        let id = created["id"].as_str().unwrap();
        assert_ne!(id, "ignored");
        assert!(created["createdAt"].is_i64());
        assert_eq!(created["tags"], json!(["temples"]));

        let (status, fetched) = get_json(app.clone(), &format!("/blogs/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (_, asia) = get_json(app, "/blogs?journey=asia").await;
        assert_eq!(asia.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_without_token_is_unauthorized() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_blog(&json!({"title": "x"}), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let (_, all) = get_json(app, "/blogs").await;
        assert_eq!(all.as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_create_with_bad_token_is_unauthorized() {
        let response = app()
            .oneshot(post_blog(&json!({"title": "x"}), Some("Bearer forged")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_with_authenticator_down_is_unavailable() {
        let app = create_app(state_with(Arc::new(DownAuthenticator)));

        let response = app
            .oneshot(post_blog(&json!({"title": "x"}), Some("Bearer valid-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_create_with_non_object_body_is_bad_request() {
        let response = app()
            .oneshot(post_blog(&json!(["not", "an", "object"]), Some("Bearer valid-token")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_checks_credential_before_body() {
        let response = app()
            .oneshot(post_blog(&json!([1]), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/blogs")
                    .header("Origin", "https://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
