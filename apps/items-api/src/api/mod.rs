//! HTTP surface of the service.
//!
//! - `/api/items` CRUD routes (nested under `/api` by `create_router`)
//! - `/health` liveness and `/ready` readiness at the root
//! - Swagger UI at `/swagger-ui`

pub mod health;
pub mod items;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/items", items::router(state))
}

/// The complete application router
pub fn app(state: &AppState) -> eyre::Result<Router> {
    let router = create_router::<ApiDoc>(routes(state))?;

    Ok(router
        .merge(health_router())
        .merge(health::router(state.clone())))
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(
        app: Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn test_app() -> Router {
        let state = test_support::unreachable_state().await;
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || app(&state).unwrap())
    }

    #[tokio::test]
    async fn test_health_ok_while_store_is_down() {
        let (status, body) = send(test_app().await, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_store_failure_returns_500_with_error_body() {
        let (status, body) = send(test_app().await, "GET", "/api/items", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_before_store() {
        let (status, body) = send(
            test_app().await,
            "POST",
            "/api/items",
            Some(json!({ "price": 10 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Name and price are required");
    }

    #[tokio::test]
    async fn test_malformed_id_rejected_before_store() {
        let (status, body) = send(test_app().await, "GET", "/api/items/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid id: abc");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let (status, body) = send(test_app().await, "GET", "/api/unknown", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "The requested resource was not found");
    }

    #[tokio::test]
    async fn test_openapi_lists_item_paths() {
        let (status, body) =
            send(test_app().await, "GET", "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/items"].is_object());
        assert!(body["paths"]["/api/items/{id}"].is_object());
    }
}
