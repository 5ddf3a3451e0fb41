pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::routine::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/routines", post(handlers::handle_compose_routine))
        .route("/api/v1/timetables", post(handlers::handle_render_timetable))
        .route(
            "/api/v1/timetables/deliveries",
            post(handlers::handle_deliver_timetable),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::ProductCatalog;
    use crate::config::Config;
    use crate::storage::memory::InMemoryReportStore;

    fn state() -> AppState {
        AppState::new(Config::default(), Arc::new(ProductCatalog::standard().unwrap()))
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn form(skin_type: &str) -> Value {
        json!({
            "name": "Ana Ruiz",
            "email": "ana@example.com",
            "skinType": skin_type,
            "concerns": ["acne", "oiliness"],
            "morningTime": "6:00 AM",
            "eveningTime": "10:00 PM"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let response = build_router(state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "timetable");
    }

    #[tokio::test]
    async fn test_compose_routine_json() {
        let response = post_json(build_router(state()), "/api/v1/routines", form("oily")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["skinType"], "oily");
        assert_eq!(body["concerns"], json!(["acne", "oiliness"]));
        assert_eq!(body["schedule"]["morning"], "6:00 AM");
        assert_eq!(body["products"]["serums"].as_array().unwrap().len(), 2);
        assert!(body["weeklySchedule"]["monday"]["am"].is_string());
    }

    #[tokio::test]
    async fn test_invalid_skin_type_is_400() {
        let response = post_json(build_router(state()), "/api/v1/routines", form("greasy")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INVALID_SKIN_TYPE");
    }

    #[tokio::test]
    async fn test_invalid_email_is_400() {
        let mut body = form("dry");
        body["email"] = json!("not-an-email");
        let response = post_json(build_router(state()), "/api/v1/timetables", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_render_timetable_returns_pdf() {
        let response = post_json(build_router(state()), "/api/v1/timetables", form("combination")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"skincare-timetable.pdf\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_delivery_without_store_is_503() {
        let response = post_json(
            build_router(state()),
            "/api/v1/timetables/deliveries",
            form("normal"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "STORAGE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_delivery_validates_before_storage_check() {
        let mut body = form("normal");
        body["skinType"] = json!("greasy");
        let response = post_json(build_router(state()), "/api/v1/timetables/deliveries", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INVALID_SKIN_TYPE");
    }

    #[tokio::test]
    async fn test_delivery_with_store() {
        let store = Arc::new(InMemoryReportStore::new("timetables"));
        let app = build_router(state().with_store(store.clone()));

        let response = post_json(app, "/api/v1/timetables/deliveries", form("sensitive")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let key = body["key"].as_str().unwrap();
        assert!(key.starts_with("timetables/") && key.ends_with(".pdf"));
        assert_eq!(body["recipient"], "ana@example.com");

        let stored = store.get(key).unwrap();
        assert!(stored.starts_with(b"%PDF"));
        assert_eq!(body["sizeBytes"].as_u64().unwrap() as usize, stored.len());
    }
}
