pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/findjobroles", post(handlers::handle_find_job_roles))
        .route("/api/v1/reports", post(handlers::handle_create_report))
        .route(
            "/api/v1/reports/records",
            post(handlers::handle_create_report_records),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::testing::{client_for, ScriptedCompletion};

    fn app(backend: Arc<ScriptedCompletion>) -> Router {
        let config = Config {
            generation_api_key: "test".to_string(),
            generation_api_url: "http://localhost".to_string(),
            generation_model: "models/test".to_string(),
            generation_temperature: 0.3,
            generation_timeout: Duration::from_secs(1),
            max_concurrency: 4,
            port: 0,
            rust_log: "info".to_string(),
        };
        build_router(AppState {
            llm: client_for(backend),
            config,
        })
    }

    fn canned() -> Arc<ScriptedCompletion> {
        Arc::new(ScriptedCompletion::new(|request| {
            let text = if request.prompt.contains("EXACTLY 5 job roles") {
                "* A\n* B\n* C\n* D\n* E"
            } else {
                "* item"
            };
            Ok(Some(text.to_string()))
        }))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(canned())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "careerscope");
    }

    #[tokio::test]
    async fn test_form_endpoint_returns_wire_shape() {
        let response = app(canned())
            .oneshot(
                Request::post("/findjobroles")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("interests=space+and+rockets"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["jobroles"], serde_json::json!(["A", "B", "C", "D", "E"]));
        for key in ["JD", "courses", "colleges", "salary", "onlineRes"] {
            assert_eq!(body[key].as_array().map(Vec::len), Some(5), "field {key}");
        }
        assert_eq!(body["courses"][0], "item");
    }

    #[tokio::test]
    async fn test_short_interests_rejected_without_generation() {
        let backend = canned();
        let response = app(backend.clone())
            .oneshot(
                Request::post("/api/v1/reports")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"interests": " a "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Please enter a bit more detail (min 3 chars)."
        );
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn test_records_endpoint_returns_one_record_per_role() {
        let response = app(canned())
            .oneshot(
                Request::post("/api/v1/reports/records")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"interests": "space and rockets"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[2]["role"], "C");
        assert_eq!(records[2]["courses"], "item");
        assert_eq!(records[2]["salary_range"], "item");
    }

    #[tokio::test]
    async fn test_missing_form_field_is_rejected() {
        let response = app(canned())
            .oneshot(
                Request::post("/findjobroles")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(""))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
