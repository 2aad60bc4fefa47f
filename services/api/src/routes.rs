use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use student_registry::registry::{student_router, StudentRepository, StudentService};

pub(crate) fn with_student_routes<R>(service: Arc<StudentService<R>>) -> axum::Router
where
    R: StudentRepository + 'static,
{
    student_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seeded_service;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body.get("status"), Some(&json!("ok")));
    }

    #[tokio::test]
    async fn student_routes_are_mounted_alongside_health() {
        let service = Arc::new(seeded_service().expect("seed roster has unique ids"));
        let app = with_student_routes(service);

        let response = app
            .clone()
            .oneshot(
                axum::http::Request::get("/students")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);

        let health = app
            .oneshot(
                axum::http::Request::get("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(health.status(), StatusCode::OK);
    }
}
