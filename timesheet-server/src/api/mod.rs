//! HTTP API
//!
//! Every handler answers with the `ApiResponse` envelope from `shared`.

pub mod employees;
pub mod health;
pub mod projects;
pub mod staffing;

use std::time::Duration;

use axum::Router;
use http::StatusCode;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(staffing::router())
        .merge(projects::router())
        .merge(employees::router())
}

/// Build the fully configured application
///
/// Used by the HTTP server and by in-process tests
pub fn build_app(state: ServerState) -> Router {
    let request_timeout = state.config.request_timeout();
    with_middleware(build_router(), request_timeout).with_state(state)
}

/// Trace, timeout (408 once `request_timeout` elapses) and CORS layers
fn with_middleware(
    router: Router<ServerState>,
    request_timeout: Duration,
) -> Router<ServerState> {
    router.layer(
        ServiceBuilder::new()
            // Request tracing (logs at INFO level)
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            ))
            .layer(CorsLayer::permissive()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::db::DbService;
    use axum::body::Body;
    use axum::routing::get;
    use http::Request;
    use tower::ServiceExt;

    async fn slow() -> &'static str {
        tokio::time::sleep(Duration::from_secs(5)).await;
        "late"
    }

    #[tokio::test]
    async fn test_slow_request_times_out_with_408() {
        let db = DbService::in_memory().await.unwrap();
        let state = ServerState::new(Config::default(), db);
        let app = with_middleware(
            build_router().route("/slow", get(slow)),
            Duration::from_millis(50),
        )
        .with_state(state);

        let response = app
            .clone()
            .oneshot(Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
