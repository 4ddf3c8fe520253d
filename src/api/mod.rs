//! HTTP API module
//!
//! This module contains the page routes, the timer control endpoints and
//! their response structures.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{state::AppState, view::NAV_ITEMS};
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new();
    for item in NAV_ITEMS.iter() {
        router = router.route(item.path, get(page_handler));
    }

    router
        .route("/timer", get(timer_view_handler))
        .route("/timer/duration", put(timer_duration_handler))
        .route("/timer/:action", post(timer_action_handler))
        .route("/ui/timer/:action", post(ui_action_handler))
        .route("/navigation", get(navigation_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .fallback(page_handler)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::state::TimerBounds;

    fn app() -> (Router, Arc<AppState>) {
        let state = Arc::new(AppState::new(
            20554,
            "127.0.0.1".to_string(),
            3600.0,
            TimerBounds::default(),
            Duration::from_secs(1),
        ));
        (create_router(Arc::clone(&state)), state)
    }

    async fn send(router: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = router.oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn send_json(router: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let (status, bytes) = send(router, method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn increment_reports_applied() {
        let (router, _) = app();
        let (status, json) = send_json(router, Method::POST, "/timer/increment", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "applied");
        assert_eq!(json["timer"]["remaining_seconds"], 4200);
    }

    #[tokio::test]
    async fn disabled_control_is_ignored_not_an_error() {
        let (router, _) = app();
        let (status, json) = send_json(router, Method::POST, "/timer/pause", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ignored");
    }

    #[tokio::test]
    async fn unknown_action_is_not_found() {
        let (router, _) = app();
        let (status, _) = send(router, Method::POST, "/timer/launch", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duration_is_clamped() {
        let (router, state) = app();
        let (status, json) =
            send_json(router, Method::PUT, "/timer/duration", Some(r#"{"seconds": 99999}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["timer"]["remaining_seconds"], 10800);
        assert_eq!(json["timer"]["display"]["hours"], "03");
        assert_eq!(state.get_timer_view().unwrap().requested_seconds, 10800);
    }

    #[tokio::test]
    async fn navigation_marks_current_location() {
        let (router, _) = app();
        let (_, json) = send_json(router, Method::GET, "/navigation?location=/stats", None).await;
        let active: Vec<&Value> = json["items"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|item| item["active"] == true)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0]["path"], "/stats");
        assert_eq!(active[0]["icon"], "pie-chart");
    }

    #[tokio::test]
    async fn pages_render_for_destinations() {
        let (router, _) = app();
        let (status, body) = send(router.clone(), Method::GET, "/goals", None).await;
        assert_eq!(status, StatusCode::OK);
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("<li class=\"active\"><a href=\"/goals\">"));

        let (status, _) = send(router, Method::GET, "/nowhere", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn ui_controls_redirect_home() {
        let (router, state) = app();
        let (status, _) = send(router, Method::POST, "/ui/timer/decrement", None).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(state.get_timer_view().unwrap().remaining_seconds, 3000);
    }

    #[tokio::test]
    async fn status_reports_tick_registration() {
        let (router, state) = app();
        state.start().unwrap();
        let (status, json) = send_json(router, Method::GET, "/status", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["tick_registered"], true);
        assert_eq!(json["timer"]["state"], "running");
        assert_eq!(json["last_action"], "start");
        state.shutdown().unwrap();
    }
}
