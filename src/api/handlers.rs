//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Redirect, Response},
};
use tracing::{error, warn};

use crate::{
    state::{ActionReport, AppState, TimerAction},
    view::{self, navigation},
};
use super::responses::{
    ApiResponse, DurationRequest, HealthResponse, NavigationQuery, NavigationResponse,
    StatusResponse,
};

fn parse_action(name: &str) -> Result<TimerAction, StatusCode> {
    name.parse::<TimerAction>().map_err(|e| {
        warn!("{}", e);
        StatusCode::NOT_FOUND
    })
}

fn run_action(state: &Arc<AppState>, action: TimerAction) -> Result<ActionReport, StatusCode> {
    state.apply(action).map_err(|e| {
        error!("Failed to apply timer action '{}': {}", action.name(), e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

fn action_response(action: TimerAction, report: ActionReport) -> Json<ApiResponse> {
    if report.applied {
        Json(ApiResponse::applied(format!("Timer {} applied", action.name()), report.view))
    } else {
        Json(ApiResponse::ignored(
            format!("Timer {} not available in the current state", action.name()),
            report.view,
        ))
    }
}

/// Handle POST /timer/:action - Drive the timer with a named control
pub async fn timer_action_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let action = parse_action(&name)?;
    let report = run_action(&state, action)?;
    Ok(action_response(action, report))
}

/// Handle PUT /timer/duration - Reconfigure the requested duration
pub async fn timer_duration_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<DurationRequest>,
) -> Result<Json<ApiResponse>, StatusCode> {
    let action = TimerAction::Reconfigure(request.seconds);
    let report = run_action(&state, action)?;
    Ok(action_response(action, report))
}

/// Handle GET /timer - Return the current timer frame
pub async fn timer_view_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<view::TimerView>, StatusCode> {
    state.get_timer_view().map(Json).map_err(|e| {
        error!("Failed to get timer view: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// Handle POST /ui/timer/:action - Form target of the page controls
pub async fn ui_action_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Redirect, StatusCode> {
    let action = parse_action(&name)?;
    run_action(&state, action)?;
    Ok(Redirect::to("/"))
}

/// Handle GET on a navigation destination - Render the page shell
pub async fn page_handler(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    let location = uri.path();
    let timer = match state.get_timer_view() {
        Ok(timer) => timer,
        Err(e) => {
            error!("Failed to get timer view: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let page = Html(view::render_page(location, &timer));
    if navigation::destination(location).is_some() {
        page.into_response()
    } else {
        (StatusCode::NOT_FOUND, page).into_response()
    }
}

/// Handle GET /navigation - Return navigation entries for a location
pub async fn navigation_handler(Query(query): Query<NavigationQuery>) -> Json<NavigationResponse> {
    let items = view::menu(&query.location);
    Json(NavigationResponse {
        location: query.location,
        items,
    })
}

/// Handle GET /status - Return timer and server status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let timer = match state.get_timer_view() {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to get timer view: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let tick_registered = match state.is_tick_registered() {
        Ok(registered) => registered,
        Err(e) => {
            error!("Failed to inspect tick registration: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        timer,
        tick_registered,
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
