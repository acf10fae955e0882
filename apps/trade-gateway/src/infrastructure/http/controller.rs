//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the gateway client. Requests are
//! validated here and rejected with a client-error status before the gateway
//! client is touched; everything past validation answers HTTP 200 with an
//! [`Envelope`].

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::application::ports::TerminalPort;
use crate::application::{Envelope, TradeGateway};
use crate::domain::{CancelRequest, OrderRequest, ValidationError};

use super::response::{ApiErrorResponse, HealthResponse, HealthStatus, ServiceInfo};

/// Reply for requests rejected by validation.
type ValidationReply = (StatusCode, Json<ApiErrorResponse>);

/// Application state shared across handlers.
pub struct AppState<T: TerminalPort> {
    /// The gateway client owning the terminal connection.
    pub gateway: Arc<TradeGateway<T>>,
    /// Application version.
    pub version: String,
}

impl<T: TerminalPort> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<T: TerminalPort + 'static>(state: AppState<T>) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/buy", post(buy))
        .route("/sell", post(sell))
        .route("/cancel", post(cancel))
        .route("/balance", get(balance))
        .route("/positions", get(positions))
        .route("/orders", get(today_orders))
        .route("/trades", get(today_trades))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Service descriptor endpoint.
async fn service_info<T: TerminalPort>(State(state): State<AppState<T>>) -> impl IntoResponse {
    Json(ServiceInfo {
        service: "trade-gateway".to_string(),
        version: state.version.clone(),
    })
}

/// Health check endpoint.
///
/// Reflects the connection state settled at startup; never probes the
/// terminal, so it stays cheap and side-effect free.
async fn health_check<T: TerminalPort>(State(state): State<AppState<T>>) -> impl IntoResponse {
    let connected = state.gateway.is_connected();
    let status = if connected {
        HealthStatus::Healthy
    } else {
        HealthStatus::Unhealthy
    };
    Json(HealthResponse {
        status,
        client_connected: connected,
    })
}

/// Buy order endpoint.
async fn buy<T: TerminalPort>(
    State(state): State<AppState<T>>,
    Json(order): Json<OrderRequest>,
) -> Result<Json<Envelope>, ValidationReply> {
    order.validate().map_err(reject)?;
    Ok(Json(state.gateway.buy(&order).await))
}

/// Sell order endpoint.
async fn sell<T: TerminalPort>(
    State(state): State<AppState<T>>,
    Json(order): Json<OrderRequest>,
) -> Result<Json<Envelope>, ValidationReply> {
    order.validate().map_err(reject)?;
    Ok(Json(state.gateway.sell(&order).await))
}

/// Cancel order endpoint.
async fn cancel<T: TerminalPort>(
    State(state): State<AppState<T>>,
    Json(request): Json<CancelRequest>,
) -> Result<Json<Envelope>, ValidationReply> {
    request.validate().map_err(reject)?;
    Ok(Json(state.gateway.cancel(&request).await))
}

/// Account balance endpoint.
async fn balance<T: TerminalPort>(State(state): State<AppState<T>>) -> impl IntoResponse {
    Json(state.gateway.balance().await)
}

/// Positions endpoint.
async fn positions<T: TerminalPort>(State(state): State<AppState<T>>) -> impl IntoResponse {
    Json(state.gateway.positions().await)
}

/// Today's entrusts endpoint.
async fn today_orders<T: TerminalPort>(State(state): State<AppState<T>>) -> impl IntoResponse {
    Json(state.gateway.today_orders().await)
}

/// Today's executions endpoint.
async fn today_trades<T: TerminalPort>(State(state): State<AppState<T>>) -> impl IntoResponse {
    Json(state.gateway.today_trades().await)
}

/// Map a validation failure to a 422 with a structured body.
fn reject(err: ValidationError) -> ValidationReply {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiErrorResponse {
            code: "validation_error".to_string(),
            message: err.to_string(),
        }),
    )
}
