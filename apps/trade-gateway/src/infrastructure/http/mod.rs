//! HTTP/REST API Adapter
//!
//! Driver adapter exposing gateway operations over REST.

mod controller;
mod response;

pub use controller::{AppState, create_router};
pub use response::{ApiErrorResponse, HealthResponse, HealthStatus, ServiceInfo};
