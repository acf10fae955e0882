//! Trade Gateway Binary
//!
//! Starts the trading gateway HTTP service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin trade-gateway
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GATEWAY_HTTP_HOST`: HTTP bind host (default: 0.0.0.0)
//! - `GATEWAY_HTTP_PORT`: HTTP bind port (default: 8000)
//! - `BRIDGE_ENDPOINT`: Terminal bridge base URL (default: <http://127.0.0.1:18611>)
//! - `TERMINAL_EXE_PATH`: Desktop terminal executable path (default: empty, attach to a running instance)
//! - `BRIDGE_TIMEOUT_SECS`: Per-call bridge timeout in seconds (default: 30)
//! - `BRIDGE_TYPE_KEYS`: Enter order fields by keystrokes (default: true)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::signal;
use trade_gateway::application::TradeGateway;
use trade_gateway::infrastructure::http::{AppState, create_router};
use trade_gateway::infrastructure::terminal::{BridgeConfig, BridgeTerminal};

/// Default HTTP bind host.
const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 8000;

/// Default terminal bridge endpoint.
const DEFAULT_BRIDGE_ENDPOINT: &str = "http://127.0.0.1:18611";

/// Default per-call bridge timeout in seconds.
const DEFAULT_BRIDGE_TIMEOUT_SECS: u64 = 30;

/// Parsed configuration from environment variables.
struct GatewayConfig {
    http_host: String,
    http_port: u16,
    bridge_endpoint: String,
    exe_path: String,
    bridge_timeout: Duration,
    type_keys: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting trade gateway");

    let config = parse_config();
    log_config(&config);

    let terminal = create_terminal(&config)?;
    let mut gateway = TradeGateway::new(terminal);

    // One connection attempt at startup. A failure parks the gateway in a
    // permanent failed state; the HTTP surface still serves so operators can
    // see the unhealthy status.
    let state = gateway.connect().await;
    tracing::info!(state = %state, "Gateway client initialized");

    let app_state = AppState {
        gateway: Arc::new(gateway),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    let app = create_router(app_state);

    let http_addr: SocketAddr = format!("{}:{}", config.http_host, config.http_port).parse()?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /buy");
    tracing::info!("  POST /sell");
    tracing::info!("  POST /cancel");
    tracing::info!("  GET  /balance");
    tracing::info!("  GET  /positions");
    tracing::info!("  GET  /orders");
    tracing::info!("  GET  /trades");

    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Trade gateway stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        load_dotenv_from_ancestors();
    }
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(
                    "trade_gateway=info"
                        .parse()
                        .expect("static directive 'trade_gateway=info' is valid"),
                )
                .add_directive(
                    "tower_http=info"
                        .parse()
                        .expect("static directive 'tower_http=info' is valid"),
                ),
        )
        .init();
}

/// Parse configuration from environment variables.
fn parse_config() -> GatewayConfig {
    let http_host =
        std::env::var("GATEWAY_HTTP_HOST").unwrap_or_else(|_| DEFAULT_HTTP_HOST.to_string());

    let http_port: u16 = std::env::var("GATEWAY_HTTP_PORT")
        .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string())
        .parse()
        .unwrap_or(DEFAULT_HTTP_PORT);

    let bridge_endpoint = std::env::var("BRIDGE_ENDPOINT")
        .unwrap_or_else(|_| DEFAULT_BRIDGE_ENDPOINT.to_string());

    let exe_path = std::env::var("TERMINAL_EXE_PATH").unwrap_or_default();

    let bridge_timeout = Duration::from_secs(
        std::env::var("BRIDGE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_BRIDGE_TIMEOUT_SECS.to_string())
            .parse()
            .unwrap_or(DEFAULT_BRIDGE_TIMEOUT_SECS),
    );

    let type_keys = std::env::var("BRIDGE_TYPE_KEYS")
        .map(|v| v.to_lowercase() != "false" && v != "0")
        .unwrap_or(true);

    GatewayConfig {
        http_host,
        http_port,
        bridge_endpoint,
        exe_path,
        bridge_timeout,
        type_keys,
    }
}

/// Log the parsed configuration.
fn log_config(config: &GatewayConfig) {
    tracing::info!(
        http_host = %config.http_host,
        http_port = config.http_port,
        bridge_endpoint = %config.bridge_endpoint,
        exe_path = %config.exe_path,
        bridge_timeout_secs = config.bridge_timeout.as_secs(),
        type_keys = config.type_keys,
        "Configuration loaded"
    );
}

/// Create the terminal bridge adapter.
fn create_terminal(config: &GatewayConfig) -> Result<BridgeTerminal, Box<dyn std::error::Error>> {
    let bridge_config = BridgeConfig::new(config.bridge_endpoint.clone())
        .with_exe_path(config.exe_path.clone())
        .with_type_keys(config.type_keys)
        .with_timeout(config.bridge_timeout);

    let terminal = BridgeTerminal::new(&bridge_config)?;

    tracing::info!(
        endpoint = %config.bridge_endpoint,
        "BridgeTerminal initialized"
    );

    Ok(terminal)
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv_from_ancestors() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed. This is intentional because:
/// - Signal handlers are critical for graceful shutdown
/// - Failure to install handlers means the process cannot respond to termination signals
/// - It is better to fail fast during startup than to have an unresponsive process
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
