//! Gateway client.
//!
//! The single authoritative bridge between the HTTP surface and the trading
//! terminal: owns the terminal handle, serializes access to it, and settles
//! every call into a uniform [`Envelope`]. No terminal fault escapes this
//! module as an error; callers always get an envelope back.

use std::fmt;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::application::envelope::Envelope;
use crate::application::ports::{OrderCommand, OrderSide, TerminalError, TerminalPort};
use crate::domain::{CancelRequest, OrderRequest};

/// Failure message for operations attempted without a connected terminal.
const NOT_INITIALIZED: &str = "trading client not initialized";

/// Connection lifecycle of the gateway client.
///
/// The startup connection is attempted exactly once. `Failed` has no
/// outgoing transition; recovery is restart-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection attempt has been made yet.
    Uninitialized,
    /// The startup connection attempt succeeded.
    Connected,
    /// The startup connection attempt failed.
    Failed,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Connected => write!(f, "connected"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Gateway client owning the single terminal connection.
///
/// Generic over [`TerminalPort`] so tests can substitute scripted terminals.
/// The handle sits behind a `tokio::sync::Mutex`; concurrent HTTP requests
/// queue here, one terminal call in flight at a time.
pub struct TradeGateway<T: TerminalPort> {
    terminal: Mutex<T>,
    state: ConnectionState,
}

impl<T: TerminalPort> TradeGateway<T> {
    /// Create a gateway that has not yet attempted to connect.
    #[must_use]
    pub fn new(terminal: T) -> Self {
        Self {
            terminal: Mutex::new(terminal),
            state: ConnectionState::Uninitialized,
        }
    }

    /// Attempt the startup connection.
    ///
    /// Only the first call on an `Uninitialized` gateway performs work; the
    /// outcome is permanent and later calls just return the settled state.
    pub async fn connect(&mut self) -> ConnectionState {
        if self.state != ConnectionState::Uninitialized {
            tracing::warn!(state = %self.state, "Connect attempted more than once");
            return self.state;
        }

        tracing::info!("Connecting to trading terminal");
        match self.terminal.get_mut().connect().await {
            Ok(()) => {
                self.state = ConnectionState::Connected;
                tracing::info!("Trading terminal connected");
            }
            Err(e) => {
                self.state = ConnectionState::Failed;
                tracing::error!(error = %e, "Trading terminal connection failed");
            }
        }
        self.state
    }

    /// Current connection state.
    #[must_use]
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    /// Whether the startup connection succeeded.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self.state, ConnectionState::Connected)
    }

    /// Place a buy order.
    pub async fn buy(&self, order: &OrderRequest) -> Envelope {
        self.place(OrderSide::Buy, order).await
    }

    /// Place a sell order.
    pub async fn sell(&self, order: &OrderRequest) -> Envelope {
        self.place(OrderSide::Sell, order).await
    }

    async fn place(&self, side: OrderSide, order: &OrderRequest) -> Envelope {
        let (operation, failed) = match side {
            OrderSide::Buy => ("buy", "buy order failed"),
            OrderSide::Sell => ("sell", "sell order failed"),
        };
        if !self.is_connected() {
            return self.refused(operation);
        }

        tracing::info!(
            side = %side,
            stock_code = %order.stock_code,
            price = %order.price,
            amount = order.amount,
            "Placing order"
        );

        let command = OrderCommand::new(side, order);
        let result = {
            let mut terminal = self.terminal.lock().await;
            terminal.place_order(&command).await
        };
        Self::settle(operation, "order accepted", failed, result)
    }

    /// Cancel a previously placed order.
    pub async fn cancel(&self, request: &CancelRequest) -> Envelope {
        if !self.is_connected() {
            return self.refused("cancel");
        }

        tracing::info!(order_id = %request.order_id, "Canceling order");

        let result = {
            let mut terminal = self.terminal.lock().await;
            terminal.cancel_order(&request.order_id).await
        };
        Self::settle("cancel", "cancel accepted", "cancel failed", result)
    }

    /// Account funds snapshot.
    pub async fn balance(&self) -> Envelope {
        if !self.is_connected() {
            return self.refused("balance");
        }

        tracing::info!("Fetching account balance");

        let result = {
            let mut terminal = self.terminal.lock().await;
            terminal.balance().await
        };
        Self::settle("balance", "query ok", "query failed", result)
    }

    /// Held positions snapshot.
    pub async fn positions(&self) -> Envelope {
        if !self.is_connected() {
            return self.refused("positions");
        }

        tracing::info!("Fetching positions");

        let result = {
            let mut terminal = self.terminal.lock().await;
            terminal.positions().await
        };
        Self::settle("positions", "query ok", "query failed", result)
    }

    /// Entrusts submitted in the current trading session.
    pub async fn today_orders(&self) -> Envelope {
        if !self.is_connected() {
            return self.refused("today_orders");
        }

        tracing::info!("Fetching today's entrusts");

        let result = {
            let mut terminal = self.terminal.lock().await;
            terminal.today_orders().await
        };
        Self::settle("today_orders", "query ok", "query failed", result)
    }

    /// Executions filled in the current trading session.
    pub async fn today_trades(&self) -> Envelope {
        if !self.is_connected() {
            return self.refused("today_trades");
        }

        tracing::info!("Fetching today's trades");

        let result = {
            let mut terminal = self.terminal.lock().await;
            terminal.today_trades().await
        };
        Self::settle("today_trades", "query ok", "query failed", result)
    }

    /// Refuse an operation because the terminal never connected.
    fn refused(&self, operation: &str) -> Envelope {
        tracing::warn!(
            operation,
            state = %self.state,
            "Operation refused, terminal not connected"
        );
        Envelope::failure(NOT_INITIALIZED)
    }

    /// The one place terminal outcomes become envelopes.
    fn settle(
        operation: &str,
        accepted: &str,
        failed: &str,
        result: Result<Value, TerminalError>,
    ) -> Envelope {
        match result {
            Ok(data) => {
                tracing::info!(operation, "Terminal call complete");
                Envelope::ok(accepted, data)
            }
            Err(e) => {
                tracing::error!(operation, error = %e, "Terminal call failed");
                Envelope::failure(format!("{failed}: {e}"))
            }
        }
    }
}
