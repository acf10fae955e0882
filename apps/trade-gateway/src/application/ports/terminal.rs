//! Terminal Port (Driven Port)
//!
//! Interface through which the gateway drives the desktop trading terminal.
//! The concrete implementation lives in the infrastructure layer.

use std::fmt;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::OrderRequest;

/// Side of an order command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy shares.
    Buy,
    /// Sell shares.
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// A validated order instruction handed to the terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCommand {
    /// Buy or sell.
    pub side: OrderSide,
    /// Stock code, 6 digits.
    pub stock_code: String,
    /// Limit price.
    pub price: Decimal,
    /// Share count, a multiple of 100.
    pub amount: u32,
}

impl OrderCommand {
    /// Build a command from a validated order request.
    #[must_use]
    pub fn new(side: OrderSide, order: &OrderRequest) -> Self {
        Self {
            side,
            stock_code: order.stock_code.clone(),
            price: order.price,
            amount: order.amount,
        }
    }
}

/// Errors surfaced by terminal operations.
///
/// The gateway never branches on the variant; everything is rendered into a
/// failure envelope through `Display`. Variants exist so adapters can log
/// and tests can assert on the failure class.
#[derive(Debug, Clone, Error)]
pub enum TerminalError {
    /// The automation session could not be established or was lost.
    #[error("terminal connection error: {message}")]
    Connection {
        /// What went wrong.
        message: String,
    },

    /// The terminal refused the instruction.
    #[error("entrust rejected: {reason}")]
    Rejected {
        /// Terminal-reported reason.
        reason: String,
    },

    /// No live entrust matches the given order id.
    #[error("unknown entrust: {order_id}")]
    UnknownEntrust {
        /// The id that matched nothing.
        order_id: String,
    },

    /// UI automation fault while driving the terminal.
    #[error("automation fault: {message}")]
    Automation {
        /// Fault description from the automation layer.
        message: String,
    },

    /// The call did not complete within the configured bound.
    #[error("terminal call timed out after {timeout_secs}s")]
    Timeout {
        /// The bound that was exceeded.
        timeout_secs: u64,
    },

    /// The automation backend answered with something undecodable.
    #[error("protocol error: {message}")]
    Protocol {
        /// Decode failure description.
        message: String,
    },
}

/// Port for trading-terminal interactions.
///
/// The terminal models a single human operator at one keyboard, so every
/// method takes `&mut self`: exclusive access is structural, and callers
/// serialize however they hold the implementation (the gateway uses a
/// `tokio::sync::Mutex`).
#[async_trait]
pub trait TerminalPort: Send {
    /// Establish the automation session. Called once at process start.
    async fn connect(&mut self) -> Result<(), TerminalError>;

    /// Submit a buy or sell order. Returns the terminal's raw acknowledgment.
    async fn place_order(&mut self, command: &OrderCommand) -> Result<Value, TerminalError>;

    /// Cancel a previously placed order by its backend-issued id.
    async fn cancel_order(&mut self, order_id: &str) -> Result<Value, TerminalError>;

    /// Snapshot of account funds.
    async fn balance(&mut self) -> Result<Value, TerminalError>;

    /// Snapshot of held positions.
    async fn positions(&mut self) -> Result<Value, TerminalError>;

    /// Entrusts submitted in the current trading session.
    async fn today_orders(&mut self) -> Result<Value, TerminalError>;

    /// Executions filled in the current trading session.
    async fn today_trades(&mut self) -> Result<Value, TerminalError>;
}
