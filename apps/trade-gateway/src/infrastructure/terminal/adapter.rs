//! Bridge adapter implementing `TerminalPort`.

use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{OrderCommand, TerminalError, TerminalPort};

use super::api_types::{ConnectSessionRequest, EntrustRequest};
use super::config::BridgeConfig;
use super::error::BridgeError;
use super::http_client::BridgeHttpClient;

/// Terminal automation bridge adapter.
///
/// Implements `TerminalPort` against the local bridge process that owns UI
/// automation of the desktop trading terminal.
#[derive(Debug, Clone)]
pub struct BridgeTerminal {
    client: BridgeHttpClient,
    exe_path: String,
    type_keys: bool,
}

impl BridgeTerminal {
    /// Create a new bridge adapter.
    pub fn new(config: &BridgeConfig) -> Result<Self, BridgeError> {
        let client = BridgeHttpClient::new(config)?;
        Ok(Self {
            client,
            exe_path: config.exe_path.clone(),
            type_keys: config.type_keys,
        })
    }

    /// Convert an order command to the bridge wire format.
    ///
    /// The price crosses the wire as an exact decimal string so binary
    /// floating point never touches it.
    fn to_entrust_request(command: &OrderCommand) -> EntrustRequest {
        EntrustRequest {
            side: command.side.to_string(),
            stock_code: command.stock_code.clone(),
            price: command.price.to_string(),
            amount: command.amount,
        }
    }
}

#[async_trait]
impl TerminalPort for BridgeTerminal {
    async fn connect(&mut self) -> Result<(), TerminalError> {
        let request = ConnectSessionRequest {
            exe_path: self.exe_path.clone(),
            type_keys: self.type_keys,
        };

        tracing::info!(exe_path = %self.exe_path, "Opening terminal session via bridge");

        let _: Value = self
            .client
            .post("/session", &request)
            .await
            .map_err(TerminalError::from)?;

        tracing::info!("Terminal session established");
        Ok(())
    }

    async fn place_order(&mut self, command: &OrderCommand) -> Result<Value, TerminalError> {
        let request = Self::to_entrust_request(command);

        tracing::debug!(
            side = %request.side,
            stock_code = %request.stock_code,
            price = %request.price,
            amount = request.amount,
            "Submitting entrust to bridge"
        );

        self.client
            .post("/entrusts", &request)
            .await
            .map_err(TerminalError::from)
    }

    async fn cancel_order(&mut self, order_id: &str) -> Result<Value, TerminalError> {
        tracing::debug!(order_id = %order_id, "Canceling entrust via bridge");

        self.client
            .delete(&format!("/entrusts/{order_id}"))
            .await
            .map_err(TerminalError::from)
    }

    async fn balance(&mut self) -> Result<Value, TerminalError> {
        self.client
            .get("/account/balance")
            .await
            .map_err(TerminalError::from)
    }

    async fn positions(&mut self) -> Result<Value, TerminalError> {
        self.client
            .get("/account/positions")
            .await
            .map_err(TerminalError::from)
    }

    async fn today_orders(&mut self) -> Result<Value, TerminalError> {
        self.client
            .get("/entrusts/today")
            .await
            .map_err(TerminalError::from)
    }

    async fn today_trades(&mut self) -> Result<Value, TerminalError> {
        self.client
            .get("/trades/today")
            .await
            .map_err(TerminalError::from)
    }
}
