//! Bridge API request and response types.
//!
//! These types map directly to the automation bridge's REST format. Result
//! payloads are deliberately untyped (`serde_json::Value` at the call sites):
//! the bridge scrapes them off terminal screens and their columns shift with
//! terminal updates.

use serde::{Deserialize, Serialize};

// ============================================================================
// Session Types
// ============================================================================

/// Session establishment request.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectSessionRequest {
    /// Terminal executable path. Empty lets the bridge attach to an already
    /// running instance.
    pub exe_path: String,
    /// Drive order-entry fields by keystrokes instead of clipboard paste.
    pub type_keys: bool,
}

// ============================================================================
// Entrust Types
// ============================================================================

/// Order entrust request.
#[derive(Debug, Clone, Serialize)]
pub struct EntrustRequest {
    /// Order side, `"buy"` or `"sell"`.
    pub side: String,
    /// Stock code, 6 digits.
    pub stock_code: String,
    /// Limit price as an exact decimal string.
    pub price: String,
    /// Share count.
    pub amount: u32,
}

// ============================================================================
// Error Types
// ============================================================================

/// Error body returned by the bridge on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeErrorResponse {
    /// Bridge error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable message.
    pub message: String,
}
