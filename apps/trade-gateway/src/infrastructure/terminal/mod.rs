//! Terminal Automation Bridge Adapter
//!
//! Implementation of `TerminalPort` against the local bridge process that
//! owns UI automation of the desktop trading terminal:
//! - JSON over HTTP with a bounded per-call timeout
//! - No retries (a replayed submit could double-enter an order)
//! - Opaque passthrough of terminal result payloads

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::BridgeTerminal;
pub use config::BridgeConfig;
pub use error::BridgeError;
