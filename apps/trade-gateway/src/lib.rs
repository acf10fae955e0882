// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Trade Gateway - Core Library
//!
//! HTTP gateway in front of a desktop securities-trading terminal that is
//! driven through a local UI-automation bridge. Validates inbound requests,
//! serializes all terminal access behind one connection, and settles every
//! outcome into a uniform response envelope.
//!
//! # Architecture (Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Order and cancel instructions plus the exchange-side rules
//!   they must satisfy (6-digit codes, board lots, positive prices)
//!
//! - **Application**: The gateway client and its port
//!   - `gateway`: connection lifecycle and envelope translation
//!   - `ports`: `TerminalPort`, the interface to the trading terminal
//!   - `envelope`: the one result shape every operation settles into
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `terminal`: bridge adapter speaking JSON over HTTP to the automation
//!     process that owns the terminal UI
//!   - `http`: REST controller exposing the gateway operations

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Hexagonal Architecture Layers
// =============================================================================

/// Domain layer - Order instructions and validation rules.
pub mod domain;

/// Application layer - Gateway client and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::{CancelRequest, OrderRequest, ValidationError};

// Application re-exports
pub use application::envelope::Envelope;
pub use application::gateway::{ConnectionState, TradeGateway};
pub use application::ports::{OrderCommand, OrderSide, TerminalError, TerminalPort};

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::terminal::{BridgeConfig, BridgeError, BridgeTerminal};
