//! Domain Layer
//!
//! Inbound trade instructions and the exchange-side rules they must satisfy
//! before anything is forwarded to the trading terminal. No external service
//! dependencies.

mod order;

pub use order::{CancelRequest, OrderRequest, ValidationError};
