//! Application Layer
//!
//! The gateway client, the envelope every operation settles into, and the
//! port through which the terminal is driven.

pub mod envelope;
pub mod gateway;
pub mod ports;

pub use envelope::Envelope;
pub use gateway::{ConnectionState, TradeGateway};
