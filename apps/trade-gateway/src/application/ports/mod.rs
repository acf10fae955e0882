//! Application Ports (Driven)
//!
//! Interfaces the application core uses to reach external systems.
//! Implementations live in the infrastructure layer.

mod terminal;

pub use terminal::{OrderCommand, OrderSide, TerminalError, TerminalPort};
