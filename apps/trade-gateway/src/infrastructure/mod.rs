//! Infrastructure Layer
//!
//! Adapters on both sides of the application core, following hexagonal
//! architecture:
//!
//! - **Driven Adapters (Outbound)**: Implement ports for external systems
//!   - `terminal/`: UI-automation bridge adapter for the desktop terminal
//!
//! - **Driver Adapters (Inbound)**: Expose the application to the world
//!   - `http/`: REST API controller

pub mod http;
pub mod terminal;
