//! stride-app library root.
//!
//! The session controller that ties the goal store to the insight client,
//! plus process setup shared by the diagnostics binary.

pub mod error;
pub mod panel;
pub mod session;
pub mod telemetry;
