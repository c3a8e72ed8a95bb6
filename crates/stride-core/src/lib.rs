//! stride-core
//!
//! Pure domain types for goal tracking: the goal, its tasks, and the daily
//! check-ins recorded against it. No I/O; this is the shared vocabulary of
//! the Stride system.

pub mod error;
pub mod models;
