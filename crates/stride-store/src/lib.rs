//! stride-store
//!
//! The goal store: single source of truth for the active goal, its tasks and
//! its check-ins. State values are immutable; every mutation produces a new
//! [`state::GoalState`] and leaves the previous one untouched.

pub mod action;
pub mod error;
pub mod state;
pub mod store;
