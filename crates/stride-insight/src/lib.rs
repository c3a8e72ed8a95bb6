//! stride-insight
//!
//! AI-generated coaching text for a goal: prompt construction, the
//! chat-completion call to an OpenAI-compatible endpoint, and structured
//! parsing of task suggestions.

pub mod client;
pub mod config;
pub mod error;
pub mod fanout;
pub mod insights;
pub mod prompts;
pub mod suggestions;
pub mod transport;
