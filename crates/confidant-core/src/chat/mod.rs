//! Chat request handling.
//!
//! - `completion`: sends a user message to the provider behind the fixed persona
//! - `service`: validates, generates, and stores one exchange
//! - `history`: reads stored exchanges back, newest first

pub mod completion;
pub mod history;
pub mod prompt;
pub mod service;
