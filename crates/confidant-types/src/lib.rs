//! Shared domain types for Confidant.
//!
//! This crate contains the types passed between the service layers:
//! persisted chat exchanges, LLM request/response shapes, configuration,
//! and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod exchange;
pub mod llm;
