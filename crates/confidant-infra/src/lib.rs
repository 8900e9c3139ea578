//! Infrastructure layer for Confidant.
//!
//! Contains implementations of the traits defined in `confidant-core`:
//! SQLite exchange storage and the OpenAI-compatible completion provider,
//! plus the loader for `confidant.toml`.

pub mod config;
pub mod llm;
pub mod sqlite;
