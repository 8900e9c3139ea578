//! Chat orchestration and port definitions for Confidant.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements, plus the services that drive a chat
//! request through them. It depends only on `confidant-types` -- never on
//! `confidant-infra` or any database/IO crate.

pub mod chat;
pub mod llm;
pub mod repository;

#[cfg(test)]
pub(crate) mod testing;
