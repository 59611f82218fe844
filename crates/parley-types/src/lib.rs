//! Shared domain types for Parley.
//!
//! This crate contains the types used across the Parley chat front-end:
//! conversation messages, completion request/response shapes, the chat
//! configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde, secrecy, thiserror.

pub mod config;
pub mod error;
pub mod llm;
