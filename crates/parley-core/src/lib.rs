//! Conversation context management for Parley.
//!
//! This crate holds the stateful heart of the chat front-end: the bounded
//! [`context::ContextBuffer`], the [`invoke`] operation that turns a buffer
//! into one completion request, and the [`llm`] provider abstractions the
//! infrastructure layer implements. It depends only on `parley-types` --
//! never on `parley-infra` or any HTTP crate.

pub mod context;
pub mod invoke;
pub mod llm;
pub mod session;

pub use invoke::invoke;
