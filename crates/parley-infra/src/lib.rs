//! Infrastructure adapters for Parley.
//!
//! Concrete implementations of the ports defined in `parley-core`: the
//! OpenAI-compatible chat provider, the memoizing client factory, the
//! environment configuration loader, and the model catalog file.

pub mod env;
pub mod llm;
pub mod models;
