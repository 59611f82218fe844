//! Interactive chat session for the `parley` binary.
//!
//! The presentation layer: it renders buffer contents and invocation
//! results and turns user input into core operations. It owns no
//! conversation state of its own.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;

pub use loop_runner::{print_models, run_chat, ChatOptions};
