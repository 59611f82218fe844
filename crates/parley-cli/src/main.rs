//! Parley terminal chat entry point.
//!
//! Binary name: `parley`
//!
//! Loads the model catalog, resolves the session model, then either lists
//! the catalog or starts the interactive chat loop.

mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use parley_infra::models::{ModelCatalog, DEFAULT_MODELS_FILE};

use chat::ChatOptions;

/// System prompt used when none is given on the command line.
const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful AI assistant. \
    Use the conversation history to provide contextual responses.";

#[derive(Parser)]
#[command(name = "parley", version, about = "Multi-model chat over an OpenAI-compatible endpoint")]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the model catalog file
    #[arg(long, default_value = DEFAULT_MODELS_FILE, global = true)]
    models_file: PathBuf,

    /// Model to chat with; must appear in the catalog
    #[arg(long, env = "MODEL_NAME")]
    model: Option<String>,

    /// System prompt for the session
    #[arg(long, default_value = DEFAULT_SYSTEM_PROMPT)]
    system: String,

    /// Maximum conversation turns sent per request
    #[arg(long, default_value_t = parley_core::context::DEFAULT_CONTEXT_LIMIT)]
    context_limit: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the models available in the catalog
    Models,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,parley_core=debug,parley_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let catalog = ModelCatalog::load(&cli.models_file)?;

    match cli.command {
        Some(Commands::Models) => {
            let active = catalog.default_model(cli.model.as_deref()).unwrap_or_default();
            chat::print_models(&catalog, active);
            Ok(())
        }
        None => {
            chat::run_chat(
                &catalog,
                ChatOptions {
                    model: cli.model,
                    system_prompt: cli.system,
                    context_limit: cli.context_limit,
                },
            )
            .await
        }
    }
}
