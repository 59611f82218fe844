//! Main chat loop orchestration.
//!
//! Coordinates the conversation lifecycle: catalog and configuration
//! resolution, client construction, welcome banner, and the input loop
//! that drives the append -> truncate -> invoke sequence per user
//! message.

use std::sync::Arc;

use console::style;
use tracing::warn;

use parley_core::context::ContextBuffer;
use parley_core::invoke;
use parley_core::llm::box_provider::BoxChatProvider;
use parley_core::session::SessionStats;
use parley_infra::env;
use parley_infra::llm::ClientFactory;
use parley_infra::models::ModelCatalog;
use parley_types::llm::{LlmError, MessageRole};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Number of turns shown by `/history`.
const HISTORY_PREVIEW_TURNS: usize = 5;
/// Preview length per turn in `/history`.
const HISTORY_PREVIEW_CHARS: usize = 50;

/// Session options resolved from the command line.
pub struct ChatOptions {
    /// Requested model; the catalog default applies when absent.
    pub model: Option<String>,
    /// System prompt for the session.
    pub system_prompt: String,
    /// Maximum conversation turns sent per request.
    pub context_limit: usize,
}

/// Run the interactive chat loop.
pub async fn run_chat(catalog: &ModelCatalog, opts: ChatOptions) -> anyhow::Result<()> {
    let model = catalog
        .default_model(opts.model.as_deref())
        .ok_or_else(|| anyhow::anyhow!("model catalog is empty"))?
        .to_string();
    if let Some(requested) = opts.model.as_deref() {
        if requested != model {
            eprintln!(
                "  {} model '{requested}' is not in the catalog, using '{model}'",
                style("!").yellow().bold()
            );
        }
    }

    // Fatal configuration problems surface here, before any turn.
    let mut config = env::load_config(&model)?;
    let factory = ClientFactory::new();
    let mut provider: Arc<BoxChatProvider> = factory.get_client(&config)?;

    let mut buffer = ContextBuffer::new(Some(opts.system_prompt));
    let mut stats = SessionStats::new();
    let renderer = ChatRenderer::new();

    print_welcome_banner(
        &config.model,
        &config.base_url,
        &stats.id().to_string(),
        catalog.models().len(),
    );

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!(
                    "\n  {}",
                    style("Press Ctrl+D to exit, or keep chatting.").dim()
                );
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::ClearScreen => chat_input.clear(),
                        ChatCommand::Reset => {
                            buffer = buffer.reset();
                            stats = SessionStats::new();
                            println!("\n  {}", style("Conversation cleared.").dim());
                        }
                        ChatCommand::Models => print_models(catalog, &config.model),
                        ChatCommand::Model(name) => {
                            if name == config.model {
                                println!(
                                    "\n  {} already chatting with {name}",
                                    style("*").dim()
                                );
                            } else if catalog.contains(&name) {
                                config = config.with_model(name.as_str());
                                provider = factory.get_client(&config)?;
                                println!(
                                    "\n  {} switched to model: {name}",
                                    style("*").green()
                                );
                            } else {
                                println!(
                                    "\n  {} unknown model '{name}'; see /models",
                                    style("!").yellow().bold()
                                );
                            }
                        }
                        ChatCommand::Stats => print_stats(&buffer, &stats),
                        ChatCommand::History => print_history(&buffer),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::Unknown(cmd) => println!(
                            "\n  {} unknown command: {cmd} (try /help)",
                            style("!").yellow().bold()
                        ),
                    }
                    continue;
                }

                // A conversation turn: append, bound the context, invoke.
                buffer = match buffer.append(MessageRole::User, text.as_str()) {
                    Ok(next) => next,
                    Err(e) => {
                        println!("\n  {} {e}", style("!").yellow().bold());
                        continue;
                    }
                };
                buffer = buffer.truncate(opts.context_limit);

                let spinner = indicatif::ProgressBar::new_spinner();
                spinner.set_style(
                    indicatif::ProgressStyle::default_spinner()
                        .template("{spinner:.cyan} {msg}")
                        .unwrap(),
                );
                spinner.set_message(format!("thinking with {}...", config.model));
                spinner.enable_steady_tick(std::time::Duration::from_millis(80));

                let result = invoke(&provider, &buffer).await;
                spinner.finish_and_clear();

                match result {
                    Ok(reply) => {
                        buffer = match buffer
                            .append(MessageRole::Assistant, reply.message.content.as_str())
                        {
                            Ok(next) => next,
                            Err(e) => {
                                warn!(error = %e, "discarding unusable assistant reply");
                                continue;
                            }
                        };
                        stats.record_reply(&reply.model);

                        let rendered = renderer.render(&reply.message.content);
                        println!("  {}", rendered.trim());
                        println!("  {} {}", style("|").dim(), style(&reply.model).dim());
                        println!();
                    }
                    Err(e) => print_invocation_error(&e),
                }
            }
        }
    }

    Ok(())
}

/// Print the model catalog, marking the active model.
pub fn print_models(catalog: &ModelCatalog, active: &str) {
    println!();
    println!("  {}", style("Available models:").bold());
    for (i, model) in catalog.models().iter().enumerate() {
        if model == active {
            println!(
                "  {}. {} {}",
                i + 1,
                style(model).cyan().bold(),
                style("(active)").dim()
            );
        } else {
            println!("  {}. {model}", i + 1);
        }
    }
    println!();
}

/// Print the sidebar-style session statistics.
fn print_stats(buffer: &ContextBuffer, stats: &SessionStats) {
    println!();
    println!("  {}", style("Session statistics:").bold());
    println!(
        "  {} {}",
        style("Messages in context:").dim(),
        buffer.size()
    );
    println!("  {} {}", style("Completed turns:").dim(), stats.turn_count());
    let counts = stats.replies_by_model();
    if !counts.is_empty() {
        println!("  {}", style("Replies by model:").dim());
        for (model, count) in counts {
            println!("    {model}: {count}");
        }
    }
    println!();
}

/// Print a short preview of the most recent turns.
fn print_history(buffer: &ContextBuffer) {
    if buffer.is_empty() {
        println!("\n  {}", style("No conversation yet.").dim());
        return;
    }
    println!("\n  {}", style("Recent context:").bold());
    let start = buffer.size().saturating_sub(HISTORY_PREVIEW_TURNS);
    for turn in &buffer.turns()[start..] {
        let label = match turn.role {
            MessageRole::User => "You",
            MessageRole::Assistant => "Assistant",
            MessageRole::System => "System",
        };
        let preview: String = turn.content.chars().take(HISTORY_PREVIEW_CHARS).collect();
        let ellipsis = if turn.content.chars().count() > HISTORY_PREVIEW_CHARS {
            "..."
        } else {
            ""
        };
        println!("  {} {preview}{ellipsis}", style(format!("{label}:")).cyan());
    }
    println!();
}

/// Display a per-turn failure without touching the conversation.
fn print_invocation_error(err: &LlmError) {
    println!("\n  {} {err}", style("!").red().bold());
    let hint = match err {
        LlmError::AuthenticationFailed => Some("check that your API key is valid"),
        LlmError::Transport(_) => Some("check that the base URL is reachable"),
        LlmError::RateLimited { .. } => Some("wait a moment before sending again"),
        LlmError::Validation(_) | LlmError::Protocol(_) | LlmError::Provider { .. } => None,
    };
    if let Some(hint) = hint {
        println!("  {}", style(hint).dim());
    }
    println!(
        "  {}",
        style("Conversation history is kept; you can retry.").dim()
    );
    println!();
}
