//! Welcome banner display for chat sessions.
//!
//! Prints a styled banner when a chat session starts, showing the active
//! model, endpoint, catalog size, and session information.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(model: &str, base_url: &str, session_id: &str, model_count: usize) {
    println!();
    println!("  {}", style("Parley").cyan().bold());
    println!(
        "  {}",
        style("Multi-model chat over an OpenAI-compatible endpoint").dim()
    );
    println!();
    println!("  {}  {}", style("Model:").bold(), style(model).dim());
    println!("  {}  {}", style("Endpoint:").bold(), style(base_url).dim());
    println!(
        "  {}  {}",
        style("Catalog:").bold(),
        style(format!("{model_count} models available")).dim()
    );
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
