//! Slash command parsing and help text for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for the
//! conversation, the model catalog, and session statistics.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Clear the terminal screen.
    ClearScreen,
    /// Discard the conversation and start over.
    Reset,
    /// List the models available in the catalog.
    Models,
    /// Switch to another cataloged model.
    Model(String),
    /// Show session statistics.
    Stats,
    /// Show the most recent conversation turns.
    History,
    /// Exit the chat session.
    Exit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts.get(1).map(|s| s.trim().to_string());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/clear" | "/cls" => Some(ChatCommand::ClearScreen),
        "/reset" => Some(ChatCommand::Reset),
        "/models" => Some(ChatCommand::Models),
        "/model" => match arg {
            Some(name) if !name.is_empty() => Some(ChatCommand::Model(name)),
            _ => Some(ChatCommand::Unknown(
                "/model requires a model name".to_string(),
            )),
        },
        "/stats" => Some(ChatCommand::Stats),
        "/history" => Some(ChatCommand::History),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}          {}", style("/help").cyan(), "Show this help message");
    println!("  {}         {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}         {}", style("/reset").cyan(), "Discard the conversation");
    println!("  {}        {}", style("/models").cyan(), "List available models");
    println!("  {}  {}", style("/model <name>").cyan(), "Switch to another model");
    println!("  {}         {}", style("/stats").cyan(), "Show session statistics");
    println!("  {}       {}", style("/history").cyan(), "Show recent turns");
    println!("  {}          {}", style("/exit").cyan(), "End the chat session");
    println!();
    println!("  {}", style("Ctrl+D to exit, Ctrl+C is safe (no message loss)").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
        assert_eq!(parse("/h"), Some(ChatCommand::Help));
        assert_eq!(parse("/?"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_exit() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/quit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/q"), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_reset_and_clear() {
        assert_eq!(parse("/reset"), Some(ChatCommand::Reset));
        assert_eq!(parse("/clear"), Some(ChatCommand::ClearScreen));
    }

    #[test]
    fn test_parse_model_switch() {
        assert_eq!(
            parse("/model openai/gpt-4o"),
            Some(ChatCommand::Model("openai/gpt-4o".to_string()))
        );
        assert!(matches!(parse("/model"), Some(ChatCommand::Unknown(_))));
        assert!(matches!(parse("/model   "), Some(ChatCommand::Unknown(_))));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("hello world"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse("/foo"),
            Some(ChatCommand::Unknown("/foo".to_string()))
        );
    }
}
