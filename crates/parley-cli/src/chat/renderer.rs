//! Terminal markdown rendering for assistant replies.
//!
//! Replies arrive as markdown; `ChatRenderer` formats them for the
//! terminal through one configured `termimad` skin.

use termimad::MadSkin;

/// Terminal markdown renderer.
pub struct ChatRenderer {
    skin: MadSkin,
}

impl ChatRenderer {
    /// Create a renderer with the default dark skin.
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);
        Self { skin }
    }

    /// Render a complete markdown reply.
    pub fn render(&self, markdown: &str) -> String {
        format!("{}", self.skin.term_text(markdown))
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}
