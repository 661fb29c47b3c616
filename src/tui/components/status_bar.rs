//! # StatusBar Component
//!
//! One-line bar at the top of the screen. Normally shows the key hints;
//! right after a send it shows the transient acknowledgment — the terminal
//! stand-in for a "Message sent" alert.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! StatusBar is purely presentational — it receives all data as props and
//! has no internal state. The shell owns the acknowledgment text and its
//! expiry; this component just renders whatever it's handed.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Top status bar showing key hints or the post-send acknowledgment.
///
/// # Props
///
/// - `acknowledgment`: the sent-message text while the ack is visible
pub struct StatusBar {
    /// Trimmed payload of the last send, while the ack is on screen
    pub acknowledgment: Option<String>,
}

impl StatusBar {
    pub fn new(acknowledgment: Option<String>) -> Self {
        Self { acknowledgment }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = match &self.acknowledgment {
            Some(text) => Span::styled(
                format!("Message sent: \"{}\"", text),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                "Quill — Enter to send · Shift+Enter for newline · Esc to dismiss",
                Style::default().fg(Color::DarkGray),
            ),
        };
        frame.render_widget(span, area);
    }
}
