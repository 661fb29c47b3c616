//! # ComposerBox Component
//!
//! The auto-resizing message input anchored to the bottom of the screen.
//!
//! ## Responsibilities
//!
//! - Capture text input into the core [`Composer`]
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Handle submission (Enter) and emit the trimmed payload
//! - Render the icon toolbar and the Send button
//! - Grow with the draft's line count; scroll internally when the
//!   terminal runs out of rows
//!
//! ## State Management
//!
//! The draft and its layout height live in the core `Composer`. Cursor
//! position and scroll state are encapsulated in `CursorState`. Focus and
//! the pulse progress are props pushed in by the shell each frame.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::composer::Composer;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;
use text_wrap::{
    CHROME_ROWS, CONTENT_OFFSET_X, CONTENT_OFFSET_Y, HORIZONTAL_OVERHEAD, inner_width,
    next_char_boundary, prev_char_boundary, wrap_line_count, wrap_options,
};

/// Inert affordances on the toolbar row (attach, rocket, sparkle, flask).
const TOOLBAR_ICONS: &str = "📎  🚀  ✨  🔬";
const SEND_LABEL: &str = " Send ";

/// High-level events emitted by the ComposerBox
#[derive(Debug, Clone, PartialEq)]
pub enum ComposerEvent {
    /// User submitted the draft; payload is the trimmed text
    Submit(String),
    /// Draft content changed (parent schedules a redraw)
    ContentChanged,
}

/// Auto-resizing text input with toolbar and Send button.
///
/// # Props
///
/// - `focused`: whether keystrokes currently edit the draft (from shell)
/// - `pulse_progress`: send animation progress in [0,1] (from shell)
///
/// # State
///
/// - `composer`: core draft + layout height
/// - `cursor`: cursor position, scroll offset, and cached width
pub struct ComposerBox {
    /// Core draft state (Internal State)
    pub composer: Composer,
    /// Whether the composer has keyboard focus (Prop)
    pub focused: bool,
    /// Send animation progress in [0,1] (Prop)
    pub pulse_progress: f32,
    placeholder: String,
    cursor: CursorState,
    /// Send button position from the last render, for mouse hit testing
    last_send_rect: Option<Rect>,
}

impl ComposerBox {
    pub fn new(placeholder: String) -> Self {
        Self {
            composer: Composer::new(),
            focused: true,
            pulse_progress: 0.0,
            placeholder,
            cursor: CursorState::new(),
            last_send_rect: None,
        }
    }

    /// Total rows the composer wants for the current draft, clamped so it
    /// never exceeds `max_rows`. Soft-wrapped lines grow the displayed box
    /// even though the core layout height counts only hard newlines.
    pub fn calculate_height(&self, content_width: u16, max_rows: u16) -> u16 {
        self.visible_lines(content_width, max_rows) + CHROME_ROWS
    }

    /// Content rows visible after clamping to the space the shell offers.
    fn visible_lines(&self, content_width: u16, max_rows: u16) -> u16 {
        let width = inner_width(content_width);
        let content_lines = wrap_line_count(self.composer.draft(), width);
        let max_content = max_rows.saturating_sub(CHROME_ROWS).max(1);
        content_lines.min(max_content)
    }

    /// The Send button's screen position from the last render, if any.
    pub fn send_button_rect(&self) -> Option<Rect> {
        self.last_send_rect
    }

    /// Get the visible text based on current scroll offset.
    /// When scroll_offset > 0, only returns the visible lines.
    fn get_visible_text(&self, content_width: u16, visible_lines: u16) -> String {
        if self.cursor.scroll_offset == 0 {
            return self.composer.draft().to_string();
        }

        let width = inner_width(content_width);
        if width == 0 {
            return String::new();
        }

        let lines = textwrap::wrap(self.composer.draft(), wrap_options(width));

        let start = self.cursor.scroll_offset as usize;
        let end = (start + visible_lines as usize).min(lines.len());

        lines[start..end].join("\n")
    }

    /// Replace the draft through the core, keeping the cursor valid.
    fn set_draft(&mut self, draft: String) {
        self.composer.change_text(draft);
        self.cursor.pos = self.cursor.pos.min(self.composer.draft().len());
    }

    fn insert_at_cursor(&mut self, text: &str) {
        let mut draft = self.composer.draft().to_string();
        draft.insert_str(self.cursor.pos, text);
        self.cursor.pos += text.len();
        self.set_draft(draft);
    }

    fn border_style(&self) -> Style {
        if self.pulse_progress > 0.0 {
            // Brief highlight while the send pulse runs
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else if self.focused {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }
}

impl Component for ComposerBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Scale-down analog: pull the box in one column per side mid-pulse
        let area = if self.pulse_progress >= 0.5 {
            Rect {
                x: area.x + 1,
                width: area.width.saturating_sub(2),
                ..area
            }
        } else {
            area
        };

        if area.height <= CHROME_ROWS || area.width <= HORIZONTAL_OVERHEAD {
            return;
        }
        let visible = area.height - CHROME_ROWS;

        self.cursor.last_content_width = area.width;
        self.cursor
            .update_scroll_offset(self.composer.draft(), area.width, visible);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());
        frame.render_widget(block, area);

        // Text area: top of the box, inside border + padding
        let text_area = Rect {
            x: area.x + CONTENT_OFFSET_X,
            y: area.y + CONTENT_OFFSET_Y,
            width: area.width - HORIZONTAL_OVERHEAD,
            height: visible,
        };

        if self.composer.draft().is_empty() {
            let placeholder = Paragraph::new(self.placeholder.as_str())
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
            frame.render_widget(placeholder, text_area);
        } else {
            let text = Paragraph::new(self.get_visible_text(area.width, visible))
                .style(Style::default().fg(Color::White));
            frame.render_widget(text, text_area);
        }

        // Toolbar row: icons on the left, Send button on the right
        let toolbar_y = area.y + area.height - 2;
        let send_width = SEND_LABEL.width() as u16;
        let send_rect = Rect {
            x: (area.x + area.width).saturating_sub(CONTENT_OFFSET_X + send_width),
            y: toolbar_y,
            width: send_width,
            height: 1,
        };

        let icons_area = Rect {
            x: area.x + CONTENT_OFFSET_X,
            y: toolbar_y,
            width: send_rect.x.saturating_sub(area.x + CONTENT_OFFSET_X + 1),
            height: 1,
        };
        let icons = Paragraph::new(TOOLBAR_ICONS).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(icons, icons_area);

        let send_style = if self.composer.can_send() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(SEND_LABEL, send_style)),
            send_rect,
        );
        self.last_send_rect = Some(send_rect);

        if self.focused {
            let (cursor_x, cursor_y) = self.cursor.screen_pos(self.composer.draft(), area);
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

impl EventHandler for ComposerBox {
    type Event = ComposerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut draft = self.composer.draft().to_string();
                draft.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                self.set_draft(draft);
                Some(ComposerEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.insert_at_cursor(text);
                Some(ComposerEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor.pos > 0 {
                    let prev = prev_char_boundary(self.composer.draft(), self.cursor.pos);
                    let mut draft = self.composer.draft().to_string();
                    draft.drain(prev..self.cursor.pos);
                    self.cursor.pos = prev;
                    self.set_draft(draft);
                    Some(ComposerEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::Delete => {
                if self.cursor.pos < self.composer.draft().len() {
                    let next = next_char_boundary(self.composer.draft(), self.cursor.pos);
                    let mut draft = self.composer.draft().to_string();
                    draft.drain(self.cursor.pos..next);
                    self.set_draft(draft);
                    Some(ComposerEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor.pos > 0 {
                    self.cursor.pos = prev_char_boundary(self.composer.draft(), self.cursor.pos);
                    Some(ComposerEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor.pos < self.composer.draft().len() {
                    self.cursor.pos = next_char_boundary(self.composer.draft(), self.cursor.pos);
                    Some(ComposerEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => {
                let line_start = self.composer.draft()[..self.cursor.pos]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor.pos != line_start).then(|| {
                    self.cursor.pos = line_start;
                    ComposerEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.composer.draft()[self.cursor.pos..]
                    .find('\n')
                    .map(|i| self.cursor.pos + i)
                    .unwrap_or(self.composer.draft().len());
                (self.cursor.pos != line_end).then(|| {
                    self.cursor.pos = line_end;
                    ComposerEvent::ContentChanged
                })
            }
            TuiEvent::CursorUp => {
                let width = self.cursor.last_content_width;
                let draft = self.composer.draft().to_string();
                self.cursor
                    .move_vertically(&draft, -1, width)
                    .then_some(ComposerEvent::ContentChanged)
            }
            TuiEvent::CursorDown => {
                let width = self.cursor.last_content_width;
                let draft = self.composer.draft().to_string();
                self.cursor
                    .move_vertically(&draft, 1, width)
                    .then_some(ComposerEvent::ContentChanged)
            }
            TuiEvent::Submit => self.composer.submit().map(|payload| {
                self.cursor.reset();
                ComposerEvent::Submit(payload)
            }),
            _ => None,
        }
    }
}
