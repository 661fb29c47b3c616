//! Cursor position tracking and navigation for the ComposerBox.
//!
//! `CursorState` owns the cursor byte offset, scroll offset, and cached
//! width. All navigation methods accept `draft: &str` explicitly — the text
//! data is owned by the core `Composer`, keeping the dependency visible.

use super::text_wrap::{
    CONTENT_OFFSET_X, CONTENT_OFFSET_Y, inner_width, wrap_line_count, wrap_options,
};
use ratatui::layout::Rect;

/// Cursor and scroll state, separated from the draft text.
pub(super) struct CursorState {
    /// Cursor position as byte offset in the draft (0..=draft.len())
    pub pos: usize,
    /// Line offset for internal scrolling (0 when content fits in viewport)
    pub scroll_offset: u16,
    /// Cached content width from last render (used for cursor movement)
    pub last_content_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 80;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    /// Reset cursor to start (used after Submit clears the draft).
    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Move cursor vertically (up or down) while trying to maintain column position.
    ///
    /// Returns `true` if cursor moved, `false` if already at boundary.
    pub fn move_vertically(&mut self, draft: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || draft.is_empty() {
            return false;
        }

        let lines = textwrap::wrap(draft, wrap_options(width));
        if lines.is_empty() {
            return false;
        }

        // Calculate byte length of a wrapped line including its trailing newline (if present)
        let line_byte_span = |line: &str, offset: usize| -> usize {
            let has_newline = offset + line.len() < draft.len()
                && draft.as_bytes()[offset + line.len()] == b'\n';
            line.len() + usize::from(has_newline)
        };

        // Find which wrapped line the cursor is on and its column offset
        let mut byte_offset = 0;
        let mut current_line_idx = 0;
        let mut column_in_line = 0;

        for (idx, line) in lines.iter().enumerate() {
            if byte_offset + line.len() >= self.pos {
                current_line_idx = idx;
                column_in_line = self.pos - byte_offset;
                break;
            }
            byte_offset += line_byte_span(line, byte_offset);
        }

        // Calculate target line index, returning false if at boundary
        let target_line_idx = if direction < 0 {
            if current_line_idx == 0 {
                return false;
            }
            current_line_idx - 1
        } else {
            if current_line_idx >= lines.len() - 1 {
                return false;
            }
            current_line_idx + 1
        };

        // Walk forward to find byte offset of the target line
        let mut target_line_start = 0;
        for line in lines.iter().take(target_line_idx) {
            target_line_start += line_byte_span(line, target_line_start);
        }

        // Place cursor at the same column, clamped to the target line's length
        // and snapped back onto a char boundary (the column is a byte offset,
        // and the target line may hold multibyte characters)
        let target_line = &lines[target_line_idx];
        let mut target_column = column_in_line.min(target_line.len());
        while !target_line.is_char_boundary(target_column) {
            target_column -= 1;
        }
        self.pos = target_line_start + target_column;

        true
    }

    /// Calculate which wrapped line (0-based) the cursor is on.
    pub fn calculate_line(&self, draft: &str, content_width: u16) -> u16 {
        let width = inner_width(content_width);
        if width == 0 {
            return 0;
        }

        let text_before_cursor = &draft[..self.pos];
        let lines = textwrap::wrap(text_before_cursor, wrap_options(width));
        let mut cursor_line = lines.len().saturating_sub(1) as u16;

        // If cursor is right after a newline that textwrap didn't represent, add one
        if self.pos > 0
            && draft.as_bytes()[self.pos - 1] == b'\n'
            && !lines.last().is_some_and(|l| l.is_empty())
        {
            cursor_line += 1;
        }

        cursor_line
    }

    /// Update scroll offset to keep the cursor within the given viewport height.
    pub fn update_scroll_offset(&mut self, draft: &str, content_width: u16, visible_lines: u16) {
        let width = inner_width(content_width);
        let total_lines = wrap_line_count(draft, width);

        if total_lines <= visible_lines {
            self.scroll_offset = 0;
            return;
        }

        let cursor_line = self.calculate_line(draft, content_width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + visible_lines {
            self.scroll_offset = cursor_line.saturating_sub(visible_lines.saturating_sub(1));
        }
    }

    /// Calculate screen position for cursor based on wrapped text layout.
    /// Returns (column, row) in screen coordinates.
    pub fn screen_pos(&self, draft: &str, area: Rect) -> (u16, u16) {
        let width = inner_width(area.width);
        if width == 0 {
            return (area.x + CONTENT_OFFSET_X, area.y + CONTENT_OFFSET_Y);
        }

        let options = wrap_options(width);
        let text_before_cursor = &draft[..self.pos];

        let cursor_line = self.calculate_line(draft, area.width);

        // Calculate cursor column by counting chars from last newline (preserves spaces!).
        // textwrap trims trailing whitespace, so we can't use wrapped line length.
        let last_newline = text_before_cursor
            .rfind('\n')
            .map(|pos| pos + 1)
            .unwrap_or(0);
        let logical_line_to_cursor = &text_before_cursor[last_newline..];

        // Wrap just the current logical line to find which wrapped segment we're on
        let logical_line_wrapped = textwrap::wrap(logical_line_to_cursor, options);

        let cursor_col = if logical_line_wrapped.is_empty() {
            0
        } else {
            let chars_in_prev_segments: usize = logical_line_wrapped
                .iter()
                .take(logical_line_wrapped.len() - 1)
                .map(|seg| seg.chars().count())
                .sum();

            let total_chars = logical_line_to_cursor.chars().count();
            (total_chars - chars_in_prev_segments) as u16
        };

        let visible_line = cursor_line.saturating_sub(self.scroll_offset);

        let screen_col = area.x + CONTENT_OFFSET_X + cursor_col;
        let screen_row = area.y + CONTENT_OFFSET_Y + visible_line;

        (screen_col, screen_row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cursor_starts_at_origin() {
        let cursor = CursorState::new();
        assert_eq!(cursor.pos, 0);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn reset_clears_position_and_scroll() {
        let mut cursor = CursorState::new();
        cursor.pos = 42;
        cursor.scroll_offset = 3;
        cursor.reset();
        assert_eq!(cursor.pos, 0);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn move_vertically_between_logical_lines() {
        let mut cursor = CursorState::new();
        let draft = "first\nsecond";
        cursor.pos = 2; // inside "first"

        assert!(cursor.move_vertically(draft, 1, 80));
        // Same column on the second line: "first\n" is 6 bytes, +2
        assert_eq!(cursor.pos, 8);

        assert!(cursor.move_vertically(draft, -1, 80));
        assert_eq!(cursor.pos, 2);
    }

    #[test]
    fn move_vertically_snaps_to_char_boundary() {
        let mut cursor = CursorState::new();
        let draft = "abcd\né x";
        cursor.pos = 1; // column 1 of "abcd"

        assert!(cursor.move_vertically(draft, 1, 80));

        // Byte 1 of "é x" is inside 'é'; the cursor lands at its start
        assert_eq!(cursor.pos, 5);
        assert!(draft.is_char_boundary(cursor.pos));
    }

    #[test]
    fn move_vertically_out_of_multibyte_line() {
        let mut cursor = CursorState::new();
        let draft = "é x\nabcd";
        cursor.pos = 2; // just after 'é'

        assert!(cursor.move_vertically(draft, 1, 80));
        assert_eq!(cursor.pos, 7); // byte column 2 of "abcd"
        assert!(draft.is_char_boundary(cursor.pos));
    }

    #[test]
    fn move_vertically_stops_at_boundaries() {
        let mut cursor = CursorState::new();
        let draft = "only line";
        cursor.pos = 3;
        assert!(!cursor.move_vertically(draft, -1, 80));
        assert!(!cursor.move_vertically(draft, 1, 80));
        assert_eq!(cursor.pos, 3);
    }

    #[test]
    fn calculate_line_counts_newlines() {
        let mut cursor = CursorState::new();
        let draft = "a\nb\nc";
        cursor.pos = 0;
        assert_eq!(cursor.calculate_line(draft, 80), 0);
        cursor.pos = 2; // start of "b"
        assert_eq!(cursor.calculate_line(draft, 80), 1);
        cursor.pos = 4; // start of "c"
        assert_eq!(cursor.calculate_line(draft, 80), 2);
    }

    #[test]
    fn scroll_offset_follows_cursor() {
        let mut cursor = CursorState::new();
        let draft = "1\n2\n3\n4\n5\n6";

        // Cursor at the end, only 3 lines visible -> scrolled down
        cursor.pos = draft.len();
        cursor.update_scroll_offset(draft, 80, 3);
        assert_eq!(cursor.scroll_offset, 3);

        // Cursor back at the top -> scrolled back up
        cursor.pos = 0;
        cursor.update_scroll_offset(draft, 80, 3);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn scroll_offset_zero_when_content_fits() {
        let mut cursor = CursorState::new();
        let draft = "a\nb";
        cursor.pos = draft.len();
        cursor.scroll_offset = 2;
        cursor.update_scroll_offset(draft, 80, 5);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn screen_pos_accounts_for_border_and_padding() {
        let cursor = CursorState::new();
        let area = Rect::new(0, 10, 40, 6);
        let (col, row) = cursor.screen_pos("", area);
        assert_eq!(col, CONTENT_OFFSET_X);
        assert_eq!(row, 10 + CONTENT_OFFSET_Y);
    }

    #[test]
    fn screen_pos_tracks_column_with_trailing_spaces() {
        let mut cursor = CursorState::new();
        let draft = "hi  ";
        cursor.pos = draft.len();
        let area = Rect::new(0, 0, 40, 6);
        let (col, row) = cursor.screen_pos(draft, area);
        // Trailing spaces still move the cursor right
        assert_eq!(col, CONTENT_OFFSET_X + 4);
        assert_eq!(row, CONTENT_OFFSET_Y);
    }
}
