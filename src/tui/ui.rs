//! Top-level screen layout: status bar on top, empty dark background in the
//! middle, composer anchored to the bottom edge. The composer area's height
//! is recomputed every frame from the draft, which is what makes the input
//! auto-resize. Mouse clicks are resolved against the same layout.

use crate::tui::TuiState;
use crate::tui::component::Component;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The Send button inside the composer
    SendButton,
    /// The composer surface (anywhere in the box except the button) —
    /// focuses the input, like tapping near a text field
    ComposerSurface,
    /// The background above the composer — dismisses focus
    Background,
}

/// Split the frame into status bar, background filler, and composer areas.
///
/// The composer gets exactly the rows it asks for (clamped to what's left
/// after the status bar); the `Min(0)` filler above is what keeps it glued
/// to the bottom edge.
pub fn compute_layout(frame_area: Rect, composer_rows: u16) -> [Rect; 3] {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(composer_rows)]);
    layout.areas(frame_area)
}

pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState) {
    // Full-screen dark background
    frame.render_widget(
        Block::new().style(Style::new().bg(Color::Black)),
        frame.area(),
    );

    let available = frame.area().height.saturating_sub(1);
    let composer_rows = tui
        .composer_box
        .calculate_height(frame.area().width, available);
    let [status_area, _background, composer_area] =
        compute_layout(frame.area(), composer_rows);

    tui.status_bar().render(frame, status_area);
    tui.composer_box.render(frame, composer_area);
}

/// Resolve a mouse click against the layout of the last drawn frame.
pub fn hit_test(
    column: u16,
    row: u16,
    frame_area: Rect,
    composer_rows: u16,
    send_rect: Option<Rect>,
) -> ClickTarget {
    if let Some(rect) = send_rect
        && rect.contains(ratatui::layout::Position::new(column, row))
    {
        return ClickTarget::SendButton;
    }

    let [_status, _background, composer_area] = compute_layout(frame_area, composer_rows);
    if composer_area.contains(ratatui::layout::Position::new(column, row)) {
        ClickTarget::ComposerSurface
    } else {
        ClickTarget::Background
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{DEFAULT_ACK_SECONDS, DEFAULT_PLACEHOLDER};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn test_tui() -> TuiState {
        TuiState::new(DEFAULT_PLACEHOLDER.to_string(), DEFAULT_ACK_SECONDS)
    }

    #[test]
    fn test_layout_anchors_composer_to_bottom() {
        let frame_area = Rect::new(0, 0, 80, 24);
        let [status, background, composer] = compute_layout(frame_area, 5);
        assert_eq!(status.height, 1);
        assert_eq!(composer.height, 5);
        assert_eq!(composer.y + composer.height, 24);
        assert_eq!(background.height, 24 - 1 - 5);
    }

    #[test]
    fn test_draw_ui_renders_placeholder_and_hints() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = test_tui();

        terminal.draw(|f| draw_ui(f, &mut tui)).unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Quill"));
        assert!(text.contains(DEFAULT_PLACEHOLDER));
        assert!(text.contains("Send"));
    }

    #[test]
    fn test_composer_area_grows_with_draft() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = test_tui();
        tui.composer_box.composer.change_text("a\nb\nc");

        terminal.draw(|f| draw_ui(f, &mut tui)).unwrap();

        // 3 content rows + 4 chrome rows
        let rows = tui.composer_box.calculate_height(80, 23);
        assert_eq!(rows, 7);
    }

    #[test]
    fn test_hit_test_background_vs_composer() {
        let frame_area = Rect::new(0, 0, 80, 24);
        // Composer occupies rows 19..24
        assert_eq!(
            hit_test(10, 5, frame_area, 5, None),
            ClickTarget::Background
        );
        assert_eq!(
            hit_test(10, 20, frame_area, 5, None),
            ClickTarget::ComposerSurface
        );
    }

    #[test]
    fn test_hit_test_send_button_wins() {
        let frame_area = Rect::new(0, 0, 80, 24);
        let send_rect = Rect::new(72, 22, 6, 1);
        assert_eq!(
            hit_test(73, 22, frame_area, 5, Some(send_rect)),
            ClickTarget::SendButton
        );
        // One row above the button is still the composer surface
        assert_eq!(
            hit_test(73, 21, frame_area, 5, Some(send_rect)),
            ClickTarget::ComposerSurface
        );
    }
}
