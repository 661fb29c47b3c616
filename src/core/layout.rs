//! # Layout Math
//!
//! Pure sizing functions for the composer. The layout model works in
//! abstract units: each draft line occupies [`LINE_UNIT`] units, and the
//! composer chrome (borders, padding row, toolbar row) adds a fixed
//! [`CHROME_UNITS`] on top. One terminal row maps to [`LINE_UNIT`] units,
//! so the chrome comes out to exactly 4 rows.
//!
//! Nothing here looks at the screen. Clamping to the physical terminal is
//! the renderer's problem; the values computed here grow without bound as
//! the draft grows.

/// Layout units per draft line. One terminal row = 20 units.
pub const LINE_UNIT: u16 = 20;

/// Fixed chrome around the text area: top border, padding row, toolbar row,
/// bottom border (4 rows worth of units).
pub const CHROME_UNITS: u16 = 80;

/// Number of `\n`-separated segments in `text`. The empty string counts as
/// one line, and a trailing newline opens a new (empty) line.
pub fn line_count(text: &str) -> u16 {
    text.split('\n').count() as u16
}

/// Height of the text area in layout units: `max(1, lines) * LINE_UNIT`.
pub fn input_height(text: &str) -> u16 {
    line_count(text).max(1) * LINE_UNIT
}

/// Height of the whole composer container: text area plus fixed chrome.
pub fn container_height(text: &str) -> u16 {
    input_height(text) + CHROME_UNITS
}

/// Convert layout units to terminal rows.
pub const fn units_to_rows(units: u16) -> u16 {
    units / LINE_UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_one_line() {
        assert_eq!(line_count(""), 1);
        assert_eq!(input_height(""), LINE_UNIT);
    }

    #[test]
    fn newline_only_strings_count_segments() {
        // "\n" splits into two empty segments
        assert_eq!(line_count("\n"), 2);
        assert_eq!(line_count("\n\n"), 3);
    }

    #[test]
    fn three_lines_is_sixty_units() {
        assert_eq!(input_height("line1\nline2\nline3"), 60);
    }

    #[test]
    fn container_adds_chrome() {
        assert_eq!(container_height(""), LINE_UNIT + CHROME_UNITS);
        assert_eq!(container_height("a\nb"), 2 * LINE_UNIT + CHROME_UNITS);
    }

    #[test]
    fn trailing_newline_opens_a_line() {
        assert_eq!(input_height("hello\n"), 2 * LINE_UNIT);
    }

    #[test]
    fn units_to_rows_divides_by_line_unit() {
        assert_eq!(units_to_rows(LINE_UNIT), 1);
        assert_eq!(units_to_rows(container_height("")), 5);
        assert_eq!(units_to_rows(container_height("a\nb\nc")), 7);
    }
}
