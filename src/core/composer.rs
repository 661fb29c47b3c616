//! # Composer State
//!
//! The Draft and its derived layout height, with no UI dependencies.
//! This is the behavioral heart of the app:
//!
//! - `change_text` replaces the draft and recomputes the height.
//! - `submit` yields the trimmed payload (or nothing for a blank draft)
//!   and resets the composer.
//!
//! Trimming only ever applies to the send gate and the emitted payload.
//! The live draft keeps every byte the user typed until submit clears it.

use log::debug;

use crate::core::layout;

/// In-progress message text plus its derived layout height.
pub struct Composer {
    draft: String,
    input_height: u16,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            draft: String::new(),
            input_height: layout::input_height(""),
        }
    }

    /// The current draft, untrimmed.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Text-area height in layout units (see [`layout::LINE_UNIT`]).
    pub fn input_height(&self) -> u16 {
        self.input_height
    }

    /// Full container height in layout units: text area plus chrome.
    pub fn container_height(&self) -> u16 {
        layout::container_height(&self.draft)
    }

    /// Whether the send affordance should be enabled.
    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Replace the draft and recompute the layout height.
    ///
    /// Accepts any string, including empty and newline-only input. The
    /// stored draft is exactly `text` — no normalization.
    pub fn change_text(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.input_height = layout::input_height(&self.draft);
    }

    /// Finalize the draft.
    ///
    /// Returns the trimmed payload and resets the composer to its empty
    /// state. A blank (whitespace-only) draft is a silent no-op, which
    /// makes back-to-back submits emit at most once.
    pub fn submit(&mut self) -> Option<String> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return None;
        }
        let payload = trimmed.to_string();
        debug!("Composer submit: {} bytes", payload.len());
        self.draft.clear();
        self.input_height = layout::input_height("");
        Some(payload)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::layout::LINE_UNIT;

    #[test]
    fn new_composer_is_empty_at_minimum_height() {
        let composer = Composer::new();
        assert_eq!(composer.draft(), "");
        assert_eq!(composer.input_height(), LINE_UNIT);
        assert!(!composer.can_send());
    }

    #[test]
    fn change_text_is_lossless() {
        let mut composer = Composer::new();
        composer.change_text("  spaces kept  \n\ttabs too\t");
        assert_eq!(composer.draft(), "  spaces kept  \n\ttabs too\t");
    }

    #[test]
    fn height_tracks_line_count() {
        let mut composer = Composer::new();
        composer.change_text("line1\nline2\nline3");
        assert_eq!(composer.input_height(), 60);
        assert_eq!(composer.container_height(), 60 + 80);

        composer.change_text("");
        assert_eq!(composer.input_height(), LINE_UNIT);
    }

    #[test]
    fn blank_drafts_cannot_send_and_submit_is_noop() {
        for blank in ["", "   ", "\n\n", " \t \n "] {
            let mut composer = Composer::new();
            composer.change_text(blank);
            assert!(!composer.can_send(), "{blank:?} should not be sendable");
            assert_eq!(composer.submit(), None);
            // No state reset happened: draft is untouched
            assert_eq!(composer.draft(), blank);
        }
    }

    #[test]
    fn submit_trims_payload_and_resets() {
        let mut composer = Composer::new();
        composer.change_text("  hello  ");
        assert_eq!(composer.submit(), Some("hello".to_string()));
        assert_eq!(composer.draft(), "");
        assert_eq!(composer.input_height(), LINE_UNIT);
    }

    #[test]
    fn double_submit_emits_once() {
        let mut composer = Composer::new();
        composer.change_text("hi");
        assert_eq!(composer.submit(), Some("hi".to_string()));
        assert_eq!(composer.submit(), None);
    }

    #[test]
    fn trim_preserves_interior_whitespace_and_newlines() {
        let mut composer = Composer::new();
        composer.change_text("\n  first\nsecond  line \n");
        assert_eq!(composer.submit(), Some("first\nsecond  line".to_string()));
    }

    #[test]
    fn multi_line_submit_scenario() {
        let mut composer = Composer::new();
        composer.change_text("line1\nline2\nline3");
        assert_eq!(composer.input_height(), 60);
        assert!(composer.submit().is_some());
        assert_eq!(composer.input_height(), 20);
        assert_eq!(composer.draft(), "");
    }
}
