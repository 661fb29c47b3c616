//! # TUI Shell
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and routes keyboard/mouse events to the composer.
//!
//! This is the only module that knows about ratatui and crossterm; the
//! composer's behavior lives in `core` and could back a different front
//! end unchanged.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (send pulse running): draws every ~80ms so the spring
//!   curve looks continuous. This short poll timeout is the "deferred
//!   re-trigger" for the animation — no sleeping, no background task.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::info;
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::pulse::SendPulse;
use crate::tui::component::EventHandler;
use crate::tui::components::{ComposerBox, ComposerEvent, StatusBar};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::ClickTarget;

/// Transient post-send acknowledgment shown in the status bar.
struct Acknowledgment {
    text: String,
    expires_at: Instant,
}

/// TUI-specific presentation state (everything the shell owns).
pub struct TuiState {
    pub composer_box: ComposerBox,
    pulse: SendPulse,
    ack: Option<Acknowledgment>,
    ack_duration: Duration,
}

impl TuiState {
    pub fn new(placeholder: String, ack_seconds: u64) -> Self {
        Self {
            composer_box: ComposerBox::new(placeholder),
            pulse: SendPulse::new(),
            ack: None,
            ack_duration: Duration::from_secs(ack_seconds),
        }
    }

    /// Build the status bar for the current frame.
    pub fn status_bar(&self) -> StatusBar {
        StatusBar::new(self.ack.as_ref().map(|a| a.text.clone()))
    }

    /// The submitted payload has left the composer; surface the
    /// acknowledgment and kick off the cosmetic pulse. Nothing here can
    /// fail or block — the composer was already reset by `submit`.
    fn acknowledge_send(&mut self, text: String, now: Instant) {
        info!("Message sent ({} bytes)", text.len());
        self.ack = Some(Acknowledgment {
            text,
            expires_at: now + self.ack_duration,
        });
        self.pulse.trigger(now);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Enable the Kitty keyboard protocol unconditionally (allows
        // Shift+Enter detection). Detection via supports_keyboard_enhancement()
        // fails in WSL, but the protocol is harmlessly ignored by terminals
        // that don't support it.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide // Hide cursor on exit
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut tui = TuiState::new(config.placeholder, config.ack_seconds);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();

        // Expire the acknowledgment
        if tui.ack.as_ref().is_some_and(|a| now >= a.expires_at) {
            tui.ack = None;
            needs_redraw = true;
        }

        // Sync ComposerBox props
        tui.composer_box.pulse_progress = tui.pulse.progress(now);

        let animating = tui.pulse.is_active(now);
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while the pulse animates (~12fps),
        // medium while an ack waits to expire, long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else if tui.ack.is_some() {
            Duration::from_millis(200)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}

                TuiEvent::ForceQuit => {
                    should_quit = true;
                }

                // Esc blurs the composer (the keyboard-dismiss analog);
                // a second Esc while blurred quits
                TuiEvent::Escape => {
                    if tui.composer_box.focused {
                        tui.composer_box.focused = false;
                    } else {
                        should_quit = true;
                    }
                }

                TuiEvent::MouseClick(column, row) => {
                    let frame_area = terminal.get_frame().area();
                    let composer_rows = tui
                        .composer_box
                        .calculate_height(frame_area.width, frame_area.height.saturating_sub(1));

                    match ui::hit_test(
                        column,
                        row,
                        frame_area,
                        composer_rows,
                        tui.composer_box.send_button_rect(),
                    ) {
                        ClickTarget::SendButton => {
                            // Inert when the draft is blank — handle_event
                            // emits nothing in that case
                            if let Some(ComposerEvent::Submit(text)) =
                                tui.composer_box.handle_event(&TuiEvent::Submit)
                            {
                                tui.acknowledge_send(text, Instant::now());
                            }
                        }
                        ClickTarget::ComposerSurface => {
                            // Clicking anywhere on the composer focuses the
                            // text field, even if the click missed it
                            tui.composer_box.focused = true;
                        }
                        ClickTarget::Background => {
                            tui.composer_box.focused = false;
                        }
                    }
                }

                ref event => {
                    // Typing while blurred re-focuses the composer first
                    if !tui.composer_box.focused {
                        if matches!(event, TuiEvent::InputChar(_) | TuiEvent::Paste(_)) {
                            tui.composer_box.focused = true;
                        } else {
                            continue;
                        }
                    }

                    if let Some(composer_event) = tui.composer_box.handle_event(event) {
                        match composer_event {
                            ComposerEvent::Submit(text) => {
                                tui.acknowledge_send(text, Instant::now());
                            }
                            ComposerEvent::ContentChanged => {}
                        }
                    }
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledge_send_sets_ack_and_pulse() {
        let mut tui = TuiState::new("Type...".to_string(), 3);
        let now = Instant::now();
        assert!(tui.status_bar().acknowledgment.is_none());

        tui.acknowledge_send("hello".to_string(), now);

        assert_eq!(tui.status_bar().acknowledgment.as_deref(), Some("hello"));
        assert!(tui.pulse.is_active(now));
        // Still visible just before expiry, gone after
        let ack = tui.ack.as_ref().unwrap();
        assert!(ack.expires_at > now + Duration::from_secs(2));
        assert!(ack.expires_at <= now + Duration::from_secs(3));
    }

    #[test]
    fn test_pulse_does_not_outlive_ack() {
        let mut tui = TuiState::new("Type...".to_string(), 3);
        let now = Instant::now();
        tui.acknowledge_send("hi".to_string(), now);

        // The pulse is long over before the ack expires
        assert!(!tui.pulse.is_active(now + Duration::from_secs(1)));
        assert!(tui.ack.is_some());
    }
}
