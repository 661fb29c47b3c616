use ratatui::layout::Rect;
use ratatui::Frame;

/// Something the shell can draw into a region of the screen.
///
/// Both quill components work the same way: the shell pushes current data
/// into their public "prop" fields each frame (focus, pulse progress, the
/// acknowledgment text), then hands them a `Rect` to draw in. Anything a
/// component remembers between frames — the draft, the cursor, a cached
/// width — is its own private state.
///
/// `render` takes `&mut self` because drawing is allowed to update
/// presentation caches: the composer box records its content width and the
/// Send button's position here so later cursor movement and mouse
/// hit-testing agree with what was actually drawn.
pub trait Component {
    /// Draw into `area`. May update internal presentation caches.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal input.
///
/// Returns a higher-level event when the input meant something to this
/// component (for the composer box: the draft changed, or a submit produced
/// a payload), or `None` when it didn't.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Translate one `TuiEvent` into this component's own event, if any.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
