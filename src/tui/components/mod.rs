//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `StatusBar`: Top bar showing key hints or the sent acknowledgment
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `ComposerBox`: Auto-resizing text input with toolbar and Send button
//!
//! ## Design Philosophy
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering logic, event handling, and tests.
//! Components receive external data as "props" (struct fields set by the
//! shell), not by reaching into global state — dependencies stay explicit
//! and components stay testable.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── status_bar.rs    (Top hint/acknowledgment bar)
//! └── composer_box/    (Auto-resizing input with Send button)
//! ```

pub mod composer_box;
pub mod status_bar;

pub use composer_box::{ComposerBox, ComposerEvent};
pub use status_bar::StatusBar;
