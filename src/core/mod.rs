//! # Core Composer Logic
//!
//! This module contains Quill's behavioral logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Composer (draft)     │
//!                    │  • layout (height math) │
//!                    │  • SendPulse (anim)     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`composer`]: Draft text and its derived layout height
//! - [`layout`]: Pure sizing functions (line units, chrome)
//! - [`pulse`]: The cosmetic post-send animation progress
//! - [`config`]: Settings file, env vars, and CLI resolution

pub mod composer;
pub mod config;
pub mod layout;
pub mod pulse;
