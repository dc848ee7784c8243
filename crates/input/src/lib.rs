//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events onto the engine's interaction surface
//! (turn key down/up, pointer movement, reset) and provides a
//! [`TurnKeyHandler`] that sustains a held key in terminals that never emit
//! key-release events.

pub mod handler;
pub mod map;

pub use tui_lockpick_types as types;

pub use handler::TurnKeyHandler;
pub use map::{is_reset_key, is_turn_key, pointer_position, should_quit};
