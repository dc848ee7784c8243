//! Terminal presentation for the lockpick game.
//!
//! Three layers:
//!
//! | Module | Role |
//! |--------|------|
//! | [`fb`] | styled character framebuffer, no I/O |
//! | [`lock_view`] | snapshot → framebuffer, plus dial layout math |
//! | [`renderer`] | framebuffer → terminal via crossterm |
//!
//! The framebuffer and view are pure and fully testable; only
//! [`renderer::TerminalRenderer`] touches the terminal.
//!
//! # Example
//!
//! ```
//! use tui_lockpick_core::{LockSession, LockSnapshot, LockpickEngine};
//! use tui_lockpick_term::{LockView, Viewport};
//! use tui_lockpick_types::Difficulty;
//!
//! let session = LockSession::new(40, Difficulty::Medium, 5);
//! let engine = LockpickEngine::new(1, &session.view());
//!
//! let mut snap = LockSnapshot::default();
//! LockSnapshot::capture(&engine, &session.view(), &mut snap);
//!
//! let view = LockView::default();
//! let fb = view.render(&snap, None, Viewport::new(80, 24));
//! assert_eq!(fb.width(), 80);
//! ```

pub mod fb;
pub mod lock_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use lock_view::{DialLayout, LockView, Viewport};
pub use renderer::TerminalRenderer;
