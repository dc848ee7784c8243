//! TUI Lockpick (workspace facade crate).
//!
//! This package keeps a single `tui_lockpick::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_lockpick_core as core;
pub use tui_lockpick_input as input;
pub use tui_lockpick_term as term;
pub use tui_lockpick_types as types;
