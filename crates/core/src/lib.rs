//! Core lockpicking engine - pure, deterministic, and testable
//!
//! This crate contains the whole minigame rule set with **zero dependencies**
//! on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: the same seed reproduces a session exactly (zone
//!   placement and breaking-threshold rolls both come from a seeded LCG)
//! - **Testable**: every transition is driven by explicit `tick` and input
//!   calls; there are no wall clocks or timers inside
//! - **Portable**: runs in a terminal, headless in tests, or behind any
//!   other frontend
//!
//! # Module Structure
//!
//! - [`engine`]: per-tick state evolution (turning, danger pressure, breaks)
//! - [`zone`]: green zone sizing, distance, and pointer-to-angle geometry
//! - [`session`]: the owning collaborator (skill, difficulty, pin budget)
//! - [`sound`]: the fire-and-forget sound-cue capability boundary
//! - [`snapshot`]: plain-data view for renderers
//! - [`rng`]: seeded LCG
//!
//! # Game rules
//!
//! A hidden angular "green zone" is rolled once per engine. The player
//! deflects the pick with the pointer; the pick resists rotation the further
//! the pointer is from the zone. Holding the turn key advances the
//! screwdriver; a full 90° turn while the pick is inside the zone opens the
//! lock. Turning outside the zone builds pressure; when pressure crosses a
//! randomized threshold (shrinking with repeated attempts) the pick snaps,
//! costing one pin from the session budget. Run out of pins and the game is
//! over.
//!
//! # Example
//!
//! ```
//! use tui_lockpick_core::{LockSession, LockpickEngine};
//! use tui_lockpick_types::{Difficulty, TICK_MS};
//!
//! let mut session = LockSession::new(40, Difficulty::Medium, 5);
//! let mut engine = LockpickEngine::new(12345, &session.view());
//!
//! engine.set_engaged(true);
//! let _cue = engine.turn_key_down(&session.view());
//!
//! let events = engine.tick(TICK_MS, &session.view());
//! if events.pin_broken {
//!     session.record_broken_pin();
//! }
//! ```

pub mod engine;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod sound;
pub mod zone;

pub use tui_lockpick_types as types;

// Re-export commonly used types for convenience
pub use engine::{breaking_threshold, LockpickEngine, TickEvents};
pub use rng::SimpleRng;
pub use session::{LockSession, SessionView};
pub use snapshot::LockSnapshot;
pub use sound::{RecordingSink, SoundSink};
pub use zone::{base_size_from_skill, pointer_degrees, resisted_pin_angle, GreenZone};
