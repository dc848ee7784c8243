//! Shared types module - constants and plain data enums
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, making them usable
//! in any context (core engine, input mapping, terminal rendering).
//!
//! # Angle conventions
//!
//! All angles are in degrees. `0°` points straight up; positive angles rotate
//! clockwise. The pick deflection (`pin angle`) lives in `[-90, 90]`, the
//! turning progress (`screwdriver angle`) in `[0, 90]`. Reaching a full 90°
//! turn while the pick sits inside the green zone opens the lock.
//!
//! # Timing constants
//!
//! Timing values are in milliseconds; per-tick step constants assume the
//! fixed timestep below.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BREAK_RESOLVE_MS` | 500 | Delay between a pick snapping and state reset |
//! | `PRESSURE_SAMPLE_MS` | 50 | Period of the observable-pressure sampler |
//! | `VARIANT_CUE_MIN_MS` | 300 | Minimum gap between random pick-scrape cues |
//!
//! # Zone sizing
//!
//! The success band ("green zone") width is derived from the player's skill
//! and the lock difficulty:
//!
//! - base width = `floor(8 + 22 * sqrt(min(skill, 80) / 80))` degrees
//! - final width = base width × difficulty modifier
//!
//! | Difficulty | Modifier | Width at skill 80 |
//! |------------|----------|-------------------|
//! | Easy | 0.8 | 24° |
//! | Medium | 0.5 | 15° |
//! | Hard | 0.2 | 6° |
//!
//! # Examples
//!
//! ```
//! use tui_lockpick_types::{Difficulty, SoundCue, MIN_ZONE_DEG, MAX_ZONE_DEG};
//!
//! let diff = Difficulty::from_str("medium").unwrap();
//! assert_eq!(diff, Difficulty::Medium);
//! assert_eq!(diff.modifier(), 0.5);
//!
//! assert_eq!(MIN_ZONE_DEG, 8.0);
//! assert_eq!(MAX_ZONE_DEG, 30.0);
//!
//! assert_eq!(SoundCue::Unlock.as_str(), "unlock");
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Maximum pick deflection from neutral, in degrees
pub const PIN_ANGLE_LIMIT_DEG: f32 = 90.0;

/// Screwdriver angle at which the turn is complete
pub const TURN_COMPLETE_DEG: f32 = 90.0;

/// Screwdriver advance per tick while the turn key is held, degrees
pub const TURN_STEP_DEG: f32 = 1.5;

/// Screwdriver relax-back per tick while the turn key is released, degrees
pub const TURN_RELEASE_STEP_DEG: f32 = 2.0;

/// Minimum reachable screwdriver angle regardless of pick placement
pub const TURN_FLOOR_DEG: f32 = 5.0;

/// Range above [`TURN_FLOOR_DEG`] unlocked by a well-placed pick
pub const TURN_RANGE_DEG: f32 = 85.0;

/// Smallest possible green zone base width, degrees (skill 0)
pub const MIN_ZONE_DEG: f32 = 8.0;

/// Largest possible green zone base width, degrees (skill at cap)
pub const MAX_ZONE_DEG: f32 = 30.0;

/// Skill value at which zone sizing saturates
pub const MAX_SKILL: u32 = 80;

/// Green zone start is rolled uniformly from `[-ZONE_PLACEMENT_DEG, ZONE_PLACEMENT_DEG)`
pub const ZONE_PLACEMENT_DEG: f32 = 45.0;

/// Pressure gained per tick while turning, independent of pick placement
pub const PRESSURE_BASE_RATE: f32 = 0.5;

/// Additional pressure per tick at maximum distance from the zone
pub const PRESSURE_DANGER_RATE: f32 = 1.5;

/// Pressure shed per tick while not turning (or while inside the zone)
pub const PRESSURE_DECAY: f32 = 0.8;

/// Base breaking threshold before attempt scaling and the random roll
pub const BREAKING_BASE: f32 = 180.0;

/// Width of the uniform random component added to the breaking threshold
pub const BREAKING_RANGE: f32 = 50.0;

/// Threshold reduction per accumulated attempt (later attempts break easier)
pub const ATTEMPT_PENALTY: f32 = 10.0;

/// Attempt counter cap
pub const MAX_ATTEMPTS: u32 = 10;

/// Delay between a pick snapping and the break resolving (state reset)
pub const BREAK_RESOLVE_MS: u32 = 500;

/// Period of the sampler that publishes the internal pressure accumulator
pub const PRESSURE_SAMPLE_MS: u32 = 50;

/// Minimum gap between random pick-scrape sound cues during pointer movement
pub const VARIANT_CUE_MIN_MS: u32 = 300;

/// Pressure level at which the looping danger sound starts
pub const DANGER_LOOP_START: f32 = 70.0;

/// Pressure level below which the looping danger sound stops
///
/// Deliberately lower than [`DANGER_LOOP_START`] so the loop does not chatter
/// at a single boundary.
pub const DANGER_LOOP_STOP: f32 = 50.0;

/// Lock difficulty rating
///
/// Scales the green zone width via [`Difficulty::modifier`]: harder locks
/// shrink the band in which turning can succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Zone width multiplier for this difficulty (strictly decreasing)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_lockpick_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.modifier(), 0.8);
    /// assert_eq!(Difficulty::Medium.modifier(), 0.5);
    /// assert_eq!(Difficulty::Hard.modifier(), 0.2);
    /// ```
    pub fn modifier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Medium => 0.5,
            Difficulty::Hard => 0.2,
        }
    }

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_lockpick_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Sound cue signals emitted by the engine
///
/// Each cue is a fire-and-forget trigger; no return value is expected and a
/// failed playback must never reach the engine. The two loop cues carry the
/// start/stop hysteresis described on [`DANGER_LOOP_START`] /
/// [`DANGER_LOOP_STOP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Turn key engaged (once per continuous press)
    PickStart,
    /// The pick snapped (break in progress)
    PickBreak,
    /// The lock opened
    Unlock,
    /// Random pick-scrape variant during pointer movement
    PickVariant,
    /// Looping danger sound starts
    DangerLoopStart,
    /// Looping danger sound stops
    DangerLoopStop,
}

impl SoundCue {
    /// Convert to lowercase string (for status displays)
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::PickStart => "pick-start",
            SoundCue::PickBreak => "pick-break",
            SoundCue::Unlock => "unlock",
            SoundCue::PickVariant => "pick-variant",
            SoundCue::DangerLoopStart => "danger-loop-start",
            SoundCue::DangerLoopStop => "danger-loop-stop",
        }
    }
}
