//! Renderer-facing snapshot of the engine and session.
//!
//! Plain copyable data so view layers render without touching the engine.

use tui_lockpick_types::Difficulty;

use crate::engine::LockpickEngine;
use crate::session::SessionView;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LockSnapshot {
    pub pin_angle: f32,
    pub screwdriver_angle: f32,
    pub engaged: bool,
    pub turning: bool,
    pub cracked: bool,
    pub breaking: bool,
    pub is_success: bool,
    pub game_over: bool,
    pub pressure: f32,
    pub pin_generation: u32,
    pub zone_start: f32,
    pub zone_end: f32,
    pub zone_size: f32,
    pub skill: u32,
    pub difficulty: Difficulty,
    pub broken_pins: u32,
    pub pin_budget: u32,
}

impl Default for LockSnapshot {
    fn default() -> Self {
        Self {
            pin_angle: 0.0,
            screwdriver_angle: 0.0,
            engaged: false,
            turning: false,
            cracked: false,
            breaking: false,
            is_success: false,
            game_over: false,
            pressure: 0.0,
            pin_generation: 0,
            zone_start: 0.0,
            zone_end: 0.0,
            zone_size: 0.0,
            skill: 0,
            difficulty: Difficulty::Easy,
            broken_pins: 0,
            pin_budget: 0,
        }
    }
}

impl LockSnapshot {
    /// Fill from the engine and session without allocating.
    pub fn capture(engine: &LockpickEngine, session: &SessionView, out: &mut LockSnapshot) {
        out.pin_angle = engine.pin_angle();
        out.screwdriver_angle = engine.screwdriver_angle();
        out.engaged = engine.engaged();
        out.turning = engine.turning();
        out.cracked = engine.cracked();
        out.breaking = engine.breaking();
        out.is_success = engine.is_success();
        out.game_over = engine.is_game_over(session);
        out.pressure = engine.pressure();
        out.pin_generation = engine.pin_generation();
        out.zone_start = engine.green_zone().start();
        out.zone_end = engine.green_zone().end();
        out.zone_size = engine.green_zone().size();
        out.skill = session.skill;
        out.difficulty = session.difficulty;
        out.broken_pins = session.broken_pins;
        out.pin_budget = session.pin_budget;
    }
}
