//! Lockpick engine - per-tick state evolution for the picking minigame.
//!
//! The engine owns all game state and is pure and deterministic: no I/O, no
//! clocks, no audio. Time enters only through `tick(elapsed_ms, ..)`; all
//! randomness (zone placement, breaking-threshold rolls) comes from a seeded
//! [`SimpleRng`], so a seed reproduces a session exactly.
//!
//! Interaction surface:
//!
//! - [`LockpickEngine::pointer_move`] - pick deflection from a pointer delta
//! - [`LockpickEngine::turn_key_down`] / [`turn_key_up`](LockpickEngine::turn_key_up) -
//!   screwdriver turning toggle
//! - [`LockpickEngine::tick`] - one fixed-timestep update
//!
//! Sound cues are returned to the caller ([`TickEvents`] batches on tick,
//! `Option<SoundCue>` from input handlers) rather than played; route them to a
//! [`SoundSink`](crate::sound::SoundSink) if you have one.
//!
//! # Tick order
//!
//! Within a tick the steps run in a fixed order: reset sync, clock advance,
//! terminal-cracked check, pending break resolution, game-over quiesce,
//! screwdriver advance/relax (cracking the lock on a full turn inside the
//! zone), danger accumulation and break trigger, pressure decay, danger-loop
//! hysteresis, pressure sampling. Each tick observes the fully settled state
//! of the previous one.

use arrayvec::ArrayVec;

use tui_lockpick_types::{
    SoundCue, ATTEMPT_PENALTY, BREAKING_BASE, BREAKING_RANGE, BREAK_RESOLVE_MS, DANGER_LOOP_START,
    DANGER_LOOP_STOP, MAX_ATTEMPTS, PIN_ANGLE_LIMIT_DEG, PRESSURE_BASE_RATE, PRESSURE_DANGER_RATE,
    PRESSURE_DECAY, PRESSURE_SAMPLE_MS, TURN_COMPLETE_DEG, TURN_FLOOR_DEG, TURN_RANGE_DEG,
    TURN_RELEASE_STEP_DEG, TURN_STEP_DEG, VARIANT_CUE_MIN_MS, ZONE_PLACEMENT_DEG,
};

use crate::rng::SimpleRng;
use crate::session::SessionView;
use crate::zone::{pointer_degrees, resisted_pin_angle, GreenZone};

/// Everything a tick can hand back to the owner.
///
/// `pin_broken` must be applied to the session (via
/// [`LockSession::record_broken_pin`](crate::session::LockSession::record_broken_pin))
/// before the next tick reads the view.
#[derive(Debug, Clone, Default)]
pub struct TickEvents {
    pub cues: ArrayVec<SoundCue, 4>,
    pub pin_broken: bool,
}

/// Pressure level at which the current pick snaps.
///
/// The threshold shrinks as attempts accumulate on the same pin, so later
/// attempts break more easily. `roll` is the uniform random component in
/// `[0, BREAKING_RANGE)`.
///
/// ```
/// use tui_lockpick_core::engine::breaking_threshold;
///
/// assert_eq!(breaking_threshold(0, 0.0), 180.0);
/// assert_eq!(breaking_threshold(5, 0.0), 130.0);
/// ```
pub fn breaking_threshold(attempt_count: u32, roll: f32) -> f32 {
    BREAKING_BASE - attempt_count as f32 * ATTEMPT_PENALTY + roll
}

/// Owns all lockpicking state; see the module docs for the update rule.
#[derive(Debug, Clone)]
pub struct LockpickEngine {
    zone: GreenZone,
    rng: SimpleRng,

    pin_angle: f32,
    screwdriver_angle: f32,
    engaged: bool,
    turning: bool,
    cracked: bool,
    breaking: bool,

    /// Internal danger accumulator; published via the 50ms sampler.
    pressure_acc: f32,
    sampled_pressure: f32,
    attempt_count: u32,
    /// Opaque counter bumped on every break; renderers use it to restart
    /// per-pin visual state.
    pin_generation: u32,

    /// Engine-internal clock, advanced only by `tick`.
    clock_ms: u64,
    /// Pending break resolution; cancelled by reset or drop.
    break_deadline_ms: Option<u64>,
    last_sample_ms: u64,
    last_variant_ms: Option<u64>,

    danger_loop_on: bool,
    start_cue_played: bool,
    last_reset_counter: u32,
}

impl LockpickEngine {
    /// Create an engine for a fresh lock session.
    ///
    /// The green zone start is rolled here, once, and stays fixed for the
    /// engine's whole lifetime; session resets do not reroll it.
    pub fn new(seed: u32, session: &SessionView) -> Self {
        let mut rng = SimpleRng::new(seed);
        let span = (ZONE_PLACEMENT_DEG * 2.0) as u32;
        let start = rng.next_range(span) as f32 - ZONE_PLACEMENT_DEG;

        Self {
            zone: GreenZone::new(start, session.skill, session.difficulty),
            rng,
            pin_angle: 0.0,
            screwdriver_angle: 0.0,
            engaged: false,
            turning: false,
            cracked: false,
            breaking: false,
            pressure_acc: 0.0,
            sampled_pressure: 0.0,
            attempt_count: 0,
            pin_generation: 0,
            clock_ms: 0,
            break_deadline_ms: None,
            last_sample_ms: 0,
            last_variant_ms: None,
            danger_loop_on: false,
            start_cue_played: false,
            last_reset_counter: session.reset_counter,
        }
    }

    pub fn pin_angle(&self) -> f32 {
        self.pin_angle
    }

    pub fn screwdriver_angle(&self) -> f32 {
        self.screwdriver_angle
    }

    pub fn engaged(&self) -> bool {
        self.engaged
    }

    /// The pick has to touch the lock before the turn key does anything.
    pub fn set_engaged(&mut self, engaged: bool) {
        self.engaged = engaged;
    }

    pub fn turning(&self) -> bool {
        self.turning
    }

    pub fn set_turning(&mut self, turning: bool) {
        self.turning = turning;
    }

    pub fn cracked(&self) -> bool {
        self.cracked
    }

    pub fn set_cracked(&mut self, cracked: bool) {
        self.cracked = cracked;
    }

    pub fn breaking(&self) -> bool {
        self.breaking
    }

    pub fn attempt_count(&self) -> u32 {
        self.attempt_count
    }

    pub fn pin_generation(&self) -> u32 {
        self.pin_generation
    }

    /// Externally observable pressure (published by the 50ms sampler, not the
    /// per-tick accumulator).
    pub fn pressure(&self) -> f32 {
        self.sampled_pressure
    }

    pub fn green_zone(&self) -> &GreenZone {
        &self.zone
    }

    /// Pick currently inside the success band.
    pub fn is_success(&self) -> bool {
        self.zone.contains(self.pin_angle)
    }

    /// Budget exhausted or lock already open.
    pub fn is_game_over(&self, session: &SessionView) -> bool {
        session.out_of_picks() || self.cracked
    }

    /// Deflect the pick from a pointer delta relative to the dial center.
    ///
    /// Ignored entirely while turning, once the lock is cracked, or when the
    /// pin budget is spent. Returns a pick-scrape cue at most once per
    /// [`VARIANT_CUE_MIN_MS`] of continuous movement.
    pub fn pointer_move(&mut self, dx: f32, dy: f32, session: &SessionView) -> Option<SoundCue> {
        if session.out_of_picks() || self.cracked || self.turning {
            return None;
        }

        let cue = match self.last_variant_ms {
            Some(last) if self.clock_ms.saturating_sub(last) <= VARIANT_CUE_MIN_MS as u64 => None,
            _ => {
                self.last_variant_ms = Some(self.clock_ms);
                Some(SoundCue::PickVariant)
            }
        };

        let raw = pointer_degrees(dx, dy);
        self.pin_angle = resisted_pin_angle(raw, &self.zone);
        cue
    }

    /// Turn key pressed. Starts turning if the pick is engaged; the start cue
    /// fires exactly once per continuous press.
    pub fn turn_key_down(&mut self, session: &SessionView) -> Option<SoundCue> {
        if self.is_game_over(session) {
            return None;
        }

        if self.engaged && !self.turning {
            self.turning = true;
            if !self.start_cue_played {
                self.start_cue_played = true;
                return Some(SoundCue::PickStart);
            }
        }
        None
    }

    /// Turn key released. Clears turning and re-arms the start cue.
    pub fn turn_key_up(&mut self, session: &SessionView) {
        if self.is_game_over(session) {
            return;
        }
        self.turning = false;
        self.start_cue_played = false;
    }

    /// One fixed-timestep update.
    ///
    /// Call once per frame with the elapsed milliseconds (the per-tick step
    /// constants assume [`TICK_MS`](tui_lockpick_types::TICK_MS)).
    pub fn tick(&mut self, elapsed_ms: u32, session: &SessionView) -> TickEvents {
        let mut events = TickEvents::default();

        self.sync_reset(session);
        self.clock_ms += elapsed_ms as u64;

        // Terminal: once cracked and quiesced, nothing mutates until a reset.
        if self.cracked {
            return events;
        }

        // Deferred break resolution, scheduled BREAK_RESOLVE_MS after the
        // snap so the breaking visual/audio can play out.
        if let Some(deadline) = self.break_deadline_ms {
            if self.clock_ms >= deadline {
                self.resolve_break(&mut events);
            }
        }

        if session.out_of_picks() {
            self.quiesce(&mut events);
            return events;
        }

        if self.turning {
            let strength = self.zone.turn_strength(self.pin_angle);
            let adjusted = strength * strength;
            let max_angle = TURN_FLOOR_DEG + adjusted * TURN_RANGE_DEG;

            self.screwdriver_angle = (self.screwdriver_angle + TURN_STEP_DEG).min(max_angle);

            // Sole success path: a full turn completes only while the pick
            // sits inside the zone.
            if self.screwdriver_angle >= TURN_COMPLETE_DEG && self.is_success() {
                self.cracked = true;
                events.cues.push(SoundCue::Unlock);
                self.quiesce(&mut events);
                return events;
            }
        } else {
            self.screwdriver_angle = (self.screwdriver_angle - TURN_RELEASE_STEP_DEG).max(0.0);
        }

        if self.turning && !self.is_success() {
            let danger_ratio =
                (self.zone.distance(self.pin_angle) / PIN_ANGLE_LIMIT_DEG).min(1.0);
            self.pressure_acc += PRESSURE_BASE_RATE + PRESSURE_DANGER_RATE * danger_ratio;

            let roll = self.rng.next_f32() * BREAKING_RANGE;
            let threshold = breaking_threshold(self.attempt_count, roll);
            self.attempt_count = (self.attempt_count + 1).min(MAX_ATTEMPTS);

            if self.pressure_acc >= threshold && !self.breaking {
                self.breaking = true;
                self.break_deadline_ms = Some(self.clock_ms + BREAK_RESOLVE_MS as u64);
                events.cues.push(SoundCue::PickBreak);
                // Skip decay and hysteresis on the snap tick.
                return events;
            }
        }

        if !self.turning || self.is_success() {
            self.pressure_acc = (self.pressure_acc - PRESSURE_DECAY).max(0.0);
        }

        if self.pressure_acc >= DANGER_LOOP_START && !self.danger_loop_on {
            self.danger_loop_on = true;
            events.cues.push(SoundCue::DangerLoopStart);
        }
        if (!self.turning || self.pressure_acc < DANGER_LOOP_STOP) && self.danger_loop_on {
            self.danger_loop_on = false;
            events.cues.push(SoundCue::DangerLoopStop);
        }

        // Lower-frequency sampler decouples the observable pressure from the
        // tick rate.
        if self.clock_ms - self.last_sample_ms >= PRESSURE_SAMPLE_MS as u64 {
            self.sampled_pressure = self.pressure_acc;
            self.last_sample_ms = self.clock_ms;
        }

        events
    }

    /// Stop turning, silence the danger loop, zero pressure.
    ///
    /// Runs when the budget is spent and on the tick the lock cracks, so a
    /// looping cue can never outlive the game.
    fn quiesce(&mut self, events: &mut TickEvents) {
        self.turning = false;
        if self.danger_loop_on {
            self.danger_loop_on = false;
            events.cues.push(SoundCue::DangerLoopStop);
        }
        self.pressure_acc = 0.0;
        self.sampled_pressure = 0.0;
    }

    fn resolve_break(&mut self, events: &mut TickEvents) {
        events.pin_broken = true;
        self.attempt_count = 0;
        self.pin_angle = 0.0;
        self.screwdriver_angle = 0.0;
        self.pressure_acc = 0.0;
        if self.danger_loop_on {
            self.danger_loop_on = false;
            events.cues.push(SoundCue::DangerLoopStop);
        }
        self.pin_generation = self.pin_generation.wrapping_add(1);
        self.breaking = false;
        self.break_deadline_ms = None;
    }

    /// Reinitialize when the session's reset counter changes.
    ///
    /// Cancels a pending break. The green zone is deliberately NOT rerolled;
    /// placement is fixed once per engine lifetime.
    fn sync_reset(&mut self, session: &SessionView) {
        if session.reset_counter == self.last_reset_counter {
            return;
        }
        self.last_reset_counter = session.reset_counter;
        self.pin_angle = 0.0;
        self.screwdriver_angle = 0.0;
        self.cracked = false;
        self.turning = false;
        self.engaged = false;
        self.breaking = false;
        self.break_deadline_ms = None;
        self.pressure_acc = 0.0;
        self.sampled_pressure = 0.0;
        self.attempt_count = 0;
        self.start_cue_played = false;
        self.last_variant_ms = None;
    }

    #[cfg(test)]
    pub(crate) fn pressure_accumulator(&self) -> f32 {
        self.pressure_acc
    }

    #[cfg(test)]
    pub(crate) fn force_pin_angle(&mut self, angle: f32) {
        self.pin_angle = angle.clamp(-PIN_ANGLE_LIMIT_DEG, PIN_ANGLE_LIMIT_DEG);
    }
}
