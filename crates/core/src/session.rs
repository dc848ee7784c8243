//! Lock session - the collaborator that owns skill, difficulty and counters.
//!
//! The engine only ever sees a [`SessionView`] snapshot; mutation goes
//! through the session itself, applied by the owner between ticks. This keeps
//! the engine free of stale reads: every tick and input handler receives the
//! fully settled counters of the previous step.

use tui_lockpick_types::Difficulty;

/// Read-only snapshot of the session, passed into every engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    pub skill: u32,
    pub difficulty: Difficulty,
    pub broken_pins: u32,
    pub pin_budget: u32,
    pub reset_counter: u32,
}

impl SessionView {
    /// Budget exhausted: no pins left to pick with.
    pub fn out_of_picks(&self) -> bool {
        self.broken_pins >= self.pin_budget
    }
}

/// Owns the counters the engine reads but never writes.
#[derive(Debug, Clone)]
pub struct LockSession {
    skill: u32,
    difficulty: Difficulty,
    broken_pins: u32,
    pin_budget: u32,
    reset_counter: u32,
}

impl LockSession {
    pub fn new(skill: u32, difficulty: Difficulty, pin_budget: u32) -> Self {
        Self {
            skill,
            difficulty,
            broken_pins: 0,
            pin_budget,
            reset_counter: 0,
        }
    }

    pub fn skill(&self) -> u32 {
        self.skill
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn broken_pins(&self) -> u32 {
        self.broken_pins
    }

    pub fn pin_budget(&self) -> u32 {
        self.pin_budget
    }

    pub fn pins_left(&self) -> u32 {
        self.pin_budget.saturating_sub(self.broken_pins)
    }

    pub fn reset_counter(&self) -> u32 {
        self.reset_counter
    }

    pub fn out_of_picks(&self) -> bool {
        self.broken_pins >= self.pin_budget
    }

    /// Apply the engine's "pin broken" event.
    ///
    /// Must be applied before the next tick reads the view.
    pub fn record_broken_pin(&mut self) {
        self.broken_pins += 1;
    }

    /// Request a fresh attempt; the engine reinitializes when it observes the
    /// counter change.
    pub fn request_reset(&mut self) {
        self.reset_counter = self.reset_counter.wrapping_add(1);
    }

    /// Start the lock over: restore the pin budget and request a reset.
    ///
    /// This is the "retry" surface for a spent session; a plain
    /// [`request_reset`](Self::request_reset) keeps the broken-pin count.
    pub fn retry(&mut self) {
        self.broken_pins = 0;
        self.request_reset();
    }

    /// Snapshot for the engine.
    pub fn view(&self) -> SessionView {
        SessionView {
            skill: self.skill,
            difficulty: self.difficulty,
            broken_pins: self.broken_pins,
            pin_budget: self.pin_budget,
            reset_counter: self.reset_counter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_pins_drain_the_budget() {
        let mut session = LockSession::new(40, Difficulty::Medium, 3);
        assert_eq!(session.pins_left(), 3);
        assert!(!session.out_of_picks());

        for _ in 0..3 {
            session.record_broken_pin();
        }
        assert_eq!(session.pins_left(), 0);
        assert!(session.out_of_picks());
        assert!(session.view().out_of_picks());
    }

    #[test]
    fn reset_requests_bump_the_counter() {
        let mut session = LockSession::new(40, Difficulty::Medium, 3);
        let before = session.view().reset_counter;
        session.request_reset();
        assert_eq!(session.view().reset_counter, before.wrapping_add(1));
    }

    #[test]
    fn retry_restores_the_budget_and_requests_a_reset() {
        let mut session = LockSession::new(40, Difficulty::Medium, 3);
        for _ in 0..3 {
            session.record_broken_pin();
        }
        assert!(session.out_of_picks());

        let counter = session.reset_counter();
        session.retry();
        assert!(!session.out_of_picks());
        assert_eq!(session.pins_left(), 3);
        assert_eq!(session.reset_counter(), counter.wrapping_add(1));

        // A plain reset keeps the broken-pin count.
        session.record_broken_pin();
        session.request_reset();
        assert_eq!(session.broken_pins(), 1);
    }
}
