//! Held-key tracking for the turn key.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! while the key is physically held, the terminal keeps delivering repeat
//! events which refresh the timer; once they stop, the key auto-releases.

use tui_lockpick_types::TICK_MS;

// The timeout must outlast the terminal's initial auto-repeat delay
// (commonly ~500ms), otherwise a genuinely held key would flap between
// the first press and the first repeat.
const DEFAULT_TURN_KEY_TIMEOUT_MS: u32 = 600;

/// Tracks the held/released state of the single designated turn key.
#[derive(Debug, Clone)]
pub struct TurnKeyHandler {
    held: bool,
    last_key_time: std::time::Instant,
    release_timeout_ms: u32,
}

impl TurnKeyHandler {
    pub fn new() -> Self {
        Self {
            held: false,
            last_key_time: std::time::Instant::now(),
            release_timeout_ms: DEFAULT_TURN_KEY_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    /// Feed a press or terminal auto-repeat of the turn key.
    ///
    /// Returns `true` on the press edge (the key was not held before).
    /// Repeats refresh the auto-release timer and return `false`.
    pub fn handle_press(&mut self) -> bool {
        self.last_key_time = std::time::Instant::now();
        if self.held {
            false
        } else {
            self.held = true;
            true
        }
    }

    /// Feed an explicit key-release event (terminals that report them).
    ///
    /// Returns `true` on the release edge.
    pub fn handle_release(&mut self) -> bool {
        if self.held {
            self.held = false;
            true
        } else {
            false
        }
    }

    /// Check the auto-release timeout; call once per tick.
    ///
    /// Returns `true` if the key auto-released this call.
    pub fn update(&mut self) -> bool {
        if !self.held {
            return false;
        }
        let since_last = self.last_key_time.elapsed().as_millis() as u32;
        if since_last > self.release_timeout_ms {
            self.held = false;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.held = false;
        self.last_key_time = std::time::Instant::now();
    }
}

impl Default for TurnKeyHandler {
    fn default() -> Self {
        Self::new()
    }
}
