//! Sound capability boundary.
//!
//! The engine never touches an audio backend; it emits [`SoundCue`] values
//! and the embedding decides what to do with them. A sink is infallible by
//! construction: playback failures stay on the backend's side and can never
//! stall the tick loop.

use tui_lockpick_types::SoundCue;

/// Receives fire-and-forget sound cues.
pub trait SoundSink {
    fn cue(&mut self, cue: SoundCue);
}

/// Records cues in order; used by the test suites.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    cues: Vec<SoundCue>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> &[SoundCue] {
        &self.cues
    }

    pub fn last(&self) -> Option<SoundCue> {
        self.cues.last().copied()
    }

    pub fn count_of(&self, cue: SoundCue) -> usize {
        self.cues.iter().filter(|&&c| c == cue).count()
    }

    pub fn clear(&mut self) {
        self.cues.clear();
    }
}

impl SoundSink for RecordingSink {
    fn cue(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}
