//! Collaborator ports owned by the session
//!
//! The core judges taps and reports moments through these traits; the
//! platform side decides what a moment sounds or looks like. Every call is
//! fire-and-forget: implementations must not reach back into the session.

/// Judgment moments, reported in the order they happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// A tap matched the next number in the sequence
    Correct,
    /// A tap broke the sequence
    Wrong,
    /// A level was cleared, fully or by partial credit
    LevelComplete,
    /// The run ended, by failure or by finishing the last level
    GameComplete,
}

/// Best-score persistence
pub trait ScoreStore {
    /// Stored best score; 0 when nothing is stored or it cannot be read
    fn load_best(&self) -> u32;
    fn save_best(&mut self, best: u32);
}

/// Sound (or any other) feedback for judgment moments
pub trait SignalSink {
    fn play(&mut self, signal: Signal);
}

/// Presentation-side progress display (background artwork, progress strip)
pub trait ProgressSink {
    /// A new level is current; `total_correct` counts the whole run
    fn level_advance(&mut self, level_index: u32, total_correct: u32);

    /// The run went back to level 1
    fn session_reset(&mut self) {}
}
