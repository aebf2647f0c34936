//! Session state machine
//!
//! Owns the current level, the phase, the scores and the seeded RNG, and
//! judges every tap. Collaborators (score store, signal sink, progress
//! sink) are injected at construction; all calls out are fire-and-forget.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::hooks::{ProgressSink, ScoreStore, Signal, SignalSink};
use super::level::generate_level;
use super::state::{Level, Phase};
use crate::consts::*;

/// One play session, from level 1 to game over and around again
pub struct Session {
    seed: u64,
    /// 1-based index of the current level; runs ahead of `level.index`
    /// between a solve and the following `next_level`
    level_index: u32,
    phase: Phase,
    /// Memorization countdown in milliseconds
    timer_ms: f32,
    score: u32,
    best_score: u32,
    /// Correct taps across the whole run
    total_correct: u32,
    level: Level,
    rng: Pcg32,
    store: Box<dyn ScoreStore>,
    signals: Box<dyn SignalSink>,
    progress: Option<Box<dyn ProgressSink>>,
}

impl Session {
    /// Create a session on level 1, loading the best score from the store
    pub fn new(
        seed: u64,
        store: Box<dyn ScoreStore>,
        signals: Box<dyn SignalSink>,
        progress: Option<Box<dyn ProgressSink>>,
    ) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = generate_level(&mut rng, 1);
        let best_score = store.load_best();

        Self {
            seed,
            level_index: 1,
            phase: Phase::Memorize,
            timer_ms: MEMORIZE_MS,
            score: 0,
            best_score,
            total_correct: 0,
            level,
            rng,
            store,
            signals,
            progress,
        }
    }

    /// Advance the memorization countdown; opens input when it runs out
    pub fn update_timer(&mut self, delta_ms: f32) {
        if self.phase != Phase::Memorize {
            return;
        }
        self.timer_ms -= delta_ms;
        if self.timer_ms <= 0.0 {
            self.timer_ms = 0.0;
            self.phase = Phase::Input;
        }
    }

    /// Judge a tap on the tile with the given id.
    ///
    /// Returns true for a correct tap, except the one that solves the
    /// final level. Taps outside the input phase, on unknown ids or on
    /// already-used tiles change nothing and return false.
    pub fn select_tile(&mut self, tile_id: u32) -> bool {
        if self.phase != Phase::Input {
            return false;
        }
        let Some(slot) = self.level.tiles.iter().position(|t| t.id == tile_id) else {
            return false;
        };
        if self.level.tiles[slot].selected {
            return false;
        }

        let number = self.level.tiles[slot].number;
        self.level.tiles[slot].selected = true;
        self.level.picks.push(number);

        let pick_index = self.level.picks.len() - 1;
        let is_correct = self.level.picks[pick_index] == self.level.sequence[pick_index];
        self.level.tiles[slot].correct = Some(is_correct);

        if is_correct {
            self.level.correct_picks += 1;
            self.total_correct += 1;
            self.score += SCORE_PER_TILE;
            self.signals.play(Signal::Correct);

            if self.level.is_solved() {
                if self.level_index == TOTAL_LEVELS {
                    self.signals.play(Signal::GameComplete);
                    self.phase = Phase::GameOver;
                    // Deliberately false: the winning tap must not read as
                    // one more selectable step
                    return false;
                }
                self.level_index += 1;
                self.phase = Phase::Transition;
                self.signals.play(Signal::LevelComplete);
                if let Some(progress) = &mut self.progress {
                    progress.level_advance(self.level_index, self.total_correct);
                }
            }
            true
        } else {
            self.signals.play(Signal::Wrong);

            // Clear any stale verdicts on untapped tiles; judged tiles
            // keep theirs
            for tile in &mut self.level.tiles {
                if !tile.selected {
                    tile.correct = None;
                }
            }

            if self.level.picks.len() == 1 {
                self.signals.play(Signal::GameComplete);
                self.phase = Phase::GameOver;
            } else if self.level.correct_picks > 0 {
                if self.level_index == TOTAL_LEVELS {
                    self.signals.play(Signal::GameComplete);
                    self.phase = Phase::GameOver;
                } else {
                    self.level_index += 1;
                    self.phase = Phase::Transition;
                    self.signals.play(Signal::LevelComplete);
                }
            }
            // A wrong non-first pick with zero prior correct picks cannot
            // occur: a wrong first pick ends the run before a second pick
            // is accepted
            false
        }
    }

    /// Regenerate for the already-advanced index and restart memorization
    pub fn next_level(&mut self) {
        self.timer_ms = MEMORIZE_MS;
        self.phase = Phase::Memorize;
        self.level = generate_level(&mut self.rng, self.level_index);
        if let Some(progress) = &mut self.progress {
            progress.level_advance(self.level_index, self.total_correct);
        }
    }

    /// End the run: commit the best score, then start over from level 1.
    /// Valid from any phase.
    pub fn reset(&mut self) {
        self.commit_best_score();
        self.level_index = 1;
        self.phase = Phase::Memorize;
        self.timer_ms = MEMORIZE_MS;
        self.score = 0;
        self.total_correct = 0;
        self.level = generate_level(&mut self.rng, 1);
        if let Some(progress) = &mut self.progress {
            progress.session_reset();
        }
    }

    fn commit_best_score(&mut self) {
        if self.score > self.best_score {
            self.best_score = self.score;
            self.store.save_best(self.best_score);
        }
    }

    /// Unconditional phase override for the presentation layer
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn level_index(&self) -> u32 {
        self.level_index
    }

    /// Read-only view of the current level
    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn timer_ms(&self) -> f32 {
        self.timer_ms
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn total_correct(&self) -> u32 {
        self.total_correct
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
