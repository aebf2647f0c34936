//! Best-score persistence
//!
//! The browser build writes through LocalStorage as a plain integer
//! string; native builds and tests keep the score in memory.

use crate::game::ScoreStore;

/// LocalStorage key for the best score
pub const BEST_SCORE_KEY: &str = "mind_eye_best_score";

/// Best score persisted in browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStore {
    fn load_best(&self) -> u32 {
        if let Some(storage) = Self::storage() {
            if let Ok(Some(raw)) = storage.get_item(BEST_SCORE_KEY) {
                if let Ok(best) = raw.parse() {
                    log::info!("Loaded best score: {}", best);
                    return best;
                }
            }
        }
        log::info!("No stored best score, starting fresh");
        0
    }

    fn save_best(&mut self, best: u32) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(BEST_SCORE_KEY, &best.to_string());
            log::info!("Best score saved: {}", best);
        }
    }
}

/// Best score held in memory, for native builds and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known best
    pub fn with_best(best: u32) -> Self {
        Self { best }
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> u32 {
        self.best
    }

    fn save_best(&mut self, best: u32) {
        self.best = best;
    }
}
