//! Mind's Eye - a number-memorization tap game
//!
//! Core modules:
//! - `game`: Deterministic game logic (level generation, judging, scoring)
//! - `platform`: Browser/native platform abstraction
//! - `audio`: Procedural sound effects (wasm only)
//! - `settings`: Player preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod game;
pub mod platform;
pub mod settings;

pub use game::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Logical board size (portrait phone aspect)
    pub const BOARD_WIDTH: f32 = 390.0;
    pub const BOARD_HEIGHT: f32 = 844.0;

    /// Levels in a full run
    pub const TOTAL_LEVELS: u32 = 10;
    /// Tiles shown per level
    pub const TILES_PER_LEVEL: u32 = 5;
    /// How long the numbers stay visible (milliseconds)
    pub const MEMORIZE_MS: f32 = 2000.0;
    /// Points per correctly recalled tile
    pub const SCORE_PER_TILE: u32 = 10;
    /// The number range widens by this much per level
    pub const RANGE_STEP: u32 = 3;

    /// Tile size in board units
    pub const TILE_WIDTH: f32 = 60.0;
    pub const TILE_HEIGHT: f32 = 60.0;
}

/// Upper bound of the number range for a 1-based level index.
/// Level 1 draws from [1, 5], level 2 from [1, 8], and so on.
#[inline]
pub fn number_range_max(level_index: u32) -> u32 {
    consts::TILES_PER_LEVEL + level_index.saturating_sub(1) * consts::RANGE_STEP
}
