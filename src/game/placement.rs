//! Tile placement within the play band
//!
//! Candidates jitter around the band center and are rejected while they sit
//! too close to an already placed tile. After too many rejected samples,
//! placement falls back to a fixed 3-column grid so generation always
//! terminates.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

/// Maximum horizontal jitter around the board centerline
pub const JITTER_X: f32 = 100.0;
/// Minimum center-to-center spacing between tiles
pub const MIN_SEPARATION: f32 = 80.0;
/// Top of the play band (below the HUD)
pub const TOP_MARGIN: f32 = 90.0;
/// Vertical extent of the play band
pub const PLAY_BAND_HEIGHT: f32 = 300.0;
/// Rejection samples before falling back to the grid
pub const MAX_ATTEMPTS: u32 = 100;
/// Fallback grid columns
pub const GRID_COLUMNS: u32 = 3;

/// Pick a position for the next tile, at least MIN_SEPARATION away from
/// everything in `occupied`. The chosen position (sampled or fallback) is
/// appended to `occupied` so later tiles in the same level see it.
pub fn place(
    rng: &mut Pcg32,
    board_w: f32,
    tile_w: f32,
    tile_h: f32,
    occupied: &mut Vec<Vec2>,
) -> Vec2 {
    let center = Vec2::new(board_w / 2.0, TOP_MARGIN + PLAY_BAND_HEIGHT / 2.0);
    let band_bottom = TOP_MARGIN + PLAY_BAND_HEIGHT;

    for _ in 0..MAX_ATTEMPTS {
        let candidate = Vec2::new(
            (center.x + rng.random_range(-1.0..1.0) * JITTER_X)
                .clamp(tile_w / 2.0, board_w - tile_w / 2.0),
            (center.y + rng.random_range(-1.0..1.0) * (PLAY_BAND_HEIGHT / 3.0))
                .clamp(TOP_MARGIN, band_bottom - tile_h),
        );

        if well_separated(candidate, occupied) {
            occupied.push(candidate);
            return candidate;
        }
    }

    // Grid fallback keeps generation terminating when the band is crowded
    let fallback = grid_cell(occupied.len() as u32, board_w);
    occupied.push(fallback);
    fallback
}

fn well_separated(candidate: Vec2, occupied: &[Vec2]) -> bool {
    occupied
        .iter()
        .all(|used| candidate.distance(*used) >= MIN_SEPARATION)
}

/// Fallback cell for the i-th tile: 3 columns spaced MIN_SEPARATION apart
fn grid_cell(index: u32, board_w: f32) -> Vec2 {
    let row = index / GRID_COLUMNS;
    let col = index % GRID_COLUMNS;
    Vec2::new(
        board_w / 4.0 + col as f32 * MIN_SEPARATION,
        TOP_MARGIN + row as f32 * MIN_SEPARATION,
    )
}
