//! Level generation
//!
//! Numbers are drawn without replacement from a range that widens with the
//! level index, then dealt onto tiles in ascending order, so tile ids follow
//! the answer sequence.

use rand::Rng;
use rand_pcg::Pcg32;

use super::placement::place;
use super::state::{Level, Tile};
use crate::consts::{BOARD_WIDTH, TILE_HEIGHT, TILE_WIDTH, TILES_PER_LEVEL};
use crate::number_range_max;

/// Draw TILES_PER_LEVEL distinct numbers for a level, sorted ascending.
/// Level 1 has zero headroom, so the draw is exactly 1..=5.
fn draw_numbers(rng: &mut Pcg32, index: u32) -> Vec<u32> {
    let max = number_range_max(index);
    let mut numbers: Vec<u32> = Vec::with_capacity(TILES_PER_LEVEL as usize);
    while (numbers.len() as u32) < TILES_PER_LEVEL {
        let n = rng.random_range(1..=max);
        if !numbers.contains(&n) {
            numbers.push(n);
        }
    }
    numbers.sort_unstable();
    numbers
}

/// Generate the level for a 1-based index
pub fn generate_level(rng: &mut Pcg32, index: u32) -> Level {
    let numbers = draw_numbers(rng, index);
    let mut occupied = Vec::with_capacity(numbers.len());
    let tiles: Vec<Tile> = numbers
        .iter()
        .enumerate()
        .map(|(i, &number)| {
            let pos = place(rng, BOARD_WIDTH, TILE_WIDTH, TILE_HEIGHT, &mut occupied);
            Tile::new(i as u32, number, pos)
        })
        .collect();

    Level {
        index,
        tiles,
        sequence: numbers,
        picks: Vec::new(),
        correct_picks: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_level_one_draws_the_exact_range() {
        // [1, 5] holds exactly five distinct numbers
        let mut rng = Pcg32::seed_from_u64(7);
        let level = generate_level(&mut rng, 1);
        assert_eq!(level.sequence, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_tiles_follow_the_sequence() {
        let mut rng = Pcg32::seed_from_u64(42);
        let level = generate_level(&mut rng, 3);
        assert_eq!(level.tiles.len(), TILES_PER_LEVEL as usize);
        for (i, tile) in level.tiles.iter().enumerate() {
            assert_eq!(tile.id, i as u32);
            assert_eq!(tile.number, level.sequence[i]);
        }
    }

    #[test]
    fn test_fresh_level_has_no_progress() {
        let mut rng = Pcg32::seed_from_u64(9);
        let level = generate_level(&mut rng, 4);
        assert_eq!(level.index, 4);
        assert!(level.picks.is_empty());
        assert_eq!(level.correct_picks, 0);
        assert!(!level.is_solved());
        for tile in &level.tiles {
            assert!(!tile.selected);
            assert_eq!(tile.correct, None);
        }
    }

    proptest! {
        #[test]
        fn sequence_is_sorted_unique_and_in_range(seed in 0u64..1_000, index in 1u32..=10) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let level = generate_level(&mut rng, index);
            prop_assert_eq!(level.sequence.len(), TILES_PER_LEVEL as usize);

            let max = crate::number_range_max(index);
            for pair in level.sequence.windows(2) {
                // Strictly ascending covers both sortedness and uniqueness
                prop_assert!(pair[0] < pair[1]);
            }
            for &n in &level.sequence {
                prop_assert!((1..=max).contains(&n));
            }
        }
    }
}
