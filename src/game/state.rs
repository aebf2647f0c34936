//! Level and tile data types
//!
//! Everything the presentation layer reads lives here. All mutation goes
//! through `Session`; the shell only ever sees `&Level`.

use glam::Vec2;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Numbers visible, countdown running
    Memorize,
    /// Numbers hidden, waiting for taps
    Input,
    /// Level done, next level pending
    Transition,
    /// Run ended (failure, or the final level finished)
    GameOver,
    /// Reserved for a dedicated all-levels-cleared screen. Judging folds
    /// final-level success into GameOver and never assigns this.
    Complete,
}

/// A numbered tile on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Stable id within the level (0-based)
    pub id: u32,
    /// The number the player must recall
    pub number: u32,
    /// Top-left corner in board units
    pub pos: Vec2,
    /// Tapped this round
    pub selected: bool,
    /// Judged verdict (None until tapped)
    pub correct: Option<bool>,
}

impl Tile {
    pub fn new(id: u32, number: u32, pos: Vec2) -> Self {
        Self {
            id,
            number,
            pos,
            selected: false,
            correct: None,
        }
    }
}

/// One generated level plus the player's progress through it
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// 1-based index this level was generated for
    pub index: u32,
    /// Tiles in id order; tile i carries sequence[i]
    pub tiles: Vec<Tile>,
    /// The tiles' numbers sorted ascending - the order to tap them in
    pub sequence: Vec<u32>,
    /// Numbers tapped so far, in tap order
    pub picks: Vec<u32>,
    /// Correct taps this round
    pub correct_picks: u32,
}

impl Level {
    /// Tile with the given id, if it exists
    pub fn tile(&self, id: u32) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// Every tile has been tapped in the correct order
    pub fn is_solved(&self) -> bool {
        self.correct_picks as usize == self.sequence.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_counts_correct_picks_not_taps() {
        let mut level = Level {
            index: 1,
            tiles: Vec::new(),
            sequence: vec![1, 2, 3],
            picks: vec![1, 2, 9],
            correct_picks: 2,
        };
        // Three picks made, but the third broke the sequence
        assert!(!level.is_solved());

        level.picks = vec![1, 2, 3];
        level.correct_picks = 3;
        assert!(level.is_solved());
    }
}
