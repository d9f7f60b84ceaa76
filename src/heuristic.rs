use std::fmt;

use crate::puzzle::{State, BLANK, CELLS, GOAL, SIZE};

/// Admissible estimate of the moves left to reach [`GOAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    Hamming,
    Manhattan,
}

impl Heuristic {
    pub fn estimate(&self, state: &State) -> u32 {
        match self {
            Heuristic::Hamming => hamming(state),
            Heuristic::Manhattan => manhattan(state),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Hamming => write!(f, "hamming"),
            Heuristic::Manhattan => write!(f, "manhattan"),
        }
    }
}

/// Number of misplaced tiles. The last cell belongs to the blank and is
/// never checked.
pub fn hamming(state: &State) -> u32 {
    state.tiles()[..CELLS - 1]
        .iter()
        .zip(&GOAL.tiles()[..CELLS - 1])
        .filter(|(tile, target)| tile != target)
        .count() as u32
}

/// Sum of grid distances between each misplaced tile and its goal cell.
pub fn manhattan(state: &State) -> u32 {
    let mut distance = 0;
    for (index, (&tile, &target)) in state.tiles().iter().zip(GOAL.tiles()).enumerate() {
        if tile == BLANK || tile == target {
            continue;
        }
        // GOAL holds tile n at index n - 1.
        let goal_index = usize::from(tile - 1);
        distance += (index / SIZE).abs_diff(goal_index / SIZE);
        distance += (index % SIZE).abs_diff(goal_index % SIZE);
    }
    distance as u32
}
