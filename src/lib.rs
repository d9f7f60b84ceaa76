//! Eight-puzzle solver: breadth-first, depth-first and A* graph search over
//! 3x3 sliding tile boards.

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod node;
pub mod puzzle;
pub mod search;

pub use error::PuzzleError;
pub use heuristic::{hamming, manhattan, Heuristic};
pub use puzzle::{Move, State, GOAL};
pub use search::{
    a_star_hamming, a_star_manhattan, breadth_first_search, depth_first_search, SearchOutcome,
    SearchStats, Strategy,
};
