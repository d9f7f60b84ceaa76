use thiserror::Error;

use crate::puzzle::{Move, Tile};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("a state needs exactly 9 tiles, got {len}")]
    WrongLength { len: usize },
    #[error("illegal symbol {symbol:?} in state")]
    IllegalSymbol { symbol: char },
    #[error("tile {tile} is outside 0..=8")]
    IllegalTile { tile: Tile },
    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: Tile },
    #[error("state has no blank")]
    MissingBlank,
    #[error("move {step} ({action}) pushes the blank off the board")]
    IllegalMove { step: usize, action: Move },
    #[error("unknown move {0:?}")]
    UnknownMove(String),
    #[error("unknown strategy {0:?}, expected bfs, dfs, astar-hamming or astar-manhattan")]
    UnknownStrategy(String),
}

impl PuzzleError {
    /// True for the malformed-input family raised by the codec.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            PuzzleError::WrongLength { .. }
                | PuzzleError::IllegalSymbol { .. }
                | PuzzleError::IllegalTile { .. }
                | PuzzleError::DuplicateTile { .. }
                | PuzzleError::MissingBlank
        )
    }
}
