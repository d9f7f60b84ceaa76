use std::fmt;
use std::str::FromStr;

use crate::error::PuzzleError;

pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

/// A tile value; `1..=8` are numbered tiles, the empty space is represented by 0.
pub type Tile = u8;
pub const BLANK: Tile = 0;

pub type Grid = [[Tile; SIZE]; SIZE];

/// The solved board, `12345678_`.
pub const GOAL: State = State {
    tiles: [1, 2, 3, 4, 5, 6, 7, 8, BLANK],
    blank: 8,
};

/// Direction the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// Canonical successor order.
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    /// `(row, col)` delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Left => (0, -1),
            Move::Down => (1, 0),
            Move::Right => (0, 1),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        }
    }

    /// Whether the blank at `(row, col)` can move this way without leaving the board.
    pub fn is_legal_from(&self, row: usize, col: usize) -> bool {
        match self {
            Move::Up => row > 0,
            Move::Down => row < SIZE - 1,
            Move::Left => col > 0,
            Move::Right => col < SIZE - 1,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|movement| movement.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PuzzleError::UnknownMove(s.to_string()))
    }
}

/// Moves legal for a blank at `(row, col)`, in canonical order.
pub fn legal_moves(row: usize, col: usize) -> impl Iterator<Item = Move> {
    Move::ALL
        .into_iter()
        .filter(move |m| m.is_legal_from(row, col))
}

/// Splits a row-major sequence into a 3x3 grid.
pub fn to_grid(flat: &[Tile]) -> Result<Grid, PuzzleError> {
    if flat.len() != CELLS {
        return Err(PuzzleError::WrongLength { len: flat.len() });
    }

    let mut grid = [[BLANK; SIZE]; SIZE];
    for (i, row) in grid.iter_mut().enumerate() {
        row.copy_from_slice(&flat[i * SIZE..(i + 1) * SIZE]);
    }
    Ok(grid)
}

/// Concatenates the rows of a grid. Inverse of [`to_grid`].
pub fn to_flat(grid: &Grid) -> [Tile; CELLS] {
    let mut flat = [BLANK; CELLS];
    for (slot, &tile) in flat.iter_mut().zip(grid.iter().flatten()) {
        *slot = tile;
    }
    flat
}

/// Locates the blank scanning rows top to bottom. The first row holding a
/// blank wins.
pub fn find_blank(grid: &Grid) -> Result<(usize, usize), PuzzleError> {
    for (row, cells) in grid.iter().enumerate() {
        if let Some(col) = cells.iter().position(|&tile| tile == BLANK) {
            return Ok((row, col));
        }
    }
    Err(PuzzleError::MissingBlank)
}

/// A validated board: tiles 1-8 and the blank, each exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State {
    tiles: [Tile; CELLS],
    blank: u8,
}

impl State {
    pub fn from_tiles(tiles: [Tile; CELLS]) -> Result<Self, PuzzleError> {
        Self::from_grid(to_grid(&tiles)?)
    }

    pub fn from_grid(grid: Grid) -> Result<Self, PuzzleError> {
        let (row, col) = find_blank(&grid)?;
        let tiles = to_flat(&grid);

        let mut seen = [false; CELLS];
        for &tile in &tiles {
            let slot = seen
                .get_mut(usize::from(tile))
                .ok_or(PuzzleError::IllegalTile { tile })?;
            if *slot {
                return Err(PuzzleError::DuplicateTile { tile });
            }
            *slot = true;
        }

        Ok(Self {
            tiles,
            blank: (row * SIZE + col) as u8,
        })
    }

    pub fn tiles(&self) -> &[Tile; CELLS] {
        &self.tiles
    }

    pub fn grid(&self) -> Grid {
        let mut grid = [[BLANK; SIZE]; SIZE];
        for (i, row) in grid.iter_mut().enumerate() {
            row.copy_from_slice(&self.tiles[i * SIZE..(i + 1) * SIZE]);
        }
        grid
    }

    pub fn blank_position(&self) -> (usize, usize) {
        let index = usize::from(self.blank);
        (index / SIZE, index % SIZE)
    }

    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Every state reachable in one move, paired with the move, in
    /// canonical order.
    pub fn successors(&self) -> Vec<(Move, State)> {
        let (row, col) = self.blank_position();
        legal_moves(row, col)
            .map(|movement| (movement, self.slide(row, col, movement)))
            .collect()
    }

    /// The state after moving the blank, or `None` if it would leave the board.
    pub fn apply(&self, movement: Move) -> Option<State> {
        let (row, col) = self.blank_position();
        if movement.is_legal_from(row, col) {
            Some(self.slide(row, col, movement))
        } else {
            None
        }
    }

    /// Applies `moves` in order, failing at the first one that is illegal.
    pub fn replay(&self, moves: &[Move]) -> Result<State, PuzzleError> {
        moves
            .iter()
            .enumerate()
            .try_fold(*self, |state, (step, &action)| {
                state
                    .apply(action)
                    .ok_or(PuzzleError::IllegalMove { step, action })
            })
    }

    fn slide(&self, row: usize, col: usize, movement: Move) -> State {
        let (dx, dy) = movement.as_offset();
        let new_row = row.wrapping_add_signed(dx);
        let new_col = col.wrapping_add_signed(dy);

        let mut grid = self.grid();
        grid[row][col] = grid[new_row][new_col];
        grid[new_row][new_col] = BLANK;

        State {
            tiles: to_flat(&grid),
            blank: (new_row * SIZE + new_col) as u8,
        }
    }
}

fn symbol(tile: Tile) -> char {
    if tile == BLANK {
        '_'
    } else {
        char::from(b'0' + tile)
    }
}

impl FromStr for State {
    type Err = PuzzleError;

    /// Accepts nine symbols `1`-`8` plus `_` (or `0`) for the blank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | '0' => Ok(BLANK),
                '1'..='8' => Ok(c as u8 - b'0'),
                symbol => Err(PuzzleError::IllegalSymbol { symbol }),
            })
            .collect::<Result<Vec<Tile>, _>>()?;

        Self::from_grid(to_grid(&tiles)?)
    }
}

impl fmt::Display for State {
    /// `{}` prints the compact form, `{:#}` the board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for row in self.grid() {
                write!(f, "|")?;
                for tile in row {
                    write!(f, "{}", symbol(tile))?;
                }
                writeln!(f, "|")?;
            }
            Ok(())
        } else {
            self.tiles.iter().try_for_each(|&tile| write!(f, "{}", symbol(tile)))
        }
    }
}
