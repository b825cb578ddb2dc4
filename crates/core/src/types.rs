//! Board primitives shared by both tic-tac-toe variants.
//!
//! A [`Board`] is nine cells in row-major order:
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```
//! The same win-line rule judges a single board and, in Ultimate tic-tac-toe,
//! the meta-board made of sub-board winners.

use crate::{Result, TicTacError};
use std::fmt;

/// The eight winning lines: rows, columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// One of the two sides. X is +1 and always moves first, O is -1.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Signed encoding: +1 for X, -1 for O.
    pub fn sign(self) -> i8 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }

    /// Decode a signed value. Returns `None` for anything but +1 or -1.
    pub fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(Player::X),
            -1 => Some(Player::O),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A board cell: empty, or owned by a player.
pub type Cell = Option<Player>;

/// Owner of a three-cell line, if all three cells belong to the same player.
fn triple_owner(a: Cell, b: Cell, c: Cell) -> Cell {
    match a {
        Some(player) if b == a && c == a => Some(player),
        _ => None,
    }
}

/// Returns the player owning any of the eight winning lines, checked in
/// [`LINES`] order. Empty triples never count.
pub fn line_winner(cells: &[Cell; 9]) -> Option<Player> {
    LINES
        .iter()
        .find_map(|&[a, b, c]| triple_owner(cells[a], cells[b], cells[c]))
}

/// A 3x3 grid of cells. Boards are small `Copy` values; writing a cell
/// produces a new board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Board([Cell; 9]);

impl Board {
    /// An empty board.
    pub const EMPTY: Board = Board([None; 9]);

    /// Create a board from its cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self(cells)
    }

    /// Create a board from the signed encoding (0 empty, +1 X, -1 O).
    ///
    /// # Errors
    /// Returns `TicTacError::InvalidCell` for any other value.
    pub fn from_signs(signs: [i8; 9]) -> Result<Self> {
        let mut cells = [None; 9];
        for (cell, sign) in cells.iter_mut().zip(signs) {
            *cell = match sign {
                0 => None,
                s => Some(Player::from_sign(s).ok_or(TicTacError::InvalidCell(s))?),
            };
        }
        Ok(Self(cells))
    }

    /// The signed encoding of every cell.
    pub fn signs(&self) -> [i8; 9] {
        self.0.map(|cell| cell.map_or(0, Player::sign))
    }

    /// Get the cell at an index, `None` when empty or out of range.
    pub fn get(&self, index: usize) -> Cell {
        self.0.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.0
    }

    /// Returns a copy of this board with `index` set to `player`.
    pub fn with(&self, index: usize, player: Player) -> Self {
        let mut cells = self.0;
        cells[index] = Some(player);
        Self(cells)
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.0.iter().all(|c| c.is_some())
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.0.iter().filter(|c| c.is_some()).count()
    }

    /// Owner of a completed line on this board.
    pub fn winner(&self) -> Option<Player> {
        line_winner(&self.0)
    }

    /// The cells of each winning line, in [`LINES`] order.
    pub fn lines(&self) -> impl Iterator<Item = [Cell; 3]> + '_ {
        LINES
            .iter()
            .map(move |&[a, b, c]| [self.0[a], self.0[b], self.0[c]])
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    /// Payoff for player X: +1 if X won, -1 if O won, 0 for a draw.
    pub fn payoff(self) -> i8 {
        match self {
            Outcome::Win(player) => player.sign(),
            Outcome::Draw => 0,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
