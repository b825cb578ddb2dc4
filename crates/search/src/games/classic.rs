//! Classic tic-tac-toe.
//!
//! Tic-tac-toe is a solved game where perfect play always results in a draw,
//! which makes it a good check on the search: a full-depth negamax must never
//! lose, and two of them must always draw.

use crate::evaluator::{Evaluator, LineHeuristic};
use std::fmt;
use std::str::FromStr;
use tictac_core::{Board, Game, Outcome, Player, Result, TicTacError};

/// Tic-tac-toe state: one board and the player to move.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct ClassicState {
    board: Board,
    to_move: Player,
}

impl ClassicState {
    /// Create a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::EMPTY,
            to_move: Player::X,
        }
    }

    /// Create a state from a signed board (0 empty, +1 X, -1 O).
    pub fn from_signs(signs: [i8; 9], to_move: Player) -> Result<Self> {
        Ok(Self {
            board: Board::from_signs(signs)?,
            to_move,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Get the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }
}

impl Default for ClassicState {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board with empty cells showing their index:
/// ```text
///  X | 1 | 2
/// ---+---+---
///  3 | O | 5
/// ---+---+---
///  6 | 7 | 8
/// ```
impl fmt::Display for ClassicState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                let cell = row * 3 + col;
                match self.board.get(cell) {
                    Some(player) => write!(f, " {} ", player)?,
                    None => write!(f, " {} ", cell)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tic-tac-toe move (cell index 0-8).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ClassicMove(pub u8);

impl ClassicMove {
    /// Get the row (0-2).
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    pub fn col(self) -> u8 {
        self.0 % 3
    }
}

impl fmt::Display for ClassicMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a single cell index, e.g. `"4"`.
impl FromStr for ClassicMove {
    type Err = TicTacError;

    fn from_str(s: &str) -> Result<Self> {
        let cell: u8 = s
            .trim()
            .parse()
            .map_err(|_| TicTacError::ParseMove(format!("expected a cell 0-8, got {:?}", s)))?;
        if cell > 8 {
            return Err(TicTacError::ParseMove(format!("cell {} out of range 0-8", cell)));
        }
        Ok(ClassicMove(cell))
    }
}

/// Classic tic-tac-toe game model.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClassicTicTacToe;

impl Game for ClassicTicTacToe {
    type State = ClassicState;
    type Move = ClassicMove;

    fn initial_state(&self) -> (Self::State, Player) {
        let state = ClassicState::new();
        let first = state.to_move;
        (state, first)
    }

    fn to_move(&self, state: &Self::State) -> Player {
        state.to_move
    }

    fn legal_moves(&self, state: &Self::State, _player: Player) -> Vec<Self::Move> {
        state
            .board
            .empty_cells()
            .map(|i| ClassicMove(i as u8))
            .collect()
    }

    fn transition(&self, state: &Self::State, mv: Self::Move, player: Player) -> Self::State {
        debug_assert!(state.board.get(mv.0 as usize).is_none(), "cell {} is taken", mv);
        ClassicState {
            board: state.board.with(mv.0 as usize, player),
            to_move: player.opponent(),
        }
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        state.winner().is_some() || state.board.is_full()
    }

    fn outcome(&self, state: &Self::State) -> Option<Outcome> {
        if let Some(winner) = state.winner() {
            Some(Outcome::Win(winner))
        } else if state.board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}

impl Evaluator<ClassicTicTacToe> for LineHeuristic {
    fn evaluate(&self, _game: &ClassicTicTacToe, state: &ClassicState, perspective: Player) -> f32 {
        self.score_board(&state.board, perspective)
    }
}
