//! Ultimate tic-tac-toe: a 3x3 meta-board of 3x3 sub-boards.
//!
//! The cell a player picks inside a sub-board sends the opponent to the
//! sub-board with the same index. When that sub-board has no empty cell the
//! opponent may play anywhere. The game is won on the meta-board, whose cells
//! are the winners of the sub-boards.
//!
//! A sub-board that has been won but still has empty cells stays playable.

use crate::evaluator::{Evaluator, LineHeuristic};
use std::fmt;
use std::str::FromStr;
use tictac_core::{Board, Game, Outcome, Player, Result, TicTacError};

/// Ultimate tic-tac-toe state.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct UltimateState {
    /// Sub-boards in row-major order, same layout as the cells of a board.
    boards: [Board; 9],

    /// Sub-board the next move must be played in, `None` when unconstrained.
    /// Never refers to a full sub-board.
    forced: Option<u8>,

    to_move: Player,
}

impl UltimateState {
    /// Create nine empty sub-boards with X to move anywhere.
    pub fn new() -> Self {
        Self {
            boards: [Board::EMPTY; 9],
            forced: None,
            to_move: Player::X,
        }
    }

    /// Create a state from its parts. A forced sub-board that is out of
    /// range or already full is dropped, leaving the next move unconstrained.
    pub fn from_boards(boards: [Board; 9], forced: Option<u8>, to_move: Player) -> Self {
        let forced = forced.filter(|&b| b < 9 && !boards[b as usize].is_full());
        Self {
            boards,
            forced,
            to_move,
        }
    }

    pub fn boards(&self) -> &[Board; 9] {
        &self.boards
    }

    /// Get a sub-board. Panics if `index` is not 0-8.
    pub fn board(&self, index: usize) -> &Board {
        &self.boards[index]
    }

    /// The sub-board the next move is restricted to, if any.
    pub fn forced_board(&self) -> Option<u8> {
        self.forced
    }

    /// Get the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The meta-board: each cell holds the winner of the matching sub-board.
    pub fn meta_board(&self) -> Board {
        Board::from_cells(self.boards.map(|board| board.winner()))
    }

    /// Winner of the meta-board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.meta_board().winner()
    }

    /// True when every cell of every sub-board is occupied.
    pub fn is_full(&self) -> bool {
        self.boards.iter().all(Board::is_full)
    }

    /// Number of occupied cells across all sub-boards.
    pub fn occupied(&self) -> usize {
        self.boards.iter().map(Board::occupied).sum()
    }
}

impl Default for UltimateState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UltimateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for meta_row in 0..3 {
            if meta_row > 0 {
                writeln!(f, "{}", "=".repeat(41))?;
            }
            for row in 0..3 {
                for meta_col in 0..3 {
                    if meta_col > 0 {
                        write!(f, " || ")?;
                    }
                    let board = &self.boards[meta_row * 3 + meta_col];
                    for col in 0..3 {
                        if col > 0 {
                            write!(f, "|")?;
                        }
                        let cell = row * 3 + col;
                        match board.get(cell) {
                            Some(player) => write!(f, " {} ", player)?,
                            None => write!(f, " {} ", cell)?,
                        }
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Ultimate tic-tac-toe move: a sub-board and a cell inside it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct UltimateMove {
    pub board: u8,
    pub cell: u8,
}

impl UltimateMove {
    pub fn new(board: u8, cell: u8) -> Self {
        Self { board, cell }
    }
}

impl fmt::Display for UltimateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.board, self.cell)
    }
}

/// Parses `"board,cell"` or `"board cell"`, e.g. `"3,4"`.
impl FromStr for UltimateMove {
    type Err = TicTacError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let [board, cell] = parts.as_slice() else {
            return Err(TicTacError::ParseMove(format!(
                "expected \"board,cell\", got {:?}",
                s.trim()
            )));
        };

        let parse_index = |part: &str| -> Result<u8> {
            match part.parse::<u8>() {
                Ok(index) if index <= 8 => Ok(index),
                _ => Err(TicTacError::ParseMove(format!(
                    "expected an index 0-8, got {:?}",
                    part
                ))),
            }
        };

        Ok(UltimateMove::new(parse_index(*board)?, parse_index(*cell)?))
    }
}

/// Ultimate tic-tac-toe game model.
#[derive(Clone, Copy, Debug, Default)]
pub struct UltimateTicTacToe;

impl Game for UltimateTicTacToe {
    type State = UltimateState;
    type Move = UltimateMove;

    fn initial_state(&self) -> (Self::State, Player) {
        let state = UltimateState::new();
        let first = state.to_move;
        (state, first)
    }

    fn to_move(&self, state: &Self::State) -> Player {
        state.to_move
    }

    fn legal_moves(&self, state: &Self::State, _player: Player) -> Vec<Self::Move> {
        let cells_of = move |b: usize| {
            state.boards[b]
                .empty_cells()
                .map(move |cell| UltimateMove::new(b as u8, cell as u8))
        };

        match state.forced {
            Some(b) if !state.boards[b as usize].is_full() => cells_of(b as usize).collect(),
            _ => (0..9).flat_map(cells_of).collect(),
        }
    }

    fn transition(&self, state: &Self::State, mv: Self::Move, player: Player) -> Self::State {
        let (b, cell) = (mv.board as usize, mv.cell as usize);
        debug_assert!(state.boards[b].get(cell).is_none(), "cell {} is taken", mv);

        let mut boards = state.boards;
        boards[b] = boards[b].with(cell, player);
        let forced = (!boards[cell].is_full()).then_some(mv.cell);

        UltimateState {
            boards,
            forced,
            to_move: player.opponent(),
        }
    }

    fn is_terminal(&self, state: &Self::State) -> bool {
        state.winner().is_some() || state.is_full()
    }

    fn outcome(&self, state: &Self::State) -> Option<Outcome> {
        if let Some(winner) = state.winner() {
            Some(Outcome::Win(winner))
        } else if state.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}

/// Lines of every sub-board plus the lines of the meta-board.
impl Evaluator<UltimateTicTacToe> for LineHeuristic {
    fn evaluate(&self, _game: &UltimateTicTacToe, state: &UltimateState, perspective: Player) -> f32 {
        let boards: f32 = state
            .boards
            .iter()
            .map(|board| self.score_board(board, perspective))
            .sum();
        boards + self.score_board(&state.meta_board(), perspective)
    }
}
