use crate::{Outcome, Player, Result, TicTacError};
use std::fmt::Debug;
use std::hash::Hash;

/// A two-player, zero-sum, perfect-information game model.
///
/// States are immutable values: `transition` never touches its input and
/// returns a fresh state. Models enforce turn alternation; the search engine
/// only ever asks for the moves of the player whose turn it is.
pub trait Game: Clone + Send + Sync {
    /// The game state (board contents plus the player to move)
    type State: Clone + Send + Sync + Eq + Hash + Debug;

    /// A move (a cell, or a sub-board and cell)
    type Move: Clone + Copy + Send + Sync + Eq + Hash + Debug;

    /// Returns the start-of-game state and the player who moves first
    fn initial_state(&self) -> (Self::State, Player);

    /// Returns the player whose turn it is
    fn to_move(&self, state: &Self::State) -> Player;

    /// Returns every playable move for `player`, in ascending board/cell order.
    /// Empty exactly when no cell in the playable scope is free.
    fn legal_moves(&self, state: &Self::State, player: Player) -> Vec<Self::Move>;

    /// Applies a move for `player`, returning the next state.
    ///
    /// The move must be one of `legal_moves(state, player)`; use
    /// [`Game::try_transition`] when that is not already known.
    fn transition(&self, state: &Self::State, mv: Self::Move, player: Player) -> Self::State;

    /// Returns true once a line is completed or the board is filled
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Returns the result of a finished game, `None` while the game is running
    fn outcome(&self, state: &Self::State) -> Option<Outcome>;

    /// Payoff for player X on a terminal state: +1, -1 or 0.
    ///
    /// # Errors
    /// Returns `TicTacError::NotTerminal` if the game is still running.
    fn payoff(&self, state: &Self::State) -> Result<i8> {
        self.outcome(state)
            .map(Outcome::payoff)
            .ok_or(TicTacError::NotTerminal)
    }

    /// Applies a move after checking it is legal.
    ///
    /// # Errors
    /// Returns `TicTacError::GameOver` on a terminal state and
    /// `TicTacError::IllegalMove` if it is not `player`'s turn or `mv` is not
    /// among the legal moves.
    fn try_transition(
        &self,
        state: &Self::State,
        mv: Self::Move,
        player: Player,
    ) -> Result<Self::State> {
        if self.is_terminal(state) {
            return Err(TicTacError::GameOver);
        }
        if player != self.to_move(state) {
            return Err(TicTacError::IllegalMove(format!("it is not {}'s turn", player)));
        }
        if !self.legal_moves(state, player).contains(&mv) {
            return Err(TicTacError::IllegalMove(format!(
                "{:?} for {}",
                mv, player
            )));
        }
        Ok(self.transition(state, mv, player))
    }
}
