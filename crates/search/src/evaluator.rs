//! Static evaluation for the search frontier.
//!
//! The `Evaluator` trait scores a non-terminal state from an explicitly given
//! player's point of view. `LineHeuristic` is the line-counting evaluator
//! used for both tic-tac-toe variants; each game implements it in its own
//! module.

use tictac_core::{Board, Cell, Game, Player};

/// Trait for scoring game positions at the depth limit.
pub trait Evaluator<G: Game> {
    /// Score `state` for `perspective`. Larger is better for that player.
    fn evaluate(&self, game: &G, state: &G::State, perspective: Player) -> f32;
}

impl<G: Game, E: Evaluator<G>> Evaluator<G> for &E {
    fn evaluate(&self, game: &G, state: &G::State, perspective: Player) -> f32 {
        (**self).evaluate(game, state, perspective)
    }
}

/// Per-line scores used by [`LineHeuristic`].
#[derive(Clone, Debug, PartialEq)]
pub struct LineWeights {
    /// Two own cells and one empty: one move from completing the line.
    pub two_own: f32,

    /// Two opponent cells and one empty: must block.
    pub two_opponent: f32,

    /// One own cell and two empty.
    pub one_own: f32,

    /// One opponent cell and two empty.
    pub one_opponent: f32,
}

impl Default for LineWeights {
    fn default() -> Self {
        Self {
            two_own: 10.0,
            two_opponent: -8.0,
            one_own: 1.0,
            one_opponent: -1.0,
        }
    }
}

/// Sums a score over every winning line of every board.
///
/// Lines holding pieces of both players, full lines and empty lines score 0.
#[derive(Clone, Debug, Default)]
pub struct LineHeuristic {
    weights: LineWeights,
}

impl LineHeuristic {
    pub fn new(weights: LineWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &LineWeights {
        &self.weights
    }

    /// Score a single three-cell line.
    pub fn score_line(&self, line: [Cell; 3], perspective: Player) -> f32 {
        let own = line.iter().filter(|&&c| c == Some(perspective)).count();
        let opponent = line
            .iter()
            .filter(|&&c| c == Some(perspective.opponent()))
            .count();
        let empty = 3 - own - opponent;

        match (own, opponent, empty) {
            (2, 0, 1) => self.weights.two_own,
            (0, 2, 1) => self.weights.two_opponent,
            (1, 0, 2) => self.weights.one_own,
            (0, 1, 2) => self.weights.one_opponent,
            _ => 0.0,
        }
    }

    /// Score all eight lines of a board.
    pub fn score_board(&self, board: &Board, perspective: Player) -> f32 {
        board
            .lines()
            .map(|line| self.score_line(line, perspective))
            .sum()
    }
}
