//! Depth-limited negamax search.
//!
//! Every call returns a score from the point of view of the player to move
//! at that node; the caller negates it. Recursion stops at terminal states
//! (scored by payoff) and at the depth limit (scored by the evaluator).

use crate::{config::SearchConfig, evaluator::Evaluator};
use log::{debug, trace};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tictac_core::{Game, Player, Result, TicTacError};

/// Result of a negamax search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<M> {
    /// First move, in `legal_moves` order, reaching the best score.
    pub best_move: M,

    /// Score of `best_move` from the searching player's point of view.
    pub score: f32,

    /// Number of states visited, root included.
    pub nodes: u64,
}

/// Depth-limited negamax with an optional alpha-beta window.
///
/// Generic over the evaluator so that any game with an `Evaluator`
/// implementation can be searched.
#[derive(Clone, Debug)]
pub struct Negamax<E> {
    config: SearchConfig,
    evaluator: E,
}

impl<E> Negamax<E> {
    /// Create a new search engine.
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find the best move for `player` in `state`.
    ///
    /// # Errors
    /// Returns `TicTacError::GameOver` if `state` is terminal and
    /// `TicTacError::NoLegalMoves` if the model reports no moves for a
    /// running game anywhere in the searched tree.
    pub fn search<G>(
        &self,
        game: &G,
        state: &G::State,
        player: Player,
    ) -> Result<SearchResult<G::Move>>
    where
        G: Game,
        E: Evaluator<G> + Sync,
    {
        if game.is_terminal(state) {
            return Err(TicTacError::GameOver);
        }
        let moves = game.legal_moves(state, player);
        if moves.is_empty() {
            return Err(TicTacError::NoLegalMoves);
        }

        let start = Instant::now();
        let nodes = AtomicU64::new(1);
        let child_depth = self.config.max_depth.saturating_sub(1);

        let (best_move, score) = if self.config.parallel {
            // Every root child gets the full window, so the scores are exact
            // and the first-best pick matches the sequential search.
            let scores = moves
                .par_iter()
                .map(|&mv| {
                    let child = game.transition(state, mv, player);
                    let score = -self.negamax(
                        game,
                        &child,
                        player.opponent(),
                        child_depth,
                        f32::NEG_INFINITY,
                        f32::INFINITY,
                        &nodes,
                    )?;
                    Ok((mv, score))
                })
                .collect::<Result<Vec<_>>>()?;
            first_best(scores).ok_or(TicTacError::NoLegalMoves)?
        } else {
            let mut best = (moves[0], f32::NEG_INFINITY);
            for &mv in &moves {
                let child = game.transition(state, mv, player);
                let score = -self.negamax(
                    game,
                    &child,
                    player.opponent(),
                    child_depth,
                    f32::NEG_INFINITY,
                    -best.1,
                    &nodes,
                )?;
                trace!("root move {:?} scored {}", mv, score);
                if score > best.1 {
                    best = (mv, score);
                }
            }
            best
        };

        let nodes = nodes.into_inner();
        debug!(
            "{} plays {:?} (score {}, depth {}, {} nodes, {:.1?})",
            player,
            best_move,
            score,
            self.config.max_depth,
            nodes,
            start.elapsed()
        );

        Ok(SearchResult {
            best_move,
            score,
            nodes,
        })
    }

    /// Negamax value of `state` for `player`, the player to move.
    ///
    /// With pruning on, scores outside `(alpha, beta)` are bounds rather than
    /// exact values (fail-soft). Without pruning the window is ignored.
    #[allow(clippy::too_many_arguments)]
    fn negamax<G>(
        &self,
        game: &G,
        state: &G::State,
        player: Player,
        depth: usize,
        mut alpha: f32,
        beta: f32,
        nodes: &AtomicU64,
    ) -> Result<f32>
    where
        G: Game,
        E: Evaluator<G>,
    {
        nodes.fetch_add(1, Ordering::Relaxed);

        if game.is_terminal(state) {
            let payoff = game.payoff(state)?;
            return Ok(f32::from(payoff * player.sign()) * self.config.win_score);
        }
        if depth == 0 {
            return Ok(self.evaluator.evaluate(game, state, player));
        }

        let moves = game.legal_moves(state, player);
        if moves.is_empty() {
            return Err(TicTacError::NoLegalMoves);
        }

        let mut best = f32::NEG_INFINITY;
        for mv in moves {
            let child = game.transition(state, mv, player);
            let score = -self.negamax(
                game,
                &child,
                player.opponent(),
                depth - 1,
                -beta,
                -alpha,
                nodes,
            )?;
            best = best.max(score);

            if self.config.pruning {
                alpha = alpha.max(score);
                if alpha >= beta {
                    break;
                }
            }
        }
        Ok(best)
    }
}

/// The first entry with the maximal score.
fn first_best<M>(scores: Vec<(M, f32)>) -> Option<(M, f32)> {
    scores
        .into_iter()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
}

/// Best move for `player` searching `max_depth` plies with `evaluator`.
///
/// Uses the default configuration (alpha-beta, sequential) at the given depth.
pub fn best_move<G, E>(
    game: &G,
    state: &G::State,
    player: Player,
    max_depth: usize,
    evaluator: &E,
) -> Result<G::Move>
where
    G: Game,
    E: Evaluator<G> + Sync,
{
    Negamax::new(SearchConfig::with_depth(max_depth), evaluator)
        .search(game, state, player)
        .map(|result| result.best_move)
}
