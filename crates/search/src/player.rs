//! Move providers: anything that can pick a move for the player to move.
//!
//! The match driver only talks to `MoveProvider`s, so a human at a prompt,
//! the negamax engine and a random mover are interchangeable.

use crate::{config::SearchConfig, evaluator::Evaluator, search::Negamax};
use rand::Rng;
use tictac_core::{Game, Player, Result, TicTacError};

/// Something that chooses moves.
pub trait MoveProvider<G: Game> {
    /// Choose a move for `player` in `state`. Should return one of
    /// `game.legal_moves(state, player)`; the driver re-asks otherwise.
    fn choose_move(&mut self, game: &G, state: &G::State, player: Player) -> Result<G::Move>;
}

/// Plays the negamax engine's best move at a fixed depth, evaluating from
/// the point of view of whichever player it is asked to move for.
#[derive(Clone, Debug)]
pub struct NegamaxPlayer<E> {
    engine: Negamax<E>,
}

impl<E> NegamaxPlayer<E> {
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self {
            engine: Negamax::new(config, evaluator),
        }
    }

    pub fn engine(&self) -> &Negamax<E> {
        &self.engine
    }
}

impl<G, E> MoveProvider<G> for NegamaxPlayer<E>
where
    G: Game,
    E: Evaluator<G> + Sync,
{
    fn choose_move(&mut self, game: &G, state: &G::State, player: Player) -> Result<G::Move> {
        self.engine
            .search(game, state, player)
            .map(|result| result.best_move)
    }
}

/// Picks a uniformly random legal move.
pub struct RandomPlayer<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<G: Game, R: Rng> MoveProvider<G> for RandomPlayer<R> {
    fn choose_move(&mut self, game: &G, state: &G::State, player: Player) -> Result<G::Move> {
        let moves = game.legal_moves(state, player);
        if moves.is_empty() {
            return Err(TicTacError::NoLegalMoves);
        }
        let idx = self.rng.gen_range(0..moves.len());
        Ok(moves[idx])
    }
}

impl<G: Game, P: MoveProvider<G> + ?Sized> MoveProvider<G> for Box<P> {
    fn choose_move(&mut self, game: &G, state: &G::State, player: Player) -> Result<G::Move> {
        (**self).choose_move(game, state, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::LineHeuristic;
    use crate::games::{ClassicMove, ClassicState, ClassicTicTacToe, UltimateTicTacToe};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_negamax_player_takes_win() {
        let game = ClassicTicTacToe;
        let state =
            ClassicState::from_signs([1, 1, 0, -1, -1, 0, 0, 0, 0], Player::X).unwrap();
        let mut player = NegamaxPlayer::new(SearchConfig::with_depth(2), LineHeuristic::default());

        let mv = player.choose_move(&game, &state, Player::X).unwrap();
        assert_eq!(mv, ClassicMove(2));
    }

    #[test]
    fn test_negamax_player_as_o_takes_win() {
        let game = ClassicTicTacToe;
        // O to move with two in the middle row
        let state =
            ClassicState::from_signs([1, 1, 0, -1, -1, 0, 1, 0, 0], Player::O).unwrap();
        let mut player = NegamaxPlayer::new(SearchConfig::with_depth(3), LineHeuristic::default());

        let mv = player.choose_move(&game, &state, Player::O).unwrap();
        assert_eq!(mv, ClassicMove(5));
    }

    #[test]
    fn test_random_player_is_legal_and_seeded() {
        let game = UltimateTicTacToe;
        let (state, player) = game.initial_state();

        let mut a = RandomPlayer::new(ChaCha8Rng::seed_from_u64(7));
        let mut b = RandomPlayer::new(ChaCha8Rng::seed_from_u64(7));

        for _ in 0..20 {
            let mv = a.choose_move(&game, &state, player).unwrap();
            assert!(game.legal_moves(&state, player).contains(&mv));
            assert_eq!(mv, b.choose_move(&game, &state, player).unwrap());
        }
    }

    #[test]
    fn test_random_player_on_finished_game() {
        let game = ClassicTicTacToe;
        let state =
            ClassicState::from_signs([1, -1, 1, -1, 1, -1, -1, 1, -1], Player::X).unwrap();
        let mut random = RandomPlayer::new(ChaCha8Rng::seed_from_u64(0));

        assert!(matches!(
            random.choose_move(&game, &state, Player::X),
            Err(TicTacError::NoLegalMoves)
        ));
    }

    #[test]
    fn test_boxed_provider() {
        let game = ClassicTicTacToe;
        let (state, player) = game.initial_state();
        let mut boxed: Box<dyn MoveProvider<ClassicTicTacToe>> =
            Box::new(RandomPlayer::new(ChaCha8Rng::seed_from_u64(1)));

        let mv = boxed.choose_move(&game, &state, player).unwrap();
        assert!(mv.0 < 9);
    }
}
