//! Runs a match between two move providers.

use log::{debug, warn};
use tictac_core::{Game, Player, Result, TicTacError};
use tictac_search::MoveProvider;

/// How many times a provider may propose an illegal move in a row before
/// the match is abandoned.
pub const MAX_ATTEMPTS: usize = 3;

/// Summary of a finished match.
#[derive(Clone, Debug)]
pub struct MatchReport<S, M> {
    /// Final (terminal) state.
    pub state: S,

    /// +1 if X won, -1 if O won, 0 for a draw.
    pub payoff: i8,

    /// Moves in the order they were played, X first.
    pub moves: Vec<M>,
}

impl<S, M> MatchReport<S, M> {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    pub fn winner(&self) -> Option<Player> {
        Player::from_sign(self.payoff)
    }
}

/// Play `game` from its initial state until it ends.
///
/// Every proposed move is checked against the model. An illegal proposal is
/// logged and the same provider is asked again, at most `MAX_ATTEMPTS` times.
/// `observe` sees each accepted move together with the state it was played in.
pub fn play_match<G, F>(
    game: &G,
    x: &mut dyn MoveProvider<G>,
    o: &mut dyn MoveProvider<G>,
    mut observe: F,
) -> Result<MatchReport<G::State, G::Move>>
where
    G: Game,
    F: FnMut(&G::State, Player, G::Move),
{
    let (mut state, _) = game.initial_state();
    let mut moves = Vec::new();

    while !game.is_terminal(&state) {
        let player = game.to_move(&state);
        let provider: &mut dyn MoveProvider<G> = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };

        let mut attempt = 0;
        let (mv, next) = loop {
            let mv = provider.choose_move(game, &state, player)?;
            match game.try_transition(&state, mv, player) {
                Ok(next) => break (mv, next),
                Err(TicTacError::IllegalMove(reason)) if attempt + 1 < MAX_ATTEMPTS => {
                    attempt += 1;
                    warn!("Rejected move {:?} for {}: {}", mv, player, reason);
                }
                Err(e) => return Err(e),
            }
        };

        observe(&state, player, mv);
        moves.push(mv);
        state = next;
    }

    let payoff = game.payoff(&state)?;
    debug!("Match finished after {} plies, payoff {}", moves.len(), payoff);

    Ok(MatchReport {
        state,
        payoff,
        moves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tictac_search::games::{ClassicMove, ClassicTicTacToe, UltimateTicTacToe};
    use tictac_search::{LineHeuristic, NegamaxPlayer, RandomPlayer, SearchConfig};

    /// Plays a fixed list of moves, legal or not.
    struct Scripted(Vec<u8>);

    impl MoveProvider<ClassicTicTacToe> for Scripted {
        fn choose_move(
            &mut self,
            _game: &ClassicTicTacToe,
            _state: &<ClassicTicTacToe as Game>::State,
            _player: Player,
        ) -> Result<ClassicMove> {
            if self.0.is_empty() {
                return Err(TicTacError::NoLegalMoves);
            }
            Ok(ClassicMove(self.0.remove(0)))
        }
    }

    #[test]
    fn test_random_match_reaches_end() {
        let game = UltimateTicTacToe;
        let mut x = RandomPlayer::new(ChaCha8Rng::seed_from_u64(1));
        let mut o = RandomPlayer::new(ChaCha8Rng::seed_from_u64(2));
        let mut seen = 0;

        let report = play_match(&game, &mut x, &mut o, |_, _, _| seen += 1).unwrap();

        assert!(game.is_terminal(&report.state));
        assert_eq!(report.plies(), seen);
        assert_eq!(report.plies(), report.state.occupied());
        assert_eq!(report.winner().map_or(0, Player::sign), report.payoff);
    }

    #[test]
    fn test_scripted_win_for_x() {
        let game = ClassicTicTacToe;
        let mut x = Scripted(vec![0, 1, 2]);
        let mut o = Scripted(vec![3, 4]);
        let mut players = Vec::new();

        let report = play_match(&game, &mut x, &mut o, |_, p, _| players.push(p)).unwrap();

        assert_eq!(report.payoff, 1);
        assert_eq!(report.winner(), Some(Player::X));
        assert_eq!(
            report.moves,
            vec![ClassicMove(0), ClassicMove(3), ClassicMove(1), ClassicMove(4), ClassicMove(2)]
        );
        assert_eq!(players, vec![Player::X, Player::O, Player::X, Player::O, Player::X]);
    }

    #[test]
    fn test_illegal_move_is_retried() {
        let game = ClassicTicTacToe;
        // O first tries X's cell, then plays legally
        let mut x = Scripted(vec![0, 1, 2]);
        let mut o = Scripted(vec![0, 3, 4]);

        let report = play_match(&game, &mut x, &mut o, |_, _, _| {}).unwrap();
        assert_eq!(report.payoff, 1);
        assert_eq!(report.plies(), 5);
    }

    #[test]
    fn test_repeated_illegal_moves_abort() {
        let game = ClassicTicTacToe;
        let mut x = Scripted(vec![4]);
        let mut o = Scripted(vec![4, 4, 4, 0]);

        let result = play_match(&game, &mut x, &mut o, |_, _, _| {});
        assert!(matches!(result, Err(TicTacError::IllegalMove(_))));
    }

    #[test]
    fn test_engines_draw() {
        let game = ClassicTicTacToe;
        let mut x = NegamaxPlayer::new(SearchConfig::with_depth(9), LineHeuristic::default());
        let mut o = NegamaxPlayer::new(SearchConfig::with_depth(9), LineHeuristic::default());

        let report = play_match(&game, &mut x, &mut o, |_, _, _| {}).unwrap();
        assert_eq!(report.payoff, 0);
        assert_eq!(report.plies(), 9);
    }
}
