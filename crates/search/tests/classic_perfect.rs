//! Tests verifying a full-depth negamax plays tic-tac-toe perfectly.
//!
//! Perfect play in tic-tac-toe means:
//! - Never losing against any opponent
//! - Drawing against another perfect player

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictac_core::{Game, Outcome, Player};
use tictac_search::{
    games::{ClassicTicTacToe, UltimateTicTacToe},
    LineHeuristic, MoveProvider, NegamaxPlayer, RandomPlayer, SearchConfig,
};

/// Classic tic-tac-toe never lasts more than nine plies.
const FULL_DEPTH: usize = 9;

fn perfect_player() -> NegamaxPlayer<LineHeuristic> {
    NegamaxPlayer::new(SearchConfig::with_depth(FULL_DEPTH), LineHeuristic::default())
}

/// Play a game to the end, checking every move against the model.
fn play_out<G: Game>(
    game: &G,
    x: &mut dyn MoveProvider<G>,
    o: &mut dyn MoveProvider<G>,
) -> (G::State, Outcome) {
    let (mut state, _) = game.initial_state();

    while !game.is_terminal(&state) {
        let player = game.to_move(&state);
        let provider: &mut dyn MoveProvider<G> = match player {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let mv = provider.choose_move(game, &state, player).unwrap();
        state = game.try_transition(&state, mv, player).unwrap();
    }

    let outcome = game.outcome(&state).unwrap();
    (state, outcome)
}

#[test]
fn test_negamax_never_loses_as_x() {
    let game = ClassicTicTacToe;

    for seed in 0..30 {
        let mut negamax = perfect_player();
        let mut random = RandomPlayer::new(ChaCha8Rng::seed_from_u64(seed + 1000));

        let (state, outcome) = play_out(&game, &mut negamax, &mut random);

        assert_ne!(
            outcome,
            Outcome::Win(Player::O),
            "Negamax (X) lost game with seed {}. Final state:\n{}",
            seed,
            state
        );
    }
}

#[test]
fn test_negamax_never_loses_as_o() {
    let game = ClassicTicTacToe;

    for seed in 0..30 {
        let mut random = RandomPlayer::new(ChaCha8Rng::seed_from_u64(seed + 2000));
        let mut negamax = perfect_player();

        let (state, outcome) = play_out(&game, &mut random, &mut negamax);

        assert_ne!(
            outcome,
            Outcome::Win(Player::X),
            "Negamax (O) lost game with seed {}. Final state:\n{}",
            seed,
            state
        );
    }
}

#[test]
fn test_negamax_vs_negamax_draws() {
    let game = ClassicTicTacToe;
    let mut x = perfect_player();
    let mut o = perfect_player();

    let (state, outcome) = play_out(&game, &mut x, &mut o);

    assert_eq!(outcome, Outcome::Draw, "Perfect players did not draw:\n{}", state);
    assert_eq!(game.payoff(&state).unwrap(), 0);
}

#[test]
fn test_negamax_wins_most_games_against_random() {
    let game = ClassicTicTacToe;
    let mut wins = 0;

    for seed in 0..20 {
        let mut negamax = perfect_player();
        let mut random = RandomPlayer::new(ChaCha8Rng::seed_from_u64(seed + 3000));
        let (_, outcome) = play_out(&game, &mut negamax, &mut random);
        if outcome == Outcome::Win(Player::X) {
            wins += 1;
        }
    }

    // A random O blunders almost every game
    assert!(wins >= 12, "Negamax only won {}/20 games as X", wins);
}

#[test]
fn test_ultimate_game_runs_to_completion() {
    let game = UltimateTicTacToe;

    for seed in 0..3 {
        let mut negamax =
            NegamaxPlayer::new(SearchConfig::with_depth(2), LineHeuristic::default());
        let mut random = RandomPlayer::new(ChaCha8Rng::seed_from_u64(seed));

        let (state, outcome) = play_out(&game, &mut negamax, &mut random);

        assert!(game.is_terminal(&state));
        assert_eq!(game.payoff(&state).unwrap(), outcome.payoff());
    }
}
