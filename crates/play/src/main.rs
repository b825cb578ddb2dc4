//! Command-line front end for classic and Ultimate tic-tac-toe.
//!
//! `play` runs a single match against the negamax engine (or lets the engine
//! play itself); `arena` plays many seeded matches in parallel and reports
//! how the engine fared against a chosen opponent.

mod driver;
mod human;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use driver::play_match;
use flexi_logger::Logger;
use human::HumanPlayer;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::fmt::Display;
use std::io;
use std::str::FromStr;
use std::time::Instant;
use tictac_core::{Game, Player, TicTacError};
use tictac_search::games::{ClassicTicTacToe, UltimateTicTacToe};
use tictac_search::{
    Evaluator, LineHeuristic, MoveProvider, NegamaxPlayer, RandomPlayer, SearchConfig,
};

/// Tic-tac-toe and Ultimate tic-tac-toe against a negamax engine.
#[derive(Parser)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe variants against a negamax engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match at the terminal.
    Play {
        /// Which variant to play.
        #[arg(short, long, value_enum, default_value_t = GameKind::Classic)]
        game: GameKind,

        /// Side taken by the human player (X always moves first).
        #[arg(long, value_enum, default_value_t = Side::X)]
        human: Side,

        /// Engine search depth in plies.
        #[arg(short, long, default_value = "3")]
        depth: usize,
    },

    /// Play many engine matches and report the totals.
    Arena {
        /// Which variant to play.
        #[arg(short, long, value_enum, default_value_t = GameKind::Classic)]
        game: GameKind,

        /// Number of matches.
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// Engine search depth in plies.
        #[arg(short, long, default_value = "3")]
        depth: usize,

        /// Opponent faced by the engine.
        #[arg(short, long, value_enum, default_value_t = Opponent::Random)]
        opponent: Opponent,

        /// Search depth of a negamax opponent.
        #[arg(long, default_value = "1")]
        opponent_depth: usize,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GameKind {
    Classic,
    Ultimate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Side {
    X,
    O,
    /// Engine against engine.
    #[value(name = "none")]
    Nobody,
}

impl Side {
    fn player(self) -> Option<Player> {
        match self {
            Side::X => Some(Player::X),
            Side::O => Some(Player::O),
            Side::Nobody => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Random,
    Negamax,
}

/// Arena totals from the engine's point of view.
#[derive(Debug, Default, PartialEq)]
struct ArenaResult {
    wins: usize,
    losses: usize,
    draws: usize,
    total_games: usize,
}

impl ArenaResult {
    fn record(&mut self, engine_payoff: i8) {
        match engine_payoff {
            1 => self.wins += 1,
            -1 => self.losses += 1,
            _ => self.draws += 1,
        }
        self.total_games += 1;
    }

    fn percent(&self, count: usize) -> f32 {
        if self.total_games == 0 {
            return 0.0;
        }
        count as f32 / self.total_games as f32 * 100.0
    }
}

fn engine(depth: usize) -> NegamaxPlayer<LineHeuristic> {
    NegamaxPlayer::new(SearchConfig::with_depth(depth), LineHeuristic::default())
}

/// Run one interactive (or engine-only) match on stdin/stdout.
fn cmd_play<G>(game: G, human: Side, depth: usize) -> Result<()>
where
    G: Game,
    G::State: Display,
    G::Move: FromStr<Err = TicTacError> + Display,
    LineHeuristic: Evaluator<G>,
{
    let human_player = human.player();
    let provider_for = |player: Player| -> Box<dyn MoveProvider<G>> {
        if human_player == Some(player) {
            Box::new(HumanPlayer::new(io::stdin().lock(), io::stdout()))
        } else {
            Box::new(engine(depth))
        }
    };
    let mut x = provider_for(Player::X);
    let mut o = provider_for(Player::O);

    match human_player {
        Some(player) => println!("X always starts and you play {}", player),
        None => println!("Engine against engine at depth {}", depth),
    }

    let report = play_match(&game, &mut *x, &mut *o, |_, player, mv| {
        if human_player != Some(player) {
            println!("{} plays {}", player, mv);
        }
    })
    .context("Match aborted")?;

    println!("\nGAME OVER\n");
    println!("{}", report.state);

    let message = match (report.winner(), human_player) {
        (None, _) => "Draw".to_string(),
        (Some(winner), Some(player)) if winner == player => "You won".to_string(),
        (Some(_), Some(_)) => "You lost".to_string(),
        (Some(winner), None) => format!("{} wins", winner),
    };
    println!("\n{} after {} moves", message, report.plies());

    Ok(())
}

/// Play `num_games` seeded matches in parallel, alternating the engine's side.
fn run_arena<G>(
    game: &G,
    num_games: usize,
    depth: usize,
    opponent: Opponent,
    opponent_depth: usize,
    seed: u64,
) -> Result<ArenaResult>
where
    G: Game,
    LineHeuristic: Evaluator<G>,
{
    let payoffs = (0..num_games)
        .into_par_iter()
        .map(|i| -> tictac_core::Result<i8> {
            let engine_plays_x = i % 2 == 0;
            let game_seed = seed.wrapping_add(i as u64 * 1000);

            let mut negamax = engine(depth);
            let mut rival: Box<dyn MoveProvider<G>> = match opponent {
                Opponent::Random => Box::new(RandomPlayer::new(ChaCha8Rng::seed_from_u64(game_seed))),
                Opponent::Negamax => Box::new(engine(opponent_depth)),
            };

            let (report, engine_side) = if engine_plays_x {
                (play_match(game, &mut negamax, &mut *rival, |_, _, _| {})?, Player::X)
            } else {
                (play_match(game, &mut *rival, &mut negamax, |_, _, _| {})?, Player::O)
            };
            Ok(report.payoff * engine_side.sign())
        })
        .collect::<tictac_core::Result<Vec<i8>>>()
        .context("Arena match failed")?;

    let mut result = ArenaResult::default();
    for payoff in payoffs {
        result.record(payoff);
    }
    Ok(result)
}

fn cmd_arena<G>(
    game: G,
    num_games: usize,
    depth: usize,
    opponent: Opponent,
    opponent_depth: usize,
    seed: u64,
) -> Result<()>
where
    G: Game,
    LineHeuristic: Evaluator<G>,
{
    let rival = match opponent {
        Opponent::Random => "random".to_string(),
        Opponent::Negamax => format!("negamax depth {}", opponent_depth),
    };
    println!(
        "Playing {} games: negamax depth {} vs {}",
        num_games, depth, rival
    );
    println!("Seed: {}", seed);

    let start = Instant::now();
    let result = run_arena(&game, num_games, depth, opponent, opponent_depth, seed)?;

    println!("\nCompleted in {:.2}s", start.elapsed().as_secs_f64());
    println!("================================================");
    println!("Engine wins:   {} ({:.1}%)", result.wins, result.percent(result.wins));
    println!("Engine losses: {} ({:.1}%)", result.losses, result.percent(result.losses));
    println!("Draws:         {} ({:.1}%)", result.draws, result.percent(result.draws));

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.format(flexi_logger::colored_default_format).start())
        .context("Failed to start logger")?;

    match cli.command {
        Commands::Play { game, human, depth } => match game {
            GameKind::Classic => cmd_play(ClassicTicTacToe, human, depth),
            GameKind::Ultimate => cmd_play(UltimateTicTacToe, human, depth),
        },

        Commands::Arena {
            game,
            games,
            depth,
            opponent,
            opponent_depth,
            seed,
        } => match game {
            GameKind::Classic => {
                cmd_arena(ClassicTicTacToe, games, depth, opponent, opponent_depth, seed)
            }
            GameKind::Ultimate => {
                cmd_arena(UltimateTicTacToe, games, depth, opponent, opponent_depth, seed)
            }
        },
    }
}
