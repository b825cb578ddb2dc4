//! Depth-limited negamax search for tic-tac-toe games.
//!
//! This crate provides the two game models (classic and Ultimate
//! tic-tac-toe), a line-counting heuristic, and a negamax engine that works
//! with any game implementing the `tictac_core::Game` trait.
//!
//! # Features
//!
//! - **Generic**: Works with any `Game` implementation
//! - **Deterministic**: Ties go to the first move in `legal_moves` order
//! - **Alpha-beta**: Optional pruning that never changes the chosen move
//! - **Parallel root**: Optional rayon exploration of the root moves
//! - **Move providers**: Negamax and random players behind one trait
//!
//! # Example
//!
//! ```
//! use tictac_search::{best_move, games::ClassicTicTacToe, LineHeuristic};
//! use tictac_core::Game;
//!
//! let game = ClassicTicTacToe;
//! let (state, player) = game.initial_state();
//!
//! let mv = best_move(&game, &state, player, 3, &LineHeuristic::default()).unwrap();
//! assert!(game.legal_moves(&state, player).contains(&mv));
//! ```

pub mod config;
pub mod evaluator;
pub mod games;
pub mod player;
pub mod search;

pub use config::SearchConfig;
pub use evaluator::{Evaluator, LineHeuristic, LineWeights};
pub use player::{MoveProvider, NegamaxPlayer, RandomPlayer};
pub use search::{best_move, Negamax, SearchResult};
