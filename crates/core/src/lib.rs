//! Tic-tac-toe core - game abstraction and board primitives
//!
//! This crate provides the `Game` trait that both tic-tac-toe variants
//! implement and that the negamax engine searches over.
//!
//! # Types
//!
//! - [`Game`] - Trait for two-player zero-sum game models
//! - [`Player`] - The two sides, encoded as +1 (X) and -1 (O)
//! - [`Board`] - A 3x3 grid of [`Cell`]s
//! - [`Outcome`] - Result of a finished game

mod error;
mod game;
mod types;

pub use error::{Result, TicTacError};
pub use game::Game;
pub use types::{line_winner, Board, Cell, Outcome, Player, LINES};
