//! The two game models.
//!
//! Both share the board primitives and `line_winner` from `tictac_core`
//! and differ only in how moves are scoped and how the winner is judged.

pub mod classic;
pub mod ultimate;

pub use classic::{ClassicMove, ClassicState, ClassicTicTacToe};
pub use ultimate::{UltimateMove, UltimateState, UltimateTicTacToe};
