//! Interactive move provider reading moves from a text stream.

use log::debug;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tictac_core::{Game, Player, Result, TicTacError};
use tictac_search::MoveProvider;

/// Prompts for moves on `output` and reads them from `input`.
///
/// Bad input never leaves this provider: unparsable text and illegal moves
/// are reported and the prompt is shown again. Only end of input or an I/O
/// failure is returned as an error.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TicTacError::InputClosed);
        }
        Ok(line)
    }
}

impl<G, R, W> MoveProvider<G> for HumanPlayer<R, W>
where
    G: Game,
    G::State: Display,
    G::Move: FromStr<Err = TicTacError> + Display,
    R: BufRead,
    W: Write,
{
    fn choose_move(&mut self, game: &G, state: &G::State, player: Player) -> Result<G::Move> {
        let moves = game.legal_moves(state, player);
        if moves.is_empty() {
            return Err(TicTacError::NoLegalMoves);
        }
        let listed = moves
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");

        writeln!(self.output, "Current board:\n{}", state)?;
        writeln!(self.output, "Player: {}", player)?;
        writeln!(self.output, "Legal moves: {}", listed)?;

        loop {
            write!(self.output, "Move: ")?;
            self.output.flush()?;

            let line = self.read_line()?;
            match line.parse::<G::Move>() {
                Ok(mv) if moves.contains(&mv) => return Ok(mv),
                Ok(mv) => {
                    debug!("Rejected illegal move {} from input", mv);
                    writeln!(self.output, "{} is not a legal move", mv)?;
                }
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}
