#![cfg(feature = "std")]

//! Interactive text session driving one [`Game`].
//!
//! The session reads one command per line: either the quit command or a
//! 1-based column number. Bad input is reported and the prompt repeats
//! without touching the game.

use std::io::{self, BufRead, Write};

use crate::{
    board::Board,
    common::InputError,
    config::QUIT_COMMAND,
    game::{Game, GameStatus},
};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// 0-based column index.
    Column(usize),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Index of the winning player.
    Won(usize),
    Draw,
    Quit,
    /// Input was exhausted before the game ended.
    EndOfInput,
}

/// Parse a line typed by the user. Column numbers are 1-based on input.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line == QUIT_COMMAND {
        return Ok(Command::Quit);
    }
    let number: i64 = line
        .parse()
        .map_err(|_| InputError::NotANumber(line.to_string()))?;
    if number < 1 {
        return Err(InputError::InvalidColumn(number));
    }
    usize::try_from(number - 1)
        .map(Command::Column)
        .map_err(|_| InputError::InvalidColumn(number))
}

/// Check that a 0-based column can take a tile on `board`.
pub fn check_column(board: &Board, column: usize) -> Result<usize, InputError> {
    if !board.is_valid_column_index(column) {
        let number = i64::try_from(column).map_or(i64::MAX, |c| c.saturating_add(1));
        return Err(InputError::InvalidColumn(number));
    }
    if board.is_column_full(column) {
        return Err(InputError::ColumnFull(column + 1));
    }
    Ok(column)
}

pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Give back the game and the output sink.
    pub fn into_parts(self) -> (Game, W) {
        (self.game, self.output)
    }

    fn print_board(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", self.game.board())
    }

    fn prompt(&mut self) -> io::Result<()> {
        let index = self.game.current_player_index();
        writeln!(
            self.output,
            "Move {}, player {} ({}):",
            self.game.next_move_number(),
            index + 1,
            self.game.current_player()
        )?;
        self.output.flush()
    }

    /// Play until someone wins, the board fills up, the user quits or input
    /// runs out.
    pub fn run(&mut self) -> io::Result<Outcome> {
        log::info!(
            "session started with {} players, win length {}",
            self.game.players().len(),
            self.game.board().win_length()
        );
        self.print_board()?;
        let outcome = loop {
            self.prompt()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break Outcome::EndOfInput;
            }
            if let Some(outcome) = self.handle_line(&line)? {
                break outcome;
            }
        };
        log::info!("session ended: {:?}", outcome);
        Ok(outcome)
    }

    /// Apply one input line. Returns the outcome once the session is over.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Option<Outcome>> {
        let command = parse_command(line).and_then(|cmd| match cmd {
            Command::Quit => Ok(None),
            Command::Column(c) => check_column(self.game.board(), c).map(Some),
        });
        let column = match command {
            Ok(Some(column)) => column,
            Ok(None) => return Ok(Some(Outcome::Quit)),
            Err(e) => {
                log::debug!("rejected input {:?}: {:?}", line.trim(), e);
                writeln!(self.output, "{}", e)?;
                return Ok(None);
            }
        };

        self.game.place(column);
        self.print_board()?;

        match self.game.status() {
            GameStatus::Won { winner } => {
                writeln!(self.output, "Winner: player {}", winner + 1)?;
                Ok(Some(Outcome::Won(winner)))
            }
            GameStatus::Draw => {
                writeln!(self.output, "Draw!")?;
                Ok(Some(Outcome::Draw))
            }
            GameStatus::InProgress => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_and_columns() {
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("quit\n"), Ok(Command::Quit));
        assert_eq!(parse_command("1"), Ok(Command::Column(0)));
        assert_eq!(parse_command(" 7 \r\n"), Ok(Command::Column(6)));
    }

    #[test]
    fn parse_rejects_garbage_and_non_positive() {
        assert_eq!(
            parse_command("abc"),
            Err(InputError::NotANumber("abc".to_string()))
        );
        assert_eq!(parse_command("0"), Err(InputError::InvalidColumn(0)));
        assert_eq!(parse_command("-2"), Err(InputError::InvalidColumn(-2)));
        assert!(parse_command("").is_err());
    }

    #[test]
    fn huge_column_numbers_are_invalid() {
        let board = Board::new(4);
        let line = i64::MAX.to_string();
        let result = parse_command(&line).and_then(|cmd| match cmd {
            Command::Column(c) => check_column(&board, c),
            Command::Quit => unreachable!(),
        });
        assert_eq!(result, Err(InputError::InvalidColumn(i64::MAX)));
        assert!(matches!(
            check_column(&board, usize::MAX),
            Err(InputError::InvalidColumn(_))
        ));
        assert_eq!(
            parse_command(&i64::MIN.to_string()),
            Err(InputError::InvalidColumn(i64::MIN))
        );
        assert!(matches!(
            parse_command("4294967297").and_then(|cmd| match cmd {
                Command::Column(c) => check_column(&board, c),
                Command::Quit => unreachable!(),
            }),
            Err(InputError::InvalidColumn(4294967297))
        ));
    }
}
