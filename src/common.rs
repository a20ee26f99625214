//! Common types for MultiCon: configuration, game and input errors.

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Errors detected while building the player list, before any game exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// More tokens were supplied than the board supports.
    TooManyPlayers { count: usize, max: usize },
    /// A game needs at least `min` players.
    TooFewPlayers { count: usize, min: usize },
    /// Token is not exactly one character.
    InvalidToken(String),
    /// The same token was given twice.
    DuplicateToken(char),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::TooManyPlayers { count, max } => {
                write!(f, "Too many players: {} given, at most {} allowed", count, max)
            }
            ConfigError::TooFewPlayers { count, min } => {
                write!(f, "Too few players: {} given, at least {} required", count, min)
            }
            ConfigError::InvalidToken(token) => {
                write!(f, "Invalid player name '{}': must be a single character", token)
            }
            ConfigError::DuplicateToken(token) => write!(f, "Duplicate player name '{}'", token),
        }
    }
}

/// Errors returned by checked game and board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The winner was queried although nobody has won.
    NoWinner,
    /// Column index is outside the board.
    InvalidColumn(usize),
    /// Column has no empty cell left.
    ColumnFull(usize),
    /// A move was attempted after the game ended.
    GameOver,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::NoWinner => write!(f, "Winner was queried although there is no winner"),
            GameError::InvalidColumn(c) => write!(f, "Column {} is out of range", c),
            GameError::ColumnFull(c) => write!(f, "Column {} is full", c),
            GameError::GameOver => write!(f, "The game is already over"),
        }
    }
}

/// Recoverable errors in a line typed by the user during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input is neither the quit command nor an integer.
    NotANumber(String),
    /// 1-based column number outside the board.
    InvalidColumn(i64),
    /// 1-based column number of a full column.
    ColumnFull(usize),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::NotANumber(_) | InputError::InvalidColumn(_) => {
                write!(f, "ERROR: Invalid index.")
            }
            InputError::ColumnFull(_) => write!(f, "ERROR: Selected column is full."),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
