//! Commonly used types and utilities for ease of import.

pub use crate::{parse_players, Board, Cell, Game, GameError, GameStatus, Player};

#[cfg(feature = "std")]
pub use crate::{init_logging, Outcome, Session};
