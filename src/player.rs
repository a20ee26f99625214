//! Players and validation of the tokens that name them.

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};
use core::fmt;

use crate::common::ConfigError;
use crate::config::{default_players, MAX_PLAYERS, MIN_PLAYERS};

/// A participant identified by its display token.
///
/// Two players are the same player iff their tokens are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    token: char,
}

impl Player {
    pub const fn new(token: char) -> Self {
        Self { token }
    }

    pub fn token(&self) -> char {
        self.token
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}

/// Build the ordered player list from raw tokens.
///
/// No tokens yields the default `x`/`o` pair. Otherwise every token must be a
/// single character, unique, and there must be between two and six of them.
pub fn parse_players<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Player>, ConfigError> {
    if tokens.is_empty() {
        return Ok(default_players().to_vec());
    }
    if tokens.len() > MAX_PLAYERS {
        return Err(ConfigError::TooManyPlayers {
            count: tokens.len(),
            max: MAX_PLAYERS,
        });
    }

    let mut players: Vec<Player> = Vec::with_capacity(tokens.len());
    for raw in tokens {
        let raw = raw.as_ref();
        let mut chars = raw.chars();
        let token = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Err(ConfigError::InvalidToken(raw.to_string())),
        };
        let player = Player::new(token);
        if players.contains(&player) {
            return Err(ConfigError::DuplicateToken(token));
        }
        players.push(player);
    }

    if players.len() < MIN_PLAYERS {
        return Err(ConfigError::TooFewPlayers {
            count: players.len(),
            min: MIN_PLAYERS,
        });
    }
    Ok(players)
}
