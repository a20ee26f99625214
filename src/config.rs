//! Board dimensions, player limits and the win-length rule.

use crate::player::Player;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// Longest line ever required to win, regardless of player count.
pub const MAX_WIN_LENGTH: usize = 4;
pub const WIN_CONDITION_DIVISOR: usize = 9;

/// Tokens used when no players are given on the command line.
pub const DEFAULT_TOKENS: [char; 2] = ['x', 'o'];

/// Input line that ends an interactive session.
pub const QUIT_COMMAND: &str = "quit";

/// Default two-player set built from [`DEFAULT_TOKENS`].
pub fn default_players() -> [Player; 2] {
    DEFAULT_TOKENS.map(Player::new)
}

/// Number of tiles needed in one line to win with `player_count` players.
///
/// Computes `min(4, ceil(9 / n))`. The line shrinks as more players share
/// the board; from nine players upward a single tile wins. A count of zero
/// is treated as one.
pub const fn winning_line_length(player_count: usize) -> usize {
    let n = if player_count == 0 { 1 } else { player_count };
    let len = WIN_CONDITION_DIVISOR.div_ceil(n);
    if len < MAX_WIN_LENGTH {
        len
    } else {
        MAX_WIN_LENGTH
    }
}
