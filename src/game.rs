use crate::{
    board::Board,
    common::GameError,
    config::{winning_line_length, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    player::Player,
};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    /// `winner` is the index of the winning player.
    Won { winner: usize },
    Draw,
}

/// Turn order, move counting and the winner of a single game.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: Vec<Player>,
    current_player: usize,
    move_count: usize,
    winner: Option<usize>,
}

impl Game {
    /// Create a game on the default board. `players` must hold at least two
    /// distinct players; see [`crate::parse_players`].
    pub fn new(players: Vec<Player>) -> Self {
        Self::with_board_size(players, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a game on a `width` x `height` board.
    pub fn with_board_size(players: Vec<Player>, width: usize, height: usize) -> Self {
        debug_assert!(!players.is_empty(), "a game needs players");
        let win_length = winning_line_length(players.len());
        log::debug!(
            "new game: {} players, {}x{} board, win length {}",
            players.len(),
            width,
            height,
            win_length
        );
        Self {
            board: Board::with_size(win_length, width, height),
            players,
            current_player: 0,
            move_count: 0,
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<Player> {
        self.players.get(index).copied()
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    pub fn current_player(&self) -> Player {
        self.players[self.current_player]
    }

    /// Moves made so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// 1-based number of the move about to be made.
    pub fn next_move_number(&self) -> usize {
        self.move_count + 1
    }

    /// Drop the current player's tile into `column_index` and pass the turn.
    ///
    /// The column must be valid and not full; no checks are made here. Use
    /// [`Game::try_place`] for a validated move.
    pub fn place(&mut self, column_index: usize) {
        let player = self.current_player();
        let won = self.board.place_tile(player, column_index);
        if won && self.winner.is_none() {
            log::debug!("player {} ({}) wins", self.current_player + 1, player);
            self.winner = Some(self.current_player);
        }
        self.current_player = (self.current_player + 1) % self.players.len();
        self.move_count += 1;
    }

    /// Validated move: rejects moves after the game ended, out-of-range and
    /// full columns without touching any state.
    pub fn try_place(&mut self, column_index: usize) -> Result<GameStatus, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.board.is_valid_column_index(column_index) {
            return Err(GameError::InvalidColumn(column_index));
        }
        if self.board.is_column_full(column_index) {
            return Err(GameError::ColumnFull(column_index));
        }
        self.place(column_index);
        Ok(self.status())
    }

    pub fn has_winner(&self) -> bool {
        self.winner.is_some()
    }

    /// Index of the winning player; `NoWinner` if nobody has won.
    pub fn winner(&self) -> Result<usize, GameError> {
        self.winner.ok_or(GameError::NoWinner)
    }

    pub fn is_draw(&self) -> bool {
        self.board.is_board_full() && !self.has_winner()
    }

    pub fn is_over(&self) -> bool {
        self.has_winner() || self.is_draw()
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(winner) => GameStatus::Won { winner },
            None if self.board.is_board_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}
