use multicon::{parse_players, Game, GameError, GameStatus, Player};

/// Column sequence for two players that fills the 7x6 board without any
/// four-in-a-row.
const DRAW_SEQUENCE: [usize; 42] = [
    0, 0, 0, 0, 3, 0, 3, 0, 5, 1, 1, 2, 1, 1, 5, 1, 1, 4, 4, 2, 4, 2, 2, 3, 2, 3, 2, 5, 3, 6,
    3, 6, 4, 4, 5, 5, 5, 6, 6, 6, 6, 4,
];

fn two_players() -> Game {
    Game::new(vec![Player::new('x'), Player::new('o')])
}

#[test]
fn test_new_game() {
    let game = two_players();
    assert_eq!(game.current_player_index(), 0);
    assert_eq!(game.next_move_number(), 1);
    assert_eq!(game.board().win_length(), 4);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(!game.has_winner());
    assert!(!game.is_draw());
    assert_eq!(game.winner(), Err(GameError::NoWinner));
}

#[test]
fn test_turns_rotate() {
    let mut game = Game::new(parse_players(&["a", "b", "c"]).unwrap());
    let order: Vec<usize> = (0..7)
        .map(|i| {
            let current = game.current_player_index();
            game.place(i % 7);
            current
        })
        .collect();
    assert_eq!(order, vec![0, 1, 2, 0, 1, 2, 0]);
    assert_eq!(game.next_move_number(), 8);
    assert_eq!(game.move_count(), 7);
}

#[test]
fn test_vertical_win_scenario() {
    let mut game = two_players();
    for _ in 0..3 {
        game.place(0);
        game.place(6);
    }
    assert!(!game.has_winner());
    game.place(0);
    assert!(game.has_winner());
    assert_eq!(game.winner(), Ok(0));
    assert_eq!(game.status(), GameStatus::Won { winner: 0 });
    assert!(!game.is_draw());
    assert!(game.is_over());
}

#[test]
fn test_second_player_can_win() {
    let mut game = two_players();
    game.place(3);
    for _ in 0..3 {
        game.place(0);
        game.place(5);
    }
    game.place(0);
    assert_eq!(game.winner(), Ok(1));
}

#[test]
fn test_winner_is_never_overwritten() {
    let mut game = two_players();
    for _ in 0..3 {
        game.place(0);
        game.place(1);
    }
    game.place(0);
    assert_eq!(game.winner(), Ok(0));
    // o completes its own column after the game is decided
    game.place(1);
    assert_eq!(game.winner(), Ok(0));
    assert_eq!(game.try_place(2), Err(GameError::GameOver));
}

#[test]
fn test_draw_scenario() {
    let mut game = two_players();
    for column in DRAW_SEQUENCE {
        assert!(!game.is_over());
        game.place(column);
        assert!(!game.has_winner());
    }
    assert!(game.board().is_board_full());
    assert!(game.is_draw());
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.next_move_number(), 43);
}

#[test]
fn test_four_players_win_with_three() {
    let players = parse_players(&["a", "b", "c", "d"]).unwrap();
    let mut game = Game::new(players);
    assert_eq!(game.board().win_length(), 3);
    for _ in 0..2 {
        for column in 0..4 {
            game.place(column);
        }
    }
    assert!(!game.has_winner());
    game.place(0);
    assert_eq!(game.winner(), Ok(0));
    assert_eq!(game.current_player_index(), 1);
}

#[test]
fn test_try_place_validates() {
    let mut game = Game::with_board_size(vec![Player::new('x'), Player::new('o')], 3, 2);
    assert_eq!(game.try_place(3), Err(GameError::InvalidColumn(3)));
    assert_eq!(game.try_place(0), Ok(GameStatus::InProgress));
    assert_eq!(game.try_place(0), Ok(GameStatus::InProgress));
    assert_eq!(game.try_place(0), Err(GameError::ColumnFull(0)));
    assert_eq!(game.current_player_index(), 0);
    assert_eq!(game.move_count(), 2);
}

#[test]
fn test_small_board_draw() {
    // 2x2 board, win length 4: nobody can win
    let mut game = Game::with_board_size(vec![Player::new('x'), Player::new('o')], 2, 2);
    for column in [0, 0, 1] {
        assert_eq!(game.try_place(column), Ok(GameStatus::InProgress));
    }
    assert_eq!(game.try_place(1), Ok(GameStatus::Draw));
    assert!(game.is_draw());
}

#[test]
fn test_three_players_win_with_three() {
    let mut game = Game::new(parse_players(&["a", "b", "c"]).unwrap());
    assert_eq!(game.board().win_length(), 3);
    for _ in 0..2 {
        for column in 0..3 {
            game.place(column);
        }
    }
    assert!(!game.has_winner());
    game.place(0);
    assert_eq!(game.winner(), Ok(0));
    assert_eq!(game.next_move_number(), 8);
}

#[test]
fn test_empty_board_dimensions_are_an_immediate_draw() {
    let players = vec![Player::new('x'), Player::new('o')];
    let flat = Game::with_board_size(players.clone(), 7, 0);
    assert!(flat.board().is_board_full());
    assert!(flat.board().is_column_full(3));
    assert!(flat.is_draw());
    let mut narrow = Game::with_board_size(players, 0, 6);
    assert!(narrow.is_draw());
    assert_eq!(narrow.try_place(0), Err(GameError::GameOver));
}

#[cfg(feature = "std")]
#[test]
fn test_status_serializes_for_reports() {
    let won = serde_json::to_value(GameStatus::Won { winner: 1 }).unwrap();
    assert_eq!(won, serde_json::json!({ "Won": { "winner": 1 } }));
    assert_eq!(serde_json::to_value(GameStatus::Draw).unwrap(), "Draw");
}
