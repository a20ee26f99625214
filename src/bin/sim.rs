use multicon::{init_logging, parse_players, Game, GameStatus};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

/// Play one game with uniformly random column choices and print a JSON summary.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <seed> [tokens...]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let players = parse_players(&args[2..])?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(players);

    while !game.is_over() {
        let open: Vec<usize> = game.board().open_columns().collect();
        let column = open[rng.random_range(0..open.len())];
        game.try_place(column)?;
    }

    let status = game.status();
    let winner = match status {
        GameStatus::Won { winner } => game.player(winner).map(|p| p.to_string()),
        _ => None,
    };
    let board: Vec<String> = game
        .board()
        .to_string()
        .lines()
        .map(str::to_string)
        .collect();

    let result = json!({
        "status": status,
        "winner": winner,
        "moves": game.move_count(),
        "win_length": game.board().win_length(),
        "board": board,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
