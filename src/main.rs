#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use multicon::{init_logging, parse_players, Game, Outcome, Session, DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[cfg(feature = "std")]
use clap::{builder::TypedValueParser, Parser};

#[derive(Parser)]
#[command(author, version, about = "Connect-four for two to six players", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Single-character player tokens, in turn order (default: x o).
    tokens: Vec<String>,
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    height: usize,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let players = parse_players(&cli.tokens).map_err(|e| anyhow::anyhow!(e))?;
    let game = Game::with_board_size(players, cli.width, cli.height);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(game, stdin.lock(), stdout.lock());
    match session.run()? {
        Outcome::EndOfInput => log::info!("input closed before the game ended"),
        outcome => log::debug!("game finished: {:?}", outcome),
    }
    Ok(())
}
