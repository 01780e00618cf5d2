#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, Console, GameEngine};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;

/// Two-player Battleship on a shared terminal.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log level for stderr output (overrides BROADSIDE_LOG).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LevelFilter>,
    /// Keep the board on screen when the move passes.
    #[arg(long)]
    no_clear: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock()).with_clear_screen(!cli.no_clear);
    let mut engine = GameEngine::new();
    let winner = console.run(&mut engine)?;
    log::info!(
        "{} won with {} shots",
        winner,
        engine.shots_fired(winner)
    );
    Ok(())
}
