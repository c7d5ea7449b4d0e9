use std::io;
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use connect4::config::Config;
use connect4::console::Console;
use connect4::{setup, Result};

fn main() {
    let config = Config::parse();

    // stdout belongs to the game; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&config) {
        error!(%err, "session ended early");
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut term = Console::new(stdin.lock(), io::stdout());
    let mut game = setup::start(config, &mut term)?;
    game.run(&mut term)?;
    Ok(())
}
