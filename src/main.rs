//! pseudoqui binary
//!
//! Serves the game over HTTP by default, or plays it in the terminal.
use clap::Parser;
use pseudoqui::config::Cli;
use pseudoqui::config::Command;
use pseudoqui::hosting::Server;
use pseudoqui::play::Console;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pseudoqui::log()?;
    pseudoqui::kys();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => Server::run(cli.config).await,
        Command::Play => Console::from(cli.config.engine()?).run().await,
        Command::Show => Ok(pseudoqui::play::show(&cli.config.engine()?).await),
    }
}
