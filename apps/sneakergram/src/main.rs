mod cli;
mod command;
mod config;
mod error;
mod render;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use tracing::Level;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;

    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let cfg = config::Config::load().context("Load configuration error")?;

    if let Some(command) = command_line.command {
        let source = command::EngineSource::new(cfg, command_line.data);
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Search { query, filter } => {
                Box::new(command::SearchCommand::new(source, query, filter))
            }
            cli::Commands::Trending => Box::new(command::TrendingCommand::new(source)),
            cli::Commands::Interactive => Box::new(command::InteractiveCommand::new(source)),
        };
        cmd.execute().await?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}
