use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use knightmind::prelude::*;

fn main() -> Result<()>
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let options = Options::parse();

    // Set the logger to write-and-flush so that log lines don't interleave with the board output.
    let _logger = Logger::try_with_env_or_str(options.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Default)
        .start()?;

    print_header();

    let result = match options.command
    {
        | Command::Tour(opts) => cli::tour(opts),
        | Command::Game(opts) => cli::game(opts),
    };

    if let Err(e) = result
    {
        log::error!("fatal error: {}", e);
    }

    Ok(())
}

fn print_header()
{
    log::info!("starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}
