mod cli;
mod command;
mod config;
mod error;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(command_line.log_level())
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::Config::load().wrap_err("Load configuration error")?;

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Serve => Box::new(command::ServeCommand::new(cfg)),
            cli::Commands::Index { root_path } => {
                Box::new(command::IndexCommand::new(cfg, root_path))
            }
            cli::Commands::Changes { root_path } => {
                Box::new(command::ChangesCommand::new(cfg, root_path))
            }
            cli::Commands::Search { text, root_path } => {
                Box::new(command::SearchCommand::new(cfg, text, root_path))
            }
        };
        cmd.execute().await?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}
