use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the index and search operations over tarpc
    Serve,
    /// Rebuild the spreadsheet index and print it
    Index {
        /// 要索引的目录（可选，不提供则使用配置文件中的 data-dir）
        root_path: Option<PathBuf>
    },
    /// Check an empty index for changes (every spreadsheet is reported as new)
    Changes {
        root_path: Option<PathBuf>
    },
    /// Search every cell of every spreadsheet for a piece of text
    Search {
        /// Text to look for (case-insensitive)
        text: String,
        root_path: Option<PathBuf>
    }
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::INFO,
            1 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
