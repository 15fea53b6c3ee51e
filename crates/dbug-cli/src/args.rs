use crate::types::{KindArg, LogLevel};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dbug")]
#[command(about = "Render values into collapsible HTML dumps", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Config file (defaults to $DBUG_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render files (or stdin) as dumps
    Render {
        /// Input files; stdin when omitted
        files: Vec<PathBuf>,

        #[arg(long, default_value = "auto")]
        kind: KindArg,

        #[arg(long)]
        title: Option<String>,

        /// Start dumps closed
        #[arg(long)]
        collapsed: bool,

        #[arg(long)]
        max_depth: Option<usize>,

        /// Print only the dump blocks, without the page and dock
        #[arg(long)]
        fragment: bool,

        /// Label of the first dump; later inputs count up from it
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        sequence: i64,
    },
}
