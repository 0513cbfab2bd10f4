//! Command-line interface for strictly_river.

use clap::{Parser, Subcommand};

/// Strictly River - the missionaries and cannibals crossing puzzle
#[derive(Parser, Debug)]
#[command(name = "strictly_river")]
#[command(about = "Get three missionaries and three cannibals across the river", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "strictly_river.toml")]
    pub config: std::path::PathBuf,

    /// Print snapshots as JSON instead of the text scene
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging for the puzzle engine
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on the terminal
    Play {
        /// Show the length of the shortest remaining solution after each crossing
        #[arg(long)]
        hints: bool,
    },

    /// Print the shortest solution from the start
    Solve {
        /// Drive the solution through a session and show every step
        #[arg(long)]
        play: bool,
    },

    /// Dump every safe configuration and its transitions
    Graph,
}
