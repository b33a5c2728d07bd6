//! # Pathlens CLI Module
//!
//! This module implements the CLI interface for Pathlens.
//!
//! ## Available Commands
//!
//! - `replay` - Run a search and animate its recorded steps
//! - `search` - Run a search and show the result immediately
//! - `tree` - Show the graph as a rooted spanning tree
//! - `check` - Validate a graph file and show its contents
//! - `sample` - Emit the built-in sample graph

mod commands;

use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Pathlens - Step Replay Visualizer
///
/// Edits stay local and validated; algorithms run on an external search
/// service, and their recorded steps replay here at a fixed cadence.
#[derive(Parser, Debug)]
#[command(name = "pathlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Graph file to operate on (TOML); the sample graph when omitted
    #[arg(short = 'f', long, global = true)]
    pub file: Option<PathBuf>,

    /// Base URL of the search service
    #[arg(
        short = 'S',
        long,
        global = true,
        default_value = "http://127.0.0.1:8000"
    )]
    pub server: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a search and animate its recorded steps
    Replay {
        /// Source node label
        #[arg(short, long)]
        source: String,

        /// Destination node label
        #[arg(short, long)]
        destination: String,

        /// Algorithm (bfs, dfs, dijkstra, a_star, best_first, hill_climbing)
        #[arg(short, long, default_value = "bfs")]
        algorithm: String,

        /// Milliseconds between steps
        #[arg(short, long, default_value_t = pathlens_core::primitives::DEFAULT_STEP_INTERVAL_MS)]
        interval_ms: u64,
    },

    /// Run a search and show the result immediately, skipping the animation
    Search {
        /// Source node label
        #[arg(short, long)]
        source: String,

        /// Destination node label
        #[arg(short, long)]
        destination: String,

        /// Algorithm (bfs, dfs, dijkstra, a_star, best_first, hill_climbing)
        #[arg(short, long, default_value = "bfs")]
        algorithm: String,
    },

    /// Show the graph as a rooted spanning tree
    Tree,

    /// Validate a graph file and show its contents
    Check,

    /// Emit the built-in sample graph
    Sample {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), AppError> {
    let file = cli.file.as_deref();
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Replay {
            source,
            destination,
            algorithm,
            interval_ms,
        }) => {
            cmd_replay(
                file,
                &cli.server,
                json_mode,
                &source,
                &destination,
                &algorithm,
                interval_ms,
            )
            .await
        }
        Some(Commands::Search {
            source,
            destination,
            algorithm,
        }) => {
            cmd_search(
                file,
                &cli.server,
                json_mode,
                &source,
                &destination,
                &algorithm,
            )
            .await
        }
        Some(Commands::Tree) => cmd_tree(file, json_mode),
        Some(Commands::Check) => cmd_check(file, json_mode),
        Some(Commands::Sample { output }) => cmd_sample(output.as_deref()),
        None => {
            // No subcommand - show the graph by default
            cmd_check(file, json_mode)
        }
    }
}
