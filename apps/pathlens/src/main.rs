//! # Pathlens - Step Replay Visualizer
//!
//! The main binary for the Pathlens replay engine.
//!
//! This application provides:
//! - CLI interface for graph editing, projection, and replay
//! - HTTP client for the external Search Service
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                  apps/pathlens (THE BINARY)                │
//! │                                                            │
//! │  ┌─────────────┐   ┌───────────────┐   ┌───────────────┐  │
//! │  │   CLI       │   │ Replay Driver │   │ Search Client │  │
//! │  │  (clap)     │   │   (tokio)     │   │   (reqwest)   │  │
//! │  └──────┬──────┘   └───────┬───────┘   └───────┬───────┘  │
//! │         │                  │                   │          │
//! │         └──────────────────┼───────────────────┘          │
//! │                            ▼                              │
//! │                   ┌─────────────────┐                     │
//! │                   │  pathlens-core  │                     │
//! │                   │   (THE LOGIC)   │                     │
//! │                   └─────────────────┘                     │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Animate a Dijkstra run on the sample graph
//! pathlens replay -s "New York" -d "Miami" -a dijkstra
//!
//! # Skip the animation
//! pathlens search -s "New York" -d "Miami" -a dijkstra
//!
//! # Other operations
//! pathlens tree
//! pathlens check -f mygraph.toml
//! pathlens sample -o mygraph.toml
//! ```

use clap::Parser;
use pathlens::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — PATHLENS_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("PATHLENS_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pathlens=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Pathlens startup banner.
fn print_banner() {
    println!(
        r#"
  ██████╗  █████╗ ████████╗██╗  ██╗██╗     ███████╗███╗   ██╗███████╗
  ██╔══██╗██╔══██╗╚══██╔══╝██║  ██║██║     ██╔════╝████╗  ██║██╔════╝
  ██████╔╝███████║   ██║   ███████║██║     █████╗  ██╔██╗ ██║███████╗
  ██╔═══╝ ██╔══██║   ██║   ██╔══██║██║     ██╔══╝  ██║╚██╗██║╚════██║
  ██║     ██║  ██║   ██║   ██║  ██║███████╗███████╗██║ ╚████║███████║
  ╚═╝     ╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝  ╚═══╝╚══════╝

  Step Replay Visualizer v{}

  Deterministic • Replayable • Inspectable
"#,
        env!("CARGO_PKG_VERSION")
    );
}
