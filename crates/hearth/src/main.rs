// SPDX-FileCopyrightText: 2026 Hearth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hearth - life-story capture and reminiscence prompting for care residents.
//!
//! This is the binary entry point for the Hearth service.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;
mod serve;
mod shutdown;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hearth_config::model::HearthConfig;

/// Hearth - life-story capture and reminiscence prompting.
#[derive(Parser, Debug)]
#[command(name = "hearth", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP gateway over the configured database.
    Serve,
    /// Classify a piece of speech and print the result as JSON.
    Detect {
        /// The utterance to classify.
        text: String,
    },
    /// Print the next reminiscence prompt for a resident.
    Prompt {
        /// Resident identifier.
        resident: String,
    },
    /// Print the life-story context block for a resident.
    Context {
        /// Resident identifier.
        resident: String,
        /// Maximum stories to include.
        #[arg(long)]
        max: Option<usize>,
    },
}

fn load_config(path: Option<&std::path::Path>) -> HearthConfig {
    let loaded = match path {
        Some(path) => hearth_config::load_and_validate_path(path),
        None => hearth_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => config,
        Err(errors) => {
            hearth_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    serve::init_tracing(&config.agent.log_level);

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Detect { text }) => {
            println!("{}", commands::detect_report(&text));
            Ok(())
        }
        Some(Commands::Prompt { resident }) => commands::run_prompt(&config, &resident)
            .await
            .map(|out| println!("{out}")),
        Some(Commands::Context { resident, max }) => {
            commands::run_context(&config, &resident, max)
                .await
                .map(|out| println!("{out}"))
        }
        None => {
            println!("hearth: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("hearth: {e}");
        std::process::exit(1);
    }
}
