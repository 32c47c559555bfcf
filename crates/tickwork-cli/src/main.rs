//! tickwork CLI - Host for the tickwork fixed-timestep loop

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{clock, run};
use tickwork_runtime::{init_logging, LoggingConfig};

#[derive(Parser)]
#[command(name = "tickwork")]
#[command(about = "Fixed-timestep frame loop and clock diagnostics", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter (env_logger syntax, e.g. "debug" or "tickwork_runtime=trace")
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the ticker for a number of frames and report what ran
    Run {
        /// Number of host frames to run
        #[arg(long, default_value = "120")]
        frames: u32,

        /// Milliseconds to sleep after each frame
        #[arg(long, default_value = "16")]
        sleep_ms: u32,

        /// Path to a ticker config file (TOML)
        #[arg(long)]
        config: Option<String>,
    },

    /// Sample the monotonic clock and print its resolution
    Clock {
        /// Number of back-to-back readings
        #[arg(long, default_value = "1000")]
        samples: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        filter: cli.log,
        ..LoggingConfig::default()
    });

    match cli.command {
        Commands::Run {
            frames,
            sleep_ms,
            config,
        } => run::run(run::RunArgs {
            frames,
            sleep_ms,
            config,
        }),
        Commands::Clock { samples } => clock::run(samples),
    }
}
