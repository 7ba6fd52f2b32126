//! CLI binary entry point for sb-emulator-config

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use servicebus_emulator_config::cli::commands::convert::{ConvertArgs, handle_convert};
#[cfg(feature = "cli")]
use servicebus_emulator_config::cli::commands::duration::{
    DEFAULT_MAX_MS, DEFAULT_MIN_MS, DurationArgs, handle_duration, handle_iso_millis,
};
#[cfg(feature = "cli")]
use servicebus_emulator_config::cli::config::CliConfig;
#[cfg(feature = "cli")]
use servicebus_emulator_config::cli::init_tracing;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "sb-emulator-config")]
#[command(about = "Convert Service Bus namespace exports into emulator configuration")]
#[command(version)]
struct Cli {
    /// Configuration file (default: ./.sb-emulator-config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert an XML export to emulator Config.json
    Convert {
        /// Input file path or '-' for stdin
        #[arg(default_value = "-")]
        input: String,
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite existing output file without prompting
        #[arg(short, long)]
        force: bool,
        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Normalize a [D.]HH:MM:SS duration into clamped ISO 8601
    Duration {
        /// Clock-style duration, e.g. 00:05:00 or 1.00:00:00
        value: String,
        /// Upper bound in milliseconds
        #[arg(long, default_value_t = DEFAULT_MAX_MS)]
        max_ms: i64,
        /// Lower bound in milliseconds
        #[arg(long, default_value_t = DEFAULT_MIN_MS)]
        min_ms: i64,
    },
    /// Print the milliseconds of an ISO 8601 duration (e.g. PT1M30S)
    IsoMillis {
        value: String,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(&config.logging.level);

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            force,
            compact,
        } => handle_convert(&ConvertArgs::from_flags(
            &input, output, force, compact, &config,
        )),
        Commands::Duration {
            value,
            max_ms,
            min_ms,
        } => handle_duration(&DurationArgs {
            value,
            max_ms,
            min_ms,
        }),
        Commands::IsoMillis { value } => handle_iso_millis(&value),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
