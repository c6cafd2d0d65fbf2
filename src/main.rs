use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use pressroom::{config::PrinterConfig, Printable, Printer, Sinks};

#[derive(Parser)]
#[command(name = "pressroom", about = "Emit attributed messages to the console and log files")]
struct Cli {
    /// Printer configuration file. A missing file means no log sinks and no
    /// console debug output.
    #[arg(long, default_value = pressroom::config::DEFAULT_LOCATION)]
    config: PathBuf,

    /// Write pressroom's own diagnostics to stderr at debug level.
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a note to the console.
    Note { message: String },
    /// Print a warning to the console.
    Warning { message: String },
    /// Print a debug message (written only if enabled in the configuration).
    Debug { message: String },
    /// Print an error summary to the console.
    Error { message: String },
    /// Write a tagged record to every configured log file that accepts it.
    Write { tag: String, message: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let config = PrinterConfig::load(&cli.config)?;
    let printer = Arc::new(Printer::new());
    let sinks = Sinks::install(Arc::clone(&printer), &config)?;

    let print = match cli.command {
        Command::Note { message } => pressroom::note!(sinks.console, "{message}")?,
        Command::Warning { message } => pressroom::warning!(sinks.console, "{message}")?,
        Command::Debug { message } => pressroom::debug!(sinks.console, "{message}")?,
        Command::Error { message } => sinks
            .console
            .print(Printable::error(message, Vec::new(), pressroom::source!()))?,
        Command::Write { tag, message } => pressroom::log_write!(sinks.log, tag, "{message}")?,
    };

    tracing::debug!(channels = ?print.channel_names(), "print executed");
    Ok(())
}
