use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgGroup, Args, Parser, Subcommand};

use lcdcalc::config::{Config, ConfigSource};
use lcdcalc::logging::{default_log_path, init_tracing, LogTarget};
use lcdcalc::replay;
use lcdcalc::shutdown::ShutdownHandle;
use lcdcalc::ui::runtime;

/// Filter for headless runs when `LCDCALC_LOG` is unset.
const REPLAY_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "lcdcalc",
    version,
    about = "Four-function calculator with a seven-segment terminal display"
)]
struct Cli {
    /// Config file to use instead of <config dir>/lcdcalc/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply keys or actions without the terminal UI and print the display
    Replay(ReplayArgs),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["keys", "actions"])))]
struct ReplayArgs {
    /// Keys to press, one character each (e.g. "5+3==")
    #[arg(long, allow_hyphen_values = true)]
    keys: Option<String>,

    /// JSON-lines file of {"action", "payload"} records, or "-" for stdin
    #[arg(long, value_name = "FILE")]
    actions: Option<PathBuf>,

    /// Print every step as a JSON object before the result
    #[arg(long)]
    trace: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Command::Replay(args)) => run_replay(args),
        None => run_interactive(cli.config.as_deref()),
    }
}

fn run_interactive(config_path: Option<&Path>) -> anyhow::Result<()> {
    let (config, source) = match config_path {
        Some(path) => (Config::load_from(path)?, ConfigSource::File(path.to_path_buf())),
        None => Config::load()?,
    };

    // The level comes from the config, so the source is logged afterwards.
    let log_path = config.logging.file.clone().unwrap_or_else(default_log_path);
    init_tracing(&config.logging.level, LogTarget::File(log_path))?;
    match &source {
        ConfigSource::File(path) => {
            tracing::info!(config = %path.display(), "Configuration loaded");
        }
        ConfigSource::Defaults(path) => {
            tracing::info!(expected = %path.display(), "No config file, using defaults");
        }
    }

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("Failed to install signal handlers")?;

    runtime::run(&config, shutdown).context("Terminal UI failed")
}

fn run_replay(args: ReplayArgs) -> anyhow::Result<()> {
    init_tracing(REPLAY_LOG_LEVEL, LogTarget::Stderr)?;

    let intents = match (&args.keys, &args.actions) {
        (Some(keys), _) => replay::intents_from_keys(keys)?,
        (None, Some(path)) if path.as_os_str() == "-" => {
            replay::intents_from_records(io::stdin().lock())?
        }
        (None, Some(path)) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open actions file '{}'", path.display()))?;
            replay::intents_from_records(BufReader::new(file))?
        }
        (None, None) => anyhow::bail!("Either --keys or --actions is required"),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    replay::run(intents, args.trace, &mut out)?;
    Ok(())
}
