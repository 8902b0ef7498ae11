mod decode;

use clap::{Parser, Subcommand};
use courier_core::config::{self, Config};
use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "courier",
    version,
    about = "Courier: typed Telegram Bot API update hydration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "courier.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Hydrate the updates in a JSON document and report them.
    Decode {
        /// File to read, or `-` for stdin.
        path: String,
        /// Print the hydrated records as JSON instead of one line per update.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration.
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _guard = init_logging(&cfg)?;

    match cli.command {
        Commands::Decode { path, json } => {
            let text = read_input(&path)?;
            let doc: serde_json::Value = serde_json::from_str(&text)
                .map_err(|e| anyhow::anyhow!("{path} is not valid JSON: {e}"))?;

            let batch = decode::decode_batch(&doc, &cfg.decode)?;
            info!(
                "{}: {} updates, {} skipped",
                path,
                batch.updates.len(),
                batch.skipped
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&batch.updates)?);
            } else {
                for update in &batch.updates {
                    println!("{}", decode::summarize(update));
                }
            }
        }
        Commands::Config => {
            println!("Config: {}\n", cli.config);
            print!("{}", config::render(&cfg)?);
        }
    }

    Ok(())
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|e| anyhow::anyhow!("failed to read {path}: {e}"))
}

/// Stderr logging, plus a log file when one is configured. `RUST_LOG` wins
/// over the configured level.
fn init_logging(cfg: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.courier.log_level));

    let (file_layer, guard) = match cfg.courier.log_file.as_deref() {
        Some(log_file) => {
            let (dir, file_name) = log_target(log_file)?;
            std::fs::create_dir_all(&dir)?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(guard)
}

/// Directory and file name of the configured log file, with `~` expanded.
fn log_target(log_file: &str) -> anyhow::Result<(PathBuf, OsString)> {
    let path = PathBuf::from(config::shellexpand(log_file));
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log_file '{log_file}' has no file name"))?
        .to_os_string();
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    Ok((dir, file_name))
}
