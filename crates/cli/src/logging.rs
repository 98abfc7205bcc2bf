use anyhow::{anyhow, Result};
use quill_config::LogConfig;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Log files above this size are discarded on startup.
const MAX_LOG_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// Builds the filter from `RUST_LOG` when set, otherwise from the settings.
fn env_filter(config: &LogConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let max_level = config
        .max_level
        .parse()
        .unwrap_or(tracing::Level::INFO);

    config
        .log_target
        .split(',')
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .filter_map(|directive| match directive.parse::<Directive>() {
            Ok(directive) => Some(directive),
            Err(err) => {
                eprintln!("Ignoring invalid log directive {directive:?}: {err}");
                None
            }
        })
        .fold(
            EnvFilter::default().add_directive(max_level.into()),
            EnvFilter::add_directive,
        )
}

/// The log file in use: `--log`, then `QUILL_LOG_PATH`, then the settings.
fn log_path(cli_log: Option<&Path>, config: &LogConfig) -> Option<PathBuf> {
    cli_log
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("QUILL_LOG_PATH").ok().map(PathBuf::from))
        .or_else(|| config.log_file.as_ref().map(PathBuf::from))
}

/// Installs the global subscriber.
///
/// Logs go to a file when one is configured and to stderr otherwise. The
/// returned guard must be kept alive for the file writer to flush.
pub fn init_logging(cli_log: Option<&Path>, config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = env_filter(config);

    let Some(log_path) = log_path(cli_log, config) else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .try_init()
            .map_err(|err| anyhow!("failed to install the logger: {err}"))?;
        return Ok(None);
    };

    if let Ok(metadata) = std::fs::metadata(&log_path) {
        if log_path.is_file() && metadata.len() > MAX_LOG_FILE_SIZE {
            std::fs::remove_file(&log_path)?;
        }
    }

    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow!("no file name in {log_path:?}"))?;

    let directory = log_path
        .parent()
        .ok_or_else(|| anyhow!("{log_path:?} has no parent"))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(true)
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install the logger: {err}"))?;

    Ok(Some(guard))
}
