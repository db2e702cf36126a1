use std::{
    env,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use anyhow::{Context, Result};
use tracing::Span;
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};
use uuid::Uuid;

use crate::config::{LoggingConfig, LoggingRotation};

/// Overrides `logging.filter` when set to a non-empty directive list.
pub const FILTER_ENV: &str = "AETHERO_LOG";

const LOG_FILE_STEM: &str = "aethero";
const LOG_FILE_EXTENSION: &str = "jsonl";
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Keeps the file writer flushing until dropped and names this run.
pub struct LoggingGuard {
    _flush: WorkerGuard,
    run_id: Uuid,
}

impl LoggingGuard {
    /// Span that stamps every pipeline event of this run with its id.
    pub fn run_span(&self) -> Span {
        tracing::info_span!(target: "reflection", "aethero_run", run_id = %self.run_id)
    }
}

impl From<&LoggingRotation> for Rotation {
    fn from(rotation: &LoggingRotation) -> Self {
        match rotation {
            LoggingRotation::Daily => Rotation::DAILY,
            LoggingRotation::Hourly => Rotation::HOURLY,
        }
    }
}

/// Outcome of removing expired pipeline log files.
#[derive(Debug, Default)]
pub struct RetentionSweep {
    pub removed: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

/// Installs the process-wide subscriber: JSON lines into a rolling
/// `aethero.<period>.jsonl` file, warnings echoed to stderr when enabled.
/// Nothing is written to stdout, which carries the report.
pub fn init_tracing(logging_config: &LoggingConfig) -> Result<LoggingGuard> {
    let filter = pipeline_filter(&logging_config.filter)?;
    let log_dir = &logging_config.dir;
    fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let sweep = sweep_expired_logs(log_dir, logging_config.retention_days, SystemTime::now());
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::from(&logging_config.rotation))
        .filename_prefix(LOG_FILE_STEM)
        .filename_suffix(LOG_FILE_EXTENSION)
        .build(log_dir)
        .with_context(|| format!("failed to open log files in {}", log_dir.display()))?;
    let (writer, flush) = tracing_appender::non_blocking(appender);

    let json_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .with_span_list(false)
        .with_writer(writer)
        .with_filter(filter);
    let warn_layer = logging_config.stderr_warn_enabled.then(|| {
        fmt::layer()
            .compact()
            .without_time()
            .with_writer(std::io::stderr)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(json_layer)
        .with(warn_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    let run_id = Uuid::now_v7();
    tracing::info!(
        target: "logging",
        run_id = %run_id,
        dir = %log_dir.display(),
        rotation = ?logging_config.rotation,
        expired_removed = sweep.removed.len(),
        "logging_ready"
    );
    for warning in &sweep.warnings {
        tracing::warn!(target: "logging", warning = %warning, "log_retention_skipped");
    }

    Ok(LoggingGuard {
        _flush: flush,
        run_id,
    })
}

fn pipeline_filter(configured: &str) -> Result<EnvFilter> {
    match env::var(FILTER_ENV) {
        Ok(directives) if !directives.trim().is_empty() => parse_filter(&directives, FILTER_ENV),
        _ => parse_filter(configured, "logging.filter"),
    }
}

fn parse_filter(directives: &str, source: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives)
        .with_context(|| format!("invalid {source} directives '{directives}'"))
}

/// Matches `aethero.<period>.jsonl`; other files in the directory are left alone.
fn is_pipeline_log(path: &Path) -> bool {
    let stem_matches = path
        .file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.starts_with(&format!("{LOG_FILE_STEM}.")));
    stem_matches && path.extension() == Some(OsStr::new(LOG_FILE_EXTENSION))
}

/// Deletes pipeline logs last written at or before `now - retention_days`.
fn sweep_expired_logs(log_dir: &Path, retention_days: usize, now: SystemTime) -> RetentionSweep {
    let mut sweep = RetentionSweep::default();
    let keep_for = Duration::from_secs((retention_days as u64).saturating_mul(SECONDS_PER_DAY));
    let cutoff = now.checked_sub(keep_for).unwrap_or(SystemTime::UNIX_EPOCH);

    let entries = match fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(err) => {
            sweep
                .warnings
                .push(format!("cannot list {}: {err}", log_dir.display()));
            return sweep;
        }
    };

    let candidates = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(err) => {
                sweep.warnings.push(format!("cannot read directory entry: {err}"));
                None
            }
        })
        .filter(|path| path.is_file() && is_pipeline_log(path))
        .collect::<Vec<_>>();

    for path in candidates {
        let expired = fs::metadata(&path)
            .and_then(|metadata| metadata.modified())
            .map(|modified| modified <= cutoff);
        match expired {
            Ok(false) => {}
            Ok(true) => match fs::remove_file(&path) {
                Ok(()) => sweep.removed.push(path),
                Err(err) => sweep
                    .warnings
                    .push(format!("cannot remove {}: {err}", path.display())),
            },
            Err(err) => sweep
                .warnings
                .push(format!("cannot stat {}: {err}", path.display())),
        }
    }

    sweep
}
