//! Logging for the `nurture` binary
//!
//! Events go to stderr so stdout carries only the JSON documents. The same
//! format is used for the optional rolling log file. `RUST_LOG` overrides the
//! configured level.

use anyhow::Context;
use std::fs;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the non-blocking file writer flushing; hold it until exit
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Json,
    Human,
}

impl LogFormat {
    fn from_config(config: &LoggingConfig) -> Self {
        if config.json {
            LogFormat::Json
        } else {
            LogFormat::Human
        }
    }

    /// Formatting layer writing to `writer`; colours only where `ansi` allows
    fn layer<W>(self, writer: W, ansi: bool) -> BoxedLayer
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let layer = fmt::layer().with_target(true).with_writer(writer);
        match self {
            LogFormat::Json => layer
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .boxed(),
            LogFormat::Human => layer.with_ansi(ansi).boxed(),
        }
    }
}

/// Install the global subscriber described by `config`
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let format = LogFormat::from_config(config);
    let mut layers = vec![format.layer(std::io::stderr, true)];

    let file_guard = if config.file_enabled {
        let (writer, guard) = create_file_appender(config)?;
        layers.push(format.layer(writer, false));
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(build_env_filter(config))
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::debug!(
        level = %config.level,
        format = ?format,
        file_enabled = config.file_enabled,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // Prefix match: also covers nurture_mapper and nurture_dashboard
        EnvFilter::new(format!("nurture={}", config.level.to_ascii_lowercase()))
    })
}

fn create_file_appender(config: &LoggingConfig) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let directory = &config.file_directory;
    fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create log directory {directory}"))?;

    let prefix = &config.file_prefix;
    let appender = match config.file_rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(directory, prefix),
        "minutely" => tracing_appender::rolling::minutely(directory, prefix),
        "never" => tracing_appender::rolling::never(directory, format!("{prefix}.log")),
        _ => tracing_appender::rolling::daily(directory, prefix),
    };

    Ok(tracing_appender::non_blocking(appender))
}
