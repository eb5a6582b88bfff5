//! Logging initialisation for the junction CLI.
//!
//! Installs a global `tracing` subscriber with optional JSON formatting and
//! bridges the `log` facade so crates using either API emit structured events.

use std::{env, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "JUNCTION_LOG_FORMAT";

static INITIALISED: OnceLock<LoggingState> = OnceLock::new();

/// Output format for diagnostics written to `stderr`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable lines.
    Human,
    /// One JSON object per event, including the active span list.
    Json,
}

/// What [`init_logging`] found when it ran.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoggingState {
    /// Our subscriber is now the global default.
    Installed(LogFormat),
    /// Another subscriber already owned the global slot and was kept.
    AlreadyConfigured {
        /// Reason reported by `tracing_subscriber`.
        reason: String,
    },
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `JUNCTION_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// The log format defaults to human-readable output, but can be switched to
/// JSON by setting `JUNCTION_LOG_FORMAT=json`. Diagnostics are emitted to
/// `stderr` so the summary on `stdout` remains parseable. The log level is
/// controlled via `RUST_LOG` and defaults to `info`.
///
/// Repeated calls return the state recorded by the first successful call.
///
/// # Errors
/// Returns [`LoggingError`] if the environment variable contains invalid
/// Unicode or names an unsupported format.
pub fn init_logging() -> Result<LoggingState, LoggingError> {
    if let Some(state) = INITIALISED.get() {
        return Ok(state.clone());
    }

    let format = format_from_env()?;
    let state = install_subscriber(format);
    Ok(INITIALISED.get_or_init(|| state).clone())
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => parse_log_format(&raw),
        Err(env::VarError::NotPresent) => Ok(LogFormat::Human),
        Err(err @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source: err,
        }),
    }
}

fn install_subscriber(format: LogFormat) -> LoggingState {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let base = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Json => base
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => base.boxed(),
    };

    // The log bridge is best-effort; an existing logger keeps its slot.
    let _bridge = LogTracer::init();

    match tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
    {
        Ok(()) => LoggingState::Installed(format),
        Err(err) => LoggingState::AlreadyConfigured {
            reason: err.to_string(),
        },
    }
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}
