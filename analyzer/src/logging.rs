//! Tracing setup for embedding hosts
//!
//! The library only emits `tracing` events. A host that has no subscriber of its own
//! can call [`init_tracing`]; `ENDPOINT_FIELDS_LOG` (an `EnvFilter` directive) takes
//! precedence over the level passed in.

use std::str::FromStr;

use error_stack::{Report, ResultExt};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{Error, Result};

/// Environment variable read by [`init_tracing`]
pub const LOG_ENV_VAR: &str = "ENDPOINT_FIELDS_LOG";

/// Represents tracing levels that can be selected by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TracingLevel {
    /// Errors only
    Error,
    /// Host inconsistencies such as arity mismatches
    #[default]
    Warn,
    /// Informational
    Info,
    /// Traversal decisions (cycle truncation, ignored parameters)
    Debug,
    /// Every field visited
    Trace,
}

impl FromStr for TracingLevel {
    type Err = Report<Error>;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(Report::new(Error::invalid(
                "tracing level",
                format!("'{s}'. Valid levels are: error, warn, info, debug, trace"),
            ))),
        }
    }
}

impl From<TracingLevel> for Level {
    fn from(level: TracingLevel) -> Self {
        match level {
            TracingLevel::Error => Self::ERROR,
            TracingLevel::Warn => Self::WARN,
            TracingLevel::Info => Self::INFO,
            TracingLevel::Debug => Self::DEBUG,
            TracingLevel::Trace => Self::TRACE,
        }
    }
}

impl TracingLevel {
    /// Lowercase name, as accepted by `FromStr`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Filter directive for this crate's events at this level
    fn directive(self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.as_str())
    }
}

/// Install a global stderr subscriber for this crate's events
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(level: TracingLevel) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(level.directive()))
        .change_context(Error::Config(format!(
            "Invalid tracing filter for level '{}'",
            level.as_str()
        )))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .change_context(Error::failed_to("install tracing subscriber", "already set"))
}
