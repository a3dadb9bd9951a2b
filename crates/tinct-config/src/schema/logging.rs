//! Logging configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive scoped to tinct crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "tinct=trace",
            LogLevel::Debug => "tinct=debug",
            LogLevel::Info => "tinct=info",
            LogLevel::Warn => "tinct=warn",
            LogLevel::Error => "tinct=error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
