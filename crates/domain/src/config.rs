use crate::errors::ConfigError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}

/// Per-process settings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub dry_run: bool,
    pub verbose: bool,
    pub once: bool,
    interval_secs: u64,
}

impl RunConfig {
    pub fn new(
        dry_run: bool,
        verbose: bool,
        once: bool,
        interval_secs: u64,
    ) -> Result<Self, ConfigError> {
        if interval_secs == 0 {
            return Err(ConfigError::InvalidInterval(interval_secs));
        }
        Ok(Self {
            dry_run,
            verbose,
            once,
            interval_secs,
        })
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            verbose: false,
            once: false,
            interval_secs: DEFAULT_INTERVAL_SECS,
        }
    }
}

impl fmt::Display for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dry_run={}, interval={}, once={}, verbose={}",
            self.dry_run, self.interval_secs, self.once, self.verbose
        )
    }
}
