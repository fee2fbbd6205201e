use anyhow::{Context, Result, anyhow};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use std::{env, fs};

use crate::constants::{DATETIME, DATETIME_FILENAME, DISPLAY_TIMEZONE};
use crate::time::check_format;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub logs: LogsCfg,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let data = fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        let mut c: Self = serde_json::from_str(&data).with_context(|| format!("parsing config {path}"))?;
        c.apply_env_overrides()?;
        c.validate()?;
        Ok(c)
    }

    /// Конфиг по умолчанию + переменные окружения
    pub fn from_env() -> Result<Self> {
        let mut c = Self::default();
        c.apply_env_overrides()?;
        c.validate()?;
        Ok(c)
    }

    /// HELPERS_TIMEZONE, HELPERS_DATETIME_FORMAT, HELPERS_LOG_LEVEL
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(tz) = env::var("HELPERS_TIMEZONE") {
            self.time.timezone = tz
                .trim()
                .parse::<Tz>()
                .map_err(|e| anyhow!("HELPERS_TIMEZONE `{tz}`: {e}"))?;
        }
        if let Ok(fmt) = env::var("HELPERS_DATETIME_FORMAT") {
            self.time.datetime_format = fmt;
        }
        if let Ok(level) = env::var("HELPERS_LOG_LEVEL") {
            self.logs.level = level.trim().to_lowercase();
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for (name, fmt) in [
            ("time.datetime_format", &self.time.datetime_format),
            ("time.filename_format", &self.time.filename_format),
        ] {
            check_format(fmt).context(name)?;
        }
        if self.time.filename_format.contains(['/', '\\', ':']) {
            tracing::warn!(
                "time.filename_format `{}` may produce unsafe file names",
                self.time.filename_format
            );
        }
        if self.logs.level.trim().is_empty() {
            return Err(anyhow!("logs.level must be non-empty"));
        }
        Ok(())
    }
}

#[serde_as]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimeConfig {
    /// IANA-имя, например "America/Los_Angeles"
    #[serde_as(as = "DisplayFromStr")]
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
    #[serde(default = "default_filename_format")]
    pub filename_format: String,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            datetime_format: default_datetime_format(),
            filename_format: default_filename_format(),
        }
    }
}

fn default_timezone() -> Tz {
    DISPLAY_TIMEZONE
}
fn default_datetime_format() -> String {
    DATETIME.to_string()
}
fn default_filename_format() -> String {
    DATETIME_FILENAME.to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogsCfg {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LogsCfg {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}
