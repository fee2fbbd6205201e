use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;

use crate::config::TimeConfig;
use crate::constants::{DATETIME, DATETIME_FILENAME, DISPLAY_TIMEZONE};
use crate::error::{HelpersError, Result};

static DEFAULT_FORMATTER: Lazy<TimeFormatter> = Lazy::new(TimeFormatter::default);

/// Форматирование времени: текущее — в локальной зоне,
/// заданные метки — в зоне отображения из конфига.
#[derive(Clone, Debug)]
pub struct TimeFormatter {
    timezone: Tz,
    datetime_format: String,
    filename_format: String,
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self {
            timezone: DISPLAY_TIMEZONE,
            datetime_format: DATETIME.to_string(),
            filename_format: DATETIME_FILENAME.to_string(),
        }
    }
}

/// Пустой формат или неизвестный спецификатор — ошибка.
/// На таком формате chrono паникует при выводе.
pub fn check_format(fmt: &str) -> Result<()> {
    if fmt.trim().is_empty() || StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(HelpersError::InvalidFormat(fmt.to_string()));
    }
    Ok(())
}

impl TimeFormatter {
    /// Форматы проверяются здесь, дальше форматирование не падает
    pub fn from_config(cfg: &TimeConfig) -> Result<Self> {
        check_format(&cfg.datetime_format)?;
        check_format(&cfg.filename_format)?;
        Ok(Self {
            timezone: cfg.timezone,
            datetime_format: cfg.datetime_format.clone(),
            filename_format: cfg.filename_format.clone(),
        })
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn datetime(&self) -> String {
        Local::now().format(&self.datetime_format).to_string()
    }

    pub fn datetime_for_filename(&self) -> String {
        Local::now().format(&self.filename_format).to_string()
    }

    /// Unix-миллисекунды → строка в зоне отображения
    pub fn ms_to_datetime(&self, ms: i64) -> Result<String> {
        let utc = Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or(HelpersError::TimestampOutOfRange(ms))?;
        Ok(self.format(&utc))
    }

    pub fn format<T: TimeZone>(&self, dt: &DateTime<T>) -> String {
        dt.with_timezone(&self.timezone)
            .format(&self.datetime_format)
            .to_string()
    }
}

pub fn datetime() -> String {
    DEFAULT_FORMATTER.datetime()
}

pub fn datetime_for_filename() -> String {
    DEFAULT_FORMATTER.datetime_for_filename()
}

pub fn ms_to_datetime(ms: i64) -> Result<String> {
    DEFAULT_FORMATTER.ms_to_datetime(ms)
}
