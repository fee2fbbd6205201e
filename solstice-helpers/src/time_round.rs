use chrono::{DateTime, Local, TimeZone, Timelike};
use std::fmt::Display;
use std::str::FromStr;

use crate::constants::DATETIME;
use crate::error::{HelpersError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl FromStr for TimeUnit {
    type Err = HelpersError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hours),
            _ => Err(HelpersError::UnknownTimeUnit(s.to_string())),
        }
    }
}

/// Опускает поле `unit` настенного времени до кратного `step`, младшие поля обнуляет.
/// 12:33:41 → 12:33:40 (10 s), 12:30:00 (10 min), 12:00:00 (1 h).
pub fn floor_datetime<T: TimeZone>(dt: &DateTime<T>, unit: TimeUnit, step: u32) -> Result<DateTime<T>> {
    if step == 0 {
        return Err(HelpersError::InvalidStep);
    }
    let floor = |v: u32| v / step * step;

    let rounded = dt.with_nanosecond(0).and_then(|d| match unit {
        TimeUnit::Seconds => d.with_second(floor(d.second())),
        TimeUnit::Minutes => d.with_second(0).and_then(|d| d.with_minute(floor(d.minute()))),
        TimeUnit::Hours => d
            .with_second(0)
            .and_then(|d| d.with_minute(0))
            .and_then(|d| d.with_hour(floor(d.hour()))),
    });
    rounded.ok_or(HelpersError::AmbiguousTime)
}

/// То же, результат в формате DATETIME
pub fn round_datetime<T>(dt: &DateTime<T>, unit: TimeUnit, step: u32) -> Result<String>
where
    T: TimeZone,
    T::Offset: Display,
{
    Ok(floor_datetime(dt, unit, step)?.format(DATETIME).to_string())
}

/// Unix-миллисекунды, округление по настенному времени зоны `tz`
pub fn round_timestamp_in<T: TimeZone>(tz: &T, ms: i64, unit: TimeUnit, step: u32) -> Result<i64> {
    let dt = tz
        .timestamp_millis_opt(ms)
        .single()
        .ok_or(HelpersError::TimestampOutOfRange(ms))?;
    Ok(floor_datetime(&dt, unit, step)?.timestamp_millis())
}

/// Unix-миллисекунды в локальной зоне
pub fn round_timestamp(ms: i64, unit: TimeUnit, step: u32) -> Result<i64> {
    round_timestamp_in(&Local, ms, unit, step)
}
