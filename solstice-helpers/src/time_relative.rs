use chrono::Utc;

// пороги: 45 секунд, 45 минут, 22 часа, 26 дней, 11 месяцев
const SECONDS_THRESHOLD: f64 = 45.0;
const MINUTES_THRESHOLD: f64 = 45.0;
const HOURS_THRESHOLD: f64 = 22.0;
const DAYS_THRESHOLD: f64 = 26.0;
const MONTHS_THRESHOLD: f64 = 11.0;

/// Человекочитаемая разница между `then_ms` и `now_ms`:
/// "a few seconds ago", "5 minutes ago", "in 2 days", ...
pub fn relative_time(then_ms: i64, now_ms: i64) -> String {
    let delta_ms = then_ms.saturating_sub(now_ms);
    let phrase = humanize((delta_ms as f64).abs());
    if delta_ms > 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

/// Относительно текущего момента
pub fn from_now(then_ms: i64) -> String {
    relative_time(then_ms, Utc::now().timestamp_millis())
}

fn humanize(ms: f64) -> String {
    let seconds = (ms / 1000.0).round();
    let minutes = (ms / 60_000.0).round();
    let hours = (ms / 3_600_000.0).round();
    let days_exact = ms / 86_400_000.0;
    let days = days_exact.round();
    // 146097 дней = 400 лет = 4800 месяцев
    let months = (days_exact * 4800.0 / 146_097.0).round();
    let years = (days_exact * 400.0 / 146_097.0).round();

    if seconds < SECONDS_THRESHOLD {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < MINUTES_THRESHOLD {
        format!("{} minutes", minutes as i64)
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < HOURS_THRESHOLD {
        format!("{} hours", hours as i64)
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < DAYS_THRESHOLD {
        format!("{} days", days as i64)
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < MONTHS_THRESHOLD {
        format!("{} months", months as i64)
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{} years", years as i64)
    }
}
