use chrono_tz::Tz;

/// Один сатоши в базовых единицах
pub const SATOSHI: f64 = 0.00000001;
/// Точность сравнения цен (до сатоши)
pub const SATOSHI_DIGITS: usize = 8;

pub const ONE_SATOSHI: f64 = 0.00000001;
pub const ONE_HUNDRED_SATOSHIS: f64 = 0.000001;

/// Знаков после запятой по умолчанию для mod_by_percent / get_percent_diff
pub const DEFAULT_RATE_DIGITS: usize = 10;
/// Знаков после запятой по умолчанию для nice_percent
pub const DEFAULT_PERCENT_DIGITS: usize = 2;

/// strftime-формат для отображения: 2019-03-05 12:33:41
pub const DATETIME: &str = "%Y-%m-%d %H:%M:%S";
/// strftime-формат, безопасный для имён файлов: 2019-03-05_12-33-41
pub const DATETIME_FILENAME: &str = "%Y-%m-%d_%H-%M-%S";

pub const DISPLAY_TIMEZONE: Tz = chrono_tz::America::Los_Angeles;
