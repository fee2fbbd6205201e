//! Общие хелперы: проценты и сатоши, сравнение цен, проверка параметров,
//! форматирование времени, query string, удаление по glob, разбор ответов.
//!
//! Всё, кроме `files` и `response`, — синхронные чистые функции.

pub mod config;
pub mod constants;
pub mod error;
pub mod files;
pub mod interval;
pub mod logging;
pub mod numeric;
pub mod price;
pub mod query;
pub mod response;
pub mod time;
pub mod time_relative;
pub mod time_round;
pub mod utils;
pub mod validate;

pub use config::Config;
pub use error::{HelpersError, Result};
pub use files::glob_delete;
pub use interval::filter_by_interval;
pub use price::{Price, is_equal_price, is_equal_price_value};
pub use query::{to_query_string, to_query_string_pairs};
pub use response::{SafeJson, safe_json};
pub use time::{TimeFormatter, check_format, datetime, datetime_for_filename, ms_to_datetime};
pub use time_relative::{from_now, relative_time};
pub use time_round::{TimeUnit, floor_datetime, round_datetime, round_timestamp, round_timestamp_in};
pub use utils::{
    capitalize, cast_satoshi, get_decimal_places, get_percent_diff, mod_by_percent, nice_percent,
    rand_between, to_satoshi,
};
pub use validate::{
    FieldCheck, FieldRule, Requirements, ValidationError, ValueKind, ensure_required,
    validate_required,
};
