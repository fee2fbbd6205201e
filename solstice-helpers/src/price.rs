use serde_json::Value;
use tracing::debug;

use crate::constants::SATOSHI_DIGITS;
use crate::error::{HelpersError, Result};
use crate::numeric::{number_to_string, parse_float, to_fixed, to_number};

/// Цена на входе: число или числовая строка (как приходит из API бирж)
#[derive(Clone, Debug, PartialEq)]
pub enum Price {
    Number(f64),
    Text(String),
}

impl Price {
    /// Строгое приведение к числу; мусорная строка даёт NaN
    pub fn as_number(&self) -> f64 {
        match self {
            Price::Number(n) => *n,
            Price::Text(s) => to_number(s),
        }
    }

    /// Строка с точностью до сатоши, через мягкий разбор
    pub fn to_satoshi_string(&self) -> String {
        let parsed = match self {
            Price::Number(n) => parse_float(&number_to_string(*n)),
            Price::Text(s) => parse_float(s),
        };
        to_fixed(parsed, SATOSHI_DIGITS)
    }
}

impl From<f64> for Price {
    fn from(v: f64) -> Self {
        Price::Number(v)
    }
}

impl From<i32> for Price {
    fn from(v: i32) -> Self {
        Price::Number(f64::from(v))
    }
}

impl From<i64> for Price {
    fn from(v: i64) -> Self {
        Price::Number(v as f64)
    }
}

impl From<u64> for Price {
    fn from(v: u64) -> Self {
        Price::Number(v as f64)
    }
}

impl From<&str> for Price {
    fn from(v: &str) -> Self {
        Price::Text(v.to_string())
    }
}

impl From<String> for Price {
    fn from(v: String) -> Self {
        Price::Text(v)
    }
}

impl TryFrom<&Value> for Price {
    type Error = HelpersError;

    fn try_from(v: &Value) -> Result<Self> {
        match v {
            Value::Number(n) => Ok(Price::Number(n.as_f64().unwrap_or(f64::NAN))),
            Value::String(s) => Ok(Price::Text(s.clone())),
            Value::Bool(_) => Err(HelpersError::PriceType("boolean")),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                Err(HelpersError::PriceType("object"))
            }
        }
    }
}

/// Равны ли цены с точностью до сатоши (8 знаков).
/// NaN на любом входе — не ошибка: пишем событие и возвращаем false.
pub fn is_equal_price(a: impl Into<Price>, b: impl Into<Price>) -> bool {
    let (a, b) = (a.into(), b.into());
    if a.as_number().is_nan() || b.as_number().is_nan() {
        debug!(?a, ?b, "isEqualPrice received NaN");
        return false;
    }
    a.to_satoshi_string() == b.to_satoshi_string()
}

/// То же для динамических JSON-значений: всё, кроме number|string, — ошибка типа.
/// Тип проверяется до NaN: `(true, "abc")` — ошибка, а не false.
pub fn is_equal_price_value(a: &Value, b: &Value) -> Result<bool> {
    let a = Price::try_from(a)?;
    let b = Price::try_from(b)?;
    Ok(is_equal_price(a, b))
}
