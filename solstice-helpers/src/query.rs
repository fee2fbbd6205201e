use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;

use crate::error::{HelpersError, Result};
use crate::numeric::number_to_string;

/// Собирает `key1=val1&key2=val2` из плоской структуры в порядке полей.
/// Поля со значением null (`Option::None`) пропускаются. URL-кодирования нет:
/// значения, требующие экранирования, вызывающий кодирует сам.
pub fn to_query_string<T: Serialize + ?Sized>(params: &T) -> Result<String> {
    let Value::Object(map) = serde_json::to_value(params)? else {
        return Err(HelpersError::NotAnObject);
    };
    Ok(map
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| format!("{k}={}", render_value(v)))
        .join("&"))
}

/// Для готовых пар ключ/значение
pub fn to_query_string_pairs<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: Display,
    V: Display,
{
    pairs
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| format!("{k}={v}")))
        .join("&")
}

/// Значение так, как оно выглядит при строковой интерполяции
fn render_value(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => number_to_string(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        // null внутри массива превращается в пустую строку
        Value::Array(items) => items
            .iter()
            .map(|item| if item.is_null() { String::new() } else { render_value(item) })
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
