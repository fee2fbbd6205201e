use crate::constants::{SATOSHI, SATOSHI_DIGITS};
use crate::numeric::{number_to_string, round_to, to_fixed};

/// Сдвигает цену на долю процента: 2% => 0.02, -2% => -0.02.
/// Результат округляется до `digits` знаков.
pub fn mod_by_percent(price: f64, rate: f64, digits: usize) -> f64 {
    round_to(price * (1.0 + rate), digits)
}

/// Изменение от `start` к `end` как доля: рост положительный, падение отрицательное.
/// Округляем один раз, в самом конце.
pub fn get_percent_diff(start: f64, end: f64, digits: usize) -> f64 {
    let diff = if end < start {
        -((start - end) / start)
    } else {
        (end - start) / start
    };
    round_to(diff, digits)
}

/// 0.12345678 => "12.35%" (digits = 2)
pub fn nice_percent(percent: f64, digits: usize) -> String {
    format!("{}%", to_fixed(percent * 100.0, digits))
}

/// Округление до сатоши (8 знаков)
pub fn cast_satoshi(number: f64) -> f64 {
    round_to(number, SATOSHI_DIGITS)
}

/// Количество сатоши → базовые единицы: 391 => 0.00000391
pub fn to_satoshi(number: f64) -> f64 {
    round_to(number * SATOSHI, SATOSHI_DIGITS)
}

/// Позиция (с 1) первой цифры '1' после точки в строковой записи числа.
/// 0 — если дробной части нет или в ней нет '1'. Это НЕ счётчик знаков:
/// 0.01 => 2, но 0.25 => 0. Поведение зафиксировано тестами.
pub fn get_decimal_places(num: f64) -> usize {
    let repr = number_to_string(num);
    match repr.split_once('.') {
        Some((_, after_decimal)) => after_decimal.find('1').map_or(0, |idx| idx + 1),
        None => 0,
    }
}

/// Случайное число в [min, max)
pub fn rand_between(min: f64, max: f64) -> f64 {
    let r: f64 = rand::random();
    r * (max - min) + min
}

/// "some str" => "Some str"
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
