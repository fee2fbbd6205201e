//! Числовая семантика в том виде, в каком её видят потребители цен:
//! `toFixed`, `Number(str)`, `parseFloat`, `Number#toString`.
//!
//! Все функции чистые; NaN не паникует, а протекает дальше как значение.

/// Фиксирует `x` на `digits` знаков после запятой.
///
/// Берётся точное десятичное разложение double; ровно посередине округляем
/// от нуля (Rust `{:.N}` округляет к чётному, поэтому такие случаи обрабатываем сами).
/// Для `|x| >= 1e21` возвращается обычное строковое представление.
pub fn to_fixed(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.abs() >= 1e21 {
        return number_to_string(x);
    }

    let abs = x.abs();
    let body = if is_exact_half(abs, digits) {
        round_half_up(abs, digits)
    } else {
        format!("{abs:.digits$}")
    };

    // -0.0 знака не получает
    if x < 0.0 { format!("-{body}") } else { body }
}

/// `+to_fixed(x, digits)`: округление с возвратом числа
pub fn round_to(x: f64, digits: usize) -> f64 {
    to_number(&to_fixed(x, digits))
}

/// Строгое приведение строки к числу (`Number(s)` / унарный плюс).
/// Пустая строка — 0, любой мусор — NaN.
pub fn to_number(s: &str) -> f64 {
    let t = s.trim_matches(is_js_whitespace);
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some(v) = parse_prefixed_radix(t) {
        return v;
    }
    if scan_decimal(t) == t.len() {
        t.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Мягкий разбор: берём самый длинный числовой префикс (`parseFloat`).
pub fn parse_float(s: &str) -> f64 {
    let t = s.trim_start_matches(is_js_whitespace);
    for (prefix, value) in [
        ("Infinity", f64::INFINITY),
        ("+Infinity", f64::INFINITY),
        ("-Infinity", f64::NEG_INFINITY),
    ] {
        if t.starts_with(prefix) {
            return value;
        }
    }
    match scan_decimal(t) {
        0 => f64::NAN,
        n => t[..n].parse::<f64>().unwrap_or(f64::NAN),
    }
}

/// Строковое представление числа по умолчанию: кратчайшая запись, экспонента
/// только для порядков < 1e-6 и >= 1e21 (`1e-7`, `1.5e+21`).
pub fn number_to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let sci = format!("{x:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return format!("{x}");
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if (-6..=20).contains(&exp) {
        format!("{x}")
    } else if exp >= 0 {
        format!("{mantissa}e+{exp}")
    } else {
        format!("{mantissa}e{exp}")
    }
}

fn is_js_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Ровно ли `x * 10^digits` имеет дробную часть .5.
/// x = m * 2^e (m нечётно) => x * 10^d = m * 5^d * 2^(e+d), половина только при e + d == -1.
fn is_exact_half(x: f64, digits: usize) -> bool {
    if x == 0.0 || !x.is_finite() {
        return false;
    }
    let bits = x.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i64;
    let frac = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if exp_bits == 0 {
        (frac, -1074i64)
    } else {
        (frac | (1u64 << 52), exp_bits - 1075)
    };
    let exp = exp + i64::from(mantissa.trailing_zeros());
    exp + digits as i64 == -1
}

/// Разложение ровно на digits+1 знаков, значит `{:.N}` тут точное.
fn round_half_up(x: f64, digits: usize) -> String {
    let mut exact = format!("{x:.prec$}", prec = digits + 1);
    exact.pop(); // хвостовая '5'
    if digits == 0 {
        exact.pop(); // '.'
    }
    increment_last_digit(&exact)
}

fn increment_last_digit(s: &str) -> String {
    let mut bytes = s.as_bytes().to_vec();
    let mut i = bytes.len();
    while i > 0 {
        i -= 1;
        match bytes[i] {
            b'.' => continue,
            b'9' => bytes[i] = b'0',
            d => {
                bytes[i] = d + 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// 0x.. / 0o.. / 0b.. (без знака)
fn parse_prefixed_radix(t: &str) -> Option<f64> {
    let (radix, digits) = match t.get(..2)? {
        "0x" | "0X" => (16, &t[2..]),
        "0o" | "0O" => (8, &t[2..]),
        "0b" | "0B" => (2, &t[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Длина самого длинного префикса вида `[+-]? (d+ [. d*] | . d+) ([eE] [+-]? d+)?`
fn scan_decimal(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if digits + (j - frac_start) > 0 {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return 0;
    }

    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}
