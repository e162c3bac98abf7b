//! Formatting helpers for output Rust's `format!` does not spell like C.
//!
//! Most `printf` directives map directly onto format specs (`%05d` is
//! `{:05}`, `%.2f` is `{:.2}`, `%10s` is `{:>10}`). The exceptions are the
//! exponent form of `%e` and non-finite values, handled here.

use std::fmt;

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some(if value.is_sign_negative() { "-nan" } else { "nan" })
    } else if value.is_infinite() {
        Some(if value < 0.0 { "-inf" } else { "inf" })
    } else {
        None
    }
}

/// Render `value` like C `%.<precision>e`: signed exponent with at least
/// two digits (`3.141593e+00`).
pub fn c_exp(value: f64, precision: usize) -> String {
    if let Some(s) = non_finite(value) {
        return s.to_string();
    }
    let rendered = format!("{value:.precision$e}");
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}

/// Render `value` like C `%.<precision>f`.
pub fn c_fixed(value: f64, precision: usize) -> String {
    match non_finite(value) {
        Some(s) => s.to_string(),
        None => format!("{value:.precision$}"),
    }
}

/// A level-tagged message line, the typed replacement for a variadic
/// `logf(level, fmt, ...)` helper: `[LEVEL] message`.
pub fn tagged(level: &str, args: fmt::Arguments<'_>) -> String {
    format!("[{level}] {args}")
}
