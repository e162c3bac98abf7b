//! Numeric conversion: strtol, strtoul, strtod and the strict parser built
//! on top of them.
//!
//! The `*_impl` functions follow the C contracts: skip leading whitespace,
//! accept an optional sign, report how many bytes were consumed (zero when
//! no digits were found), and saturate on overflow while flagging it in the
//! returned [`ConversionStatus`] where C would set `errno = ERANGE`.

use thiserror::Error;

use crate::ctype::is_space;

/// Result of a string-to-number conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStatus {
    Success,
    Overflow,
    Underflow,
    InvalidBase,
}

/// Why a strict integer parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseIntError {
    #[error("not a number")]
    NotANumber,
    #[error("trailing garbage after number")]
    TrailingGarbage,
    #[error("number out of range")]
    OutOfRange,
}

/// Sign, effective base and first digit position of an integer numeral.
struct NumeralPrefix {
    negative: bool,
    base: u64,
    digits_at: usize,
}

fn numeral_prefix(s: &[u8], base: i32) -> Option<NumeralPrefix> {
    let len = s.len();
    let mut i = 0;
    while i < len && is_space(s[i]) {
        i += 1;
    }

    let mut negative = false;
    if i < len && (s[i] == b'-' || s[i] == b'+') {
        negative = s[i] == b'-';
        i += 1;
    }
    if i == len {
        return None;
    }

    // "0x" only counts as a prefix when a hex digit follows it.
    let has_0x_prefix = i + 2 < len
        && s[i] == b'0'
        && (s[i + 1] == b'x' || s[i + 1] == b'X')
        && s[i + 2].is_ascii_hexdigit();

    let effective_base = match base {
        0 if has_0x_prefix => {
            i += 2;
            16
        }
        0 if s[i] == b'0' => 8,
        0 => 10,
        16 if has_0x_prefix => {
            i += 2;
            16
        }
        b => u64::try_from(b).unwrap_or(0),
    };

    Some(NumeralPrefix {
        negative,
        base: effective_base,
        digits_at: i,
    })
}

/// Accumulated digits: `(magnitude, end, any_digits, overflowed)`.
fn accumulate(s: &[u8], start: usize, base: u64, abs_max: u64) -> (u64, usize, bool, bool) {
    let cutoff = abs_max / base;
    let cutlim = abs_max % base;

    let mut acc: u64 = 0;
    let mut any_digits = false;
    let mut overflow = false;
    let mut i = start;

    while i < s.len() {
        let digit = match s[i] {
            c @ b'0'..=b'9' => u64::from(c - b'0'),
            c @ b'a'..=b'z' => u64::from(c - b'a' + 10),
            c @ b'A'..=b'Z' => u64::from(c - b'A' + 10),
            _ => break,
        };
        if digit >= base {
            break;
        }
        any_digits = true;
        // Past an overflow the remaining digits are still consumed.
        if !overflow {
            if acc > cutoff || (acc == cutoff && digit > cutlim) {
                overflow = true;
            } else {
                acc = acc * base + digit;
            }
        }
        i += 1;
    }

    (acc, i, any_digits, overflow)
}

/// C `strtol`: returns `(value, consumed_bytes, status)`.
pub fn strtol_impl(s: &[u8], base: i32) -> (i64, usize, ConversionStatus) {
    let Some(prefix) = numeral_prefix(s, base) else {
        return (0, 0, ConversionStatus::Success);
    };
    if !(2..=36).contains(&prefix.base) {
        return (0, 0, ConversionStatus::InvalidBase);
    }

    let abs_max = if prefix.negative {
        i64::MIN.unsigned_abs()
    } else {
        i64::MAX as u64
    };
    let (acc, end, any_digits, overflow) = accumulate(s, prefix.digits_at, prefix.base, abs_max);

    if !any_digits {
        return (0, 0, ConversionStatus::Success);
    }
    if overflow {
        return if prefix.negative {
            (i64::MIN, end, ConversionStatus::Underflow)
        } else {
            (i64::MAX, end, ConversionStatus::Overflow)
        };
    }

    let val = if prefix.negative {
        (acc as i64).wrapping_neg()
    } else {
        acc as i64
    };
    (val, end, ConversionStatus::Success)
}

pub fn strtol(s: &[u8], base: i32) -> (i64, usize) {
    let (val, len, _) = strtol_impl(s, base);
    (val, len)
}

/// C `strtoul`: a leading `-` negates in unsigned arithmetic, as C does.
pub fn strtoul_impl(s: &[u8], base: i32) -> (u64, usize, ConversionStatus) {
    let Some(prefix) = numeral_prefix(s, base) else {
        return (0, 0, ConversionStatus::Success);
    };
    if !(2..=36).contains(&prefix.base) {
        return (0, 0, ConversionStatus::InvalidBase);
    }

    let (acc, end, any_digits, overflow) = accumulate(s, prefix.digits_at, prefix.base, u64::MAX);
    if !any_digits {
        return (0, 0, ConversionStatus::Success);
    }
    if overflow {
        return (u64::MAX, end, ConversionStatus::Overflow);
    }
    let val = if prefix.negative { acc.wrapping_neg() } else { acc };
    (val, end, ConversionStatus::Success)
}

fn eat_ascii_ci(s: &[u8], at: usize, word: &[u8]) -> bool {
    s.len() >= at + word.len() && s[at..at + word.len()].eq_ignore_ascii_case(word)
}

/// C `strtod` restricted to decimal notation plus `inf`/`infinity`/`nan`.
///
/// Returns `(value, consumed_bytes, status)`. An exponent marker is only
/// consumed when digits follow it. A finite numeral too large for `f64`
/// yields infinity with [`ConversionStatus::Overflow`]; one that rounds to
/// zero despite non-zero digits yields [`ConversionStatus::Underflow`].
pub fn strtod_impl(s: &[u8]) -> (f64, usize, ConversionStatus) {
    let len = s.len();
    let mut i = 0;
    while i < len && is_space(s[i]) {
        i += 1;
    }
    let start = i;
    let negative = i < len && s[i] == b'-';
    if i < len && (s[i] == b'-' || s[i] == b'+') {
        i += 1;
    }

    if eat_ascii_ci(s, i, b"inf") {
        let end = if eat_ascii_ci(s, i, b"infinity") { i + 8 } else { i + 3 };
        let v = if negative { f64::NEG_INFINITY } else { f64::INFINITY };
        return (v, end, ConversionStatus::Success);
    }
    if eat_ascii_ci(s, i, b"nan") {
        let v = if negative { -f64::NAN } else { f64::NAN };
        return (v, i + 3, ConversionStatus::Success);
    }

    let mut mantissa_digits = 0;
    let mut nonzero_digit = false;
    while i < len && s[i].is_ascii_digit() {
        nonzero_digit |= s[i] != b'0';
        mantissa_digits += 1;
        i += 1;
    }
    if i < len && s[i] == b'.' {
        i += 1;
        while i < len && s[i].is_ascii_digit() {
            nonzero_digit |= s[i] != b'0';
            mantissa_digits += 1;
            i += 1;
        }
    }
    if mantissa_digits == 0 {
        return (0.0, 0, ConversionStatus::Success);
    }

    if i < len && (s[i] == b'e' || s[i] == b'E') {
        let mut j = i + 1;
        if j < len && (s[j] == b'-' || s[j] == b'+') {
            j += 1;
        }
        if j < len && s[j].is_ascii_digit() {
            while j < len && s[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    // The scanned range is ASCII and matches Rust's float grammar.
    let value: f64 = std::str::from_utf8(&s[start..i])
        .ok()
        .and_then(|text| text.parse().ok())
        .unwrap_or(0.0);

    let status = if value.is_infinite() {
        ConversionStatus::Overflow
    } else if value == 0.0 && nonzero_digit {
        ConversionStatus::Underflow
    } else {
        ConversionStatus::Success
    };
    (value, i, status)
}

pub fn strtod(s: &[u8]) -> (f64, usize) {
    let (val, len, _) = strtod_impl(s);
    (val, len)
}

/// Strict base-10 parse of the whole string.
///
/// Leading and trailing ASCII whitespace is allowed; anything else must be
/// the numeral. Failure reasons are checked in the order: no digits, out
/// of range for `T`, trailing garbage. The magnitude is accumulated as
/// `u64` and signed in `i128`, so every value of every primitive integer
/// up to 64 bits is reachable.
pub fn parse_strict<T: TryFrom<i128>>(s: &str) -> Result<T, ParseIntError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && is_space(bytes[i]) {
        i += 1;
    }
    let negative = bytes.get(i) == Some(&b'-');
    if matches!(bytes.get(i), Some(b'-' | b'+')) {
        i += 1;
    }
    // strtoul would skip a second sign or more whitespace here.
    if !bytes.get(i).is_some_and(u8::is_ascii_digit) {
        return Err(ParseIntError::NotANumber);
    }

    let (magnitude, used, status) = strtoul_impl(&bytes[i..], 10);
    if status != ConversionStatus::Success {
        return Err(ParseIntError::OutOfRange);
    }
    let signed = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    let value = T::try_from(signed).map_err(|_| ParseIntError::OutOfRange)?;
    if !bytes[i + used..].iter().all(|&b| is_space(b)) {
        return Err(ParseIntError::TrailingGarbage);
    }
    Ok(value)
}

/// Out-parameter style parse: `s` must be exactly a numeral (no
/// surrounding whitespace) that fits in `i32`.
///
/// Stricter than the `strtol`-plus-end-pointer check it replaces: that
/// check skips leading whitespace (`" 5"` succeeds) and narrows a `long`
/// silently. Here both cases return `None`.
pub fn try_parse_int(s: &str) -> Option<i32> {
    if s.as_bytes().first().is_some_and(|&b| is_space(b)) {
        return None;
    }
    let (value, consumed, status) = strtol_impl(s.as_bytes(), 10);
    if consumed == 0 || consumed != s.len() || status != ConversionStatus::Success {
        return None;
    }
    i32::try_from(value).ok()
}
