//! Line-oriented `scanf`.
//!
//! Applies a list of conversion directives to one line of input. As with
//! C `scanf`, each directive skips leading whitespace, conversion stops at
//! the first directive that does not match, and the caller learns how many
//! items were converted from the length of the result.

use crate::ctype::is_space;
use crate::stdlib::conversion::{ConversionStatus, strtod_impl, strtol_impl};

/// One conversion directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `%d`: a base-10 `i32`.
    Int,
    /// `%lf`: a decimal floating-point number.
    Float,
    /// `%<max>s`: a whitespace-delimited word, at most `max` bytes.
    Word { max: usize },
}

/// A converted item.
#[derive(Debug, Clone, PartialEq)]
pub enum Scanned {
    Int(i32),
    Float(f64),
    Word(String),
}

fn skip_space(input: &[u8], mut pos: usize) -> usize {
    while pos < input.len() && is_space(input[pos]) {
        pos += 1;
    }
    pos
}

fn convert(input: &[u8], pos: usize, directive: Directive) -> Option<(Scanned, usize)> {
    let start = skip_space(input, pos);
    if start >= input.len() {
        return None;
    }
    let rest = &input[start..];
    match directive {
        Directive::Int => {
            let (value, used, status) = strtol_impl(rest, 10);
            if used == 0 || status != ConversionStatus::Success {
                return None;
            }
            let value = i32::try_from(value).ok()?;
            Some((Scanned::Int(value), start + used))
        }
        Directive::Float => {
            let (value, used, _) = strtod_impl(rest);
            if used == 0 {
                return None;
            }
            Some((Scanned::Float(value), start + used))
        }
        Directive::Word { max } => {
            let len = rest
                .iter()
                .take(max.max(1))
                .take_while(|&&b| !is_space(b))
                .count();
            let word = String::from_utf8_lossy(&rest[..len]).into_owned();
            Some((Scanned::Word(word), start + len))
        }
    }
}

/// Apply `directives` to `input` in order, stopping at the first mismatch.
pub fn scan_line(input: &[u8], directives: &[Directive]) -> Vec<Scanned> {
    let mut out = Vec::with_capacity(directives.len());
    let mut pos = 0;
    for &directive in directives {
        match convert(input, pos, directive) {
            Some((item, next)) => {
                out.push(item);
                pos = next;
            }
            None => break,
        }
    }
    out
}
