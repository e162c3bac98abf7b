//! Character classification and conversion.
//!
//! Models `<ctype.h>` for single bytes in the "C" locale. The predicates
//! return `bool`; [`Classification`] gathers the ones the lessons print
//! side by side, rendered as the `0`/`1` integers C programs show.

/// Returns `true` if `c` is an alphabetic character (`[A-Za-z]`).
#[inline]
pub fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns `true` if `c` is a decimal digit (`[0-9]`).
#[inline]
pub fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_alnum(c: u8) -> bool {
    is_alpha(c) || is_digit(c)
}

/// Returns `true` for space, tab, newline, vertical tab, form feed and
/// carriage return.
#[inline]
pub fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[inline]
pub fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

#[inline]
pub fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

/// Returns `true` if `c` is printable, space included.
#[inline]
pub fn is_print(c: u8) -> bool {
    (0x20..=0x7E).contains(&c)
}

#[inline]
pub fn is_punct(c: u8) -> bool {
    is_print(c) && !is_alnum(c) && c != b' '
}

/// Converts a lowercase letter to uppercase; every other byte is returned as is.
#[inline]
pub fn to_upper(c: u8) -> u8 {
    if is_lower(c) { c - 32 } else { c }
}

/// Converts an uppercase letter to lowercase; every other byte is returned as is.
#[inline]
pub fn to_lower(c: u8) -> u8 {
    if is_upper(c) { c + 32 } else { c }
}

/// Snapshot of the classification of one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub byte: u8,
    pub alpha: bool,
    pub digit: bool,
    pub space: bool,
    pub punct: bool,
    pub upper: u8,
}

impl Classification {
    /// `isalpha`-style integer flag (`1` or `0`).
    #[must_use]
    pub fn flag(set: bool) -> i32 {
        i32::from(set)
    }
}

/// Classifies `c` in one pass.
#[must_use]
pub fn classify(c: u8) -> Classification {
    Classification {
        byte: c,
        alpha: is_alpha(c),
        digit: is_digit(c),
        space: is_space(c),
        punct: is_punct(c),
        upper: to_upper(c),
    }
}

/// Classifies every byte of `text` in order.
pub fn classify_all(text: &[u8]) -> Vec<Classification> {
    text.iter().copied().map(classify).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_digit_boundaries() {
        assert!(is_alpha(b'A') && is_alpha(b'z'));
        assert!(!is_alpha(b'@') && !is_alpha(b'['));
        assert!(!is_alpha(b'`') && !is_alpha(b'{'));
        for c in b'0'..=b'9' {
            assert!(is_digit(c));
        }
        assert!(!is_digit(b'/') && !is_digit(b':'));
    }

    #[test]
    fn space_set_is_exactly_six_bytes() {
        let spaces: Vec<u8> = (0u8..=255).filter(|&c| is_space(c)).collect();
        assert_eq!(spaces, vec![b'\t', b'\n', 0x0B, 0x0C, b'\r', b' ']);
    }

    #[test]
    fn case_conversion_leaves_non_letters() {
        assert_eq!(to_upper(b'a'), b'A');
        assert_eq!(to_upper(b'!'), b'!');
        assert_eq!(to_lower(b'Q'), b'q');
        assert_eq!(to_lower(b'9'), b'9');
    }

    #[test]
    fn classify_lesson_text() {
        let rows = classify_all(b"Az09!? ");
        assert_eq!(rows.len(), 7);
        assert!(rows[0].alpha && !rows[0].digit);
        assert_eq!(rows[1].upper, b'Z');
        assert!(rows[2].digit && rows[3].digit);
        assert!(rows[4].punct && rows[5].punct);
        assert!(rows[6].space && !rows[6].punct);
        assert_eq!(Classification::flag(rows[6].space), 1);
        assert_eq!(Classification::flag(rows[6].alpha), 0);
    }

    #[test]
    fn exhaustive_invariants() {
        for c in 0u8..=255 {
            assert_eq!(is_alnum(c), is_alpha(c) || is_digit(c), "alnum for {c}");
            assert_eq!(is_alpha(c), is_upper(c) || is_lower(c), "alpha for {c}");
            if is_punct(c) {
                assert!(is_print(c) && !is_alnum(c) && c != b' ', "punct for {c}");
            }
            assert_eq!(to_lower(to_upper(c)), to_lower(c), "round-trip for {c}");
        }
    }
}
