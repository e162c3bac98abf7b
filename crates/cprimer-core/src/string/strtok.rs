//! Delimiter tokenization modelled on `strtok_r`.
//!
//! C's `strtok` writes NULs over the delimiters of the string it scans.
//! Here the scan is non-destructive: [`strtok_r`] reports token boundaries
//! and the save position, and [`Tokens`] wraps it as an iterator.

/// Returns true if `b` is one of `delimiters` (scanning stops at a NUL).
fn is_delim(b: u8, delimiters: &[u8]) -> bool {
    delimiters.iter().take_while(|&&d| d != 0).any(|&d| d == b)
}

/// Reentrant tokenizer step.
///
/// Starting at `save_ptr`, skips leading delimiters and returns
/// `Some((token_start, token_len, next_save_ptr))`, or `None` when only
/// delimiters (or a NUL) remain.
pub fn strtok_r(s: &[u8], delimiters: &[u8], save_ptr: usize) -> Option<(usize, usize, usize)> {
    let len = s.len();
    let mut pos = save_ptr;

    while pos < len && s[pos] != 0 && is_delim(s[pos], delimiters) {
        pos += 1;
    }
    if pos >= len || s[pos] == 0 {
        return None;
    }

    let token_start = pos;
    while pos < len && s[pos] != 0 && !is_delim(s[pos], delimiters) {
        pos += 1;
    }
    let token_len = pos - token_start;

    // Step over the delimiter that ended the token.
    if pos < len && s[pos] != 0 {
        pos += 1;
    }

    Some((token_start, token_len, pos))
}

/// Iterator over the tokens of a byte string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a [u8],
    delimiters: &'a [u8],
    save_ptr: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (start, len, save) = strtok_r(self.text, self.delimiters, self.save_ptr)?;
        self.save_ptr = save;
        Some(&self.text[start..start + len])
    }
}

/// Tokenize `text` on any byte in `delimiters`, skipping empty tokens.
pub fn tokens<'a>(text: &'a [u8], delimiters: &'a [u8]) -> Tokens<'a> {
    Tokens {
        text,
        delimiters,
        save_ptr: 0,
    }
}
