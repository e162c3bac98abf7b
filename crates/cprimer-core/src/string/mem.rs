//! Memory operations: memset, memcpy, memmove, memcmp.
//!
//! Safe models of the `<string.h>` memory functions operating on byte
//! slices. Counts are clamped to the slice lengths rather than trusted.

use core::cmp::Ordering;

/// Fills the first `n` bytes of `dest` with `value`.
///
/// Returns the number of bytes actually set.
pub fn memset(dest: &mut [u8], value: u8, n: usize) -> usize {
    let count = n.min(dest.len());
    dest[..count].fill(value);
    count
}

/// Copies `n` bytes from `src` to a distinct `dest`.
///
/// Only `min(n, src.len(), dest.len())` bytes are copied; returns that count.
pub fn memcpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let count = n.min(dest.len()).min(src.len());
    dest[..count].copy_from_slice(&src[..count]);
    count
}

/// Copies `n` bytes starting at `src` to `dest` within the same buffer.
///
/// The regions may overlap; the result is as if the source were first
/// copied to a temporary. The count is clamped so both regions stay in
/// bounds. Returns the number of bytes moved.
pub fn memmove(buf: &mut [u8], dest: usize, src: usize, n: usize) -> usize {
    let len = buf.len();
    if dest >= len || src >= len {
        return 0;
    }
    let count = n.min(len - dest).min(len - src);
    buf.copy_within(src..src + count, dest);
    count
}

/// Compares the first `n` bytes of `a` and `b`.
///
/// Only `min(n, a.len(), b.len())` bytes take part in the comparison.
pub fn memcmp(a: &[u8], b: &[u8], n: usize) -> Ordering {
    let count = n.min(a.len()).min(b.len());
    a[..count].cmp(&b[..count])
}

/// The sign C programs print for a comparison result: `-1`, `0` or `1`.
#[inline]
pub fn ordering_sign(ord: Ordering) -> i32 {
    match ord {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memset_clamps_to_slice() {
        let mut buf = [0u8; 4];
        assert_eq!(memset(&mut buf, b'-', 10), 4);
        assert_eq!(&buf, b"----");
    }

    #[test]
    fn memcpy_partial() {
        let mut dest = [b'.'; 5];
        assert_eq!(memcpy(&mut dest, b"hello world", 3), 3);
        assert_eq!(&dest, b"hel..");
    }

    #[test]
    fn memmove_overlapping_right_shift() {
        let mut buf = *b"Hello, world\0";
        assert_eq!(memmove(&mut buf, 2, 0, 5), 5);
        assert_eq!(&buf[..7], b"HeHello");
    }

    #[test]
    fn memmove_overlapping_left_shift() {
        let mut buf = *b"abcdef";
        assert_eq!(memmove(&mut buf, 0, 2, 4), 4);
        assert_eq!(&buf, b"cdefef");
    }

    #[test]
    fn memmove_out_of_range_is_clamped() {
        let mut buf = *b"abcd";
        assert_eq!(memmove(&mut buf, 3, 0, 4), 1);
        assert_eq!(&buf, b"abca");
        assert_eq!(memmove(&mut buf, 9, 0, 1), 0);
    }

    #[test]
    fn memcmp_orders() {
        assert_eq!(memcmp(b"abc", b"abd", 3), Ordering::Less);
        assert_eq!(memcmp(b"abd", b"abc", 3), Ordering::Greater);
        assert_eq!(memcmp(b"abc", b"abd", 2), Ordering::Equal);
        assert_eq!(ordering_sign(memcmp(b"abc", b"abd", 3)), -1);
    }
}
