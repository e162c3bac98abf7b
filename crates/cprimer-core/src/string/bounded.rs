//! Fixed-capacity byte strings.
//!
//! [`BoundedBuf`] is the safe model of a `char buf[N]` used as a string:
//! the capacity counts the terminator slot, so at most `capacity - 1`
//! visible bytes are ever stored. Every mutating operation truncates
//! instead of overflowing, and the contents never hold a NUL byte, so
//! [`BoundedBuf::to_c_bytes`] always produces a well-formed C string.
//!
//! Invariants:
//! - `capacity >= 1`
//! - `bytes.len() <= capacity - 1`
//! - `!bytes.contains(&0)`

use std::borrow::Cow;
use std::fmt;

/// Length of `src` up to (not including) its first NUL byte.
#[inline]
fn c_len(src: &[u8]) -> usize {
    src.iter().position(|&b| b == 0).unwrap_or(src.len())
}

/// Fixed-capacity, always-terminated byte string.
#[derive(Clone, PartialEq, Eq)]
pub struct BoundedBuf {
    bytes: Vec<u8>,
    capacity: usize,
}

impl BoundedBuf {
    /// Create an empty buffer. A capacity of zero is raised to one (room
    /// for the terminator only).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            bytes: Vec::with_capacity(capacity - 1),
            capacity,
        }
    }

    /// Create a buffer initialised from `init`, truncated to fit, like
    /// `char buf[16] = "world";`.
    #[must_use]
    pub fn with_contents(capacity: usize, init: &[u8]) -> Self {
        let mut buf = Self::new(capacity);
        buf.append(init);
        buf
    }

    /// Declared capacity, terminator slot included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of visible bytes (C `strlen`).
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Room left for visible bytes: `capacity - len - 1`.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.bytes.len() - 1
    }

    /// `true` once no further visible byte fits.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Contents as text, replacing invalid UTF-8 (e.g. a multi-byte
    /// character cut by truncation).
    pub fn as_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Copy of the contents followed by the NUL terminator.
    #[must_use]
    pub fn to_c_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.bytes.len() + 1);
        out.extend_from_slice(&self.bytes);
        out.push(0);
        out
    }

    /// Reset to the empty string.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Append one byte. Returns `false` (leaving the buffer untouched) when
    /// the buffer is full or `b` is NUL.
    pub fn push(&mut self, b: u8) -> bool {
        if b == 0 || self.is_full() {
            return false;
        }
        self.bytes.push(b);
        true
    }

    /// Bounded concatenation: append `src` (up to its first NUL), keeping
    /// only what fits in `capacity - len - 1`.
    ///
    /// Returns the number of bytes appended.
    pub fn append(&mut self, src: &[u8]) -> usize {
        self.append_n(src, usize::MAX)
    }

    /// C `strncat`: append at most `n` bytes of `src`, further clamped to
    /// the remaining capacity.
    pub fn append_n(&mut self, src: &[u8], n: usize) -> usize {
        let take = c_len(src).min(n).min(self.remaining());
        self.bytes.extend_from_slice(&src[..take]);
        take
    }

    /// Replace the contents with `src`, truncated to fit (`strncpy` that
    /// always terminates). Returns the number of bytes stored.
    pub fn copy_from(&mut self, src: &[u8]) -> usize {
        self.bytes.clear();
        self.append(src)
    }

    /// C `snprintf`: render `args` into the buffer, truncating to the
    /// capacity. Returns the length the full output would have had.
    pub fn format_into(&mut self, args: fmt::Arguments<'_>) -> usize {
        self.bytes.clear();
        let mut sink = TruncatingSink {
            buf: self,
            wanted: 0,
        };
        // The sink itself never fails.
        let _ = fmt::write(&mut sink, args);
        sink.wanted
    }

    /// Shorten to at most `len` visible bytes.
    pub fn truncate(&mut self, len: usize) {
        self.bytes.truncate(len);
    }
}

impl fmt::Debug for BoundedBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedBuf")
            .field("contents", &self.as_str_lossy())
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl fmt::Display for BoundedBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str_lossy())
    }
}

struct TruncatingSink<'a> {
    buf: &'a mut BoundedBuf,
    wanted: usize,
}

impl fmt::Write for TruncatingSink<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.wanted += s.len();
        self.buf.append(s.as_bytes());
        Ok(())
    }
}
