//! Input stream state.
//!
//! [`InputStream`] is the safe model of a readable C `FILE`: it hands out
//! one byte at a time and keeps the sticky end-of-file and error
//! indicators that `feof`/`ferror` report. Those flags, not the absence of
//! data, are what tell end-of-stream apart from a read failure.

use std::io::{self, BufRead};

/// Runtime stream state flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamFlags {
    pub eof: bool,
    pub error: bool,
}

/// Byte-oriented reader with C stream semantics.
#[derive(Debug)]
pub struct InputStream<R> {
    inner: R,
    flags: StreamFlags,
    last_error: Option<io::Error>,
}

impl<R: BufRead> InputStream<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            flags: StreamFlags::default(),
            last_error: None,
        }
    }

    /// C `getc`: the next byte, or `None` at end-of-stream or on error.
    ///
    /// `None` sets exactly one of the eof/error flags. Once end-of-file
    /// has been seen no further reads are attempted until
    /// [`clear_err`](Self::clear_err). Interrupted reads are retried.
    pub fn getc(&mut self) -> Option<u8> {
        if self.flags.eof {
            return None;
        }
        loop {
            match self.inner.fill_buf() {
                Ok([]) => {
                    self.flags.eof = true;
                    return None;
                }
                Ok(buf) => {
                    let b = buf[0];
                    self.inner.consume(1);
                    return Some(b);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.flags.error = true;
                    self.last_error = Some(e);
                    return None;
                }
            }
        }
    }

    /// C `feof`.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.flags.eof
    }

    /// C `ferror`.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.flags.error
    }

    #[inline]
    pub fn flags(&self) -> StreamFlags {
        self.flags
    }

    /// C `clearerr`: reset both indicators so the stream can be retried.
    pub fn clear_err(&mut self) {
        self.flags.eof = false;
        self.flags.error = false;
        self.last_error = None;
    }

    /// Take the error that set the error flag, if one is still held.
    ///
    /// The flag itself stays set until [`clear_err`](Self::clear_err).
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
