//! Bounded line input.
//!
//! [`read_line`] is the `fgets`-plus-cleanup idiom: it keeps at most
//! `capacity - 1` bytes of one physical line, strips the line terminator,
//! and throws away whatever did not fit so the next read starts on the
//! following line. The outcome is tri-state and end-of-stream is told
//! apart from failure by the stream's flags.

use std::io::{self, BufRead};

use super::stream::InputStream;
use crate::string::BoundedBuf;

/// Result of one line read.
#[derive(Debug)]
pub enum ReadOutcome {
    /// A line (possibly empty) was stored in the buffer.
    Line,
    /// No data was available and the stream reported end-of-file.
    Eof,
    /// The underlying reader failed. The buffer has been cleared.
    Error(io::Error),
}

impl ReadOutcome {
    #[inline]
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line)
    }
}

/// Result of a single-character read (`getchar`).
#[derive(Debug)]
pub enum CharOutcome {
    Char(u8),
    Eof,
    Error(io::Error),
}

fn stream_failure<R: BufRead>(stream: &mut InputStream<R>) -> io::Error {
    stream
        .take_error()
        .unwrap_or_else(|| io::Error::other("stream error indicator set"))
}

/// Consume the rest of the current line, newline included.
///
/// Returns `true` if at least one byte was consumed.
pub fn discard_line<R: BufRead>(stream: &mut InputStream<R>) -> bool {
    discard_rest(stream).0 > 0
}

/// Returns `(bytes consumed, newline seen)`.
fn discard_rest<R: BufRead>(stream: &mut InputStream<R>) -> (usize, bool) {
    let mut consumed = 0;
    while let Some(b) = stream.getc() {
        consumed += 1;
        if b == b'\n' {
            return (consumed, true);
        }
    }
    (consumed, false)
}

/// Drop a `\r` left in front of a stripped `\n`.
fn strip_cr(buf: &mut BoundedBuf) {
    if buf.as_bytes().last() == Some(&b'\r') {
        buf.truncate(buf.len() - 1);
    }
}

/// Read one line into `buf`.
///
/// - A trailing `\n` (and a `\r` right before it) is stripped.
/// - Input beyond `buf.capacity() - 1` bytes is discarded up to and
///   including the newline.
/// - A last line without a newline is still a [`ReadOutcome::Line`]; the
///   call after it returns [`ReadOutcome::Eof`].
/// - NUL bytes in the input are dropped.
pub fn read_line<R: BufRead>(stream: &mut InputStream<R>, buf: &mut BoundedBuf) -> ReadOutcome {
    buf.clear();
    let mut read_any = false;

    while !buf.is_full() {
        match stream.getc() {
            Some(b'\n') => {
                strip_cr(buf);
                return ReadOutcome::Line;
            }
            Some(b) => {
                read_any = true;
                buf.push(b);
            }
            None if stream.is_error() => {
                buf.clear();
                return ReadOutcome::Error(stream_failure(stream));
            }
            None if read_any => return ReadOutcome::Line,
            None => return ReadOutcome::Eof,
        }
    }

    // Buffer full: the remainder of this physical line is dropped.
    let (discarded, newline) = discard_rest(stream);
    if stream.is_error() {
        buf.clear();
        return ReadOutcome::Error(stream_failure(stream));
    }
    if discarded == 1 && newline {
        strip_cr(buf);
    }
    if !read_any && discarded == 0 {
        return ReadOutcome::Eof;
    }
    ReadOutcome::Line
}

/// Read a single byte (`getchar`).
pub fn read_char<R: BufRead>(stream: &mut InputStream<R>) -> CharOutcome {
    match stream.getc() {
        Some(b) => CharOutcome::Char(b),
        None if stream.is_error() => CharOutcome::Error(stream_failure(stream)),
        None => CharOutcome::Eof,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    /// Yields `data` once, then fails with EIO on every later read.
    struct FailsAfter {
        data: Option<&'static [u8]>,
    }

    impl Read for FailsAfter {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            match self.data.take() {
                Some(d) => {
                    let n = d.len().min(out.len());
                    out[..n].copy_from_slice(&d[..n]);
                    Ok(n)
                }
                None => Err(io::Error::from_raw_os_error(5)),
            }
        }
    }

    fn failing_stream(data: &'static [u8]) -> InputStream<BufReader<FailsAfter>> {
        InputStream::new(BufReader::new(FailsAfter { data: Some(data) }))
    }

    fn stream(text: &str) -> InputStream<Cursor<Vec<u8>>> {
        InputStream::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn reads_lines_in_order() {
        let mut s = stream("first\nsecond\n");
        let mut buf = BoundedBuf::new(32);
        assert!(read_line(&mut s, &mut buf).is_line());
        assert_eq!(buf.as_bytes(), b"first");
        assert!(read_line(&mut s, &mut buf).is_line());
        assert_eq!(buf.as_bytes(), b"second");
        assert!(matches!(read_line(&mut s, &mut buf), ReadOutcome::Eof));
        assert!(buf.is_empty());
    }

    #[test]
    fn empty_line_is_success() {
        let mut s = stream("\nnext\n");
        let mut buf = BoundedBuf::new(8);
        assert!(read_line(&mut s, &mut buf).is_line());
        assert!(buf.is_empty());
        assert!(read_line(&mut s, &mut buf).is_line());
        assert_eq!(buf.as_bytes(), b"next");
    }

    #[test]
    fn crlf_is_stripped() {
        let mut s = stream("dos\r\nline\n");
        let mut buf = BoundedBuf::new(16);
        assert!(read_line(&mut s, &mut buf).is_line());
        assert_eq!(buf.as_bytes(), b"dos");
    }

    #[test]
    fn lone_cr_is_kept() {
        let mut s = stream("a\rb\n");
        let mut buf = BoundedBuf::new(16);
        assert!(read_line(&mut s, &mut buf).is_line());
        assert_eq!(buf.as_bytes(), b"a\rb");
    }

    #[test]
    fn last_line_without_newline() {
        let mut s = stream("tail");
        let mut buf = BoundedBuf::new(16);
        assert!(read_line(&mut s, &mut buf).is_line());
        assert_eq!(buf.as_bytes(), b"tail");
        assert!(matches!(read_line(&mut s, &mut buf), ReadOutcome::Eof));
    }

    #[test]
    fn overlong_line_is_truncated_and_rest_discarded() {
        let mut s = stream("abcdefghij\nxyz\n");
        let mut buf = BoundedBuf::new(5);
        assert!(read_line(&mut s, &mut buf).is_line());
        assert_eq!(buf.as_bytes(), b"abcd");
        assert!(read_line(&mut s, &mut buf).is_line());
        assert_eq!(buf.as_bytes(), b"xyz");
    }

    #[test]
    fn exact_fit_keeps_line_and_consumes_newline() {
        let mut s = stream("abcd\nnext\n");
        let mut buf = BoundedBuf::new(5);
        assert!(read_line(&mut s, &mut buf).is_line());
        assert_eq!(buf.as_bytes(), b"abcd");
        assert!(read_line(&mut s, &mut buf).is_line());
        assert_eq!(buf.as_bytes(), b"next");
    }

    #[test]
    fn capacity_one_discards_whole_lines() {
        let mut s = stream("abc\n\n");
        let mut buf = BoundedBuf::new(1);
        assert!(read_line(&mut s, &mut buf).is_line());
        assert!(buf.is_empty());
        assert!(read_line(&mut s, &mut buf).is_line());
        assert!(matches!(read_line(&mut s, &mut buf), ReadOutcome::Eof));
    }

    #[test]
    fn discard_reports_consumption() {
        let mut s = stream("rest of line\nnext");
        assert!(discard_line(&mut s));
        let mut buf = BoundedBuf::new(16);
        assert!(read_line(&mut s, &mut buf).is_line());
        assert_eq!(buf.as_bytes(), b"next");
        assert!(!discard_line(&mut s));
    }

    #[test]
    fn read_char_tri_state() {
        let mut s = stream("y");
        assert!(matches!(read_char(&mut s), CharOutcome::Char(b'y')));
        assert!(matches!(read_char(&mut s), CharOutcome::Eof));
    }

    #[test]
    fn error_after_partial_line_clears_buffer() {
        let mut s = failing_stream(b"abc");
        let mut buf = BoundedBuf::with_contents(16, b"stale");
        match read_line(&mut s, &mut buf) {
            ReadOutcome::Error(e) => assert_eq!(e.raw_os_error(), Some(5)),
            other => panic!("expected error, got {other:?}"),
        }
        assert!(buf.is_empty());
        assert_eq!(buf.to_c_bytes(), [0]);
    }

    #[test]
    fn error_while_discarding_overlong_tail_clears_buffer() {
        let mut s = failing_stream(b"abcdefgh");
        let mut buf = BoundedBuf::with_contents(4, b"old");
        assert!(matches!(read_line(&mut s, &mut buf), ReadOutcome::Error(_)));
        assert!(buf.is_empty());
        assert_eq!(buf.to_c_bytes(), [0]);
    }
}
