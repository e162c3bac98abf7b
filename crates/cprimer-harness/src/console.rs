//! Console plumbing shared by the programs.
//!
//! [`Console`] bundles the input stream with the two output sinks so a
//! program can be driven from real stdio or from in-memory buffers in
//! tests. Input failures are remembered (as errno values) so the runner
//! can log them after the program returns.

use std::io::{self, BufRead, Write};

use cprimer_core::errno::{errno_of, perror_line};
use cprimer_core::stdio::{self, CharOutcome, InputStream, ReadOutcome};
use cprimer_core::string::BoundedBuf;

/// Size of the line buffers the programs read into.
pub const LINE_CAPACITY: usize = 256;

pub struct Console<R, W, E> {
    input: InputStream<R>,
    out: W,
    err: E,
    input_errors: Vec<i32>,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self {
            input: InputStream::new(input),
            out,
            err,
            input_errors: Vec::new(),
        }
    }

    /// Standard output.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Standard error.
    pub fn err(&mut self) -> &mut E {
        &mut self.err
    }

    /// Both output sinks at once.
    pub fn streams(&mut self) -> (&mut W, &mut E) {
        (&mut self.out, &mut self.err)
    }

    /// Write `text` without a newline and flush so it is visible before
    /// the program blocks on input.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    fn note_error(&mut self, err: &io::Error) -> i32 {
        let code = errno_of(err);
        self.input_errors.push(code);
        // The failure has been recorded; let later reads try again.
        self.input.clear_err();
        code
    }

    /// Bounded line read. On [`ReadOutcome::Error`] the errno is recorded.
    pub fn read_line(&mut self, buf: &mut BoundedBuf) -> ReadOutcome {
        let outcome = stdio::read_line(&mut self.input, buf);
        if let ReadOutcome::Error(e) = &outcome {
            self.note_error(e);
        }
        outcome
    }

    /// Single byte read (`getchar`).
    pub fn read_char(&mut self) -> CharOutcome {
        let outcome = stdio::read_char(&mut self.input);
        if let CharOutcome::Error(e) = &outcome {
            self.note_error(e);
        }
        outcome
    }

    /// Drop the rest of the current input line.
    pub fn discard_line(&mut self) -> bool {
        stdio::discard_line(&mut self.input)
    }

    /// `perror(prefix)` for an I/O error: the message goes to stderr.
    pub fn perror(&mut self, prefix: &str, err: &io::Error) -> io::Result<()> {
        writeln!(self.err, "{}", perror_line(prefix, errno_of(err)))
    }

    /// Errno values of input failures seen since the last call.
    pub fn take_input_errors(&mut self) -> Vec<i32> {
        std::mem::take(&mut self.input_errors)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input.into_inner(), self.out, self.err)
    }
}

/// A console over in-memory input with captured output, for tests and
/// scripted runs.
pub type BufferConsole = Console<io::Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

impl BufferConsole {
    #[must_use]
    pub fn scripted(input: &str) -> Self {
        Console::new(io::Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new())
    }

    /// Captured stdout and stderr as text.
    #[must_use]
    pub fn transcript(self) -> (String, String) {
        let (_, out, err) = self.into_parts();
        (
            String::from_utf8_lossy(&out).into_owned(),
            String::from_utf8_lossy(&err).into_owned(),
        )
    }
}
