//! Standard I/O.
//!
//! Models the `<stdio.h>` input idioms the lessons rely on: a byte stream
//! with eof/error indicators, bounded line reads, line-oriented scanning,
//! and the few `printf` renderings Rust formatting spells differently.

pub mod format;
pub mod line;
pub mod scan;
pub mod stream;

pub use format::{c_exp, c_fixed, tagged};
pub use line::{CharOutcome, ReadOutcome, discard_line, read_char, read_line};
pub use scan::{Directive, Scanned, scan_line};
pub use stream::{InputStream, StreamFlags};
