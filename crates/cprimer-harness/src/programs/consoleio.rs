//! Console input idioms: bounded line reads, strict integer input with a
//! re-prompt, scanning, formatting and single-character commands.

use std::io::{BufRead, Write};

use cprimer_core::stdio::{
    CharOutcome, Directive, ReadOutcome, Scanned, c_exp, c_fixed, scan_line,
};
use cprimer_core::stdlib::{ParseIntError, parse_strict};
use cprimer_core::string::BoundedBuf;

use super::Context;
use crate::console::{Console, LINE_CAPACITY};
use crate::error::HarnessError;

/// What a C `scanf` returns when input ends before the first conversion.
const SCAN_EOF: i32 = -1;

const MENU: &str = "\n-- Console I/O Basics --\n\
1) Echo a line (read_line)\n\
2) Read integer (parse_strict)\n\
3) Scan two integers (+discard)\n\
4) Formatting examples\n\
5) Prompt loop with exit\n\
6) Read single character\n\
0) Quit\n> ";

fn echo_line<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
) -> Result<(), HarnessError> {
    let mut buf = BoundedBuf::new(LINE_CAPACITY);
    con.prompt("Enter a line: ")?;
    match con.read_line(&mut buf) {
        ReadOutcome::Line => writeln!(con.out(), "You entered: {buf}")?,
        ReadOutcome::Eof => writeln!(con.out(), "Reached EOF.")?,
        ReadOutcome::Error(e) => con.perror("read_line", &e)?,
    }
    Ok(())
}

fn read_int<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
) -> Result<(), HarnessError> {
    let mut buf = BoundedBuf::new(LINE_CAPACITY);
    let value = loop {
        con.prompt("Enter an integer: ")?;
        if !con.read_line(&mut buf).is_line() {
            writeln!(con.out(), "No input.")?;
            return Ok(());
        }
        match parse_strict::<i64>(&buf.as_str_lossy()) {
            Ok(v) => break v,
            Err(ParseIntError::NotANumber | ParseIntError::OutOfRange) => {
                writeln!(con.out(), "Not a valid integer, try again.")?;
            }
            Err(ParseIntError::TrailingGarbage) => {
                writeln!(con.out(), "Extra characters after number, try again.")?;
            }
        }
    };
    writeln!(con.out(), "You entered integer: {value}")?;
    Ok(())
}

fn scan_two<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
) -> Result<(), HarnessError> {
    let mut buf = BoundedBuf::new(LINE_CAPACITY);
    con.prompt("Enter two integers separated by space: ")?;
    // The whole line is consumed, so nothing is left for the menu to trip on.
    let items = match con.read_line(&mut buf) {
        ReadOutcome::Line => scan_line(buf.as_bytes(), &[Directive::Int, Directive::Int]),
        ReadOutcome::Eof | ReadOutcome::Error(_) => {
            writeln!(con.out(), "Couldn't read two ints (read {SCAN_EOF}).")?;
            return Ok(());
        }
    };
    match items.as_slice() {
        [Scanned::Int(a), Scanned::Int(b)] => writeln!(con.out(), "Read: a={a}, b={b}")?,
        partial => writeln!(con.out(), "Couldn't read two ints (read {}).", partial.len())?,
    }
    Ok(())
}

fn formatting<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    let i = 42;
    let d = 3.1415926535_f64;
    let s = "C I/O";
    writeln!(out, "int: {i}, hex: 0x{i:X}, padded: {i:05}")?;
    writeln!(
        out,
        "double default: {}, 2dp: {}, exp: {}",
        c_fixed(d, 6),
        c_fixed(d, 2),
        c_exp(d, 6)
    )?;
    writeln!(out, "string: {s}, width 10: '{s:>10}'")?;
    Ok(())
}

fn prompt_loop<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
) -> Result<(), HarnessError> {
    let mut name = BoundedBuf::new(LINE_CAPACITY);
    loop {
        con.prompt("Enter your name (empty to stop): ")?;
        if !con.read_line(&mut name).is_line() || name.is_empty() {
            break;
        }
        writeln!(con.out(), "Hello, {name}!")?;
    }
    Ok(())
}

fn read_single_char<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
) -> Result<(), HarnessError> {
    con.prompt("Proceed? [y/n]: ")?;
    match con.read_char() {
        CharOutcome::Char(c) => {
            writeln!(con.out(), "You typed '{}'", char::from(c))?;
            // A bare newline already ended the line; discarding again would
            // swallow the next one.
            if c != b'\n' {
                con.discard_line();
            }
        }
        CharOutcome::Eof => writeln!(con.out(), "EOF encountered.")?,
        CharOutcome::Error(e) => con.perror("read_char", &e)?,
    }
    Ok(())
}

pub fn run<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
    _ctx: &mut Context,
) -> Result<(), HarnessError> {
    let mut choice = BoundedBuf::new(LINE_CAPACITY);
    loop {
        con.prompt(MENU)?;
        if !con.read_line(&mut choice).is_line() {
            break;
        }
        match choice.as_bytes() {
            b"0" => break,
            b"1" => echo_line(con)?,
            b"2" => read_int(con)?,
            b"3" => scan_two(con)?,
            b"4" => formatting(con.out())?,
            b"5" => prompt_loop(con)?,
            b"6" => read_single_char(con)?,
            _ => writeln!(con.out(), "Unknown option.")?,
        }
    }
    writeln!(con.out(), "Goodbye!")?;
    Ok(())
}
