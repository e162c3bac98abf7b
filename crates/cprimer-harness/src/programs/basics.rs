//! Data types, operators, control flow, basic input and functions.

use std::ffi::{c_char, c_double, c_float, c_int, c_long, c_longlong, c_short};
use std::io::{BufRead, Write};
use std::mem::size_of;

use cprimer_core::lang::func::{day_name, square};
use cprimer_core::stdio::{Directive, ReadOutcome, Scanned, c_fixed, scan_line};
use cprimer_core::string::BoundedBuf;

use super::Context;
use crate::console::{Console, LINE_CAPACITY};
use crate::error::HarnessError;

/// Longest word the basic-input example accepts (`%31s`).
const WORD_MAX: usize = 31;

fn data_types<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    writeln!(out, "-- Data Types --")?;
    writeln!(out, "bool:        {} byte(s)", size_of::<bool>())?;
    writeln!(out, "char:        {}", size_of::<c_char>())?;
    writeln!(out, "short:       {}", size_of::<c_short>())?;
    writeln!(out, "int:         {}", size_of::<c_int>())?;
    writeln!(out, "long:        {}", size_of::<c_long>())?;
    writeln!(out, "long long:   {}", size_of::<c_longlong>())?;
    writeln!(out, "float:       {}", size_of::<c_float>())?;
    writeln!(out, "double:      {}", size_of::<c_double>())?;
    writeln!(
        out,
        "i8:          {}, u64: {}",
        size_of::<i8>(),
        size_of::<u64>()
    )?;
    Ok(())
}

fn operators_demo<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    writeln!(out, "\n-- Operators --")?;
    let (mut a, mut b) = (7, 3);
    writeln!(
        out,
        "a+b={} a-b={} a*b={} a/b={} a%b={}",
        a + b,
        a - b,
        a * b,
        a / b,
        a % b
    )?;

    // Pre-increment yields the new value, post-increment the old one.
    a += 1;
    let pre = a;
    let post = b;
    b += 1;
    writeln!(out, "++a={pre}, b++={post} (then b={b})")?;

    let (x, y): (i32, i32) = (0b1010, 0b0110);
    writeln!(
        out,
        "bitwise: x&y={} x|y={} x^y={} ~x={} x<<1={} x>>1={}",
        x & y,
        x | y,
        x ^ y,
        !x,
        x << 1,
        x >> 1
    )?;

    let mut c = 5;
    c += 2;
    c *= 3;
    writeln!(
        out,
        "compound c={c}, ternary: {}",
        if c > 10 { 1 } else { 0 }
    )?;
    Ok(())
}

fn control_flow<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    writeln!(out, "\n-- Control Flow --")?;
    let n = 5;
    if n > 0 {
        writeln!(out, "if: n is positive")?;
    } else if n == 0 {
        writeln!(out, "if/else: n is zero")?;
    } else {
        writeln!(out, "if/else: n is negative")?;
    }

    write!(out, "for: ")?;
    for i in 0..5 {
        write!(out, "{i} ")?;
    }
    writeln!(out)?;

    let mut i = 0;
    write!(out, "while: ")?;
    while i < 3 {
        write!(out, "{i} ")?;
        i += 1;
    }
    writeln!(out)?;

    // `loop` with the test at the bottom is the do-while form.
    i = 0;
    write!(out, "do-while: ")?;
    loop {
        write!(out, "{i} ")?;
        i += 1;
        if i >= 2 {
            break;
        }
    }
    writeln!(out)?;

    writeln!(out, "{}", day_name(6))?;
    Ok(())
}

fn basic_io<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
) -> Result<(), HarnessError> {
    writeln!(con.out(), "\n-- Basic I/O --")?;
    con.prompt("Enter an int, a double, and a word: ")?;

    let mut line = BoundedBuf::new(LINE_CAPACITY);
    let items = match con.read_line(&mut line) {
        ReadOutcome::Line => scan_line(
            line.as_bytes(),
            &[
                Directive::Int,
                Directive::Float,
                Directive::Word { max: WORD_MAX },
            ],
        ),
        ReadOutcome::Eof | ReadOutcome::Error(_) => Vec::new(),
    };

    match items.as_slice() {
        [Scanned::Int(a), Scanned::Float(d), Scanned::Word(s)] => writeln!(
            con.out(),
            "You entered: a={a} d={} s='{s}'",
            c_fixed(*d, 2)
        )?,
        _ => writeln!(con.out(), "Input parse failed.")?,
    }
    Ok(())
}

fn functions_demo<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    writeln!(out, "\n-- Functions --")?;
    let z = 6;
    writeln!(out, "square({z})={}", square(z))?;
    Ok(())
}

pub fn run<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
    _ctx: &mut Context,
) -> Result<(), HarnessError> {
    data_types(con.out())?;
    operators_demo(con.out())?;
    control_flow(con.out())?;
    basic_io(con)?;
    functions_demo(con.out())?;
    Ok(())
}
