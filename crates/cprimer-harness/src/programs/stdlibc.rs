//! Tour of the standard library models: errno reporting, environment,
//! numeric conversion, ctype, memory utilities, time, random numbers,
//! formatted logging, math, assertions and locale.

use std::io::{BufRead, Write};

use cprimer_core::ctype::{Classification, classify_all};
use cprimer_core::errno::{EINVAL, ERANGE, errno_of, perror_line, strerror};
use cprimer_core::lang::func::divide_checked;
use cprimer_core::locale::{LC_ALL, Locale};
use cprimer_core::stdio::{c_fixed, tagged};
use cprimer_core::stdlib::{ConversionStatus, Rand, strtod_impl, strtol_impl, strtoul_impl};
use cprimer_core::string::{BoundedBuf, memcmp, memcpy, memmove, memset, ordering_sign};
use cprimer_core::time::{localtime_with_offset, strftime_into};

use super::Context;
use crate::console::Console;
use crate::error::HarnessError;

/// Path that is expected not to exist.
pub const MISSING_PATH: &str = "/path/that/does/not/exist";

/// Bytes of `buf` up to its first NUL, as text.
fn c_str(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}

fn status_errno(status: ConversionStatus) -> i32 {
    match status {
        ConversionStatus::Success => 0,
        ConversionStatus::Overflow | ConversionStatus::Underflow => ERANGE,
        ConversionStatus::InvalidBase => EINVAL,
    }
}

fn error_handling<W: Write, E: Write>(out: &mut W, err: &mut E) -> Result<(), HarnessError> {
    writeln!(out, "-- libc: error handling --")?;
    out.flush()?;
    if let Err(e) = std::fs::File::open(MISSING_PATH) {
        let code = errno_of(&e);
        writeln!(err, "fopen failed: {} (errno={code})", strerror(code))?;
        writeln!(err, "{}", perror_line("perror says", code))?;
    }
    Ok(())
}

fn env_vars<W: Write>(out: &mut W, ctx: &mut Context) -> Result<(), HarnessError> {
    writeln!(out, "\n-- libc: env vars --")?;
    let user = ctx.env.get("USER");
    writeln!(out, "$USER = {}", user.as_deref().unwrap_or("(not set)"))?;

    ctx.env.set("DEMO_VAR", "42", true)?;
    let demo = ctx.env.get("DEMO_VAR");
    writeln!(out, "$DEMO_VAR = {}", demo.as_deref().unwrap_or("(not set)"))?;
    ctx.env.unset("DEMO_VAR")?;
    Ok(())
}

fn strto<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    writeln!(out, "\n-- libc: strto* conversions --")?;
    let s = "1234x";
    let (v, used, status) = strtol_impl(s.as_bytes(), 10);
    let rest = &s[used..];
    writeln!(
        out,
        "strtol('{s}') -> v={v}, stopped at '{}', errno={}",
        if rest.is_empty() { "\\0" } else { rest },
        status_errno(status)
    )?;

    let u = "0x1fz";
    let (uv, used, status) = strtoul_impl(u.as_bytes(), 16);
    writeln!(
        out,
        "strtoul('{u}', 16) -> v={uv}, stopped at '{}', errno={}",
        &u[used..],
        status_errno(status)
    )?;

    let f = "3.14e2";
    let (d, used, _) = strtod_impl(f.as_bytes());
    writeln!(
        out,
        "strtod('{f}') -> d={}, rest='{}'",
        c_fixed(d, 6),
        &f[used..]
    )?;
    Ok(())
}

fn ctype_table<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    writeln!(out, "\n-- libc: ctype --")?;
    for c in classify_all(b"Az09!? ") {
        writeln!(
            out,
            "'{}': isalpha={} isdigit={} isspace={} toupper={}",
            char::from(c.byte),
            Classification::flag(c.alpha),
            Classification::flag(c.digit),
            Classification::flag(c.space),
            char::from(c.upper)
        )?;
    }
    Ok(())
}

fn memory_utils<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    writeln!(out, "\n-- libc: memory utils --")?;
    let mut buf = [0u8; 16];
    let len = buf.len();
    memset(&mut buf, b'-', len);
    buf[15] = 0;
    writeln!(out, "memset: '{}'", c_str(&buf))?;

    let src = b"Hello, world\0";
    memcpy(&mut buf, src, src.len());
    writeln!(out, "memcpy: '{}'", c_str(&buf))?;

    // Shift "Hello" two places right over itself.
    memmove(&mut buf, 2, 0, 5);
    buf[7] = 0;
    writeln!(out, "memmove overlap -> '{}'", c_str(&buf))?;

    writeln!(
        out,
        "memcmp('abc','abd',3) = {}",
        ordering_sign(memcmp(b"abc", b"abd", 3))
    )?;
    Ok(())
}

fn time_and_rand<W: Write>(out: &mut W, ctx: &Context) -> Result<(), HarnessError> {
    writeln!(out, "\n-- libc: time/date --")?;
    let tm = localtime_with_offset(ctx.clock.epoch, ctx.clock.utc_offset);
    let mut stamp = BoundedBuf::new(64);
    if strftime_into(&mut stamp, "%Y-%m-%d %H:%M:%S", &tm) > 0 {
        writeln!(out, "local time: {stamp}")?;
    }

    writeln!(out, "\n-- libc: rand --")?;
    // Seeded from the clock, as `srand(time(NULL))` would be.
    let mut rng = Rand::new(ctx.clock.epoch as u32);
    let (a, b, c) = (rng.next(), rng.next(), rng.next());
    writeln!(out, "rand: {a} {b} {c}")?;
    Ok(())
}

fn locale_demo<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    ctx: &Context,
) -> Result<(), HarnessError> {
    writeln!(out, "\n-- libc: locale --")?;
    let mut locale = Locale::new();
    let current = locale.query(LC_ALL).unwrap_or_else(|_| "(null)".to_string());
    writeln!(out, "current locale: {current}")?;

    if let Err(e) = locale.set(LC_ALL, "", &ctx.env) {
        writeln!(err, "setlocale: {e}")?;
    }
    let after = locale.query(LC_ALL).unwrap_or_else(|_| "(null)".to_string());
    writeln!(out, "after setlocale(\"\"): {after}")?;
    Ok(())
}

pub fn run<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
    ctx: &mut Context,
) -> Result<(), HarnessError> {
    let (out, err) = con.streams();
    error_handling(out, err)?;
    env_vars(out, ctx)?;
    strto(out)?;
    ctype_table(out)?;
    memory_utils(out)?;
    time_and_rand(out, ctx)?;

    writeln!(out, "\n-- libc: varargs --")?;
    writeln!(
        out,
        "{}",
        tagged("INFO", format_args!("Pi approx: {:.2}", 3.14159))
    )?;

    writeln!(out, "\n-- libc: math --")?;
    let x = 2.0_f64;
    writeln!(
        out,
        "sqrt(2)={:.6}, pow(2,10)={:.0}, fabs(-3.5)={:.1}",
        x.sqrt(),
        2.0_f64.powf(10.0),
        (-3.5_f64).abs()
    )?;

    writeln!(out, "\n-- libc: assert --")?;
    writeln!(out, "divide_checked(8,2) = {}", divide_checked(8, 2))?;

    locale_demo(out, err, ctx)?;
    Ok(())
}
