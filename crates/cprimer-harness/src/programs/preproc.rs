//! Compile-time configuration: macros, constants, conditional compilation
//! and the build mode.

use std::io::{BufRead, Write};

use cprimer_core::lang::build::{BUF_SIZE, PI, assertions_enabled, max_i, platform_name};
use cprimer_core::sqr;
use cprimer_core::string::BoundedBuf;

use super::Context;
use crate::config::{BUILD_MODE_VAR, BuildMode};
use crate::console::Console;
use crate::error::HarnessError;

fn macro_demos<W: Write>(out: &mut W, mode: BuildMode) -> Result<(), HarnessError> {
    let a = 3 + 1;
    writeln!(
        out,
        "sqr!({}) with a=3+1 -> {} (the argument is evaluated once)",
        stringify!(3 + 1),
        sqr!(a)
    )?;

    let xy = 42;
    writeln!(
        out,
        "Name pasting concat!(x, y) spells '{}': {xy}",
        concat!(stringify!(x), stringify!(y))
    )?;

    let mut buf = BoundedBuf::new(BUF_SIZE);
    buf.format_into(format_args!("pi~{PI:.2}, mode={mode}"));
    writeln!(out, "BUF_SIZE={}, {buf}", buf.capacity())?;
    writeln!(out, "max_i(3, 9) = {}", max_i(3, 9))?;
    Ok(())
}

fn conditional_demo<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    if assertions_enabled() {
        writeln!(out, "Compiled with debug assertions (asserts enabled).")?;
    } else {
        writeln!(out, "Compiled without debug assertions (debug_assert! disabled).")?;
    }
    writeln!(out, "Platform: {}", platform_name())?;
    Ok(())
}

pub fn run<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
    ctx: &mut Context,
) -> Result<(), HarnessError> {
    let mode = ctx.config.build_mode;
    let out = con.out();

    writeln!(out, "-- Compile-time Basics --")?;
    macro_demos(out, mode)?;

    writeln!(out, "\n-- Conditional Compilation --")?;
    conditional_demo(out)?;

    writeln!(out, "\n-- Build Flags --")?;
    writeln!(out, "BUILD_MODE={mode} (change with {BUILD_MODE_VAR}=prod)")?;
    writeln!(out, "Build with --release to disable debug assertions.")?;
    writeln!(
        out,
        "Define feature flags: e.g., features = [\"x\"] and use #[cfg(feature = \"x\")]."
    )?;
    Ok(())
}
