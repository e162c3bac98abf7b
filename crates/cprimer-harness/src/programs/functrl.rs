//! Functions and control flow: match with shared arms, continue/break,
//! recursion, and mutation through `&mut`.

use std::io::{BufRead, Write};

use cprimer_core::lang::func::{
    abs_i, add, clamp, day_name, fact_iter, fact_rec, first_odds, is_even, max3, sum_array, swap,
};

use super::Context;
use crate::console::Console;
use crate::error::HarnessError;

fn control_flow_demos<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    for day in 1..=8 {
        writeln!(out, "Day {day} -> {}", day_name(day))?;
    }

    write!(out, "First 10 odd numbers: ")?;
    for x in first_odds(10) {
        write!(out, "{x} ")?;
    }
    writeln!(out)?;
    Ok(())
}

fn function_demos<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    writeln!(out, "add(2, 3) = {}", add(2, 3))?;
    writeln!(out, "max3(7, -4, 5) = {}", max3(7, -4, 5))?;
    writeln!(out, "abs_i(-42) = {}", abs_i(-42))?;
    writeln!(out, "is_even(10) = {}", is_even(10))?;
    writeln!(out, "clamp(15, 0, 10) = {}", clamp(15, 0, 10))?;

    let n = 10;
    writeln!(out, "fact_iter({n}) = {}", fact_iter(n))?;
    writeln!(out, "fact_rec({n}) = {}", fact_rec(n))?;

    let arr = [1, 2, 3, 4, 5];
    writeln!(out, "sum_array([1..5]) = {}", sum_array(&arr))?;

    let (mut a, mut b) = (5, 9);
    writeln!(out, "before swap: a={a}, b={b}")?;
    swap(&mut a, &mut b);
    writeln!(out, "after  swap: a={a}, b={b}")?;
    Ok(())
}

pub fn run<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
    _ctx: &mut Context,
) -> Result<(), HarnessError> {
    let out = con.out();
    writeln!(out, "-- Control Flow Demos --")?;
    control_flow_demos(out)?;

    writeln!(out, "\n-- Function Demos --")?;
    function_demos(out)?;
    Ok(())
}
