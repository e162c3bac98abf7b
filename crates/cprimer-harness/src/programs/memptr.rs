//! References and memory: borrowing in place of pointers, growable heap
//! buffers with fallible allocation, slices, ownership, out-parameters and
//! struct mutation through `&mut`.

use std::collections::TryReserveError;
use std::io::{BufRead, Write};

use cprimer_core::errno::{ENOMEM, perror_line};
use cprimer_core::lang::Point;
use cprimer_core::lang::func::{move_point, swap};
use cprimer_core::stdlib::try_parse_int;

use super::Context;
use crate::console::Console;
use crate::error::HarnessError;

fn pointer_basics<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    let mut x = 42;
    {
        let px = &x;
        writeln!(out, "x={x}, &x={:p}, px={px:p}, *px={}", &x, *px)?;
    }

    let px = &mut x;
    *px = 100;
    writeln!(out, "after *px=100 -> x={x}")?;

    let y = 5;
    let py = &y;
    let ppy = &py;
    writeln!(out, "y={y}, *py={}, **ppy={}", *py, **ppy)?;

    let (mut q, mut r) = (5, 25);
    writeln!(out, "Before: q={q}, r={r}")?;
    swap(&mut q, &mut r);
    writeln!(out, "After: q={q}, r={r}")?;
    Ok(())
}

/// A zeroed `Vec` of `n` elements, reporting allocation failure instead
/// of aborting.
fn try_zeroed(n: usize) -> Result<Vec<i32>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(n)?;
    v.resize(n, 0);
    Ok(v)
}

/// `perror(call)` after a failed allocation; every reservation failure
/// reads as `ENOMEM`.
fn alloc_failed<E: Write>(
    err: &mut E,
    call: &str,
    _cause: TryReserveError,
) -> Result<(), HarnessError> {
    writeln!(err, "{}", perror_line(call, ENOMEM))?;
    Ok(())
}

fn write_values<W: Write>(out: &mut W, label: &str, values: &[i32]) -> Result<(), HarnessError> {
    write!(out, "{label}")?;
    for v in values {
        write!(out, "{v} ")?;
    }
    writeln!(out)?;
    Ok(())
}

fn dynamic_memory<W: Write, E: Write>(out: &mut W, err: &mut E) -> Result<(), HarnessError> {
    let n = 5;
    let mut arr: Vec<i32> = Vec::new();
    if let Err(e) = arr.try_reserve_exact(n) {
        return alloc_failed(err, "malloc", e);
    }
    arr.extend((1..=n).map(|i| i as i32));
    write_values(out, "alloc arr: ", &arr)?;

    // Growing keeps the existing elements; on failure they are still valid.
    let new_n = 8;
    if let Err(e) = arr.try_reserve_exact(new_n - arr.len()) {
        return alloc_failed(err, "realloc", e);
    }
    arr.extend((n..new_n).map(|i| ((i + 1) * 10) as i32));
    write_values(out, "grown arr: ", &arr)?;
    Ok(())
}

fn zeroed_allocation<W: Write, E: Write>(out: &mut W, err: &mut E) -> Result<(), HarnessError> {
    match try_zeroed(4) {
        Ok(z) => write_values(out, "zeroed: ", &z),
        Err(e) => alloc_failed(err, "calloc", e),
    }
}

fn slice_walk<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    let a = [10, 20, 30, 40];
    let p: &[i32] = &a;
    write!(out, "slice iteration: ")?;
    for v in p.iter() {
        write!(out, "{v} ")?;
    }
    writeln!(out)?;
    Ok(())
}

fn ownership<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    let name: Box<str> = Box::from("Alice");
    writeln!(out, "name='{name}' at {:p}", name.as_ptr())?;
    // `name` is freed when it goes out of scope; no handle to it survives.
    drop(name);
    Ok(())
}

fn sum_const(arr: &[i32]) -> i32 {
    arr.iter().sum()
}

pub fn run<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
    _ctx: &mut Context,
) -> Result<(), HarnessError> {
    writeln!(con.out(), "-- Reference Basics --")?;
    pointer_basics(con.out())?;

    writeln!(con.out(), "\n-- Dynamic Memory --")?;
    {
        let (out, err) = con.streams();
        dynamic_memory(out, err)?;
        zeroed_allocation(out, err)?;
    }

    writeln!(con.out(), "\n-- Slice Iteration --")?;
    slice_walk(con.out())?;

    writeln!(con.out(), "\n-- Ownership & Lifetimes --")?;
    ownership(con.out())?;

    let out = con.out();
    writeln!(out, "\n-- Const Correctness & Out params --")?;
    let arr = [1, 2, 3, 4];
    writeln!(out, "sum_const = {}", sum_const(&arr))?;
    let parsed = try_parse_int("123");
    writeln!(
        out,
        "try_parse_int('123') -> {}, out={}",
        parsed.is_some(),
        parsed.unwrap_or(0)
    )?;

    writeln!(out, "\n-- Struct References --")?;
    let mut pt = Point { x: 1, y: 2 };
    move_point(&mut pt, 3, -1);
    writeln!(out, "Point({}, {})", pt.x, pt.y)?;
    Ok(())
}
