//! Arrays and strings: initialisation, matrices, bounded strings,
//! tokenizing and sorting.

use std::io::{BufRead, Write};

use cprimer_core::lang::{
    designated_init, double_in_place, for_each_row, format_ints, format_row, partial_init,
};
use cprimer_core::lang::func::sum_array;
use cprimer_core::stdlib::{bsearch_by, cmp_int_asc, qsort_by};
use cprimer_core::string::{BoundedBuf, tokens};

use super::Context;
use crate::console::Console;
use crate::error::HarnessError;

fn array_basics<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    let mut a = [1, 2, 3, 4, 5];
    writeln!(out, "start: {}", format_ints(&a))?;

    double_in_place(&mut a);
    writeln!(out, "doubled: {}", format_ints(&a))?;

    let b: [i32; 5] = partial_init(&[10, 20])?;
    writeln!(out, "partial: {}", format_ints(&b))?;

    let c: [i32; 6] = designated_init(&[(0, 7), (5, 42)])?;
    writeln!(out, "designated: {}", format_ints(&c))?;
    Ok(())
}

fn multi_arrays<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    let m = [[1, 2, 3], [4, 5, 6]];
    writeln!(out, "matrix 2x3:")?;
    let mut result = Ok(());
    for_each_row(&m, |_, row| {
        if result.is_ok() {
            result = writeln!(out, "{}", format_row(row));
        }
    });
    Ok(result?)
}

fn string_basics<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    let hello = "hello";
    writeln!(out, "literal: {hello} (len={})", hello.len())?;

    let mut buf = BoundedBuf::with_contents(16, b"world");
    writeln!(
        out,
        "buf: '{}' (len={}, cap={})",
        buf,
        buf.len(),
        buf.capacity()
    )?;

    buf.append(b"!!!");
    writeln!(out, "concat: '{buf}'")?;

    let mut dst = BoundedBuf::new(8);
    dst.format_into(format_args!("{}-{}", "ab", "cdEFGH"));
    writeln!(out, "snprintf: '{dst}'")?;
    Ok(())
}

fn tokenize_demo<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    let line = BoundedBuf::with_contents(64, b"one,two;three four");
    write!(out, "strtok tokens: ")?;
    for tok in tokens(line.as_bytes(), b",; ") {
        write!(out, "[{}] ", String::from_utf8_lossy(tok))?;
    }
    writeln!(out)?;

    let text = "alpha beta gamma";
    let mut copy = BoundedBuf::new(64);
    copy.format_into(format_args!("{text}"));
    write!(out, "copy tokens: ")?;
    for tok in tokens(copy.as_bytes(), b" ") {
        write!(out, "{{{}}} ", String::from_utf8_lossy(tok))?;
    }
    writeln!(out)?;
    Ok(())
}

fn array_of_strings<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    let colors = ["red", "green", "blue"];
    for (i, color) in colors.iter().enumerate() {
        writeln!(out, "color[{i}]={color} (len={})", color.len())?;
    }
    Ok(())
}

fn sort_with_qsort<W: Write>(out: &mut W) -> Result<(), HarnessError> {
    let mut arr = [5, 2, 9, 1, 5, 6];
    writeln!(out, "before sort: {}", format_ints(&arr))?;
    qsort_by(&mut arr, cmp_int_asc);
    writeln!(out, "after  sort: {}", format_ints(&arr))?;
    match bsearch_by(&6, &arr, cmp_int_asc) {
        Some(i) => writeln!(out, "bsearch(6) -> index {i}")?,
        None => writeln!(out, "bsearch(6) -> not found")?,
    }
    Ok(())
}

pub fn run<R: BufRead, W: Write, E: Write>(
    con: &mut Console<R, W, E>,
    _ctx: &mut Context,
) -> Result<(), HarnessError> {
    let out = con.out();

    writeln!(out, "-- Array Basics --")?;
    array_basics(out)?;
    let demo = [1, 2, 3, 4, 5];
    writeln!(out, "sum_array = {}", sum_array(&demo))?;

    writeln!(out, "\n-- Multidimensional --")?;
    multi_arrays(out)?;

    writeln!(out, "\n-- String Basics --")?;
    string_basics(out)?;

    writeln!(out, "\n-- Tokenizing --")?;
    tokenize_demo(out)?;

    writeln!(out, "\n-- Array of Strings --")?;
    array_of_strings(out)?;

    writeln!(out, "\n-- qsort --")?;
    sort_with_qsort(out)?;
    Ok(())
}
