//! Fixed-size array helpers.
//!
//! Every traversal is bounded by the slice it is given; there is no
//! separate length argument to get wrong.

use std::fmt::Write as _;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{given} initializers for array of length {len}")]
    TooManyInitializers { given: usize, len: usize },
}

/// `[a, b, c]`; an empty slice renders as `[]`.
pub fn format_ints(values: &[i32]) -> String {
    let mut out = String::with_capacity(2 + values.len() * 4);
    out.push('[');
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{v}");
    }
    out.push(']');
    out
}

/// One matrix row as the row printer writes it: each value followed by a
/// space.
pub fn format_row(values: &[i32]) -> String {
    let mut out = String::with_capacity(values.len() * 3);
    for v in values {
        let _ = write!(out, "{v} ");
    }
    out
}

pub fn double_in_place(values: &mut [i32]) {
    for v in values.iter_mut() {
        *v = v.wrapping_mul(2);
    }
}

/// `int a[N] = {x, y}`: listed values first, the rest zero.
pub fn partial_init<const N: usize>(init: &[i32]) -> Result<[i32; N], ArrayError> {
    if init.len() > N {
        return Err(ArrayError::TooManyInitializers {
            given: init.len(),
            len: N,
        });
    }
    let mut out = [0; N];
    out[..init.len()].copy_from_slice(init);
    Ok(out)
}

/// `int a[N] = {[i] = v, ...}`: unnamed slots are zero and a later entry
/// for the same index wins.
pub fn designated_init<const N: usize>(init: &[(usize, i32)]) -> Result<[i32; N], ArrayError> {
    let mut out = [0; N];
    for &(index, value) in init {
        let slot = out
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len: N })?;
        *slot = value;
    }
    Ok(out)
}

/// Visit the rows of a matrix in order with their index.
pub fn for_each_row<const C: usize>(matrix: &[[i32; C]], mut visit: impl FnMut(usize, &[i32])) {
    for (r, row) in matrix.iter().enumerate() {
        visit(r, row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting() {
        assert_eq!(format_ints(&[1, 2, 3, 4, 5]), "[1, 2, 3, 4, 5]");
        assert_eq!(format_ints(&[-7]), "[-7]");
        assert_eq!(format_ints(&[]), "[]");
        assert_eq!(format_row(&[4, 5, 6]), "4 5 6 ");
        assert_eq!(format_row(&[]), "");
    }

    #[test]
    fn doubling_wraps() {
        let mut a = [1, 2, 3, 4, 5];
        double_in_place(&mut a);
        assert_eq!(a, [2, 4, 6, 8, 10]);
        let mut big = [i32::MAX];
        double_in_place(&mut big);
        assert_eq!(big, [-2]);
    }

    #[test]
    fn partial_initialization_zero_fills() {
        let b: [i32; 5] = partial_init(&[10, 20]).unwrap();
        assert_eq!(b, [10, 20, 0, 0, 0]);
        let empty: [i32; 3] = partial_init(&[]).unwrap();
        assert_eq!(empty, [0; 3]);
        assert_eq!(
            partial_init::<2>(&[1, 2, 3]),
            Err(ArrayError::TooManyInitializers { given: 3, len: 2 })
        );
    }

    #[test]
    fn designated_initialization() {
        let c: [i32; 6] = designated_init(&[(0, 7), (5, 42)]).unwrap();
        assert_eq!(c, [7, 0, 0, 0, 0, 42]);
        let last_wins: [i32; 2] = designated_init(&[(1, 1), (1, 9)]).unwrap();
        assert_eq!(last_wins, [0, 9]);
        assert_eq!(
            designated_init::<6>(&[(6, 1)]),
            Err(ArrayError::IndexOutOfRange { index: 6, len: 6 })
        );
    }

    #[test]
    fn rows_visited_in_order() {
        let m = [[1, 2, 3], [4, 5, 6]];
        let mut lines = Vec::new();
        for_each_row(&m, |r, row| lines.push(format!("{r}:{}", format_row(row))));
        assert_eq!(lines, ["0:1 2 3 ", "1:4 5 6 "]);
    }
}
