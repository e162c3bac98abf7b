//! Language mechanics.
//!
//! Helpers for the lessons that are about the language itself rather than
//! a library header: fixed-size arrays, small functions and control flow,
//! and compile-time configuration.

pub mod array;
pub mod build;
pub mod func;

pub use array::{
    ArrayError, designated_init, double_in_place, for_each_row, format_ints, format_row,
    partial_init,
};
pub use func::Point;
