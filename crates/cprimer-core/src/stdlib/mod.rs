//! Standard library utilities.
//!
//! Implements the `<stdlib.h>` pieces the lessons use: numeric conversion,
//! sorting and searching, environment variables, and random numbers.

pub mod conversion;
pub mod env;
pub mod random;
pub mod sort;

pub use conversion::{
    ConversionStatus, ParseIntError, parse_strict, strtod, strtod_impl, strtol, strtol_impl,
    strtoul_impl, try_parse_int,
};
pub use env::{EnvError, EnvOverlay};
pub use random::{RAND_MAX, Rand};
pub use sort::{bsearch_by, cmp_int_asc, qsort_by};
