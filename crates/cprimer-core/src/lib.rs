//! # cprimer-core
//!
//! Safe Rust models of the C standard library facilities the primer
//! programs demonstrate: bounded line input, bounded strings, strict
//! numeric conversion, comparator sorting, and the supporting `<ctype.h>`,
//! `<errno.h>`, `<time.h>` and `<locale.h>` pieces. No `unsafe` code is
//! permitted in this crate.

#![deny(unsafe_code)]

pub mod ctype;
pub mod errno;
pub mod lang;
pub mod locale;
pub mod stdio;
pub mod stdlib;
pub mod string;
pub mod time;
