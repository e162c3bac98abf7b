//! String and memory operations.
//!
//! `<string.h>` facilities as safe Rust: bounded strings instead of raw
//! `char` arrays, slice-based memory helpers, and a non-destructive
//! tokenizer.

pub mod bounded;
pub mod mem;
pub mod strtok;

pub use bounded::BoundedBuf;
pub use mem::{memcmp, memcpy, memmove, memset, ordering_sign};
pub use strtok::{Tokens, strtok_r, tokens};
