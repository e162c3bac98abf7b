//! Harness for the cprimer programs.
//!
//! This crate provides:
//! - [`console::Console`]: stdin/stdout/stderr bundle the programs talk to
//! - [`programs`]: the seven primer programs
//! - [`runner::Runner`]: program selection, execution and event logging
//! - [`structured_log`]: JSONL run log and its validator
//! - [`config`]: build-mode resolution

#![forbid(unsafe_code)]

pub mod config;
pub mod console;
pub mod error;
pub mod programs;
pub mod runner;
pub mod structured_log;

pub use config::{BuildMode, HarnessConfig};
pub use console::Console;
pub use error::HarnessError;
pub use programs::{Clock, Context};
pub use runner::{Program, Runner};
