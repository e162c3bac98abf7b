//! Harness error type.

use std::io;
use std::path::PathBuf;

use cprimer_core::lang::ArrayError;
use cprimer_core::stdlib::EnvError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Array(#[from] ArrayError),
    #[error(transparent)]
    Env(#[from] EnvError),
    #[error("cannot open log file {}: {source}", path.display())]
    LogFile { path: PathBuf, source: io::Error },
    #[error("{}: {invalid} invalid line(s) out of {lines}", path.display())]
    InvalidLog {
        path: PathBuf,
        lines: usize,
        invalid: usize,
    },
}

impl HarnessError {
    /// Errno equivalent, for the structured log.
    pub fn errno(&self) -> Option<i32> {
        match self {
            Self::Io(e) | Self::LogFile { source: e, .. } => {
                Some(cprimer_core::errno::errno_of(e))
            }
            _ => None,
        }
    }
}
