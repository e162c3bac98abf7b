//! The primer programs.
//!
//! Each program is a `run` function over a
//! [`Console`](crate::console::Console) and a [`Context`];
//! everything they print goes through the console so a transcript can be
//! captured and compared.

use cprimer_core::stdlib::EnvOverlay;
use cprimer_core::time::{local_offset_secs, now_epoch};

use crate::config::HarnessConfig;

pub mod arrstr;
pub mod basics;
pub mod consoleio;
pub mod functrl;
pub mod memptr;
pub mod preproc;
pub mod stdlibc;

/// Wall clock reading taken once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    /// Seconds since the Unix epoch.
    pub epoch: i64,
    /// Seconds east of UTC.
    pub utc_offset: i32,
}

impl Clock {
    #[must_use]
    pub fn now() -> Self {
        Self {
            epoch: now_epoch(),
            utc_offset: local_offset_secs(),
        }
    }
}

/// Everything outside the console a program may consult.
#[derive(Debug)]
pub struct Context {
    pub config: HarnessConfig,
    pub env: EnvOverlay,
    pub clock: Clock,
}

impl Context {
    /// Context for a real run: process environment and current time.
    #[must_use]
    pub fn from_process(config: HarnessConfig) -> Self {
        Self {
            config,
            env: EnvOverlay::from_process(),
            clock: Clock::now(),
        }
    }
}
