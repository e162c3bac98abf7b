//! Program selection and execution.

use std::io::{BufRead, Write};
use std::time::Instant;

use clap::ValueEnum;

use crate::console::Console;
use crate::error::HarnessError;
use crate::programs::{self, Context};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// The primer programs, in the order `all` runs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Program {
    Arrstr,
    Basics,
    Consoleio,
    Functrl,
    Memptr,
    Preproc,
    Stdlibc,
}

impl Program {
    pub const ALL: [Self; 7] = [
        Self::Arrstr,
        Self::Basics,
        Self::Consoleio,
        Self::Functrl,
        Self::Memptr,
        Self::Preproc,
        Self::Stdlibc,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Arrstr => "arrstr",
            Self::Basics => "basics",
            Self::Consoleio => "consoleio",
            Self::Functrl => "functrl",
            Self::Memptr => "memptr",
            Self::Preproc => "preproc",
            Self::Stdlibc => "stdlibc",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Arrstr => "arrays, matrices, bounded strings, tokenizing, sorting",
            Self::Basics => "data types, operators, control flow, basic input",
            Self::Consoleio => "interactive menu of console input idioms",
            Self::Functrl => "functions, match fallthrough, loops, recursion",
            Self::Memptr => "references, heap buffers, slices, ownership",
            Self::Preproc => "macros, constants, conditional compilation, build mode",
            Self::Stdlibc => "errno, env, conversions, ctype, memory, time, rand, locale",
        }
    }

    /// Whether the program reads standard input.
    #[must_use]
    pub const fn reads_input(self) -> bool {
        matches!(self, Self::Basics | Self::Consoleio)
    }

    pub fn run<R: BufRead, W: Write, E: Write>(
        self,
        con: &mut Console<R, W, E>,
        ctx: &mut Context,
    ) -> Result<(), HarnessError> {
        match self {
            Self::Arrstr => programs::arrstr::run(con, ctx),
            Self::Basics => programs::basics::run(con, ctx),
            Self::Consoleio => programs::consoleio::run(con, ctx),
            Self::Functrl => programs::functrl::run(con, ctx),
            Self::Memptr => programs::memptr::run(con, ctx),
            Self::Preproc => programs::preproc::run(con, ctx),
            Self::Stdlibc => programs::stdlibc::run(con, ctx),
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs programs against one console and records what happened.
#[derive(Debug)]
pub struct Runner {
    ctx: Context,
    log: Option<LogEmitter>,
    failures: usize,
}

impl Runner {
    #[must_use]
    pub fn new(ctx: Context, log: Option<LogEmitter>) -> Self {
        Self {
            ctx,
            log,
            failures: 0,
        }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    fn mode(&self) -> &'static str {
        self.ctx.config.build_mode.as_str()
    }

    fn log(&mut self, entry: LogEntry) -> Result<(), HarnessError> {
        if let Some(emitter) = self.log.as_mut() {
            emitter.emit_entry(entry)?;
        }
        Ok(())
    }

    /// Emit `run_start` for the programs about to run.
    pub fn start(&mut self, planned: &[Program]) -> Result<(), HarnessError> {
        let names: Vec<&str> = planned.iter().map(|p| p.name()).collect();
        let entry = LogEntry::new("", LogLevel::Info, "run_start")
            .with_mode(self.mode())
            .with_details(serde_json::json!({ "programs": names }));
        self.log(entry)
    }

    /// Run one program, logging its start, any input errors and its end.
    pub fn run_program<R: BufRead, W: Write, E: Write>(
        &mut self,
        program: Program,
        con: &mut Console<R, W, E>,
    ) -> Result<Outcome, HarnessError> {
        let start = LogEntry::new("", LogLevel::Info, "program_start")
            .with_program(program.name())
            .with_mode(self.mode());
        self.log(start)?;

        let started = Instant::now();
        let result = program
            .run(con, &mut self.ctx)
            .and_then(|()| con.flush().map_err(HarnessError::from));
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        for errno in con.take_input_errors() {
            let entry = LogEntry::new("", LogLevel::Warn, "input_error")
                .with_program(program.name())
                .with_errno(errno);
            self.log(entry)?;
        }

        let outcome = if result.is_ok() {
            Outcome::Pass
        } else {
            Outcome::Error
        };
        let mut end = LogEntry::new(
            "",
            if result.is_ok() {
                LogLevel::Info
            } else {
                LogLevel::Error
            },
            "program_end",
        )
        .with_program(program.name())
        .with_outcome(outcome)
        .with_duration_ms(duration_ms);
        if let Err(e) = &result {
            self.failures += 1;
            end = end.with_details(serde_json::json!({ "message": e.to_string() }));
            if let Some(errno) = e.errno() {
                end = end.with_errno(errno);
            }
        }
        self.log(end)?;

        result.map(|()| outcome)
    }

    /// Run every program in order on the same console, each under a
    /// `== name ==` banner. Stops at the first program that fails.
    pub fn run_all<R: BufRead, W: Write, E: Write>(
        &mut self,
        con: &mut Console<R, W, E>,
    ) -> Result<(), HarnessError> {
        for (i, program) in Program::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(con.out())?;
            }
            writeln!(con.out(), "== {program} ==")?;
            self.run_program(program, con)?;
        }
        Ok(())
    }

    /// Emit `run_end` and flush the log.
    pub fn finish(mut self) -> Result<(), HarnessError> {
        let outcome = if self.failures == 0 {
            Outcome::Pass
        } else {
            Outcome::Fail
        };
        let entry = LogEntry::new("", LogLevel::Info, "run_end")
            .with_outcome(outcome)
            .with_exit_code(i32::from(self.failures > 0));
        self.log(entry)?;
        if let Some(emitter) = self.log.as_mut() {
            emitter.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_clap() {
        for program in Program::ALL {
            let parsed = Program::from_str(program.name(), true).unwrap();
            assert_eq!(parsed, program);
        }
        assert!(Program::from_str("nope", true).is_err());
    }

    #[test]
    fn only_two_programs_read_input() {
        let readers: Vec<_> = Program::ALL
            .into_iter()
            .filter(|p| p.reads_input())
            .collect();
        assert_eq!(readers, [Program::Basics, Program::Consoleio]);
    }

    #[test]
    fn every_program_has_a_description() {
        for program in Program::ALL {
            assert!(!program.description().is_empty());
        }
    }
}
