//! CLI entrypoint for the cprimer programs.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cprimer_core::time::now_epoch;
use cprimer_harness::structured_log::{LogEmitter, validate_log_file};
use cprimer_harness::{Console, Context, HarnessConfig, HarnessError, Program, Runner};

/// Foundational systems-programming lessons as runnable programs.
#[derive(Debug, Parser)]
#[command(name = "cprimer")]
#[command(about = "Run the cprimer demonstration programs")]
struct Cli {
    /// Write structured JSONL run events to this file.
    #[arg(long, global = true)]
    log: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one program.
    Run {
        #[arg(value_enum)]
        program: Program,
    },
    /// Run every program in order on the same stdin.
    All,
    /// List the programs.
    List,
    /// Validate a JSONL log written by `--log`.
    ValidateLog { path: PathBuf },
}

fn open_log(path: Option<&PathBuf>) -> Result<Option<LogEmitter>, HarnessError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let run_id = format!("{}-{}", now_epoch(), std::process::id());
    LogEmitter::to_file(path, &run_id)
        .map(Some)
        .map_err(|source| HarnessError::LogFile {
            path: path.clone(),
            source,
        })
}

fn run_programs(log: Option<&PathBuf>, only: Option<Program>) -> Result<(), HarnessError> {
    let emitter = open_log(log)?;
    let ctx = Context::from_process(HarnessConfig::from_env());
    let mut runner = Runner::new(ctx, emitter);

    let stdin = io::stdin();
    let mut con = Console::new(stdin.lock(), io::stdout().lock(), io::stderr().lock());

    let planned = match only {
        Some(program) => vec![program],
        None => Program::ALL.to_vec(),
    };
    runner.start(&planned)?;
    let result = match only {
        Some(program) => runner.run_program(program, &mut con).map(|_| ()),
        None => runner.run_all(&mut con),
    };
    let finished = runner.finish();
    result?;
    finished
}

fn list() -> Result<(), HarnessError> {
    let mut out = io::stdout().lock();
    for program in Program::ALL {
        let input = if program.reads_input() { " (reads stdin)" } else { "" };
        writeln!(out, "{:<10} {}{input}", program.name(), program.description())?;
    }
    Ok(())
}

fn validate_log(path: PathBuf) -> Result<(), HarnessError> {
    let (lines, errors) = validate_log_file(&path)?;
    let mut err = io::stderr().lock();
    for e in &errors {
        writeln!(err, "{e}")?;
    }
    if errors.is_empty() {
        println!("{}: {lines} valid line(s)", path.display());
        Ok(())
    } else {
        let invalid = errors
            .iter()
            .map(|e| e.line_number)
            .collect::<std::collections::BTreeSet<_>>()
            .len();
        Err(HarnessError::InvalidLog {
            path,
            lines,
            invalid,
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run { program } => run_programs(cli.log.as_ref(), Some(program)),
        Command::All => run_programs(cli.log.as_ref(), None),
        Command::List => list(),
        Command::ValidateLog { path } => validate_log(path),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cprimer: {e}");
            ExitCode::FAILURE
        }
    }
}
