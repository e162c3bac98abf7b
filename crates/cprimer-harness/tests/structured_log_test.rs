//! Integration test: structured run log contract.
//!
//! Validates that:
//! 1. LogEmitter writes JSONL that passes validate_log_file.
//! 2. Trace ids are sequential and carry the run id.
//! 3. The validator rejects malformed lines.
//! 4. A Runner logs run_start, program_start/program_end pairs,
//!    input errors and run_end.
//!
//! Run: cargo test -p cprimer-harness --test structured_log_test

use std::cell::RefCell;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::rc::Rc;

use cprimer_core::stdlib::EnvOverlay;
use cprimer_harness::console::Console;
use cprimer_harness::structured_log::{
    LogEmitter, LogEntry, LogLevel, Outcome, validate_log_file, validate_log_line,
};
use cprimer_harness::{BuildMode, Clock, Context, HarnessConfig, Program, Runner};

/// Writer whose bytes stay readable after the emitter takes ownership.
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    fn lines(&self) -> Vec<serde_json::Value> {
        let bytes = self.0.borrow();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn temp_log(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cprimer-{}-{name}.jsonl", std::process::id()))
}

fn context() -> Context {
    Context {
        config: HarnessConfig {
            build_mode: BuildMode::Prod,
        },
        env: EnvOverlay::with_lookup(|_| None),
        clock: Clock {
            epoch: 0,
            utc_offset: 0,
        },
    }
}

#[test]
fn emitter_output_validates() {
    let path = temp_log("emitter");
    {
        let mut emitter = LogEmitter::to_file(&path, "run-7").unwrap();
        emitter.emit(LogLevel::Info, "run_start").unwrap();
        emitter
            .emit_entry(
                LogEntry::new("", LogLevel::Info, "program_end")
                    .with_program("functrl")
                    .with_mode("dev")
                    .with_outcome(Outcome::Pass)
                    .with_duration_ms(1),
            )
            .unwrap();
        emitter.flush().unwrap();
    }

    let (lines, errors) = validate_log_file(&path).unwrap();
    assert_eq!(lines, 2);
    assert!(errors.is_empty(), "{errors:?}");

    let content = std::fs::read_to_string(&path).unwrap();
    let first: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(first["trace_id"], "cprimer::run-7::001");
    assert_eq!(first["run_id"], "run-7");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn trace_ids_are_sequential() {
    let buf = SharedBuf::default();
    let mut emitter = LogEmitter::to_writer(Box::new(buf.clone()), "r1");
    for _ in 0..3 {
        emitter.emit(LogLevel::Debug, "tick").unwrap();
    }
    let ids: Vec<String> = buf
        .lines()
        .iter()
        .map(|v| v["trace_id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["cprimer::r1::001", "cprimer::r1::002", "cprimer::r1::003"]);
}

#[test]
fn explicit_trace_id_is_kept() {
    let buf = SharedBuf::default();
    let mut emitter = LogEmitter::to_writer(Box::new(buf.clone()), "r1");
    let written = emitter
        .emit_entry(LogEntry::new("cprimer::other::042", LogLevel::Warn, "note"))
        .unwrap();
    assert_eq!(written.trace_id, "cprimer::other::042");
    assert_eq!(written.run_id.as_deref(), Some("r1"));
}

#[test]
fn validator_rejects_malformed_lines() {
    assert!(validate_log_line("not json", 1).is_err());
    assert!(validate_log_line("[1, 2]", 1).is_err());

    let missing = r#"{"timestamp":"1970-01-01T00:00:00.000Z","level":"info","event":"x"}"#;
    let errs = validate_log_line(missing, 3).unwrap_err();
    assert!(errs.iter().any(|e| e.field == "trace_id" && e.line_number == 3));

    let bad_level = r#"{"timestamp":"t","trace_id":"cprimer::r::001","level":"loud","event":"x"}"#;
    let errs = validate_log_line(bad_level, 1).unwrap_err();
    assert!(errs.iter().any(|e| e.field == "level"));

    let bad_mode = r#"{"timestamp":"t","trace_id":"cprimer::r::001","level":"info","event":"x","mode":"fast"}"#;
    assert!(validate_log_line(bad_mode, 1).is_err());

    let no_outcome = r#"{"timestamp":"t","trace_id":"cprimer::r::001","level":"info","event":"program_end"}"#;
    let errs = validate_log_line(no_outcome, 1).unwrap_err();
    assert!(errs.iter().any(|e| e.field == "outcome"));

    let short_trace = r#"{"timestamp":"t","trace_id":"cprimer-001","level":"info","event":"x"}"#;
    assert!(validate_log_line(short_trace, 1).is_err());
}

#[test]
fn validate_file_counts_bad_lines() {
    let path = temp_log("mixed");
    std::fs::write(
        &path,
        "{\"timestamp\":\"t\",\"trace_id\":\"cprimer::r::001\",\"level\":\"info\",\"event\":\"run_start\"}\n\
         \n\
         garbage\n",
    )
    .unwrap();
    let (lines, errors) = validate_log_file(&path).unwrap();
    assert_eq!(lines, 2);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line_number, 3);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn runner_logs_program_lifecycle() {
    let buf = SharedBuf::default();
    let emitter = LogEmitter::to_writer(Box::new(buf.clone()), "run-x");
    let mut runner = Runner::new(context(), Some(emitter));
    let mut con = Console::new(io::Cursor::new(Vec::new()), Vec::new(), Vec::new());

    runner.start(&[Program::Functrl]).unwrap();
    let outcome = runner.run_program(Program::Functrl, &mut con).unwrap();
    assert_eq!(outcome, Outcome::Pass);
    runner.finish().unwrap();

    let events = buf.lines();
    let names: Vec<&str> = events.iter().map(|v| v["event"].as_str().unwrap()).collect();
    assert_eq!(names, ["run_start", "program_start", "program_end", "run_end"]);
    assert_eq!(events[0]["mode"], "prod");
    assert_eq!(events[0]["details"]["programs"][0], "functrl");
    assert_eq!(events[2]["program"], "functrl");
    assert_eq!(events[2]["outcome"], "pass");
    assert!(events[2]["duration_ms"].is_u64());
    assert_eq!(events[3]["outcome"], "pass");
    assert_eq!(events[3]["exit_code"], 0);

    for (i, event) in events.iter().enumerate() {
        let line = serde_json::to_string(event).unwrap();
        assert!(validate_log_line(&line, i + 1).is_ok(), "{line}");
    }
}

struct FailingInput;

impl Read for FailingInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::from_raw_os_error(5))
    }
}

#[test]
fn runner_logs_input_errors_with_errno() {
    let buf = SharedBuf::default();
    let emitter = LogEmitter::to_writer(Box::new(buf.clone()), "run-e");
    let mut runner = Runner::new(context(), Some(emitter));
    let mut con = Console::new(io::BufReader::new(FailingInput), Vec::new(), Vec::new());

    let outcome = runner.run_program(Program::Consoleio, &mut con).unwrap();
    assert_eq!(outcome, Outcome::Pass);

    let events = buf.lines();
    let input_errors: Vec<_> = events
        .iter()
        .filter(|v| v["event"] == "input_error")
        .collect();
    assert!(!input_errors.is_empty());
    assert_eq!(input_errors[0]["level"], "warn");
    assert_eq!(input_errors[0]["errno"], 5);
    assert_eq!(input_errors[0]["program"], "consoleio");

    let (_, out, _) = con.into_parts();
    assert!(String::from_utf8_lossy(&out).ends_with("Goodbye!\n"));
}

#[test]
fn run_all_prints_banners_in_order() {
    let mut runner = Runner::new(context(), None);
    let mut con = Console::new(io::Cursor::new(Vec::new()), Vec::new(), Vec::new());
    runner.run_all(&mut con).unwrap();
    runner.finish().unwrap();

    let (_, out, _) = con.into_parts();
    let out = String::from_utf8_lossy(&out);
    let banners: Vec<&str> = out.lines().filter(|l| l.starts_with("== ")).collect();
    let expected: Vec<String> = Program::ALL.iter().map(|p| format!("== {p} ==")).collect();
    assert_eq!(banners, expected);
    assert!(out.starts_with("== arrstr ==\n"));
}
