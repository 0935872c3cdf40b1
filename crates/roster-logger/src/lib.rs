//! Roster Logger
//!
//! `log` backend for the roster client. Records go to the browser console
//! (stderr off the web) and the most recent ones are kept in a circular
//! buffer for inspection.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// How many records the buffer keeps
pub const CAPACITY: usize = 256;

/// A formatted log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

struct ConsoleLogger {
    level: LevelFilter,
    recent: Mutex<VecDeque<LogRecord>>,
}

impl ConsoleLogger {
    fn new(level: LevelFilter) -> Self {
        Self {
            level,
            recent: Mutex::new(VecDeque::with_capacity(CAPACITY)),
        }
    }

    fn push(&self, record: LogRecord) {
        let mut recent = self.recent.lock().unwrap_or_else(|e| e.into_inner());
        if recent.len() == CAPACITY {
            recent.pop_front();
        }
        recent.push_back(record);
    }

    fn snapshot(&self) -> Vec<LogRecord> {
        let recent = self.recent.lock().unwrap_or_else(|e| e.into_inner());
        recent.iter().cloned().collect()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(entry.level, &format!("[{} {}] {}", entry.level, entry.target, entry.message));
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the logger. Fails if another logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Most recent records, oldest first
pub fn recent() -> Vec<LogRecord> {
    LOGGER.get().map(ConsoleLogger::snapshot).unwrap_or_default()
}
