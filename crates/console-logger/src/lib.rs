//! Console Logger
//!
//! A `log` backend for browser apps. Every record goes to the developer
//! console (stderr off-wasm) and into a fixed-size circular buffer so the UI
//! can show what happened recently.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in the circular buffer
pub const DEFAULT_CAPACITY: usize = 200;

/// One formatted log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub target: String,
    pub message: String,
    /// Local wall-clock time, `HH:MM:SS%.3f`
    pub timestamp: String,
}

impl LogLine {
    pub fn render(&self) -> String {
        format!("[{}] {:<5} {}: {}", self.timestamp, self.level, self.target, self.message)
    }
}

/// Logger with a bounded history of recent lines
pub struct ConsoleLogger {
    max_level: Mutex<LevelFilter>,
    capacity: usize,
    lines: Mutex<VecDeque<LogLine>>,
}

impl ConsoleLogger {
    pub fn new(max_level: LevelFilter, capacity: usize) -> Self {
        Self {
            max_level: Mutex::new(max_level),
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn max_level(&self) -> LevelFilter {
        match self.max_level.lock() {
            Ok(level) => *level,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Change the threshold here and in the global `log` filter
    pub fn set_max_level(&self, level: LevelFilter) {
        match self.max_level.lock() {
            Ok(mut current) => *current = level,
            Err(poisoned) => *poisoned.into_inner() = level,
        }
        log::set_max_level(level);
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, line: LogLine) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
        };
        emit(&line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(line: &LogLine) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let text = JsValue::from_str(&line.render());
    match line.level {
        Level::Error => console::error_1(&text),
        Level::Warn => console::warn_1(&text),
        Level::Info => console::info_1(&text),
        Level::Debug => console::log_1(&text),
        Level::Trace => console::debug_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(line: &LogLine) {
    eprintln!("{}", line.render());
}

/// Install a leaked logger as the global `log` backend
pub fn init(max_level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    init_with_capacity(max_level, DEFAULT_CAPACITY)
}

pub fn init_with_capacity(
    max_level: LevelFilter,
    capacity: usize,
) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(max_level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(max_level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(level: Level, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder()
            .level(level)
            .target("meals")
            .args(args)
            .build()
    }

    #[test]
    fn test_buffer_drops_oldest_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 2);
        logger.log(&record(Level::Info, format_args!("one")));
        logger.log(&record(Level::Info, format_args!("two")));
        logger.log(&record(Level::Info, format_args!("three")));

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].message, "two");
        assert_eq!(lines[1].message, "three");
    }

    #[test]
    fn test_records_above_max_level_are_ignored() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        logger.log(&record(Level::Debug, format_args!("noise")));
        logger.log(&record(Level::Error, format_args!("boom")));

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].level, Level::Error);
        assert!(lines[0].render().contains("meals: boom"));
    }

    #[test]
    fn test_raising_level_lets_debug_through() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 10);
        logger.log(&record(Level::Debug, format_args!("hidden")));
        logger.set_max_level(LevelFilter::Debug);
        logger.log(&record(Level::Debug, format_args!("shown")));

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].message, "shown");
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        logger.log(&record(Level::Info, format_args!("a")));
        logger.log(&record(Level::Info, format_args!("b")));
        assert_eq!(logger.recent().len(), 1);
    }
}
