//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer
//! and mirrors every line to the browser console (stderr off-wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();
static PANIC_HOOK_INSTALLED: OnceLock<()> = OnceLock::new();

/// In-memory rolling logger
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Push a formatted line, dropping the oldest one when full
    pub fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            if lines.len() == self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn format(record: &Record) -> String {
        format!(
            "{} {:<5} [{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format(record);
        write_console(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger.
///
/// Calling this again after a successful init is a no-op.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger).map_err(|e| format!("failed to install logger: {}", e))?;
    log::set_max_level(level);
    Ok(())
}

/// Lines currently held by the global logger (empty before `init`)
pub fn snapshot() -> Vec<String> {
    LOGGER.get().map(RollingLogger::lines).unwrap_or_default()
}

/// Recent history as one block, oldest line first
pub fn history_report(lines: &[String]) -> String {
    let mut report = format!("--- last {} log lines ---", lines.len());
    for line in lines {
        report.push('\n');
        report.push_str(line);
    }
    report
}

/// Dump the buffered history to the console when a panic happens.
///
/// Chains to the previously installed hook, so install it after
/// `console_error_panic_hook`. Only the first call installs.
pub fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.set(()).is_err() {
        return;
    }
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        write_console(Level::Error, &history_report(&snapshot()));
        previous_hook(info);
    }));
}

/// `debug` for debug builds, `info` for release
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target("todo")
                .build(),
        );
    }

    #[test]
    fn test_keeps_only_last_lines() {
        let logger = RollingLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }

        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_filters_below_level() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Error, "boom");

        let lines = logger.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR"));
        assert!(lines[0].contains("[todo]"));
        assert!(lines[0].ends_with("boom"));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let logger = RollingLogger::new(LevelFilter::Info, 0);
        assert_eq!(logger.capacity(), 1);
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        assert_eq!(logger.lines().len(), 1);
    }

    #[test]
    fn test_history_report_lists_lines_in_order() {
        let logger = RollingLogger::new(LevelFilter::Info, 2);
        emit(&logger, Level::Info, "first");
        emit(&logger, Level::Warn, "second");
        emit(&logger, Level::Error, "third");

        let report = history_report(&logger.lines());
        let body: Vec<_> = report.lines().collect();
        assert_eq!(body.len(), 3);
        assert_eq!(body[0], "--- last 2 log lines ---");
        assert!(body[1].ends_with("second"));
        assert!(body[2].ends_with("third"));
    }

    #[test]
    fn test_history_report_when_empty() {
        assert_eq!(history_report(&[]), "--- last 0 log lines ---");
    }
}
