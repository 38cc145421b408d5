//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer and
//! forwards every formatted line to a sink (browser console, stderr, ...).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Where formatted lines go besides the buffer
pub trait LogSink: Send + Sync {
    fn write(&self, level: Level, line: &str);
}

/// Sink that prints to stderr
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, _level: Level, line: &str) {
        eprintln!("{}", line);
    }
}

/// One buffered log entry
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogRecord {
    /// `[HH:MM:SS.mmm] LEVEL app target: message`
    pub fn format_line(&self, app_name: &str) -> String {
        format!(
            "[{}] {:<5} {} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            app_name,
            self.target,
            self.message
        )
    }
}

#[derive(Debug)]
pub enum LoggerError {
    /// A global logger is already installed
    AlreadyInitialized,
    /// `info`/`error` called before `init_logger`
    NotInitialized,
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "logger already initialized"),
            LoggerError::NotInitialized => write!(f, "logger not initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Circular-buffer logger
pub struct RollingLogger {
    app_name: String,
    capacity: usize,
    level: LevelFilter,
    buffer: Mutex<VecDeque<LogRecord>>,
    sink: Box<dyn LogSink>,
}

impl RollingLogger {
    pub fn new(app_name: &str, capacity: usize, sink: Box<dyn LogSink>) -> Self {
        let capacity = capacity.max(1);
        Self {
            app_name: app_name.to_string(),
            capacity,
            level: LevelFilter::Debug,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
            sink,
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Buffer a record and forward it to the sink
    pub fn push(&self, level: Level, target: &str, message: String) {
        let record = LogRecord {
            timestamp: Local::now(),
            level,
            target: target.to_string(),
            message,
        };
        self.sink.write(level, &record.format_line(&self.app_name));

        if let Ok(mut buffer) = self.buffer.lock() {
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(record);
        }
    }

    /// Buffered records, oldest first
    pub fn recent(&self) -> Vec<LogRecord> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Formatted buffered lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.recent()
            .iter()
            .map(|record| record.format_line(&self.app_name))
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.push(record.level(), record.target(), record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Only the first call succeeds.
pub fn init_logger(
    app_name: &str,
    capacity: usize,
    sink: Box<dyn LogSink>,
) -> Result<(), LoggerError> {
    let mut installed = false;
    let logger = LOGGER.get_or_init(|| {
        installed = true;
        RollingLogger::new(app_name, capacity, sink)
    });
    if !installed {
        return Err(LoggerError::AlreadyInitialized);
    }
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(logger.level());
    Ok(())
}

fn global() -> Result<&'static RollingLogger, LoggerError> {
    LOGGER.get().ok_or(LoggerError::NotInitialized)
}

pub fn info(message: &str) -> Result<(), LoggerError> {
    global()?.push(Level::Info, "app", message.to_string());
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    global()?.push(Level::Error, "app", message.to_string());
    Ok(())
}

/// Drop everything buffered by the global logger
pub fn clear_recent() -> Result<(), LoggerError> {
    global()?.clear();
    Ok(())
}

/// Formatted lines from the global logger, oldest first. Empty before init.
pub fn recent_lines() -> Vec<String> {
    global().map(|logger| logger.recent_lines()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CaptureSink(Arc<Mutex<Vec<String>>>);

    impl LogSink for CaptureSink {
        fn write(&self, _level: Level, line: &str) {
            self.0.lock().unwrap().push(line.to_string());
        }
    }

    #[test]
    fn test_buffer_rolls_over() {
        let logger = RollingLogger::new("Test", 3, Box::new(StderrSink));
        for i in 0..5 {
            logger.push(Level::Info, "t", format!("line {}", i));
        }
        let messages: Vec<_> = logger.recent().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_sink_receives_formatted_lines() {
        let sink = CaptureSink::default();
        let logger = RollingLogger::new("Deck", 10, Box::new(sink.clone()));
        logger.push(Level::Warn, "joke", "slow".to_string());

        let lines = sink.0.lock().unwrap().clone();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
        assert!(lines[0].ends_with("Deck joke: slow"));
        assert_eq!(logger.recent_lines(), lines);
    }

    #[test]
    fn test_level_filter() {
        let logger =
            RollingLogger::new("Test", 10, Box::new(StderrSink)).with_level(LevelFilter::Info);
        let debug = Metadata::builder().level(Level::Debug).target("t").build();
        let error = Metadata::builder().level(Level::Error).target("t").build();
        assert!(!logger.enabled(&debug));
        assert!(logger.enabled(&error));
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = RollingLogger::new("Test", 0, Box::new(StderrSink));
        logger.push(Level::Info, "t", "a".into());
        logger.push(Level::Info, "t", "b".into());
        assert_eq!(logger.recent().len(), 1);
        logger.clear();
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_global_init_once() {
        assert!(init_logger("Global", 8, Box::new(StderrSink)).is_ok());
        assert!(matches!(
            init_logger("Again", 8, Box::new(StderrSink)),
            Err(LoggerError::AlreadyInitialized)
        ));
        info("hello").unwrap();
        error("boom").unwrap();
        log::warn!("via facade");
        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.contains("hello")));
        assert!(lines.iter().any(|l| l.contains("via facade")));

        clear_recent().unwrap();
        assert!(recent_lines().is_empty());
        error("after clear").unwrap();
        assert_eq!(recent_lines().len(), 1);
    }
}
