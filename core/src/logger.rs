//! Process-wide debug logger
//!
//! Keeps the most recent entries in a ring buffer (shown by the TUI log
//! overlay) and optionally appends every entry to `debug.log` in the data
//! directory. Nothing is printed to the terminal: the TUI owns the screen.
//!
//! The logger is also installed as the `log` facade backend, so records
//! emitted through `log::info!` and friends end up in the same sink.

use chrono::Local;
use std::collections::VecDeque;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

pub use log::{Level, LevelFilter};

/// Name of the log file inside the data directory
pub const LOG_FILE_NAME: &str = "debug.log";

const RING_CAPACITY: usize = 1000;

pub struct DebugLogEntry {
    pub timestamp: String,
    pub level: Level,
    pub module: String,
    pub message: String,
}

impl DebugLogEntry {
    fn render(&self) -> String {
        format!(
            "[{}] [{}] [{}] {}",
            self.timestamp, self.level, self.module, self.message
        )
    }
}

pub struct DebugLogger {
    ring_buffer: VecDeque<DebugLogEntry>,
    max_entries: usize,
    file_path: Option<PathBuf>,
    max_level: LevelFilter,
}

static LOGGER: OnceLock<Arc<Mutex<DebugLogger>>> = OnceLock::new();

fn get_logger() -> &'static Arc<Mutex<DebugLogger>> {
    LOGGER.get_or_init(|| Arc::new(Mutex::new(DebugLogger::new(RING_CAPACITY))))
}

fn lock_logger() -> MutexGuard<'static, DebugLogger> {
    // A panic while holding the lock must not silence logging for good
    get_logger().lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl DebugLogger {
    pub fn new(max_entries: usize) -> Self {
        Self {
            ring_buffer: VecDeque::with_capacity(max_entries),
            max_entries,
            file_path: None,
            max_level: LevelFilter::Info,
        }
    }

    pub fn set_file_path(&mut self, path: PathBuf) {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        self.file_path = Some(path);
    }

    pub fn set_max_level(&mut self, level: LevelFilter) {
        self.max_level = level;
    }

    pub fn log(&mut self, level: Level, module: &str, message: &str) {
        if level > self.max_level {
            return;
        }

        let entry = DebugLogEntry {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            level,
            module: module.to_string(),
            message: message.to_string(),
        };

        if let Some(path) = &self.file_path {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(file, "{}", entry.render());
            }
        }

        if self.ring_buffer.len() >= self.max_entries {
            self.ring_buffer.pop_front();
        }
        self.ring_buffer.push_back(entry);
    }

    /// Most recent entries, newest first
    pub fn get_recent(&self, n: usize) -> Vec<String> {
        self.ring_buffer
            .iter()
            .rev()
            .take(n)
            .map(DebugLogEntry::render)
            .collect()
    }
}

/// Bridges the `log` facade into the debug logger
struct LogBridge;

static BRIDGE: LogBridge = LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            lock_logger().log(record.level(), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Configure the level, optional log directory, and install the facade.
///
/// Safe to call more than once; the facade is only installed the first time.
pub fn init(log_dir: Option<PathBuf>, level: LevelFilter) {
    {
        let mut logger = lock_logger();
        logger.set_max_level(level);
        if let Some(dir) = log_dir {
            logger.set_file_path(dir.join(LOG_FILE_NAME));
        }
    }
    if log::set_logger(&BRIDGE).is_ok() {
        log::set_max_level(level);
    }
}

pub fn log(level: Level, module: &str, message: impl Into<String>) {
    lock_logger().log(level, module, &message.into());
}

pub fn get_recent_logs(n: usize) -> Vec<String> {
    lock_logger().get_recent(n)
}

/// Last `n` lines of a log file, oldest first
pub fn read_tail(path: &Path, n: usize) -> std::io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(n);
    Ok(lines[start..].iter().map(|line| line.to_string()).collect())
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Debug, module_path!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Info, module_path!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Warn, module_path!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::Level::Error, module_path!(), format!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut logger = DebugLogger::new(2);
        logger.log(Level::Info, "t", "one");
        logger.log(Level::Info, "t", "two");
        logger.log(Level::Info, "t", "three");

        let recent = logger.get_recent(10);
        assert_eq!(recent.len(), 2);
        assert!(recent[0].ends_with("three"));
        assert!(recent[1].ends_with("two"));
    }

    #[test]
    fn test_level_filter() {
        let mut logger = DebugLogger::new(10);
        logger.set_max_level(LevelFilter::Warn);
        logger.log(Level::Debug, "t", "noise");
        logger.log(Level::Error, "t", "boom");

        let recent = logger.get_recent(10);
        assert_eq!(recent.len(), 1);
        assert!(recent[0].contains("[ERROR]"));
    }

    #[test]
    fn test_file_sink_appends() {
        let dir = TempDir::new().unwrap();
        let mut logger = DebugLogger::new(10);
        logger.set_file_path(dir.path().join("nested").join(LOG_FILE_NAME));
        logger.log(Level::Info, "devfolio::test", "hello");
        logger.log(Level::Warn, "devfolio::test", "careful");

        let written =
            std::fs::read_to_string(dir.path().join("nested").join(LOG_FILE_NAME)).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[INFO] [devfolio::test] hello"));
        assert!(lines[1].contains("[WARN]"));

        let tail = read_tail(&dir.path().join("nested").join(LOG_FILE_NAME), 1).unwrap();
        assert_eq!(tail.len(), 1);
        assert!(tail[0].ends_with("careful"));
    }
}
