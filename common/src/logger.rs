use std::ffi::OsStr;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Where log lines go. The terminal client owns stdout for drawing, so it logs to a file.
#[derive(Clone, Debug)]
pub enum LogTarget {
    Stdout,
    File(PathBuf),
}

enum Sink {
    Stdout,
    File(Mutex<File>),
    Discard,
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// A file target never degrades to stdout: the caller may own the terminal. An unusable
/// path is retried under the temp directory, and failing that, lines are dropped.
fn file_sink(path: &Path) -> Sink {
    let e = match open_append(path) {
        Ok(file) => return Sink::File(Mutex::new(file)),
        Err(e) => e,
    };

    let file_name = path.file_name().unwrap_or(OsStr::new("app.log"));
    let fallback = std::env::temp_dir().join(file_name);
    match open_append(&fallback) {
        Ok(file) => {
            eprintln!(
                "Failed to open log file {}: {}. Logging to {}",
                path.display(),
                e,
                fallback.display()
            );
            Sink::File(Mutex::new(file))
        }
        Err(fallback_error) => {
            eprintln!(
                "Failed to open log file {} ({}) or {} ({}). Logging disabled",
                path.display(),
                e,
                fallback.display(),
                fallback_error
            );
            Sink::Discard
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
    sink: Sink,
}

impl Logger {
    fn new(prefix: Option<String>, target: LogTarget) -> Self {
        let sink = match target {
            LogTarget::Stdout => Sink::Stdout,
            LogTarget::File(path) => file_sink(&path),
        };
        Self { prefix, sink }
    }

    fn format_line(&self, level: LogLevel, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}:{}] {} {}",
                timestamp,
                prefix,
                file_name,
                line,
                level.label(),
                message
            ),
            None => format!(
                "[{}][{}:{}] {} {}",
                timestamp,
                file_name,
                line,
                level.label(),
                message
            ),
        }
    }

    pub fn log(&self, level: LogLevel, file: &str, line: u32, message: &str) {
        let formatted = self.format_line(level, file, line, message);
        match &self.sink {
            Sink::Stdout => println!("{}", formatted),
            Sink::File(file) => {
                let mut file = file.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                let _ = writeln!(file, "{}", formatted);
            }
            Sink::Discard => {}
        }
    }
}

pub fn init_logger(prefix: Option<String>, target: LogTarget) {
    LOGGER.get_or_init(|| Logger::new(prefix, target));
}

/// Routes engine logs from unit tests to a temp file instead of the console.
#[cfg(test)]
pub(crate) fn init_test_logger() {
    init_logger(
        Some("Test".to_string()),
        LogTarget::File(std::env::temp_dir().join("portfolio_common_tests.log")),
    );
}

pub fn log(level: LogLevel, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    } else {
        eprintln!("Logger not initialized! Call init_logger() first. {}", message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Warn, file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Error, file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories_and_adds_level() {
        let logger = Logger::new(Some("Relay".to_string()), LogTarget::Stdout);
        let line = logger.format_line(LogLevel::Warn, "server/src/relay.rs", 42, "hello");
        assert!(line.contains("[Relay][relay.rs:42] WARN hello"));
    }

    #[test]
    fn test_unopenable_file_never_falls_back_to_stdout() {
        let random_number: u32 = rand::random();
        let missing_dir = std::env::temp_dir().join(format!("portfolio_no_such_dir_{}", random_number));
        let file_name = format!("portfolio_fallback_{}.log", random_number);
        let logger = Logger::new(None, LogTarget::File(missing_dir.join(&file_name)));

        assert!(!matches!(logger.sink, Sink::Stdout));
        logger.log(LogLevel::Info, "logger.rs", 1, "still written somewhere");

        let fallback = std::env::temp_dir().join(&file_name);
        if fallback.exists() {
            let content = std::fs::read_to_string(&fallback).unwrap();
            assert!(content.contains("still written somewhere"));
            std::fs::remove_file(fallback).unwrap();
        }
    }

    #[test]
    fn test_init_test_logger_installs_a_file_logger() {
        init_test_logger();
        init_test_logger();

        let logger = LOGGER.get().unwrap();
        assert!(!matches!(logger.sink, Sink::Stdout));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, LogTarget::Stdout);
        let line = logger.format_line(LogLevel::Info, "C:\\src\\main.rs", 7, "started");
        assert!(line.ends_with("[main.rs:7] INFO started"));
    }
}
