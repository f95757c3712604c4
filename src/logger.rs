//! Debug logging backend for the `log` facade.
//!
//! When --debug is active, records go to <exe_dir>/debug.log. Nothing is ever
//! written to the console so stdout stays pipeable.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Metadata, Record};

struct Logger {
    file: Mutex<Option<File>>,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Location of the debug log, next to the executable.
pub fn log_path() -> PathBuf {
    let exe = std::env::current_exe().unwrap_or_default();
    let dir = exe.parent().unwrap_or(std::path::Path::new("."));
    dir.join("debug.log")
}

/// Initialize the logger. Call once at startup.
pub fn init(debug: bool) {
    let file = if debug {
        // Create/truncate with header
        File::create(log_path())
            .and_then(|mut f| writeln!(f, "=== zodiac-extract debug log ===").map(|()| f))
            .ok()
    } else {
        None
    };

    let level = if file.is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    };

    let logger = LOGGER.get_or_init(|| Logger {
        file: Mutex::new(file),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Ok(mut guard) = self.file.lock() else { return };
        if let Some(f) = guard.as_mut() {
            let _ = writeln!(f, "[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = self.file.lock() {
            if let Some(f) = guard.as_mut() {
                let _ = f.flush();
            }
        }
    }
}
