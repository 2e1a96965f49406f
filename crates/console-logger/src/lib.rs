//! Console Logger
//!
//! A `log` backend for WASM frontends. Records are formatted as
//! `LEVEL target: message` and written with the matching
//! `console.*` method so browser devtools can filter by severity.

use log::{Level, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

/// Logger writing every enabled record to the browser console
pub struct ConsoleLogger {
    level: Level,
}

impl ConsoleLogger {
    pub const fn new(level: Level) -> Self {
        Self { level }
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
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug => web_sys::console::log_1(&line),
            Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!("{:<5} {}: {}", record.level(), record.target(), record.args())
}

/// Install the console logger as the global `log` backend.
///
/// Only the first call succeeds; later calls return the `SetLoggerError`
/// from the `log` crate and leave the installed logger untouched.
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    let logger: &'static ConsoleLogger = Box::leak(Box::new(ConsoleLogger::new(level)));
    log::set_logger(logger)?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(Level::Info);
        let warn = Metadata::builder().level(Level::Warn).target("app").build();
        let debug = Metadata::builder().level(Level::Debug).target("app").build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .level(Level::Info)
                .target("inventory_ui::actions")
                .args(format_args!("loaded {} items", 3))
                .build(),
        );
        assert_eq!(line, "INFO  inventory_ui::actions: loaded 3 items");
    }
}
