//! Browser console logging.
//!
//! `tracing` events from both crates are formatted by `tracing-subscriber`
//! and written to the devtools console, one `console.*` call per event.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Parse a `log_level` value; unknown values read as `info`.
pub fn max_level(level: &str) -> LevelFilter {
    match level.trim() {
        "" => LevelFilter::INFO,
        level => level.parse().unwrap_or(LevelFilter::INFO),
    }
}

/// Install the console subscriber. Safe to call twice; the second call is a no-op.
pub fn init(level: &str) {
    let result = tracing_subscriber::fmt()
        .with_max_level(max_level(level))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_writer(ConsoleMakeWriter)
        .try_init();

    if let Err(e) = result {
        console::warn_1(&JsValue::from_str(&format!("logging already initialised: {e}")));
    }
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and flushes it to the console on drop.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }

        let value = JsValue::from_str(line);
        match self.level {
            Level::ERROR => console::error_1(&value),
            Level::WARN => console::warn_1(&value),
            _ => console::log_1(&value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_levels_parse() {
        assert_eq!(max_level("debug"), LevelFilter::DEBUG);
        assert_eq!(max_level(" WARN "), LevelFilter::WARN);
        assert_eq!(max_level("off"), LevelFilter::OFF);
    }

    #[test]
    fn unknown_level_reads_as_info() {
        assert_eq!(max_level("chatty"), LevelFilter::INFO);
        assert_eq!(max_level(""), LevelFilter::INFO);
    }
}
