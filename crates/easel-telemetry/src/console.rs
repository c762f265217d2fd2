//! Browser console sink for formatted tracing events.

use tracing::Level;

/// Console method an event is written with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleLevel {
    /// `console.error`
    Error,
    /// `console.warn`
    Warn,
    /// `console.info`
    Info,
    /// `console.debug`
    Debug,
}

impl From<Level> for ConsoleLevel {
    fn from(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Info
        } else {
            Self::Debug
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{ConsoleMakeWriter, ConsoleWriter};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::io;

    use tracing::Metadata;
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    use super::ConsoleLevel;

    /// [`MakeWriter`] handing out one [`ConsoleWriter`] per event.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(ConsoleLevel::Info)
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(ConsoleLevel::from(*meta.level()))
        }
    }

    /// Buffers one formatted event and emits it when dropped.
    #[derive(Debug)]
    pub struct ConsoleWriter {
        level: ConsoleLevel,
        buffer: Vec<u8>,
    }

    impl ConsoleWriter {
        const fn new(level: ConsoleLevel) -> Self {
            Self {
                level,
                buffer: Vec::new(),
            }
        }
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buffer.is_empty() {
                return;
            }
            let text = String::from_utf8_lossy(&self.buffer);
            let line = JsValue::from_str(text.trim_end());
            match self.level {
                ConsoleLevel::Error => web_sys::console::error_1(&line),
                ConsoleLevel::Warn => web_sys::console::warn_1(&line),
                ConsoleLevel::Info => web_sys::console::info_1(&line),
                ConsoleLevel::Debug => web_sys::console::debug_1(&line),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleLevel::from(Level::ERROR), ConsoleLevel::Error);
        assert_eq!(ConsoleLevel::from(Level::WARN), ConsoleLevel::Warn);
        assert_eq!(ConsoleLevel::from(Level::INFO), ConsoleLevel::Info);
        assert_eq!(ConsoleLevel::from(Level::DEBUG), ConsoleLevel::Debug);
        assert_eq!(ConsoleLevel::from(Level::TRACE), ConsoleLevel::Debug);
    }
}
