//! Logging set-up using `tracing` and `tracing-subscriber`.
//!
//! The host binary logs to stderr and honours `RUST_LOG`. The browser build
//! has no environment or clock access worth using, so it formats without
//! timestamps and writes each event to the developer console at a matching
//! severity.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,portfolio=debug";

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Calling it twice is harmless.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(build_env_filter())
        .with(fmt::layer().with_target(false))
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    console_error_panic_hook::set_once();

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(DEFAULT_FILTER))
        .with(
            fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_target(false)
                .with_writer(console::ConsoleWriter),
        )
        .try_init();
}

/// Picks the console method for an event level.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn console_method(level: &Level) -> ConsoleMethod {
    match *level {
        Level::ERROR => ConsoleMethod::Error,
        Level::WARN => ConsoleMethod::Warn,
        Level::INFO => ConsoleMethod::Info,
        _ => ConsoleMethod::Debug,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io::{self, Write};

    use tracing::Metadata;
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    use super::{ConsoleMethod, console_method};

    pub struct ConsoleWriter;

    pub struct ConsoleLine {
        method: ConsoleMethod,
        buffer: Vec<u8>,
    }

    impl<'a> MakeWriter<'a> for ConsoleWriter {
        type Writer = ConsoleLine;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleLine {
                method: ConsoleMethod::Info,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleLine {
                method: console_method(meta.level()),
                buffer: Vec::new(),
            }
        }
    }

    impl Write for ConsoleLine {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buffer.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buffer);
            let line = JsValue::from_str(line.trim_end());
            match self.method {
                ConsoleMethod::Error => web_sys::console::error_1(&line),
                ConsoleMethod::Warn => web_sys::console::warn_1(&line),
                ConsoleMethod::Info => web_sys::console::info_1(&line),
                ConsoleMethod::Debug => web_sys::console::debug_1(&line),
            }
            self.buffer.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleLine {
        fn drop(&mut self) {
            let _ = self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_method_follows_severity() {
        assert_eq!(console_method(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(console_method(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(console_method(&Level::INFO), ConsoleMethod::Info);
        assert_eq!(console_method(&Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::info!("telemetry initialised");
    }
}
