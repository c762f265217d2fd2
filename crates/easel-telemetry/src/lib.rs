#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Logging setup shared by the Easel binaries.
//!
//! Native builds log to stderr; wasm32 builds route each event to the browser
//! console method matching its level.

pub mod console;
pub mod error;
pub mod init;

pub use console::ConsoleLevel;
#[cfg(target_arch = "wasm32")]
pub use console::ConsoleMakeWriter;
pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
