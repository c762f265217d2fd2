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
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

//! Startup orchestration for the Easel browser application.
//!
//! The crate is target-agnostic: the document, the canvas element registrar,
//! the application runtime and the service worker helper are collaborators
//! behind traits, so the ordering contract can be exercised natively.
//! Layout: `config.rs` (bootstrap settings), `error.rs` (error taxonomy),
//! `orchestrator.rs` (the startup sequence), `instance.rs` (retained handles).

pub mod config;
pub mod error;
pub mod instance;
pub mod orchestrator;

pub use config::BootstrapConfig;
pub use error::{BootstrapError, ConfigError};
pub use instance::{InstanceId, InstanceRegistry};
pub use orchestrator::{
    ApplicationRuntime, BUILD_SHA, BootPhase, Bootstrap, CanvasRegistrar, MountDocument, StartConfig,
    WorkerLifecycle,
};
