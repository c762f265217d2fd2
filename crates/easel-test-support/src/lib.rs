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

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (in-memory browser state), mocks.rs (recording collaborators).

pub mod fixtures;
pub mod mocks;

pub use fixtures::{Call, FakeBrowser, FakeDocument, FakeNode};
pub use mocks::{
    FakeInstance, FakeRuntime, FakeRuntimeError, RecordingRegistrar, RecordingWorker,
    RegistrarError,
};
