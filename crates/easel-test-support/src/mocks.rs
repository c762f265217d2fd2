//! Recording stand-ins for the browser collaborators.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use easel_bootstrap::{ApplicationRuntime, CanvasRegistrar, StartConfig, WorkerLifecycle};
use thiserror::Error;

use crate::fixtures::{Call, FakeNode};

type CallLog = Rc<RefCell<Vec<Call>>>;
type ElementRegistry = Rc<RefCell<BTreeSet<String>>>;

/// Failure raised by [`RecordingRegistrar`] when told to refuse.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("custom element definition refused")]
pub struct RegistrarError;

/// Registrar that records calls and fills the shared element registry.
#[derive(Debug)]
pub struct RecordingRegistrar {
    calls: CallLog,
    defined: ElementRegistry,
    refuse: bool,
}

impl RecordingRegistrar {
    pub(crate) const fn new(calls: CallLog, defined: ElementRegistry) -> Self {
        Self {
            calls,
            defined,
            refuse: false,
        }
    }

    /// Reject every definition request.
    #[must_use]
    pub const fn refusing(mut self) -> Self {
        self.refuse = true;
        self
    }
}

impl CanvasRegistrar for RecordingRegistrar {
    type Error = RegistrarError;

    fn ensure_registered(&self, tag: &str) -> Result<(), RegistrarError> {
        self.calls.borrow_mut().push(Call::Define {
            tag: tag.to_string(),
        });
        if self.refuse {
            return Err(RegistrarError);
        }
        self.defined.borrow_mut().insert(tag.to_string());
        Ok(())
    }
}

/// Failures raised by [`FakeRuntime`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FakeRuntimeError {
    /// Start was called without a mount node.
    #[error("application mount node missing")]
    MissingMount,
}

/// Handle returned by [`FakeRuntime::start`].
#[derive(Clone, Debug)]
pub struct FakeInstance {
    /// Node the instance rendered into.
    pub node: FakeNode,
}

/// Runtime that renders the canvas tag into the mount node.
#[derive(Debug)]
pub struct FakeRuntime {
    calls: CallLog,
    defined: ElementRegistry,
    canvas_tag: String,
    panic_on_start: bool,
}

impl FakeRuntime {
    pub(crate) fn new(calls: CallLog, defined: ElementRegistry) -> Self {
        Self {
            calls,
            defined,
            canvas_tag: easel_bootstrap::config::DEFAULT_CANVAS_TAG.to_string(),
            panic_on_start: false,
        }
    }

    /// Render `tag` instead of the default canvas tag.
    #[must_use]
    pub fn rendering(mut self, tag: impl Into<String>) -> Self {
        self.canvas_tag = tag.into();
        self
    }

    /// Panic inside `start` after recording the call.
    #[must_use]
    pub const fn panicking(mut self) -> Self {
        self.panic_on_start = true;
        self
    }
}

impl ApplicationRuntime for FakeRuntime {
    type Node = FakeNode;
    type Instance = FakeInstance;
    type Error = FakeRuntimeError;

    fn start(&self, config: StartConfig<FakeNode>) -> Result<FakeInstance, FakeRuntimeError> {
        let canvas_defined = self.defined.borrow().contains(&self.canvas_tag);
        self.calls.borrow_mut().push(Call::Start {
            mount: config.node.as_ref().map(|node| node.id().to_string()),
            canvas_defined,
        });
        assert!(!self.panic_on_start, "fake runtime panicked on start");
        let node = config.node.ok_or(FakeRuntimeError::MissingMount)?;
        node.append(self.canvas_tag.clone());
        Ok(FakeInstance { node })
    }
}

/// Worker helper that clears the shared registration count.
#[derive(Debug)]
pub struct RecordingWorker {
    calls: CallLog,
    workers: Rc<Cell<usize>>,
}

impl RecordingWorker {
    pub(crate) const fn new(calls: CallLog, workers: Rc<Cell<usize>>) -> Self {
        Self { calls, workers }
    }
}

impl WorkerLifecycle for RecordingWorker {
    fn unregister(&self) {
        self.calls.borrow_mut().push(Call::Unregister);
        self.workers.set(0);
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::FakeBrowser;

    use super::*;

    #[test]
    fn runtime_reports_whether_canvas_was_defined() {
        let browser = FakeBrowser::with_mount("root");
        let runtime = browser.runtime();
        let node = browser.document.node("root");

        assert!(runtime.start(StartConfig { node }).is_ok());
        assert_eq!(
            browser.calls(),
            vec![Call::Start {
                mount: Some("root".into()),
                canvas_defined: false,
            }]
        );
    }

    #[test]
    fn refusing_registrar_leaves_registry_empty() {
        let browser = FakeBrowser::without_mount();
        let registrar = browser.registrar().refusing();
        assert_eq!(
            registrar.ensure_registered("easel-canvas"),
            Err(RegistrarError)
        );
        assert!(!browser.is_defined("easel-canvas"));
    }
}
