//! The one-shot startup sequence.
//!
//! # Design
//! - Ordering is explicit: the canvas element is registered before the
//!   runtime is asked to build any view that references it.
//! - The mount point is looked up through an injected [`MountDocument`], never
//!   a global.
//! - Worker deregistration runs exactly once per run, whatever happened before
//!   it, including a panic in a collaborator.
//! - No retries, no rollback, no guard against a second run.

use std::error::Error as StdError;

use tracing::{debug, info};

use crate::config::BootstrapConfig;
use crate::error::BootstrapError;

/// Build identifier stamped into the `bootstrap` span.
///
/// Taken from `EASEL_BUILD_SHA` at compile time; `dev` when unset.
pub const BUILD_SHA: &str = match option_env!("EASEL_BUILD_SHA") {
    Some(sha) => sha,
    None => "dev",
};

/// Document-level lookup of the mount point.
pub trait MountDocument {
    /// Node handle produced by the lookup.
    type Node;

    /// Resolve the element carrying `id`, if any.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
}

/// Defines the drawing-surface custom element.
pub trait CanvasRegistrar {
    /// Failure raised when the element cannot be defined.
    type Error: StdError + 'static;

    /// Make sure `tag` is defined. An existing definition counts as success.
    ///
    /// # Errors
    ///
    /// Returns the registrar's own error when the definition is rejected.
    fn ensure_registered(&self, tag: &str) -> Result<(), Self::Error>;
}

/// Arguments for [`ApplicationRuntime::start`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartConfig<N> {
    /// Node the application renders into; `None` when the lookup missed.
    pub node: Option<N>,
}

/// UI runtime that turns a mount node into a running application.
pub trait ApplicationRuntime {
    /// Node type accepted as mount point.
    type Node;
    /// Handle of the running application.
    type Instance;
    /// Failure raised by the runtime.
    type Error: StdError + 'static;

    /// Start one application instance.
    ///
    /// # Errors
    ///
    /// Whatever the runtime raises, typically a missing mount point.
    fn start(&self, config: StartConfig<Self::Node>) -> Result<Self::Instance, Self::Error>;
}

/// Offline-caching worker lifecycle.
pub trait WorkerLifecycle {
    /// Deregister any active worker. Failures are the helper's to handle.
    fn unregister(&self);
}

/// Lifecycle of a [`Bootstrap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootPhase {
    /// The sequence has not run yet.
    NotStarted,
    /// The sequence has run at least once. Terminal.
    Started,
}

/// Sequences registrar, runtime and worker helper at process start.
#[derive(Debug)]
pub struct Bootstrap<C, A, W> {
    config: BootstrapConfig,
    registrar: C,
    runtime: A,
    worker: W,
    phase: BootPhase,
    runs: usize,
}

impl<C, A, W> Bootstrap<C, A, W>
where
    C: CanvasRegistrar,
    A: ApplicationRuntime,
    W: WorkerLifecycle,
{
    /// Assemble the orchestrator from its collaborators.
    #[must_use]
    pub const fn new(config: BootstrapConfig, registrar: C, runtime: A, worker: W) -> Self {
        Self {
            config,
            registrar,
            runtime,
            worker,
            phase: BootPhase::NotStarted,
            runs: 0,
        }
    }

    /// Settings the sequence runs with.
    #[must_use]
    pub const fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> BootPhase {
        self.phase
    }

    /// How many times [`Self::run`] has been invoked.
    #[must_use]
    pub const fn runs(&self) -> usize {
        self.runs
    }

    /// Run the startup sequence against `document`.
    ///
    /// Registers the canvas element, resolves the mount point, starts the
    /// runtime with it and finally deregisters the background worker. The
    /// worker step runs even when an earlier step fails.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::CanvasRegistration`] when the element could
    /// not be defined (the runtime is then never started) and
    /// [`BootstrapError::Runtime`] carrying the runtime's own failure.
    pub fn run<D>(
        &mut self,
        document: &D,
    ) -> Result<A::Instance, BootstrapError<C::Error, A::Error>>
    where
        D: MountDocument<Node = A::Node>,
    {
        let span = tracing::info_span!(
            "bootstrap",
            build = BUILD_SHA,
            mount_id = %self.config.mount_id,
            canvas_tag = %self.config.canvas_tag,
            run = self.runs + 1
        );
        let _entered = span.enter();

        self.runs += 1;
        self.phase = BootPhase::Started;

        let _worker = UnregisterOnExit {
            worker: &self.worker,
        };
        let outcome = start_application(
            &self.config,
            &self.registrar,
            &self.runtime,
            document,
        );
        if outcome.is_ok() {
            info!("application started");
        }
        outcome
    }
}

fn start_application<C, A, D>(
    config: &BootstrapConfig,
    registrar: &C,
    runtime: &A,
    document: &D,
) -> Result<A::Instance, BootstrapError<C::Error, A::Error>>
where
    C: CanvasRegistrar,
    A: ApplicationRuntime,
    D: MountDocument<Node = A::Node>,
{
    debug!("registering canvas element");
    registrar
        .ensure_registered(&config.canvas_tag)
        .map_err(|source| BootstrapError::CanvasRegistration {
            tag: config.canvas_tag.clone(),
            source,
        })?;

    let node = document.element_by_id(&config.mount_id);
    debug!(resolved = node.is_some(), "mount point lookup finished");

    runtime
        .start(StartConfig { node })
        .map_err(|source| BootstrapError::Runtime {
            mount_id: config.mount_id.clone(),
            source,
        })
}

struct UnregisterOnExit<'a, W: WorkerLifecycle> {
    worker: &'a W,
}

impl<W: WorkerLifecycle> Drop for UnregisterOnExit<'_, W> {
    fn drop(&mut self) {
        debug!("deregistering background worker");
        self.worker.unregister();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::fmt;

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("refused")
        }
    }

    impl StdError for Refused {}

    struct Page(Option<&'static str>);

    impl MountDocument for Page {
        type Node = &'static str;

        fn element_by_id(&self, id: &str) -> Option<Self::Node> {
            self.0.filter(|candidate| *candidate == id)
        }
    }

    #[derive(Default)]
    struct Steps(RefCell<Vec<String>>);

    impl Steps {
        fn push(&self, step: impl Into<String>) {
            self.0.borrow_mut().push(step.into());
        }
    }

    struct Registrar<'a> {
        steps: &'a Steps,
        refuse: bool,
    }

    impl CanvasRegistrar for Registrar<'_> {
        type Error = Refused;

        fn ensure_registered(&self, tag: &str) -> Result<(), Refused> {
            self.steps.push(format!("define {tag}"));
            if self.refuse { Err(Refused) } else { Ok(()) }
        }
    }

    struct Runtime<'a> {
        steps: &'a Steps,
    }

    impl ApplicationRuntime for Runtime<'_> {
        type Node = &'static str;
        type Instance = &'static str;
        type Error = Refused;

        fn start(&self, config: StartConfig<&'static str>) -> Result<&'static str, Refused> {
            self.steps
                .push(format!("start {}", config.node.unwrap_or("<none>")));
            config.node.ok_or(Refused)
        }
    }

    struct Worker<'a> {
        steps: &'a Steps,
        calls: Cell<usize>,
    }

    impl WorkerLifecycle for Worker<'_> {
        fn unregister(&self) {
            self.calls.set(self.calls.get() + 1);
            self.steps.push("unregister");
        }
    }

    fn bootstrap(
        steps: &Steps,
        refuse: bool,
    ) -> Bootstrap<Registrar<'_>, Runtime<'_>, Worker<'_>> {
        Bootstrap::new(
            BootstrapConfig::default(),
            Registrar { steps, refuse },
            Runtime { steps },
            Worker {
                steps,
                calls: Cell::new(0),
            },
        )
    }

    #[test]
    fn steps_run_in_order() {
        let steps = Steps::default();
        let mut boot = bootstrap(&steps, false);
        assert_eq!(boot.phase(), BootPhase::NotStarted);

        let instance = boot.run(&Page(Some("root")));
        assert!(matches!(instance, Ok("root")));
        assert_eq!(boot.phase(), BootPhase::Started);
        assert_eq!(
            steps.0.borrow().as_slice(),
            ["define easel-canvas", "start root", "unregister"]
        );
    }

    #[test]
    fn missing_mount_is_forwarded_and_worker_still_unregisters() {
        let steps = Steps::default();
        let mut boot = bootstrap(&steps, false);

        let err = boot.run(&Page(None)).unwrap_err();
        assert!(matches!(err, BootstrapError::Runtime { ref mount_id, .. } if mount_id == "root"));
        assert_eq!(
            steps.0.borrow().as_slice(),
            ["define easel-canvas", "start <none>", "unregister"]
        );
    }

    #[test]
    fn registration_failure_skips_runtime_but_not_worker() {
        let steps = Steps::default();
        let mut boot = bootstrap(&steps, true);

        let err = boot.run(&Page(Some("root"))).unwrap_err();
        assert!(matches!(err, BootstrapError::CanvasRegistration { .. }));
        assert_eq!(
            steps.0.borrow().as_slice(),
            ["define easel-canvas", "unregister"]
        );
        assert_eq!(boot.phase(), BootPhase::Started);
    }

    #[test]
    fn build_sha_follows_compile_time_env() {
        assert_eq!(BUILD_SHA, option_env!("EASEL_BUILD_SHA").unwrap_or("dev"));
    }

    #[test]
    fn each_run_unregisters_once() {
        let steps = Steps::default();
        let mut boot = bootstrap(&steps, false);

        let _ = boot.run(&Page(Some("root")));
        let _ = boot.run(&Page(Some("root")));
        assert_eq!(boot.runs(), 2);
        assert_eq!(boot.worker.calls.get(), 2);
    }
}
