//! In-memory browser state shared by the recording collaborators.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use easel_bootstrap::MountDocument;

use crate::mocks::{FakeRuntime, RecordingRegistrar, RecordingWorker};

/// One observed collaborator call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Canvas element registration for `tag`.
    Define {
        /// Requested tag.
        tag: String,
    },
    /// Runtime start.
    Start {
        /// Id of the node passed as mount point, if any.
        mount: Option<String>,
        /// Whether the canvas element was defined when start was issued.
        canvas_defined: bool,
    },
    /// Worker deregistration.
    Unregister,
}

/// Element handle with a mutable child list standing in for a DOM subtree.
#[derive(Clone, Debug, Default)]
pub struct FakeNode {
    id: String,
    children: Rc<RefCell<Vec<String>>>,
}

impl FakeNode {
    /// Node carrying `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Rc::default(),
        }
    }

    /// Element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append a rendered child tag.
    pub fn append(&self, tag: impl Into<String>) {
        self.children.borrow_mut().push(tag.into());
    }

    /// Tags rendered under this node, in insertion order.
    #[must_use]
    pub fn children(&self) -> Vec<String> {
        self.children.borrow().clone()
    }

    /// Whether both handles point at the same node.
    #[must_use]
    pub fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.children, &other.children)
    }
}

/// Document holding at most a handful of nodes keyed by id.
#[derive(Clone, Debug, Default)]
pub struct FakeDocument {
    nodes: Vec<FakeNode>,
}

impl FakeDocument {
    /// Document containing one node per id.
    #[must_use]
    pub fn with_nodes<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nodes: ids.into_iter().map(FakeNode::new).collect(),
        }
    }

    /// Node carrying `id`.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<FakeNode> {
        self.nodes.iter().find(|node| node.id == id).cloned()
    }
}

impl MountDocument for FakeDocument {
    type Node = FakeNode;

    fn element_by_id(&self, id: &str) -> Option<FakeNode> {
        self.node(id)
    }
}

/// Browser-wide state: call log, custom element registry, worker registrations.
#[derive(Clone, Debug, Default)]
pub struct FakeBrowser {
    /// Document the bootstrap runs against.
    pub document: FakeDocument,
    calls: Rc<RefCell<Vec<Call>>>,
    defined: Rc<RefCell<BTreeSet<String>>>,
    workers: Rc<Cell<usize>>,
}

impl FakeBrowser {
    /// Browser whose document contains `<div id="{id}">`.
    #[must_use]
    pub fn with_mount(id: &str) -> Self {
        Self {
            document: FakeDocument::with_nodes([id]),
            ..Self::default()
        }
    }

    /// Browser whose document has no elements.
    #[must_use]
    pub fn without_mount() -> Self {
        Self::default()
    }

    /// Pretend a previous visit left an active worker behind.
    pub fn install_worker(&self) {
        self.workers.set(self.workers.get() + 1);
    }

    /// Active worker registrations.
    #[must_use]
    pub fn active_workers(&self) -> usize {
        self.workers.get()
    }

    /// Whether `tag` is defined in the custom element registry.
    #[must_use]
    pub fn is_defined(&self, tag: &str) -> bool {
        self.defined.borrow().contains(tag)
    }

    /// Snapshot of every collaborator call so far.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Number of logged calls matching `predicate`.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    /// Registrar sharing this browser's state.
    #[must_use]
    pub fn registrar(&self) -> RecordingRegistrar {
        RecordingRegistrar::new(Rc::clone(&self.calls), Rc::clone(&self.defined))
    }

    /// Runtime sharing this browser's state.
    #[must_use]
    pub fn runtime(&self) -> FakeRuntime {
        FakeRuntime::new(Rc::clone(&self.calls), Rc::clone(&self.defined))
    }

    /// Worker helper sharing this browser's state.
    #[must_use]
    pub fn worker(&self) -> RecordingWorker {
        RecordingWorker::new(Rc::clone(&self.calls), Rc::clone(&self.workers))
    }
}
