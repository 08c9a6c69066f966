//! Node registry - arena allocation for component nodes.
//!
//! Manages the component-node slots:
//! - Slot allocation with a free-index pool for O(1) reuse
//! - Child/sibling/parent index links
//! - Stored renderable output per node
//!
//! Slots are `Rc<RefCell<NodeData>>` so a node can be borrowed for a setup
//! or teardown call without holding the arena borrow - closures are free to
//! allocate or release other nodes reentrantly.

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::SceneNode;

// =============================================================================
// Node Data
// =============================================================================

/// Index of a component node in the arena.
pub type NodeId = usize;

/// Produces the node's single renderable output. Re-runnable: a second mount
/// of the same node materializes a fresh output (the first is orphaned -
/// caller responsibility).
pub(crate) type SetupFn = Box<dyn FnMut() -> SceneNode>;

/// Component cleanup. Idempotent by convention - unmount may invoke it on a
/// node that was never mounted, or again on an already-unmounted node.
pub(crate) type TeardownFn = Box<dyn FnMut()>;

pub(crate) struct NodeData {
    pub setup: SetupFn,
    pub teardown: TeardownFn,
    pub child: Option<NodeId>,
    pub sibling: Option<NodeId>,
    pub parent: Option<NodeId>,
    pub output: Option<SceneNode>,
}

// =============================================================================
// Registry State
// =============================================================================

thread_local! {
    /// Arena of node slots. A `None` slot has been released.
    static NODES: RefCell<Vec<Option<Rc<RefCell<NodeData>>>>> = RefCell::new(Vec::new());

    /// Pool of released indices for reuse.
    static FREE_SLOTS: RefCell<Vec<NodeId>> = RefCell::new(Vec::new());
}

// =============================================================================
// Allocation
// =============================================================================

/// Allocate a slot for a new node.
pub(crate) fn alloc_node(setup: SetupFn, teardown: TeardownFn) -> NodeId {
    let data = Rc::new(RefCell::new(NodeData {
        setup,
        teardown,
        child: None,
        sibling: None,
        parent: None,
        output: None,
    }));

    let id = FREE_SLOTS.with(|free| free.borrow_mut().pop());
    let id = match id {
        Some(id) => {
            NODES.with(|nodes| nodes.borrow_mut()[id] = Some(data));
            id
        }
        None => NODES.with(|nodes| {
            let mut nodes = nodes.borrow_mut();
            nodes.push(Some(data));
            nodes.len() - 1
        }),
    };

    log::trace!("node {id} allocated");
    id
}

/// Return a slot to the pool. Links into the freed node are the caller's
/// problem; the lifecycle layer only frees ids it has already unlinked.
pub(crate) fn free_node(id: NodeId) {
    let released = NODES.with(|nodes| {
        let mut nodes = nodes.borrow_mut();
        match nodes.get_mut(id) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                true
            }
            _ => false,
        }
    });

    if released {
        FREE_SLOTS.with(|free| free.borrow_mut().push(id));
        log::trace!("node {id} released");
    }
}

/// Look up a node slot. `None` for ids never allocated or already released.
pub(crate) fn node(id: NodeId) -> Option<Rc<RefCell<NodeData>>> {
    NODES.with(|nodes| nodes.borrow().get(id).and_then(|slot| slot.clone()))
}

// =============================================================================
// Link Accessors
// =============================================================================

pub(crate) fn child_of(id: NodeId) -> Option<NodeId> {
    node(id).and_then(|n| n.borrow().child)
}

pub(crate) fn sibling_of(id: NodeId) -> Option<NodeId> {
    node(id).and_then(|n| n.borrow().sibling)
}

pub(crate) fn parent_of(id: NodeId) -> Option<NodeId> {
    node(id).and_then(|n| n.borrow().parent)
}

pub(crate) fn set_child(id: NodeId, child: Option<NodeId>) {
    if let Some(n) = node(id) {
        n.borrow_mut().child = child;
    }
}

pub(crate) fn set_sibling(id: NodeId, sibling: Option<NodeId>) {
    if let Some(n) = node(id) {
        n.borrow_mut().sibling = sibling;
    }
}

pub(crate) fn set_parent_link(id: NodeId, parent: Option<NodeId>) {
    if let Some(n) = node(id) {
        n.borrow_mut().parent = parent;
    }
}

/// The node's stored renderable output, if mounted.
pub(crate) fn output_of(id: NodeId) -> Option<SceneNode> {
    node(id).and_then(|n| n.borrow().output.clone())
}

// =============================================================================
// Introspection / Reset
// =============================================================================

/// Count of currently allocated nodes.
pub fn allocated_count() -> usize {
    NODES.with(|nodes| nodes.borrow().iter().filter(|slot| slot.is_some()).count())
}

/// Reset all registry state (for testing).
pub fn reset_nodes() {
    NODES.with(|nodes| nodes.borrow_mut().clear());
    FREE_SLOTS.with(|free| free.borrow_mut().clear());
}
