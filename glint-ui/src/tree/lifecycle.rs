//! Tree lifecycle - compose, mount, unmount.
//!
//! Mount is depth-first and happens exactly once per node: the setup closure
//! materializes the node's single renderable output, and every descendant's
//! output is attached directly under the *mount root's* output. The logical
//! tree (ownership, teardown order) and the rendering tree (one flat level
//! under the root output) are deliberately different shapes.
//!
//! Unmount is the mirror walk: teardown, detach, clear - tolerant of nodes
//! that were never mounted and of repeated calls.

use crate::host::SceneNode;

use super::registry::{self, NodeId, SetupFn, TeardownFn};

// =============================================================================
// Construction
// =============================================================================

/// Allocate a component node.
///
/// `setup` produces the node's one renderable output when the node is
/// mounted. `teardown` runs on unmount and must be safe to run repeatedly
/// or before any mount happened.
pub fn create_node(
    setup: impl FnMut() -> SceneNode + 'static,
    teardown: impl FnMut() + 'static,
) -> NodeId {
    registry::alloc_node(
        Box::new(setup) as SetupFn,
        Box::new(teardown) as TeardownFn,
    )
}

/// Invoke a component function and link the supplied children into the node
/// it returns.
///
/// The first child becomes the node's `child`; the rest are chained through
/// `sibling` links, and every child's `parent` link is set to the composed
/// node. With no children the node is returned untouched - leaves get no
/// link structures at all.
pub fn compose<P, F>(component: F, props: P, children: Vec<NodeId>) -> NodeId
where
    F: FnOnce(P, &[NodeId]) -> NodeId,
{
    let id = component(props, &children);
    if children.is_empty() {
        return id;
    }

    registry::set_child(id, Some(children[0]));
    for pair in children.windows(2) {
        registry::set_sibling(pair[0], Some(pair[1]));
    }
    for &child in &children {
        registry::set_parent_link(child, Some(id));
    }
    id
}

// =============================================================================
// Mount
// =============================================================================

/// Mount a node tree, materializing one renderable output per node.
///
/// Depth-first: the node's setup runs first, then each child chain in order.
/// Every descendant's output has its rendering parent set to the *root*
/// output of this call, not to its logical parent's output.
///
/// Mounting an already-mounted node is not guarded: setup runs again and the
/// new output overwrites the stored one, orphaning the first.
///
/// Returns `None` only for a node that has been released.
pub fn mount(root: NodeId) -> Option<SceneNode> {
    let output = materialize(root)?;
    log::debug!("mounting tree rooted at node {root}");
    if let Some(first) = registry::child_of(root) {
        mount_chain(first, &output);
    }
    Some(output)
}

/// Compose a component with empty props, mount it, and attach the resulting
/// output under a pre-existing host container.
pub fn mount_root<F>(component: F, host_root: &SceneNode) -> Option<NodeId>
where
    F: FnOnce((), &[NodeId]) -> NodeId,
{
    let id = compose(component, (), Vec::new());
    let output = mount(id)?;
    output.set_parent(Some(host_root));
    Some(id)
}

/// Run a node's setup and store the produced output.
fn materialize(id: NodeId) -> Option<SceneNode> {
    let node = registry::node(id)?;
    let output = {
        let mut data = node.borrow_mut();
        (data.setup)()
    };
    node.borrow_mut().output = Some(output.clone());
    log::trace!("node {id} materialized");
    Some(output)
}

/// Materialize a sibling chain and its descendants, attaching everything
/// under `root_output`.
fn mount_chain(first: NodeId, root_output: &SceneNode) {
    let mut current = Some(first);
    while let Some(id) = current {
        if let Some(output) = materialize(id) {
            output.set_parent(Some(root_output));
        }
        if let Some(child) = registry::child_of(id) {
            mount_chain(child, root_output);
        }
        current = registry::sibling_of(id);
    }
}

// =============================================================================
// Unmount
// =============================================================================

/// Unmount a node tree.
///
/// Per node, depth-first: run teardown, detach the stored output from the
/// rendering tree - unless that output is reference-identical to the logical
/// parent's output, which would rip an output the parent still owns out of
/// the rendering tree - clear the stored output, recurse into the child
/// chain, and finally clear the node's `child` link.
///
/// Safe on a node that was never mounted (teardown still runs, there is no
/// output to detach) and on an already-unmounted node.
pub fn unmount(root: NodeId) {
    let Some(node) = registry::node(root) else {
        return;
    };

    {
        let mut data = node.borrow_mut();
        (data.teardown)();
    }

    let output = node.borrow().output.clone();
    if let Some(output) = output {
        let parent_output = registry::parent_of(root).and_then(registry::output_of);
        let shared = parent_output.is_some_and(|p| p.ptr_eq(&output));
        if !shared {
            output.set_parent(None);
        }
        node.borrow_mut().output = None;
        log::trace!("node {root} torn down");
    }

    let mut current = registry::child_of(root);
    while let Some(id) = current {
        let next = registry::sibling_of(id);
        unmount(id);
        current = next;
    }

    registry::set_child(root, None);
}

// =============================================================================
// Disposal
// =============================================================================

/// Unmount a tree and return every node slot in it to the arena pool.
///
/// The subtree is snapshotted through the child/sibling links before unmount
/// clears them.
pub fn release_tree(root: NodeId) {
    let mut ids = Vec::new();
    collect_subtree(root, &mut ids);
    unmount(root);
    for id in ids {
        registry::free_node(id);
    }
    log::debug!("released tree rooted at node {root}");
}

fn collect_subtree(id: NodeId, ids: &mut Vec<NodeId>) {
    if registry::node(id).is_none() {
        return;
    }
    ids.push(id);
    let mut current = registry::child_of(id);
    while let Some(child) = current {
        collect_subtree(child, ids);
        current = registry::sibling_of(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NodeKind;
    use crate::tree::registry::{allocated_count, reset_nodes};
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_nodes();
    }

    fn leaf_component(_: (), _: &[NodeId]) -> NodeId {
        create_node(|| SceneNode::new(NodeKind::Sprite), || {})
    }

    #[test]
    fn test_compose_leaf_has_no_links() {
        setup();

        let id = compose(leaf_component, (), Vec::new());
        assert_eq!(registry::child_of(id), None);
        assert_eq!(registry::sibling_of(id), None);
        assert_eq!(registry::parent_of(id), None);
    }

    #[test]
    fn test_compose_links_child_chain() {
        setup();

        let a = compose(leaf_component, (), Vec::new());
        let b = compose(leaf_component, (), Vec::new());
        let c = compose(leaf_component, (), Vec::new());
        let parent = compose(leaf_component, (), vec![a, b, c]);

        assert_eq!(registry::child_of(parent), Some(a));
        assert_eq!(registry::sibling_of(a), Some(b));
        assert_eq!(registry::sibling_of(b), Some(c));
        assert_eq!(registry::sibling_of(c), None);
        for id in [a, b, c] {
            assert_eq!(registry::parent_of(id), Some(parent));
        }
    }

    #[test]
    fn test_mount_materializes_once_per_node() {
        setup();

        let setups = Rc::new(Cell::new(0));
        let make = |counter: Rc<Cell<u32>>| {
            create_node(
                move || {
                    counter.set(counter.get() + 1);
                    SceneNode::new(NodeKind::Group)
                },
                || {},
            )
        };

        let child = make(setups.clone());
        let root = compose(|_: (), _: &[NodeId]| make(setups.clone()), (), vec![child]);

        let output = mount(root);
        assert!(output.is_some());
        assert_eq!(setups.get(), 2);
    }

    #[test]
    fn test_mount_flattens_rendering_attachment() {
        setup();

        // Two levels of nesting: root -> mid -> (leaf_a, leaf_b).
        let leaf_a = compose(leaf_component, (), Vec::new());
        let leaf_b = compose(leaf_component, (), Vec::new());
        let mid = compose(leaf_component, (), vec![leaf_a, leaf_b]);
        let root = compose(leaf_component, (), vec![mid]);

        let root_output = mount(root).unwrap();

        // Every descendant hangs off the root output, never its logical parent's.
        for id in [mid, leaf_a, leaf_b] {
            let out = registry::output_of(id).unwrap();
            assert!(out.parent().is_some_and(|p| p.ptr_eq(&root_output)));
        }
        assert!(root_output.parent().is_none());
    }

    #[test]
    fn test_unmount_detaches_and_clears() {
        setup();

        let child = compose(leaf_component, (), Vec::new());
        let root = compose(leaf_component, (), vec![child]);
        mount(root).unwrap();

        let child_output = registry::output_of(child).unwrap();
        unmount(root);

        assert!(child_output.parent().is_none());
        assert_eq!(registry::output_of(root), None);
        assert_eq!(registry::output_of(child), None);
        assert_eq!(registry::child_of(root), None);
    }

    #[test]
    fn test_unmount_is_idempotent() {
        setup();

        let teardowns = Rc::new(Cell::new(0));
        let teardowns_clone = teardowns.clone();
        let root = create_node(
            || SceneNode::new(NodeKind::Group),
            move || teardowns_clone.set(teardowns_clone.get() + 1),
        );

        mount(root).unwrap();
        unmount(root);
        unmount(root);

        assert_eq!(teardowns.get(), 2);
        assert_eq!(registry::child_of(root), None);
    }

    #[test]
    fn test_unmount_never_mounted_runs_teardown() {
        setup();

        let teardowns = Rc::new(Cell::new(0));
        let teardowns_clone = teardowns.clone();
        let root = create_node(
            || SceneNode::new(NodeKind::Group),
            move || teardowns_clone.set(teardowns_clone.get() + 1),
        );

        unmount(root);
        assert_eq!(teardowns.get(), 1);
    }

    #[test]
    fn test_unmount_spares_output_shared_with_parent() {
        setup();

        // The wrapper child returns its parent's output instead of its own.
        let shared = SceneNode::new(NodeKind::Group);

        let shared_for_parent = shared.clone();
        let parent = create_node(move || shared_for_parent.clone(), || {});
        let shared_for_child = shared.clone();
        let child = create_node(move || shared_for_child.clone(), || {});

        registry::set_child(parent, Some(child));
        registry::set_parent_link(child, Some(parent));

        let host_root = SceneNode::new(NodeKind::Group);
        mount(parent).unwrap();
        shared.set_parent(Some(&host_root));

        // Unmounting only the child must not rip the parent's live output
        // out of the rendering tree.
        unmount(child);
        assert!(shared.parent().is_some_and(|p| p.ptr_eq(&host_root)));

        // Unmounting the parent detaches it.
        unmount(parent);
        assert!(shared.parent().is_none());
    }

    #[test]
    fn test_double_mount_overwrites_output() {
        setup();

        let root = compose(leaf_component, (), Vec::new());
        let first = mount(root).unwrap();
        let second = mount(root).unwrap();

        assert!(!first.ptr_eq(&second));
        assert!(registry::output_of(root).unwrap().ptr_eq(&second));
    }

    #[test]
    fn test_mount_root_attaches_under_host() {
        setup();

        let host_root = SceneNode::new(NodeKind::Group);
        let id = mount_root(leaf_component, &host_root).unwrap();

        let output = registry::output_of(id).unwrap();
        assert!(output.parent().is_some_and(|p| p.ptr_eq(&host_root)));
    }

    #[test]
    fn test_release_tree_frees_all_slots() {
        setup();

        let a = compose(leaf_component, (), Vec::new());
        let b = compose(leaf_component, (), Vec::new());
        let root = compose(leaf_component, (), vec![a, b]);
        mount(root).unwrap();

        assert_eq!(allocated_count(), 3);
        release_tree(root);
        assert_eq!(allocated_count(), 0);

        // Released ids are inert.
        assert!(mount(root).is_none());
        unmount(root);
    }
}
