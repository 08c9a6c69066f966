//! Component tree - arena-backed retained nodes and their lifecycle.
//!
//! Components are not objects. Each is a slot in a thread-local arena,
//! addressed by `NodeId`, holding a setup closure, a teardown closure, and
//! first-child/next-sibling/parent index links. Index links keep the tree
//! free of pointer cycles; ownership is top-down (a parent tears down its
//! whole child chain before its own reference goes away).
//!
//! The tree is an ownership hierarchy, not a rendering hierarchy: at mount
//! time every descendant's output attaches directly under the mount root's
//! output. The tree shape is static once mounted - data changes flow through
//! reactive watchers into renderable attributes, never through re-mounting.

mod lifecycle;
mod registry;

pub use lifecycle::{compose, create_node, mount, mount_root, release_tree, unmount};
pub use registry::{NodeId, allocated_count, reset_nodes};
