//! # glint-ui
//!
//! Retained-mode reactive component tree for scene-node hosts.
//!
//! Built on [glint-signals](../glint_signals/index.html) for fine-grained
//! reactivity.
//!
//! ## Architecture
//!
//! A declared tree of component invocations mounts exactly once. Each
//! component materializes one host renderable, and reactive props are wired
//! into renderable attributes through watchers at mount time:
//!
//! ```text
//! compose() → component tree → mount() → host outputs + prop watchers
//! ```
//!
//! After mount, all mutation is driven by the reactive layer re-firing
//! watchers - the tree shape never changes and nothing diffs or re-mounts.
//! The logical tree is an ownership hierarchy only: every descendant's
//! output renders directly under the mount root's output.
//!
//! ## Modules
//!
//! - [`types`] - Core types (`Rgba`, `Attr`)
//! - [`host`] - Host platform boundary (`SceneNode`, `Transform`)
//! - [`tree`] - Node arena, compose/mount/unmount lifecycle
//! - [`bind`] - Direct-copy and merge-copy attribute binders
//! - [`primitives`] - `group`, `sprite`, `label` components

pub mod bind;
pub mod host;
pub mod primitives;
pub mod tree;
pub mod types;

// Re-export commonly used items
pub use types::{Attr, Rgba};

pub use host::{NodeKind, SceneNode, Transform};

pub use tree::{
    NodeId, allocated_count, compose, create_node, mount, mount_root, release_tree, reset_nodes,
    unmount,
};

pub use bind::{bind_attr, bind_attr_merge};

pub use primitives::{GroupProps, LabelProps, PropValue, SpriteProps, group, label, sprite};
