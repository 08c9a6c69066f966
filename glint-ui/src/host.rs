//! Host platform boundary - renderable scene nodes.
//!
//! The host platform owns rendering. This module models its node contract:
//! an opaque mutable object with settable attributes (position, color, text,
//! opacity, visibility) and a parent-assignment slot. The runtime only ever
//! writes attributes and sets or clears the parent slot - it never inspects
//! anything else.
//!
//! `SceneNode` is a cheap cloneable handle; clones address the same
//! underlying node. Reference identity (`ptr_eq`) is what the tree runtime
//! uses for its shared-output detach guard.

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::{Attr, Rgba};

// =============================================================================
// Node Kind
// =============================================================================

/// What a renderable node displays. Used for logs and debugging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Group,
    Sprite,
    Label,
}

// =============================================================================
// Transform
// =============================================================================

/// A structured renderable attribute.
///
/// Downstream host code holds a stable reference to a node's transform, so
/// updates must be merged into the existing object rather than replacing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
        }
    }
}

impl Transform {
    /// Copy every field from `other` into self, in place.
    pub fn merge_from(&mut self, other: &Transform) {
        self.x = other.x;
        self.y = other.y;
        self.scale_x = other.scale_x;
        self.scale_y = other.scale_y;
        self.rotation = other.rotation;
    }
}

// =============================================================================
// Scene Node
// =============================================================================

/// Handle to a host renderable node.
#[derive(Clone)]
pub struct SceneNode {
    inner: Rc<RefCell<NodeState>>,
}

struct NodeState {
    kind: NodeKind,
    x: f32,
    y: f32,
    opacity: f32,
    visible: bool,
    color: Rgba,
    text: String,
    attrs: Attr,
    /// Stable handle - never replaced for the node's lifetime.
    transform: Rc<RefCell<Transform>>,
    parent: Option<SceneNode>,
}

impl SceneNode {
    /// Create a detached node with default attributes.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            inner: Rc::new(RefCell::new(NodeState {
                kind,
                x: 0.0,
                y: 0.0,
                opacity: 1.0,
                visible: true,
                color: Rgba::WHITE,
                text: String::new(),
                attrs: Attr::NONE,
                transform: Rc::new(RefCell::new(Transform::default())),
                parent: None,
            })),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.inner.borrow().kind
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    pub fn set_x(&self, x: f32) {
        self.inner.borrow_mut().x = x;
    }

    pub fn x(&self) -> f32 {
        self.inner.borrow().x
    }

    pub fn set_y(&self, y: f32) {
        self.inner.borrow_mut().y = y;
    }

    pub fn y(&self) -> f32 {
        self.inner.borrow().y
    }

    pub fn set_opacity(&self, opacity: f32) {
        self.inner.borrow_mut().opacity = opacity;
    }

    pub fn opacity(&self) -> f32 {
        self.inner.borrow().opacity
    }

    pub fn set_visible(&self, visible: bool) {
        self.inner.borrow_mut().visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().visible
    }

    pub fn set_color(&self, color: Rgba) {
        self.inner.borrow_mut().color = color;
    }

    pub fn color(&self) -> Rgba {
        self.inner.borrow().color
    }

    pub fn set_text(&self, text: String) {
        self.inner.borrow_mut().text = text;
    }

    pub fn text(&self) -> String {
        self.inner.borrow().text.clone()
    }

    pub fn set_attrs(&self, attrs: Attr) {
        self.inner.borrow_mut().attrs = attrs;
    }

    pub fn attrs(&self) -> Attr {
        self.inner.borrow().attrs
    }

    /// The node's structured transform attribute.
    ///
    /// Returns the stable handle; callers mutate it in place.
    pub fn transform(&self) -> Rc<RefCell<Transform>> {
        Rc::clone(&self.inner.borrow().transform)
    }

    // =========================================================================
    // Parent Slot
    // =========================================================================

    /// Assign or clear the rendering parent.
    pub fn set_parent(&self, parent: Option<&SceneNode>) {
        self.inner.borrow_mut().parent = parent.cloned();
    }

    /// The current rendering parent, if attached.
    pub fn parent(&self) -> Option<SceneNode> {
        self.inner.borrow().parent.clone()
    }

    // =========================================================================
    // Identity
    // =========================================================================

    /// Whether two handles address the same underlying node.
    pub fn ptr_eq(&self, other: &SceneNode) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for SceneNode {
    /// Reference identity: two handles are equal iff they address the same node.
    fn eq(&self, other: &SceneNode) -> bool {
        self.ptr_eq(other)
    }
}

impl std::fmt::Debug for SceneNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.borrow();
        f.debug_struct("SceneNode")
            .field("kind", &state.kind)
            .field("x", &state.x)
            .field("y", &state.y)
            .field("visible", &state.visible)
            .field("attached", &state.parent.is_some())
            .finish()
    }
}
