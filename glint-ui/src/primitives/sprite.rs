//! Sprite primitive - positioned, tinted visual node.
//!
//! # Reactivity
//!
//! Props bind directly to output attributes. Position, color, opacity, and
//! visibility use the direct-copy binder. The transform prop uses the
//! merge-copy binder: the output's transform object is a stable reference
//! held by downstream host code, so updates are copied into it field by
//! field rather than replacing it.

use crate::bind::{bind_attr, bind_attr_merge};
use crate::host::{NodeKind, SceneNode, Transform};
use crate::tree::{NodeId, create_node};

use super::types::SpriteProps;

/// Create a sprite component.
pub fn sprite(props: SpriteProps, _children: &[NodeId]) -> NodeId {
    create_node(
        move || {
            let node = SceneNode::new(NodeKind::Sprite);

            {
                let n = node.clone();
                bind_attr(props.x.clone(), move |v| n.set_x(v));
            }
            {
                let n = node.clone();
                bind_attr(props.y.clone(), move |v| n.set_y(v));
            }
            {
                let n = node.clone();
                bind_attr(props.color.clone(), move |v| n.set_color(v));
            }
            {
                let n = node.clone();
                bind_attr(props.opacity.clone(), move |v| n.set_opacity(v));
            }
            {
                let n = node.clone();
                bind_attr(props.visible.clone(), move |v| n.set_visible(v));
            }
            {
                let n = node.clone();
                bind_attr_merge(props.transform.clone(), move |t: &Transform| {
                    n.transform().borrow_mut().merge_from(t);
                });
            }

            node
        },
        || {},
    )
}
