//! Group primitive - invisible container node.
//!
//! The structural building block: it exists to own a child chain and to
//! carry position, visibility, and opacity.

use crate::bind::bind_attr;
use crate::host::{NodeKind, SceneNode};
use crate::tree::{NodeId, create_node};

use super::types::GroupProps;

/// Create a group container component.
///
/// Children are linked by [`compose`](crate::tree::compose); the component
/// itself does not consume them.
pub fn group(props: GroupProps, _children: &[NodeId]) -> NodeId {
    create_node(
        move || {
            let node = SceneNode::new(NodeKind::Group);

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
                bind_attr(props.visible.clone(), move |v| n.set_visible(v));
            }
            {
                let n = node.clone();
                bind_attr(props.opacity.clone(), move |v| n.set_opacity(v));
            }

            node
        },
        || {},
    )
}
