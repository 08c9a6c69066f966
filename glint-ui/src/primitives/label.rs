//! Label primitive - text display node.
//!
//! # Example
//!
//! ```ignore
//! use glint_signals::signal;
//! use glint_ui::primitives::{label, LabelProps, PropValue};
//! use std::rc::Rc;
//!
//! let score = signal(0u32);
//! let score_text = score.clone();
//! label(LabelProps {
//!     content: PropValue::Getter(Rc::new(move || format!("Score: {}", score_text.get()))),
//!     ..Default::default()
//! }, &[]);
//!
//! // Update score - the mounted text follows automatically.
//! score.set(42);
//! ```

use crate::bind::bind_attr;
use crate::host::{NodeKind, SceneNode};
use crate::tree::{NodeId, create_node};

use super::types::LabelProps;

/// Create a label component.
///
/// `content` is the one required prop; everything else is optional and
/// unbound when absent.
pub fn label(props: LabelProps, _children: &[NodeId]) -> NodeId {
    create_node(
        move || {
            let node = SceneNode::new(NodeKind::Label);

            {
                let n = node.clone();
                bind_attr(Some(props.content.clone()), move |v| n.set_text(v));
            }
            {
                let n = node.clone();
                bind_attr(props.attrs.clone(), move |v| n.set_attrs(v));
            }
            {
                let n = node.clone();
                bind_attr(props.color.clone(), move |v| n.set_color(v));
            }
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

            node
        },
        || {},
    )
}
