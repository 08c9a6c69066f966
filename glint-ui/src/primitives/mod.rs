//! UI primitives - component building blocks.
//!
//! - [`group`] - invisible container carrying position and visibility
//! - [`sprite`] - positioned, tinted visual node
//! - [`label`] - text display node
//!
//! # Reactivity
//!
//! Props can be:
//! - Static values: `x: Some(8.0.into())`
//! - Signals: `x: Some(my_signal.into())` (stays connected!)
//! - Getters: `x: Some(PropValue::Getter(Rc::new(|| compute_x())))`
//!
//! Each component's setup runs at mount time, allocates exactly one host
//! output node, and wires one watcher per reactive prop. An absent prop
//! creates no watcher and writes no default - the host's own defaults
//! stand.

mod group;
mod label;
mod sprite;
mod types;

pub use group::group;
pub use label::label;
pub use sprite::sprite;
pub use types::{GroupProps, LabelProps, PropValue, SpriteProps};
