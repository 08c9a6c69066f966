//! Primitive types - props and prop values.
//!
//! Props support static values, signals, and getters for reactivity. The
//! key is to pass props directly - extracting a value before binding breaks
//! the reactive connection.

use std::rc::Rc;

use glint_signals::Signal;

use crate::host::Transform;
use crate::types::{Attr, Rgba};

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Binding preserves the reactive connection: a signal or getter prop keeps
/// driving the bound attribute after the component mounts.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (tracked each time it is evaluated).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

// =============================================================================
// Group Props
// =============================================================================

/// Properties for the group container.
#[derive(Clone, Default)]
pub struct GroupProps {
    /// Horizontal position.
    pub x: Option<PropValue<f32>>,

    /// Vertical position.
    pub y: Option<PropValue<f32>>,

    /// Whether the node is visible (host default: true).
    pub visible: Option<PropValue<bool>>,

    /// Opacity, 0.0-1.0 (host default: 1.0).
    pub opacity: Option<PropValue<f32>>,
}

// =============================================================================
// Sprite Props
// =============================================================================

/// Properties for the sprite component.
///
/// # Example
///
/// ```ignore
/// use glint_signals::signal;
/// use glint_ui::primitives::{sprite, SpriteProps};
///
/// let x = signal(10.0f32);
///
/// let node = sprite(SpriteProps {
///     x: Some(x.clone().into()),
///     ..Default::default()
/// }, &[]);
///
/// // Update position - the mounted output follows automatically.
/// x.set(42.0);
/// ```
#[derive(Clone, Default)]
pub struct SpriteProps {
    /// Horizontal position.
    pub x: Option<PropValue<f32>>,

    /// Vertical position.
    pub y: Option<PropValue<f32>>,

    /// Tint color.
    pub color: Option<PropValue<Rgba>>,

    /// Opacity, 0.0-1.0.
    pub opacity: Option<PropValue<f32>>,

    /// Whether the node is visible.
    pub visible: Option<PropValue<bool>>,

    /// Structured transform, merged field-by-field into the output's stable
    /// transform object.
    pub transform: Option<PropValue<Transform>>,
}

// =============================================================================
// Label Props
// =============================================================================

/// Properties for the label component.
#[derive(Clone, Default)]
pub struct LabelProps {
    /// The text to display.
    pub content: PropValue<String>,

    /// Text attributes (bold, italic, etc.).
    pub attrs: Option<PropValue<Attr>>,

    /// Text color.
    pub color: Option<PropValue<Rgba>>,

    /// Horizontal position.
    pub x: Option<PropValue<f32>>,

    /// Vertical position.
    pub y: Option<PropValue<f32>>,

    /// Whether the node is visible.
    pub visible: Option<PropValue<bool>>,
}
