//! # glint-signals
//!
//! Fine-grained reactive primitives for single-threaded applications.
//!
//! ## Model
//!
//! Everything is push-based and fully synchronous: a write to a reactive
//! source runs every subscribed effect before the write returns, and a
//! derived value that re-runs cascades into its own subscribers depth-first
//! on the same call stack. There is no scheduler, no batching, and no tick.
//!
//! Dependency discovery is automatic. While an effect evaluates, any source
//! it reads registers that effect in its subscriber set. Reads outside an
//! evaluating effect register nothing.
//!
//! ## Primitives
//!
//! - [`signal`] - a single observable cell with value-equality write
//!   suppression
//! - [`reactive`] - a whole-object observable with one shared subscriber set
//!   (a write to any field invalidates every reader of the object)
//! - [`derived`] - an eagerly recomputed value derived from other sources
//! - [`effect`] - a tracked side effect with a stop handle
//! - [`watch`] - a producer/callback pair that re-runs per dependency change

mod derived;
mod effect;
mod reactive;
mod runtime;
mod signal;

pub use derived::{Derived, derived};
pub use effect::{effect, watch};
pub use reactive::{Reactive, reactive};
pub use signal::{Signal, signal};
