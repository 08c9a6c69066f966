//! Scoreboard - a minimal tree driven entirely by signal writes.
//!
//! Mounts a group with two labels under a host container, then mutates the
//! signals feeding them. Nothing re-mounts: every change flows through the
//! watchers wired at mount time.
//!
//! Run with: `cargo run --example scoreboard`

use std::rc::Rc;

use glint_signals::{derived, signal};
use glint_ui::primitives::{GroupProps, LabelProps, PropValue, group, label};
use glint_ui::tree::{NodeId, compose, mount_root, release_tree};
use glint_ui::{Attr, NodeKind, Rgba, SceneNode};

fn main() {
    // Reactive state.
    let word = signal("crane".to_string());
    let score = signal(0u32);

    let score_derived = score.clone();
    let score_line = derived(move || format!("score: {}", score_derived.get()));

    // Pre-existing host container (normally provided by the platform).
    let host_root = SceneNode::new(NodeKind::Group);

    // Declare and mount the tree.
    let word_prop = word.clone();
    let score_prop = score_line.clone();
    let app = move |_: (), _: &[NodeId]| {
        let current = label(
            LabelProps {
                content: PropValue::Signal(word_prop.clone()),
                attrs: Some(PropValue::Static(Attr::BOLD)),
                color: Some(PropValue::Static(Rgba::WHITE)),
                y: Some(PropValue::Static(0.0)),
                ..Default::default()
            },
            &[],
        );
        let tally = label(
            LabelProps {
                content: PropValue::Getter(Rc::new(move || score_prop.get())),
                color: Some(PropValue::Static(Rgba::YELLOW)),
                y: Some(PropValue::Static(1.0)),
                ..Default::default()
            },
            &[],
        );
        compose(group, GroupProps::default(), vec![current, tally])
    };

    let root = match mount_root(app, &host_root) {
        Some(id) => id,
        None => return,
    };

    println!("mounted: {:?}", host_root);

    // Drive the app by writing state - the labels follow synchronously.
    for (guess, points) in [("crate", 10u32), ("crisp", 10), ("crown", 30)] {
        word.set(guess.to_string());
        score.update(|s| s + points);
        println!("word={guess:<6} {}", score_line.peek());
    }

    release_tree(root);
    println!("released");
}
