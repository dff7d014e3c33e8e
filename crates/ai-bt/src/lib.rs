//! Behavior tree evaluation core.
//!
//! Trees are assembled once with [`TreeBuilder`] and evaluated once per frame through a
//! [`TreeRunner`]. Every node returns a [`Status`]; `Running` is an ordinary return value that
//! asks the caller to tick again next frame, so nothing ever blocks.
//!
//! - Nodes live in an arena owned by [`Tree`] and point at each other by [`NodeId`].
//! - Leaves see the caller's context explicitly: conditions get `&C`, actions get `&mut C`.
//! - Composites: Selector, Sequence, Parallel. Decorators: Inverter, Succeeder, Failer,
//!   Repeater, RepeatUntilFail.
//!
//! Evaluation is single-threaded and deterministic: children are visited in insertion order,
//! with short-circuiting for Selector and Sequence and none for Parallel.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod builder;
pub mod composite;
pub mod decorator;
pub mod node;
pub mod runner;
pub mod status;
pub mod tree;

pub use builder::TreeBuilder;
pub use composite::{Composite, CompositeKind};
pub use decorator::{Decorator, DecoratorKind};
pub use node::{Leaf, Node, NodeId, NodeKind, Wait};
pub use runner::TreeRunner;
pub use status::Status;
pub use tree::Tree;
