//! Fluent tree assembly.
//!
//! ```
//! use ai_bt::{Status, TreeBuilder};
//!
//! struct Door {
//!     locked: bool,
//!     opened: bool,
//! }
//!
//! let mut tree = TreeBuilder::new()
//!     .selector("Root")
//!         .sequence("OpenDoor")
//!             .inverter("NotLocked")
//!                 .condition("IsLocked", |d: &Door| d.locked)
//!             .perform("Open", |d: &mut Door| d.opened = true)
//!         .end()
//!         .action("GiveUp", |_: &mut Door| Status::Failure)
//!     .end()
//!     .build();
//!
//! let mut door = Door { locked: false, opened: false };
//! assert_eq!(tree.evaluate(&mut door), Status::Success);
//! assert!(door.opened);
//! ```

use std::borrow::Cow;

use ai_core::TimeSource;

use crate::{
    Composite, CompositeKind, Decorator, DecoratorKind, Leaf, Node, NodeId, NodeKind, Status,
    Tree, Wait,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Open {
    /// Stays open until `end()`.
    Composite(NodeId),
    /// Closes itself as soon as its child is added.
    Decorator(NodeId),
}

/// Builds a [`Tree`] by keeping a stack of open nodes.
///
/// Composites (`selector`, `sequence`, `parallel`) are pushed when opened and popped by
/// [`end`](Self::end). Every other node attaches to whatever is open on top of the stack, or
/// becomes the root when nothing is open. Decorators hold a one-child slot: the next node added
/// fills it and closes the decorator.
///
/// Nesting is not validated. A missing `end()` leaves that composite open, which is harmless
/// once `build()` is called; the tree stays rooted at its outermost node. Adding a second
/// top-level node replaces the root.
pub struct TreeBuilder<C> {
    tree: Tree<C>,
    open: Vec<Open>,
}

impl<C> Default for TreeBuilder<C> {
    fn default() -> Self {
        Self {
            tree: Tree::new(),
            open: Vec::new(),
        }
    }
}

impl<C> TreeBuilder<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selector(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.open_composite(name, CompositeKind::Selector)
    }

    pub fn sequence(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.open_composite(name, CompositeKind::Sequence)
    }

    pub fn parallel(self, name: impl Into<Cow<'static, str>>, required_successes: usize) -> Self {
        self.open_composite(name, CompositeKind::Parallel { required_successes })
    }

    /// Close the innermost open node. Does nothing when nothing is open.
    pub fn end(mut self) -> Self {
        self.open.pop();
        self
    }

    pub fn condition(
        self,
        name: impl Into<Cow<'static, str>>,
        cond: impl Fn(&C) -> bool + 'static,
    ) -> Self {
        self.leaf(name, Leaf::Condition(Box::new(cond)))
    }

    pub fn action(
        self,
        name: impl Into<Cow<'static, str>>,
        action: impl FnMut(&mut C) -> Status + 'static,
    ) -> Self {
        self.leaf(name, Leaf::Action(Box::new(action)))
    }

    /// Unconditional side effect; always reports Success.
    pub fn perform(
        self,
        name: impl Into<Cow<'static, str>>,
        action: impl FnMut(&mut C) + 'static,
    ) -> Self {
        self.leaf(name, Leaf::SimpleAction(Box::new(action)))
    }

    /// Wait `seconds` as measured by `clock`.
    pub fn wait(
        self,
        name: impl Into<Cow<'static, str>>,
        seconds: f64,
        clock: impl Fn(&C) -> f64 + 'static,
    ) -> Self {
        self.leaf(name, Leaf::Wait(Wait::new(seconds, clock)))
    }

    /// Wait `seconds` on the context's own clock.
    pub fn wait_for(self, name: impl Into<Cow<'static, str>>, seconds: f64) -> Self
    where
        C: TimeSource + 'static,
    {
        self.wait(name, seconds, |ctx: &C| ctx.now())
    }

    pub fn inverter(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.open_decorator(name, DecoratorKind::Inverter)
    }

    pub fn succeeder(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.open_decorator(name, DecoratorKind::Succeeder)
    }

    pub fn failer(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.open_decorator(name, DecoratorKind::Failer)
    }

    pub fn repeater(self, name: impl Into<Cow<'static, str>>, count: u32) -> Self {
        self.open_decorator(name, DecoratorKind::repeater(count))
    }

    pub fn repeat_until_fail(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.open_decorator(name, DecoratorKind::RepeatUntilFail)
    }

    /// Number of nodes still open.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn build(self) -> Tree<C> {
        self.tree
    }

    fn open_composite(mut self, name: impl Into<Cow<'static, str>>, kind: CompositeKind) -> Self {
        let id = self.add(Node::new(name, NodeKind::Composite(Composite::new(kind))));
        self.open.push(Open::Composite(id));
        self
    }

    fn open_decorator(mut self, name: impl Into<Cow<'static, str>>, kind: DecoratorKind) -> Self {
        let id = self.add(Node::new(name, NodeKind::Decorator(Decorator::new(kind))));
        self.open.push(Open::Decorator(id));
        self
    }

    fn leaf(mut self, name: impl Into<Cow<'static, str>>, leaf: Leaf<C>) -> Self {
        self.add(Node::new(name, NodeKind::Leaf(leaf)));
        self
    }

    fn add(&mut self, node: Node<C>) -> NodeId {
        let id = self.tree.push(node);
        match self.open.last().copied() {
            Some(Open::Composite(parent)) => {
                self.tree.attach(parent, id);
            }
            Some(Open::Decorator(parent)) => {
                self.tree.attach(parent, id);
                self.open.pop();
            }
            None => self.tree.set_root(id),
        }
        id
    }
}
