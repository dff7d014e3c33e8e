use std::fmt;

use crate::composite::{self, CompositeKind, Flow, ParallelTally};
use crate::{Composite, Decorator, Node, NodeId, NodeKind, Status};

/// Arena-owned behavior tree.
///
/// Every node lives in one `Vec` and refers to its children by [`NodeId`]. The tree is the
/// single owner of all nodes; its shape is fixed once built, while stateful nodes (waits,
/// repeaters) mutate in place during evaluation.
pub struct Tree<C> {
    nodes: Vec<Node<C>>,
    root: Option<NodeId>,
}

impl<C> Default for Tree<C> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<C> fmt::Debug for Tree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("root", &self.root)
            .field("nodes", &self.nodes)
            .finish()
    }
}

impl<C> Tree<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<C>> {
        self.nodes.get(id.index())
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(Node::name)
    }

    /// Children of a composite, or the single child of a decorator.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id).map(Node::kind) {
            Some(NodeKind::Composite(c)) => c.children(),
            Some(NodeKind::Decorator(d)) => d.child.as_slice(),
            _ => &[],
        }
    }

    /// Depth-first lookup of the first node with the given name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            if self.name(id) == Some(name) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }

    pub(crate) fn push(&mut self, node: Node<C>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Append `child` to a composite or fill a decorator's slot. Returns false for leaves.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) -> bool {
        match self.nodes.get_mut(parent.index()).map(|n| &mut n.kind) {
            Some(NodeKind::Composite(c)) => {
                c.push(child);
                true
            }
            Some(NodeKind::Decorator(d)) => {
                d.child = Some(child);
                true
            }
            _ => false,
        }
    }

    /// Evaluate from the root. A tree without a root fails.
    pub fn evaluate(&mut self, ctx: &mut C) -> Status {
        match self.root {
            Some(root) => self.evaluate_node(root, ctx),
            None => Status::Failure,
        }
    }

    pub fn evaluate_node(&mut self, id: NodeId, ctx: &mut C) -> Status {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return Status::Failure;
        };

        match node.kind {
            NodeKind::Leaf(ref mut leaf) => leaf.evaluate(ctx),
            NodeKind::Composite(Composite { kind, .. }) => self.evaluate_composite(id, kind, ctx),
            NodeKind::Decorator(Decorator { child, .. }) => {
                self.evaluate_decorator(id, child, ctx)
            }
        }
    }

    fn child_at(&self, id: NodeId, i: usize) -> Option<NodeId> {
        match &self.nodes.get(id.index())?.kind {
            NodeKind::Composite(c) => c.children.get(i).copied(),
            _ => None,
        }
    }

    fn evaluate_composite(&mut self, id: NodeId, kind: CompositeKind, ctx: &mut C) -> Status {
        let step = match kind {
            CompositeKind::Selector => composite::selector_step,
            CompositeKind::Sequence => composite::sequence_step,
            CompositeKind::Parallel { required_successes } => {
                let mut tally = ParallelTally::default();
                let mut i = 0;
                while let Some(child) = self.child_at(id, i) {
                    tally.record(self.evaluate_node(child, ctx));
                    i += 1;
                }
                return tally.resolve(required_successes);
            }
        };

        let mut i = 0;
        while let Some(child) = self.child_at(id, i) {
            if let Flow::Return(status) = step(self.evaluate_node(child, ctx)) {
                return status;
            }
            i += 1;
        }

        // Every child took the "keep going" edge.
        match kind {
            CompositeKind::Sequence => Status::Success,
            _ => Status::Failure,
        }
    }

    fn evaluate_decorator(&mut self, id: NodeId, child: Option<NodeId>, ctx: &mut C) -> Status {
        let Some(child) = child else {
            return Status::Failure;
        };

        if self.decorator_mut(id).is_some_and(|d| d.kind.is_exhausted()) {
            return Status::Success;
        }

        let status = self.evaluate_node(child, ctx);
        match self.decorator_mut(id) {
            Some(d) => d.kind.apply(status),
            None => Status::Failure,
        }
    }

    fn decorator_mut(&mut self, id: NodeId) -> Option<&mut Decorator> {
        match &mut self.nodes.get_mut(id.index())?.kind {
            NodeKind::Decorator(d) => Some(d),
            _ => None,
        }
    }

    /// Reset every node reachable from the root.
    pub fn reset(&mut self) {
        if let Some(root) = self.root {
            self.reset_node(root);
        }
    }

    /// Clear internal state (wait flags, repeat counters) of `id` and everything below it.
    pub fn reset_node(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return;
        };

        match &mut node.kind {
            NodeKind::Leaf(leaf) => leaf.reset(),
            NodeKind::Decorator(d) => {
                d.kind.reset();
                if let Some(child) = d.child {
                    self.reset_node(child);
                }
            }
            NodeKind::Composite(_) => {
                let mut i = 0;
                while let Some(child) = self.child_at(id, i) {
                    self.reset_node(child);
                    i += 1;
                }
            }
        }
    }
}
