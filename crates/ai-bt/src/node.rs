use std::borrow::Cow;
use std::fmt;

use crate::composite::Composite;
use crate::decorator::Decorator;
use crate::Status;

/// Index of a node inside the arena of the [`Tree`](crate::Tree) that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub type ConditionFn<C> = Box<dyn Fn(&C) -> bool>;
pub type ActionFn<C> = Box<dyn FnMut(&mut C) -> Status>;
pub type SimpleActionFn<C> = Box<dyn FnMut(&mut C)>;
pub type ClockFn<C> = Box<dyn Fn(&C) -> f64>;

/// One slot of the arena. The name is for diagnostics only and need not be unique.
pub struct Node<C> {
    pub(crate) name: Cow<'static, str>,
    pub(crate) kind: NodeKind<C>,
}

impl<C> Node<C> {
    pub fn new(name: impl Into<Cow<'static, str>>, kind: NodeKind<C>) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind<C> {
        &self.kind
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

pub enum NodeKind<C> {
    Composite(Composite),
    Decorator(Decorator),
    Leaf(Leaf<C>),
}

impl<C> fmt::Debug for NodeKind<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Composite(c) => f.debug_tuple("Composite").field(c).finish(),
            NodeKind::Decorator(d) => f.debug_tuple("Decorator").field(d).finish(),
            NodeKind::Leaf(l) => f.debug_tuple("Leaf").field(l).finish(),
        }
    }
}

/// Leaves are the only nodes that touch the context.
///
/// Conditions only get a shared reference: they observe, actions mutate.
pub enum Leaf<C> {
    Condition(ConditionFn<C>),
    Action(ActionFn<C>),
    /// Runs a side effect and always succeeds.
    SimpleAction(SimpleActionFn<C>),
    Wait(Wait<C>),
}

impl<C> Leaf<C> {
    pub(crate) fn evaluate(&mut self, ctx: &mut C) -> Status {
        match self {
            Leaf::Condition(cond) => Status::from_bool(cond(&*ctx)),
            Leaf::Action(action) => action(ctx),
            Leaf::SimpleAction(action) => {
                action(ctx);
                Status::Success
            }
            Leaf::Wait(wait) => wait.evaluate(ctx),
        }
    }

    pub(crate) fn reset(&mut self) {
        if let Leaf::Wait(wait) = self {
            wait.reset();
        }
    }
}

impl<C> fmt::Debug for Leaf<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Condition(_) => f.write_str("Condition"),
            Leaf::Action(_) => f.write_str("Action"),
            Leaf::SimpleAction(_) => f.write_str("SimpleAction"),
            Leaf::Wait(w) => w.fmt(f),
        }
    }
}

/// Time-gated leaf.
///
/// The first evaluation stamps a start time from `clock`; the node reports `Running` until
/// `duration` seconds have elapsed on that clock, then `Success`, after which the next
/// evaluation starts a fresh wait.
pub struct Wait<C> {
    duration: f64,
    clock: ClockFn<C>,
    started_at: f64,
    waiting: bool,
}

impl<C> Wait<C> {
    pub fn new(duration: f64, clock: impl Fn(&C) -> f64 + 'static) -> Self {
        Self {
            duration,
            clock: Box::new(clock),
            started_at: 0.0,
            waiting: false,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    fn evaluate(&mut self, ctx: &C) -> Status {
        let now = (self.clock)(ctx);
        if !self.waiting {
            self.started_at = now;
            self.waiting = true;
        }

        if now - self.started_at < self.duration {
            return Status::Running;
        }

        self.waiting = false;
        Status::Success
    }

    fn reset(&mut self) {
        self.waiting = false;
    }
}

impl<C> fmt::Debug for Wait<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wait")
            .field("duration", &self.duration)
            .field("waiting", &self.waiting)
            .finish()
    }
}
