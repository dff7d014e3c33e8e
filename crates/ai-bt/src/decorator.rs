//! Decorator nodes.
//!
//! A decorator wraps exactly one child and rewrites its status. Only [`Repeater`] keeps state
//! across ticks.
//!
//! [`Repeater`]: DecoratorKind::Repeater

use crate::{NodeId, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoratorKind {
    /// Success and Failure swap; Running passes through.
    Inverter,
    /// Evaluates the child for its side effects, then reports Success.
    Succeeder,
    /// Evaluates the child for its side effects, then reports Failure.
    Failer,
    /// Evaluates the child once per tick and reports Running for `count` ticks, then Success
    /// until reset.
    Repeater { count: u32, current: u32 },
    /// Running until the child fails, then Success.
    RepeatUntilFail,
}

impl DecoratorKind {
    pub fn repeater(count: u32) -> Self {
        DecoratorKind::Repeater { count, current: 0 }
    }

    /// True when the child must not be evaluated this tick.
    pub(crate) fn is_exhausted(&self) -> bool {
        matches!(self, DecoratorKind::Repeater { count, current } if current >= count)
    }

    pub(crate) fn apply(&mut self, child: Status) -> Status {
        match self {
            DecoratorKind::Inverter => child.invert(),
            DecoratorKind::Succeeder => Status::Success,
            DecoratorKind::Failer => Status::Failure,
            DecoratorKind::Repeater { current, .. } => {
                *current = current.saturating_add(1);
                Status::Running
            }
            DecoratorKind::RepeatUntilFail => match child {
                Status::Failure => Status::Success,
                _ => Status::Running,
            },
        }
    }

    pub(crate) fn reset(&mut self) {
        if let DecoratorKind::Repeater { current, .. } = self {
            *current = 0;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    pub(crate) kind: DecoratorKind,
    pub(crate) child: Option<NodeId>,
}

impl Decorator {
    pub fn new(kind: DecoratorKind) -> Self {
        Self { kind, child: None }
    }

    pub fn kind(&self) -> DecoratorKind {
        self.kind
    }

    /// `None` only for a decorator left open by an unfinished build; such a node fails.
    pub fn child(&self) -> Option<NodeId> {
        self.child
    }
}
