//! Composite nodes: ordered children whose statuses fold into one.
//!
//! Child order is evaluation order. The fold rules live here as plain functions over
//! statuses; walking the arena is [`Tree`](crate::Tree)'s job.

use crate::{NodeId, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    /// Try children in order; the first non-failure wins.
    Selector,
    /// Run children in order; the first non-success aborts.
    Sequence,
    /// Tick every child, then compare the tallies against `required_successes`.
    Parallel { required_successes: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    pub(crate) kind: CompositeKind,
    pub(crate) children: Vec<NodeId>,
}

impl Composite {
    pub fn new(kind: CompositeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> CompositeKind {
        self.kind
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn push(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

/// What a short-circuiting composite does after one child reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Next,
    Return(Status),
}

/// Selector: `Failure` moves on, anything else is returned as-is.
pub(crate) fn selector_step(child: Status) -> Flow {
    match child {
        Status::Failure => Flow::Next,
        status => Flow::Return(status),
    }
}

/// Sequence: `Success` moves on, anything else is returned as-is.
pub(crate) fn sequence_step(child: Status) -> Flow {
    match child {
        Status::Success => Flow::Next,
        status => Flow::Return(status),
    }
}

/// Per-tick counts for a parallel node. Rebuilt from scratch on every tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParallelTally {
    pub successes: usize,
    pub failures: usize,
    pub children: usize,
}

impl ParallelTally {
    pub fn record(&mut self, status: Status) {
        self.children += 1;
        match status {
            Status::Success => self.successes += 1,
            Status::Failure => self.failures += 1,
            Status::Running => {}
        }
    }

    /// Success once enough children succeeded, Failure once too many failed for that to
    /// still be possible, Running otherwise.
    ///
    /// The failure bound is signed: asking for more successes than there are children makes
    /// the node fail as soon as nothing has succeeded.
    pub fn resolve(self, required_successes: usize) -> Status {
        if self.successes >= required_successes {
            return Status::Success;
        }

        let tolerated = self.children as i64 - required_successes as i64;
        if self.failures as i64 > tolerated {
            return Status::Failure;
        }

        Status::Running
    }
}
