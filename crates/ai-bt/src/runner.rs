use ai_tools::{TraceEvent, TraceSink};

use crate::{Status, Tree};

/// Ticks a tree once per call and owns its debug output.
///
/// The runner never resets the tree on its own: a finished Repeater stays finished until
/// [`reset`](Self::reset) is called.
pub struct TreeRunner<C> {
    tree: Tree<C>,
    debug: bool,
    ticks: u64,
    last: Option<Status>,
    trace: Option<Box<dyn TraceSink>>,
}

impl<C> TreeRunner<C> {
    pub fn new(tree: Tree<C>) -> Self {
        Self {
            tree,
            debug: false,
            ticks: 0,
            last: None,
            trace: None,
        }
    }

    /// A runner with nothing to run. Every tick fails until a tree is set.
    pub fn empty() -> Self {
        Self::new(Tree::new())
    }

    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Mirror debug records into `sink` as `bt.tick` / `bt.missing_root` events.
    pub fn with_trace_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.trace = Some(Box::new(sink));
        self
    }

    pub fn set_tree(&mut self, tree: Tree<C>) {
        self.tree = tree;
    }

    pub fn tree(&self) -> &Tree<C> {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut Tree<C> {
        &mut self.tree
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn last_status(&self) -> Option<Status> {
        self.last
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick(&mut self, ctx: &mut C) -> Status {
        let tick = self.ticks;
        self.ticks = self.ticks.wrapping_add(1);

        let Some(root) = self.tree.root() else {
            tracing::warn!(tick, "behavior tree has no root node");
            self.emit(TraceEvent::new(tick, "bt.missing_root"));
            self.last = Some(Status::Failure);
            return Status::Failure;
        };

        let status = self.tree.evaluate_node(root, ctx);
        self.last = Some(status);

        if self.debug {
            tracing::debug!(tick, ?status, root = self.tree.name(root), "behavior tree tick");
            self.emit(
                TraceEvent::new(tick, "bt.tick")
                    .with_a(tick)
                    .with_b(status.code()),
            );
        }

        status
    }

    pub fn reset(&mut self) {
        self.tree.reset();
        self.last = None;
    }

    fn emit(&mut self, event: TraceEvent) {
        if let Some(sink) = self.trace.as_mut() {
            sink.emit(event);
        }
    }
}
