use ai_bt::{Tree, TreeRunner};
use ai_core::TickContext;
use ai_nav::{Navigator, Vec3};
use ai_tools::{TraceEvent, TraceSink};

use crate::{
    GameStateSink, GuardConfig, GuardContext, GuardMemory, GuardState, Perception, Result,
};

/// One guard: a pursuit tree plus the context it runs against.
///
/// Call [`evaluate`](Self::evaluate) once per frame. The returned state reflects the decision
/// taken during that frame; the tree's own status is not exposed.
pub struct GuardController<P, N, S> {
    runner: TreeRunner<GuardContext<P, N, S>>,
    ctx: GuardContext<P, N, S>,
    trace: Option<Box<dyn TraceSink>>,
}

impl<P, N, S> GuardController<P, N, S>
where
    P: Perception + 'static,
    N: Navigator + 'static,
    S: GameStateSink + 'static,
{
    /// Validates `config` and builds the pursuit tree. The guard starts in Patrol, heading for
    /// the first waypoint of `route`.
    pub fn new(
        config: GuardConfig,
        route: Vec<Vec3>,
        perception: P,
        navigator: N,
        sink: S,
    ) -> Result<Self> {
        config.validate()?;
        let ctx = GuardContext::new(0, config, route, perception, navigator, sink);
        Ok(Self {
            runner: TreeRunner::new(GuardContext::pursuit_tree()),
            ctx,
            trace: None,
        })
    }

    /// Agent id used to derive this guard's random streams. Defaults to 0.
    pub fn with_agent_id(mut self, agent: u64) -> Self {
        self.ctx.agent = agent;
        self
    }

    /// Record `guard.transition` (a = from, b = to) and `guard.caught` events into `sink`.
    pub fn with_trace_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.trace = Some(Box::new(sink));
        self
    }

    pub fn evaluate(&mut self, frame: &TickContext) -> GuardState {
        let before = self.ctx.memory.state;
        let caught_before = self.ctx.memory.caught_reports;

        self.ctx.begin_frame(frame);
        self.runner.tick(&mut self.ctx);

        let after = self.ctx.memory.state;
        if after != before {
            self.emit(
                TraceEvent::new(frame.tick, "guard.transition")
                    .with_a(before.code())
                    .with_b(after.code()),
            );
        }
        if self.ctx.memory.caught_reports != caught_before {
            self.emit(TraceEvent::new(frame.tick, "guard.caught").with_a(after.code()));
        }
        after
    }

    /// Toggle per-tick tree diagnostics.
    pub fn set_debug_enabled(&mut self, enabled: bool) {
        self.runner.set_debug(enabled);
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.runner.is_debug()
    }

    /// Forget the pursuit and start patrolling again from the current waypoint.
    pub fn reset(&mut self) {
        let patrol_index = self.ctx.memory.patrol_index;
        let clock = self.ctx.memory.clock;
        self.ctx.memory = GuardMemory {
            patrol_index,
            clock,
            speed_multiplier: self.ctx.config.patrol_speed_multiplier,
            ..GuardMemory::default()
        };
        self.runner.reset();
    }

    pub fn state(&self) -> GuardState {
        self.ctx.memory.state
    }

    pub fn memory(&self) -> &GuardMemory {
        &self.ctx.memory
    }

    pub fn config(&self) -> &GuardConfig {
        &self.ctx.config
    }

    pub fn route(&self) -> &[Vec3] {
        &self.ctx.route
    }

    pub fn context(&self) -> &GuardContext<P, N, S> {
        &self.ctx
    }

    pub fn tree(&self) -> &Tree<GuardContext<P, N, S>> {
        self.runner.tree()
    }

    pub fn perception(&self) -> &P {
        &self.ctx.perception
    }

    pub fn perception_mut(&mut self) -> &mut P {
        &mut self.ctx.perception
    }

    pub fn navigator(&self) -> &N {
        &self.ctx.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.ctx.navigator
    }

    pub fn sink(&self) -> &S {
        &self.ctx.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.ctx.sink
    }

    fn emit(&mut self, event: TraceEvent) {
        if let Some(sink) = self.trace.as_mut() {
            sink.emit(event);
        }
    }
}
