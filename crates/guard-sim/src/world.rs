use std::cell::RefCell;
use std::rc::Rc;

use ai::core::TickContext;
use ai::guard::{
    ConePerception, GameStateSink, GuardController, GuardError, GuardState, VisionCone,
};
use ai::nav::{DirectNavigator, Navigator, Vec3};
use ai::tools::{TraceEvent, TraceLog, TraceSink};
use serde::Serialize;

use crate::{Scenario, TargetScript};

/// Game-state sink that logs and counts.
#[derive(Debug, Default)]
pub struct LoggingSink {
    pub caught: u64,
    pub spotted: u64,
}

impl GameStateSink for LoggingSink {
    fn report_caught(&mut self) {
        self.caught += 1;
        tracing::info!(total = self.caught, "target caught");
    }

    fn report_spotted(&mut self) {
        self.spotted += 1;
        tracing::info!(total = self.spotted, "target spotted");
    }
}

/// Trace log shared between the guard and the world.
#[derive(Debug, Clone, Default)]
pub struct SharedTrace(Rc<RefCell<TraceLog>>);

impl SharedTrace {
    pub fn snapshot(&self) -> TraceLog {
        TraceLog {
            events: self.0.borrow().events.clone(),
        }
    }
}

impl TraceSink for SharedTrace {
    fn emit(&mut self, event: TraceEvent) {
        self.0.borrow_mut().push(event);
    }
}

#[derive(Debug, Clone)]
pub struct ScriptedTarget {
    script: TargetScript,
    position: Option<Vec3>,
    next: usize,
}

impl ScriptedTarget {
    pub fn new(script: TargetScript) -> Self {
        let position = script.path.first().copied();
        Self {
            script,
            position,
            next: 1,
        }
    }

    pub fn position(&self) -> Option<Vec3> {
        self.position
    }

    pub fn advance(&mut self, dt: f32) {
        let Some(position) = self.position else {
            return;
        };
        let len = self.script.path.len();
        if self.next >= len {
            if !self.script.looped || len == 0 {
                return;
            }
            self.next = 0;
        }

        let waypoint = self.script.path[self.next];
        let moved = position.move_towards(waypoint, self.script.speed * dt);
        if moved == waypoint {
            self.next += 1;
        }
        self.position = Some(moved);
    }
}

/// One frame of the simulation as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub tick: u64,
    pub state: GuardState,
    pub guard: Vec3,
    pub target: Option<Vec3>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub ticks: u64,
    pub patrol_ticks: u64,
    pub chase_ticks: u64,
    pub search_ticks: u64,
    pub return_ticks: u64,
    pub transitions: u64,
    pub caught: u64,
    pub spotted: u64,
}

impl Summary {
    fn record(&mut self, previous: Option<GuardState>, state: GuardState) {
        self.ticks += 1;
        match state {
            GuardState::Patrol => self.patrol_ticks += 1,
            GuardState::Chase => self.chase_ticks += 1,
            GuardState::Search => self.search_ticks += 1,
            GuardState::ReturnToPatrol => self.return_ticks += 1,
        }
        if previous.is_some_and(|p| p != state) {
            self.transitions += 1;
        }
    }
}

pub type SimGuard = GuardController<ConePerception, DirectNavigator, LoggingSink>;

/// A guard, its target, and the frame clock.
pub struct SimWorld {
    guard: SimGuard,
    target: ScriptedTarget,
    trace: SharedTrace,
    frame: TickContext,
    summary: Summary,
    last_state: Option<GuardState>,
}

impl SimWorld {
    pub fn new(scenario: &Scenario, seed: u64, dt: f32) -> Result<Self, GuardError> {
        let config = scenario.guard.clone();
        let cone = VisionCone::new(config.view_distance, config.view_angle);
        let navigator = DirectNavigator::new(
            scenario.guard_start,
            scenario.guard_speed,
            config.waypoint_reach_distance,
        );
        let trace = SharedTrace::default();
        let guard = GuardController::new(
            config,
            scenario.route.clone(),
            ConePerception::new(cone),
            navigator,
            LoggingSink::default(),
        )?
        .with_agent_id(1)
        .with_trace_sink(trace.clone());

        Ok(Self {
            guard,
            target: ScriptedTarget::new(scenario.target.clone()),
            trace,
            frame: TickContext::new(0, dt).with_seed(seed),
            summary: Summary::default(),
            last_state: None,
        })
    }

    pub fn set_debug(&mut self, enabled: bool) {
        self.guard.set_debug_enabled(enabled);
    }

    pub fn step(&mut self) -> Step {
        let frame = self.frame;
        let dt = frame.dt();

        let eye = self.guard.navigator().position();
        let forward = self.guard.navigator().forward();
        let target = self.target.position();
        let perception = self.guard.perception_mut();
        perception.set_pose(eye, forward);
        perception.set_target(target);

        let state = self.guard.evaluate(&frame);
        self.guard.navigator_mut().step(dt);
        self.target.advance(dt);

        self.summary.record(self.last_state, state);
        self.summary.caught = self.guard.sink().caught;
        self.summary.spotted = self.guard.sink().spotted;
        self.last_state = Some(state);
        self.frame = frame.next();

        Step {
            tick: frame.tick,
            state,
            guard: self.guard.navigator().position(),
            target: self.target.position(),
        }
    }

    pub fn run(&mut self, ticks: u64) -> &Summary {
        for _ in 0..ticks {
            self.step();
        }
        &self.summary
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn guard(&self) -> &SimGuard {
        &self.guard
    }

    pub fn trace(&self) -> TraceLog {
        self.trace.snapshot()
    }
}
