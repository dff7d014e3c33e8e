use ai_core::{TickContext, TimeSource};
use ai_nav::{Navigator, Vec3};

use crate::{GameStateSink, GuardConfig, GuardMemory, GuardState, Perception};

/// The blackboard a guard's tree runs against: tuning, route, memory and the injected
/// collaborators, plus the frame currently being evaluated.
#[derive(Debug)]
pub struct GuardContext<P, N, S> {
    pub(crate) agent: u64,
    pub(crate) config: GuardConfig,
    pub(crate) route: Vec<Vec3>,
    pub(crate) memory: GuardMemory,
    pub(crate) perception: P,
    pub(crate) navigator: N,
    pub(crate) sink: S,
    pub(crate) frame: TickContext,
}

impl<P: Perception, N: Navigator, S: GameStateSink> GuardContext<P, N, S> {
    pub(crate) fn new(
        agent: u64,
        config: GuardConfig,
        route: Vec<Vec3>,
        perception: P,
        navigator: N,
        sink: S,
    ) -> Self {
        let mut memory = GuardMemory::default();
        memory.speed_multiplier = config.patrol_speed_multiplier;
        Self {
            agent,
            config,
            route,
            memory,
            perception,
            navigator,
            sink,
            frame: TickContext::new(0, 0.0),
        }
    }

    pub fn agent(&self) -> u64 {
        self.agent
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    pub fn route(&self) -> &[Vec3] {
        &self.route
    }

    pub fn memory(&self) -> &GuardMemory {
        &self.memory
    }

    pub fn state(&self) -> GuardState {
        self.memory.state
    }

    pub fn frame(&self) -> &TickContext {
        &self.frame
    }

    pub(crate) fn begin_frame(&mut self, frame: &TickContext) {
        self.frame = *frame;
        self.memory.clock += f64::from(frame.dt());
    }

    pub(crate) fn dt(&self) -> f32 {
        self.frame.dt()
    }

    /// Live target position, but only while the target is perceivable.
    pub(crate) fn perceived_target(&self) -> Option<Vec3> {
        if self.perception.can_perceive_target() {
            self.perception.target_position()
        } else {
            None
        }
    }

    pub(crate) fn current_waypoint(&self) -> Option<Vec3> {
        if self.route.is_empty() {
            return None;
        }
        let index = self.memory.patrol_index % self.route.len();
        Some(self.route[index])
    }

    /// Switch state and push that state's speed to the navigator. Returns false when the guard
    /// was already in `next`.
    pub(crate) fn enter(&mut self, next: GuardState) -> bool {
        let previous = self.memory.state;
        if previous == next {
            return false;
        }
        tracing::debug!(
            agent = self.agent,
            tick = self.frame.tick,
            from = %previous,
            to = %next,
            "guard state transition"
        );
        self.memory.state = next;
        let multiplier = self.speed_multiplier_for(next);
        self.memory.speed_multiplier = multiplier;
        self.navigator.set_speed_multiplier(multiplier);
        true
    }

    fn speed_multiplier_for(&self, state: GuardState) -> f32 {
        match state {
            GuardState::Patrol => self.config.patrol_speed_multiplier,
            GuardState::Chase => self.config.chase_speed_multiplier,
            GuardState::Search => self.config.search_speed_multiplier,
            GuardState::ReturnToPatrol => self.config.return_speed_multiplier,
        }
    }
}

/// Guard time is the sum of frame deltas seen so far, so `wait_for` leaves in guard trees follow
/// simulated time.
impl<P, N, S> TimeSource for GuardContext<P, N, S> {
    fn now(&self) -> f64 {
        self.memory.clock
    }
}
