//! Leaf conditions and actions of the pursuit tree.
//!
//! Conditions only read the context. Actions mutate memory and talk to the collaborators; they
//! never block, and a step that has to continue next frame reports `Running`.

use ai_bt::Status;
use ai_core::DeterministicRng;
use ai_nav::Navigator;

use crate::{GameStateSink, GuardContext, GuardState, Perception};

/// RNG stream used to pick the initial look-around direction.
const LOOK_AROUND_STREAM: u64 = 0x4c4f_4f4b;

impl<P: Perception, N: Navigator, S: GameStateSink> GuardContext<P, N, S> {
    // Catch

    pub(crate) fn in_catch_range(&self) -> bool {
        match self.perception.target_position() {
            Some(target) => {
                self.navigator.position().distance(target) < self.config.catch_distance
            }
            None => false,
        }
    }

    pub(crate) fn catch_target(&mut self) -> Status {
        self.memory.caught_reports += 1;
        tracing::info!(
            agent = self.agent,
            tick = self.frame.tick,
            state = %self.memory.state,
            "target caught"
        );
        self.sink.report_caught();
        Status::Success
    }

    // Chase

    pub(crate) fn should_chase(&self) -> bool {
        self.perceived_target().is_some()
            || (self.memory.state == GuardState::Chase && self.memory.chase_time_remaining > 0.0)
    }

    /// Keep the last known position and persistence timer current.
    pub(crate) fn refresh_chase(&mut self) {
        match self.perceived_target() {
            Some(target) => {
                self.memory.last_known_position = Some(target);
                self.memory.chase_time_remaining = self.config.chase_persistence;
            }
            None => {
                self.memory.chase_time_remaining =
                    (self.memory.chase_time_remaining - self.dt()).max(0.0);
            }
        }
    }

    pub(crate) fn enter_chase(&mut self) {
        self.enter(GuardState::Chase);
    }

    pub(crate) fn move_to_target(&mut self) -> Status {
        let Some(destination) = self
            .perceived_target()
            .or(self.memory.last_known_position)
        else {
            return Status::Failure;
        };
        self.navigator.set_destination(destination);
        Status::Success
    }

    pub(crate) fn raise_alert(&mut self) -> Status {
        if !self.memory.alert_raised {
            self.memory.alert_raised = true;
            tracing::info!(
                agent = self.agent,
                tick = self.frame.tick,
                "target spotted, pursuing"
            );
            self.sink.report_spotted();
        }
        Status::Success
    }

    // Search

    pub(crate) fn should_search(&self) -> bool {
        let memory = &self.memory;
        let lost_target = memory.state == GuardState::Chase
            && memory.chase_time_remaining <= 0.0
            && memory.last_known_position.is_some()
            && self.perceived_target().is_none();
        let still_searching =
            memory.state == GuardState::Search && memory.search_time_remaining > 0.0;
        lost_target || still_searching
    }

    pub(crate) fn enter_search(&mut self) {
        if !self.enter(GuardState::Search) {
            return;
        }
        let mut rng = self.frame.rng_for_agent(self.agent, LOOK_AROUND_STREAM);
        self.memory.search_time_remaining = self.config.search_duration;
        self.memory.look_direction = rng.next_sign();
        self.memory.look_rotation = 0.0;
    }

    /// Walk to the last known position, then look around once there.
    pub(crate) fn search_last_known_position(&mut self) -> Status {
        let Some(point) = self.memory.last_known_position else {
            return Status::Failure;
        };
        if self.navigator.destination() != Some(point) {
            self.navigator.set_destination(point);
        }
        if !self.navigator.has_reached_destination() {
            return Status::Running;
        }
        self.look_around();
        Status::Success
    }

    fn look_around(&mut self) {
        let sweep = self.config.look_around_sweep;
        let step = self.config.look_around_speed * self.dt() * self.memory.look_direction;
        let current = self.memory.look_rotation;

        let mut next = current + step;
        if next.abs() >= sweep {
            next = sweep.copysign(next);
            self.memory.look_direction = -self.memory.look_direction;
        }

        let applied = next - current;
        if applied != 0.0 {
            self.navigator.rotate_by(applied);
        }
        self.memory.look_rotation = next;
    }

    pub(crate) fn count_down_search(&mut self) -> Status {
        self.memory.search_time_remaining =
            (self.memory.search_time_remaining - self.dt()).max(0.0);
        Status::Success
    }

    // Return to patrol

    pub(crate) fn should_return(&self) -> bool {
        let memory = &self.memory;
        (memory.state == GuardState::Search && memory.search_time_remaining <= 0.0)
            || memory.state == GuardState::ReturnToPatrol
    }

    pub(crate) fn enter_return(&mut self) {
        if !self.enter(GuardState::ReturnToPatrol) {
            return;
        }
        self.memory.return_started = true;
        if let Some(waypoint) = self.current_waypoint() {
            self.navigator.set_destination(waypoint);
        }
    }

    /// Never true on the entry tick, so ReturnToPatrol is reported at least once. An empty route
    /// counts as reached so the guard falls back to patrol.
    pub(crate) fn reached_patrol_route(&self) -> bool {
        !self.memory.return_started
            && (self.route.is_empty() || self.navigator.has_reached_destination())
    }

    pub(crate) fn travel_to_route(&mut self) -> Status {
        self.memory.return_started = false;
        Status::Running
    }

    // Patrol

    pub(crate) fn enter_patrol(&mut self) {
        if self.enter(GuardState::Patrol) {
            self.memory.patrol_destination_issued = false;
            self.memory.alert_raised = false;
            self.memory.return_started = false;
            self.memory.chase_time_remaining = 0.0;
            self.memory.search_time_remaining = 0.0;
            self.memory.look_rotation = 0.0;
        }
        self.memory.last_known_position = None;
    }

    pub(crate) fn patrol(&mut self) -> Status {
        if self.route.is_empty() {
            return Status::Failure;
        }

        if !self.memory.patrol_destination_issued {
            self.memory.patrol_index %= self.route.len();
            self.memory.patrol_destination_issued = true;
            self.navigator
                .set_speed_multiplier(self.config.patrol_speed_multiplier);
            self.navigator
                .set_destination(self.route[self.memory.patrol_index]);
            return Status::Running;
        }

        if self.navigator.has_reached_destination() {
            self.memory.patrol_index = (self.memory.patrol_index + 1) % self.route.len();
            tracing::trace!(
                agent = self.agent,
                waypoint = self.memory.patrol_index,
                "next patrol waypoint"
            );
            self.navigator
                .set_destination(self.route[self.memory.patrol_index]);
        }
        Status::Running
    }
}
