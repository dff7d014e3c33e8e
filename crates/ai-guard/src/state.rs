use std::fmt;

use ai_nav::Vec3;
use serde::{Deserialize, Serialize};

/// High-level decision reported to the caller after every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardState {
    #[default]
    Patrol,
    Chase,
    Search,
    ReturnToPatrol,
}

impl GuardState {
    /// Stable numeric code used in trace payloads.
    pub fn code(self) -> u64 {
        match self {
            GuardState::Patrol => 0,
            GuardState::Chase => 1,
            GuardState::Search => 2,
            GuardState::ReturnToPatrol => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GuardState::Patrol => "patrol",
            GuardState::Chase => "chase",
            GuardState::Search => "search",
            GuardState::ReturnToPatrol => "return_to_patrol",
        }
    }
}

impl fmt::Display for GuardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a guard remembers between ticks.
///
/// `last_known_position` is `None` whenever `state` is `Patrol`.
#[derive(Debug, Clone, PartialEq)]
pub struct GuardMemory {
    pub state: GuardState,
    /// Index of the waypoint the guard is heading to (or returns to after a pursuit).
    pub patrol_index: usize,
    pub patrol_destination_issued: bool,
    pub last_known_position: Option<Vec3>,
    pub chase_time_remaining: f32,
    pub search_time_remaining: f32,
    pub speed_multiplier: f32,
    /// `1.0` or `-1.0`: which way the guard is currently turning while looking around.
    pub look_direction: f32,
    /// Current look-around offset from the heading the guard arrived with, in degrees.
    pub look_rotation: f32,
    pub alert_raised: bool,
    /// Set on the tick ReturnToPatrol is entered. Arrival is only checked from the next tick.
    pub return_started: bool,
    pub caught_reports: u64,
    /// Seconds of simulated time seen by this guard.
    pub clock: f64,
}

impl Default for GuardMemory {
    fn default() -> Self {
        Self {
            state: GuardState::Patrol,
            patrol_index: 0,
            patrol_destination_issued: false,
            last_known_position: None,
            chase_time_remaining: 0.0,
            search_time_remaining: 0.0,
            speed_multiplier: 1.0,
            look_direction: 1.0,
            look_rotation: 0.0,
            alert_raised: false,
            return_started: false,
            caught_reports: 0,
            clock: 0.0,
        }
    }
}

impl GuardMemory {
    pub fn has_last_known_position(&self) -> bool {
        self.last_known_position.is_some()
    }
}
