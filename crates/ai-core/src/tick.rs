use crate::{rng, AgentId, SplitMix64};

/// Per-frame input handed to every agent brain.
///
/// `tick` is a monotonically increasing frame index and `dt_seconds` the simulated time that
/// elapsed since the previous frame. Brains never read a wall clock; all timers advance by
/// `dt_seconds` only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
    pub seed: u64,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32) -> Self {
        Self {
            tick,
            dt_seconds,
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The context for the following frame, keeping delta time and seed.
    pub fn next(self) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            ..self
        }
    }

    /// Negative or non-finite deltas are treated as zero.
    pub fn dt(&self) -> f32 {
        if self.dt_seconds.is_finite() {
            self.dt_seconds.max(0.0)
        } else {
            0.0
        }
    }

    pub fn rng_for_agent<A: AgentId>(&self, agent: A, stream: u64) -> SplitMix64 {
        let seed = rng::derive_seed(self.seed, agent.stable_id(), stream);
        SplitMix64::new(seed)
    }
}
