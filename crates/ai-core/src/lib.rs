//! Deterministic, engine-agnostic tick and time primitives.
//!
//! Everything an agent brain needs from its host each frame lives here: the tick index and
//! delta time ([`TickContext`]), a stable agent identity ([`AgentId`]), seeded randomness
//! ([`SplitMix64`]) and injectable clocks ([`TimeSource`]).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod rng;
pub mod tick;
pub mod time;

pub use agent::AgentId;
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
pub use time::{ManualClock, TimeSource};
