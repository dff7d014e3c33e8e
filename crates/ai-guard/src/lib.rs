//! Guard decision layer: a patrol / chase / search / return-to-patrol state machine driven by a
//! behavior tree.
//!
//! A [`GuardController`] owns its pursuit tree and a [`GuardContext`] holding tuning, memory
//! and the injected collaborators ([`Perception`], [`ai_nav::Navigator`], [`GameStateSink`]).
//! The host calls [`GuardController::evaluate`] once per frame and acts on the returned
//! [`GuardState`]. All timers advance by the frame's delta time only.

#![forbid(unsafe_code)]

mod behavior;
pub mod config;
pub mod context;
pub mod controller;
pub mod error;
pub mod perception;
pub mod sink;
pub mod state;
mod tree;

pub use config::GuardConfig;
pub use context::GuardContext;
pub use controller::GuardController;
pub use error::{GuardError, Result};
pub use perception::{ClearSight, ConePerception, LineOfSight, Perception, VisionCone};
pub use sink::{CountingSink, GameStateSink};
pub use state::{GuardMemory, GuardState};
