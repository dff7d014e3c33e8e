//! Headless guard simulation: a scripted target walks past a patrolling guard.

#![forbid(unsafe_code)]

pub mod scenario;
pub mod world;

pub use scenario::{Scenario, TargetScript};
pub use world::{LoggingSink, ScriptedTarget, SimWorld, Step, Summary};
