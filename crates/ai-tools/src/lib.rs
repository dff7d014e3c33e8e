//! Tooling primitives for deterministic game AI.
//!
//! Trace events are plain data recorded during simulation and rendered later by tooling. They
//! complement `tracing` logs: logs are for humans, trace events are for assertions, replays and
//! inspectors.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink};
