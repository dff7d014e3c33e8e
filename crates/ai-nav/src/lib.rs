//! Navigation primitives.
//!
//! Decision code only talks to a [`Navigator`]: it issues destinations and polls arrival. How
//! the body actually gets there (navmesh, physics, animation) belongs to the host.
//! [`DirectNavigator`] is a straight-line reference implementation for headless simulation and
//! tests.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod direct;
pub mod math;
pub mod navigator;

pub use direct::DirectNavigator;
pub use math::Vec3;
pub use navigator::Navigator;
