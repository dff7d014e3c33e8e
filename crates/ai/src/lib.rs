//! Umbrella crate that re-exports the `ai-*` building blocks.
//!
//! Enable only the layers you need: `bt` for the behavior tree core, `guard` for the pursuit
//! state machine built on it.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use ai_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use ai_tools as tools;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use ai_nav as nav;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use ai_bt as bt;

#[cfg(feature = "guard")]
#[cfg_attr(docsrs, doc(cfg(feature = "guard")))]
pub use ai_guard as guard;

/// The names most hosts need.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use ai_core::{ManualClock, TickContext, TimeSource};

    #[cfg(feature = "bt")]
    pub use ai_bt::{Status, Tree, TreeBuilder, TreeRunner};

    #[cfg(feature = "nav")]
    pub use ai_nav::{DirectNavigator, Navigator, Vec3};

    #[cfg(feature = "guard")]
    pub use ai_guard::{GameStateSink, GuardConfig, GuardController, GuardState, Perception};
}
