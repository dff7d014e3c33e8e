use core::fmt::Debug;

/// Stable identifier for an agent.
///
/// Agents are ordered and hashed into RNG streams by this id, so it must not depend on
/// allocation order or pointer values.
pub trait AgentId: Copy + Ord + Eq + Debug {
    fn stable_id(self) -> u64;
}

impl AgentId for u64 {
    fn stable_id(self) -> u64 {
        self
    }
}

impl AgentId for u32 {
    fn stable_id(self) -> u64 {
        u64::from(self)
    }
}
