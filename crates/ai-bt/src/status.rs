/// Outcome of evaluating a node for one tick.
///
/// `Running` means "not resolved yet, evaluate me again next tick". It is a value, not a
/// suspension: nothing blocks, and the branch is simply abandoned if a higher-priority
/// sibling wins on a later tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
    Running,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Swap `Success` and `Failure`; `Running` is left alone.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }

    /// Stable numeric code used in trace payloads.
    pub fn code(self) -> u64 {
        match self {
            Status::Success => 0,
            Status::Failure => 1,
            Status::Running => 2,
        }
    }

    pub fn from_bool(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
