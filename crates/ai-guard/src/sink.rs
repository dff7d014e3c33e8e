/// Receives game-level outcomes from a guard. Injected at construction.
pub trait GameStateSink {
    /// The target is within catch range. Called once per tick for as long as that holds.
    fn report_caught(&mut self);

    /// The guard has just started a pursuit.
    fn report_spotted(&mut self) {}
}

/// Counts reports. Handy for hosts that only poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountingSink {
    pub caught: u64,
    pub spotted: u64,
}

impl GameStateSink for CountingSink {
    fn report_caught(&mut self) {
        self.caught += 1;
    }

    fn report_spotted(&mut self) {
        self.spotted += 1;
    }
}
