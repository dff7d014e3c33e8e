//! Seeded randomness for per-agent decisions.
//!
//! Not cryptographic. The only requirement is that the same `(seed, agent, stream)` triple
//! always yields the same sequence, so replays stay identical.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform in `[0, 1)` using the top 24 bits.
    fn next_f32_unit(&mut self) -> f32 {
        let x = self.next_u32() >> 8;
        (x as f32) / ((1u32 << 24) as f32)
    }

    fn next_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    /// `1.0` or `-1.0` with equal probability.
    fn next_sign(&mut self) -> f32 {
        if self.next_bool() {
            1.0
        } else {
            -1.0
        }
    }
}

/// SplitMix64 generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        mix64(self.state)
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D0_49BB_1331_11EB);
    x ^ (x >> 31)
}

/// Derive an independent stream seed for one agent.
pub fn derive_seed(global_seed: u64, agent_id: u64, stream: u64) -> u64 {
    mix64(global_seed ^ mix64(agent_id.wrapping_add(0x9E37_79B9_7F4A_7C15)) ^ mix64(stream))
}
