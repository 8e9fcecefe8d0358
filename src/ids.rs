use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng, rngs::StdRng};

pub const CUSTOM_ID_PREFIX: &str = "custom-";

pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Hands out ids for user-created resources: `custom-<millis>`, with a random
/// hex suffix when two resources are created within the same millisecond.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    clock: fn() -> u64,
    rng: StdRng,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self { clock: unix_millis, rng: StdRng::from_entropy() }
    }
}

impl IdGenerator {
    pub fn with_clock(clock: fn() -> u64, seed: u64) -> Self {
        Self { clock, rng: StdRng::seed_from_u64(seed) }
    }

    pub fn next_id(&mut self, taken: impl Fn(&str) -> bool) -> String {
        let base = format!("{CUSTOM_ID_PREFIX}{}", (self.clock)());
        if !taken(&base) {
            return base;
        }
        loop {
            let suffix: u32 = self.rng.gen_range(0..0x1_0000);
            let candidate = format!("{base}-{suffix:04x}");
            if !taken(&candidate) {
                return candidate;
            }
        }
    }
}
