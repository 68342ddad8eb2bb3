use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Derive the seed of one trial's random stream from the run's base seed.
///
/// splitmix64 finalizer over `base_seed + trial_index`. Pure, so any worker can
/// reconstruct trial `i`'s stream without touching shared state.
pub fn trial_seed(base_seed: u64, trial_index: u64) -> u64 {
    let mut x = base_seed
        .wrapping_add(trial_index)
        .wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Seed taken from the wall clock, for runs that did not ask for one
pub fn seed_from_clock() -> u64 {
    chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64
}

/// Resolve a user supplied seed. Missing or zero falls back to the clock.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) if s != 0 => s,
        _ => seed_from_clock(),
    }
}

/// Seeded random number generator owned by a single trial
#[derive(Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        GameRng { rng, seed }
    }

    /// Stream for trial `trial_index` of a run seeded with `base_seed`
    pub fn for_trial(base_seed: u64, trial_index: u64) -> Self {
        Self::new(trial_seed(base_seed, trial_index))
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in range [0, max)
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Fisher-Yates shuffle for a mutable slice
    pub fn shuffle<T>(&mut self, array: &mut [T]) {
        for i in (1..array.len()).rev() {
            let j = self.random_range(i + 1);
            array.swap(i, j);
        }
    }
}
