//! Pseudo-random numbers.
//!
//! [`Rand`] reproduces the default glibc `random()` generator (the
//! additive-feedback TYPE_3 table), so a given seed yields the same
//! sequence a C program linked against glibc prints.

/// Largest value [`Rand::next`] returns.
pub const RAND_MAX: i32 = 2_147_483_647;

const DEG: usize = 31;
const SEP: usize = 3;
const RING: usize = DEG + SEP;
const WARMUP: usize = 310;

/// glibc-compatible `rand`/`srand` state.
#[derive(Debug, Clone)]
pub struct Rand {
    ring: [u32; RING],
    pos: usize,
}

impl Rand {
    /// Equivalent to `srand(seed)`. A seed of zero is treated as one.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            ring: [0; RING],
            pos: 0,
        };
        rng.seed(seed);
        rng
    }

    /// Re-seed in place.
    pub fn seed(&mut self, seed: u32) {
        let seed = if seed == 0 { 1 } else { seed };
        let mut word = seed as i32;
        self.ring[0] = seed;
        for slot in self.ring.iter_mut().take(DEG).skip(1) {
            // 16807 * word % (2^31 - 1) without overflowing 31 bits.
            let hi = word / 127_773;
            let lo = word % 127_773;
            word = 16_807 * lo - 2_836 * hi;
            if word < 0 {
                word += RAND_MAX;
            }
            *slot = word as u32;
        }
        for i in DEG..RING {
            self.ring[i] = self.ring[i - DEG];
        }
        self.pos = 0;
        for _ in 0..WARMUP {
            self.step();
        }
    }

    fn step(&mut self) -> u32 {
        let value = self.ring[(self.pos + RING - DEG) % RING]
            .wrapping_add(self.ring[(self.pos + RING - SEP) % RING]);
        self.ring[self.pos] = value;
        self.pos = (self.pos + 1) % RING;
        value
    }

    /// Equivalent to `rand()`: a value in `0..=RAND_MAX`.
    pub fn next(&mut self) -> i32 {
        (self.step() >> 1) as i32
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new(1)
    }
}
