//! Small deterministic PRNG for training and jitter
//!
//! Xorshift32 is plenty for weight initialization, mini-batch shuffling, and
//! forecast jitter, and keeps repeated runs reproducible from a single seed.
//! Not suitable for anything security-related.

/// Xorshift32 pseudo-random number generator
#[derive(Debug, Clone)]
pub struct Rng {
    state: u32,
}

impl Rng {
    /// Create a generator from a seed
    ///
    /// Xorshift cannot leave the zero state, so a zero seed is remapped.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    /// Next raw 32-bit value
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        // 24 mantissa bits keep the conversion exact
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in [-1, 1)
    pub fn next_signed(&mut self) -> f32 {
        self.next_f32() * 2.0 - 1.0
    }

    /// Uniform index in [0, n), n must be > 0
    pub fn next_range(&mut self, n: usize) -> usize {
        (self.next_f32() * n as f32) as usize % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut rng = Rng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_float_ranges() {
        let mut rng = Rng::new(7);
        for _ in 0..1000 {
            let f = rng.next_f32();
            assert!((0.0..1.0).contains(&f));

            let s = rng.next_signed();
            assert!((-1.0..1.0).contains(&s));
        }
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = Rng::new(123);
        for _ in 0..1000 {
            assert!(rng.next_range(10) < 10);
            assert_eq!(rng.next_range(1), 0);
        }
    }
}
