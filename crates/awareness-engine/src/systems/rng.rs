//! Injectable randomness.
//!
//! Everything stochastic in a game (spawn positions, jitter, weather
//! toggles) draws from a [`RandomSource`] owned by the engine context, so a
//! run can be replayed from its seed and tests can script exact values.

/// A source of uniform random numbers.
pub trait RandomSource {
    /// Next value in [0, 1).
    fn next_f32(&mut self) -> f32;

    /// Uniform value in [min, max).
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// True with probability `p`.
    fn chance(&mut self, p: f32) -> bool {
        self.next_f32() < p
    }

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.chance(0.5)
    }
}

/// Seedable pseudo-random number generator (xorshift64).
/// Deterministic, fast, no-std compatible.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }
}

impl RandomSource for Rng {
    fn next_f32(&mut self) -> f32 {
        // Top 24 bits give an exactly representable f32 in [0, 1)
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// Replays a fixed list of values in a loop.
/// Useful for pinning down stochastic behavior in tests and demos.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// A source that always returns the same value.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRng {
    fn next_f32(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        v.clamp(0.0, 1.0 - f32::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_int(1000), rng2.next_int(1000));
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        // Should not panic or loop forever
        let _ = rng.next_int(100);
        let _ = rng.next_int(0);
    }

    #[test]
    fn next_f32_stays_in_unit_interval() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "value {} out of range", v);
        }
    }

    #[test]
    fn range_respects_bounds() {
        let mut rng = Rng::new(99);
        for _ in 0..1000 {
            let v = rng.range(-4.5, 4.5);
            assert!(v >= -4.5 && v < 4.5);
        }
    }

    #[test]
    fn sequence_replays_in_order() {
        let mut seq = SequenceRng::new(vec![0.1, 0.9]);
        assert_eq!(seq.next_f32(), 0.1);
        assert_eq!(seq.next_f32(), 0.9);
        assert_eq!(seq.next_f32(), 0.1);
        assert!(!seq.chance(0.5)); // draws 0.9
        assert!(seq.coin()); // draws 0.1
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let mut seq = SequenceRng::new(Vec::new());
        assert_eq!(seq.next_f32(), 0.0);
    }
}
