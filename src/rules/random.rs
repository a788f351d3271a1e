//! Seeded random numbers compatible with the host's rule-seed generator
//!
//! The host derives every rule-seeded table from a subtractive generator
//! (Knuth, Seminumerical Algorithms) with the Mono runtime's constants.
//! Tables must be reproduced bit for bit, so the state update below mirrors
//! that generator exactly, including its 32-bit wrapping arithmetic.

const MSEED: i32 = 161_803_398;
const MBIG: i32 = i32::MAX;
const SCALE: f64 = 4.656_612_875_245_797e-10;

/// A source of bounded random integers.
///
/// Implementations must be deterministic for a given seed and call order.
pub trait RandomSource {
    /// Draw an integer in `[0, bound)`. A bound of zero yields zero.
    fn next(&mut self, bound: u32) -> u32;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next(&mut self, bound: u32) -> u32 {
        (**self).next(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next(&mut self, bound: u32) -> u32 {
        (**self).next(bound)
    }
}

/// Subtractive random number generator keyed by a 32-bit seed
#[derive(Debug, Clone)]
pub struct MonoRandom {
    seed: i32,
    seed_array: [i32; 56],
    inext: usize,
    inextp: usize,
}

impl MonoRandom {
    /// Create a generator for the given seed
    pub fn new(seed: i32) -> Self {
        let mut seed_array = [0i32; 56];

        let mut mj = MSEED.wrapping_sub(seed.wrapping_abs());
        seed_array[55] = mj;
        let mut mk: i32 = 1;

        for i in 1..55 {
            let ii = (21 * i) % 55;
            seed_array[ii] = mk;
            mk = mj.wrapping_sub(mk);
            if mk < 0 {
                mk = mk.wrapping_add(MBIG);
            }
            mj = seed_array[ii];
        }

        for _ in 1..5 {
            for k in 1..56 {
                seed_array[k] = seed_array[k].wrapping_sub(seed_array[1 + (k + 30) % 55]);
                if seed_array[k] < 0 {
                    seed_array[k] = seed_array[k].wrapping_add(MBIG);
                }
            }
        }

        Self {
            seed,
            seed_array,
            inext: 0,
            inextp: 31,
        }
    }

    /// The seed this generator was created with
    pub fn seed(&self) -> i32 {
        self.seed
    }

    fn internal_sample(&mut self) -> i32 {
        self.inext += 1;
        if self.inext >= 56 {
            self.inext = 1;
        }
        self.inextp += 1;
        if self.inextp >= 56 {
            self.inextp = 1;
        }

        let mut value = self.seed_array[self.inext].wrapping_sub(self.seed_array[self.inextp]);
        if value < 0 {
            value = value.wrapping_add(MBIG);
        }
        self.seed_array[self.inext] = value;
        value
    }

    /// Next value in `[0.0, 1.0)`
    pub fn next_double(&mut self) -> f64 {
        f64::from(self.internal_sample()) * SCALE
    }

    /// Next integer in `[0, max)`
    pub fn next_below(&mut self, max: i32) -> i32 {
        (self.next_double() * f64::from(max)) as i32
    }

    /// Next integer in `[min, max)`
    pub fn next_range(&mut self, min: i32, max: i32) -> i32 {
        let span = i64::from(max) - i64::from(min);
        ((self.next_double() * span as f64) as i64 + i64::from(min)) as i32
    }

    /// Coin flip; `true` when the drawn bit is zero
    pub fn next_bool(&mut self) -> bool {
        self.next_below(2) == 0
    }
}

impl RandomSource for MonoRandom {
    fn next(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        (self.next_double() * f64::from(bound)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = MonoRandom::new(12345);
        let mut rng2 = MonoRandom::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_double(), rng2.next_double());
        }
    }

    #[test]
    fn test_known_sequence() {
        let mut rng = MonoRandom::new(2);
        let drawn: Vec<u32> = (0..8).map(|_| rng.next(10)).collect();
        assert_eq!(drawn, vec![8, 1, 9, 3, 6, 1, 7, 5]);

        let mut rng = MonoRandom::new(12345);
        let drawn: Vec<i32> = (0..4).map(|_| rng.next_below(10)).collect();
        assert_eq!(drawn, vec![6, 8, 7, 4]);
    }

    #[test]
    fn test_bounds() {
        let mut rng = MonoRandom::new(-99);
        for _ in 0..1000 {
            let d = rng.next_double();
            assert!((0.0..1.0).contains(&d));
            assert!(rng.next(7) < 7);
            let r = rng.next_range(-3, 4);
            assert!((-3..4).contains(&r));
        }
        assert_eq!(rng.next(0), 0);
    }

    #[test]
    fn test_extreme_seeds_do_not_panic() {
        for seed in [i32::MIN, i32::MAX, 0, -1] {
            let mut rng = MonoRandom::new(seed);
            assert_eq!(rng.seed(), seed);
            assert!(rng.next(2) < 2);
        }
    }
}
