//! Numeric helpers.

use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Clamps a number between `min` and `max`.
///
/// # Examples
///
/// ```
/// use lightdash::number_clamp;
///
/// assert_eq!(number_clamp(2, 0, 10), 2);
/// assert_eq!(number_clamp(-5, 0, 10), 0);
/// assert_eq!(number_clamp(15.5, 0.0, 10.0), 10.0);
/// ```
pub fn number_clamp<T: PartialOrd>(val: T, min: T, max: T) -> T {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

/// Checks if a number lies in `[min, max]`.
///
/// # Examples
///
/// ```
/// use lightdash::number_in_range;
///
/// assert!(number_in_range(0.5, 0.0, 1.0));
/// assert!(number_in_range(1, 0, 1));
/// assert!(!number_in_range(2, 0, 1));
/// ```
pub fn number_in_range<T: PartialOrd>(val: T, min: T, max: T) -> bool {
    val >= min && val <= max
}

fn random_float<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

fn random_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min == max {
        return min;
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

/// Returns a random float between `min` and `max`.
///
/// # Examples
///
/// ```
/// use lightdash::number_random_float;
///
/// let n = number_random_float(1.0, 2.0);
/// assert!((1.0..=2.0).contains(&n));
/// ```
pub fn number_random_float(min: f64, max: f64) -> f64 {
    random_float(&mut rand::thread_rng(), min, max)
}

/// Returns a random integer in `[min, max]`. Reversed bounds are swapped.
///
/// # Examples
///
/// ```
/// use lightdash::number_random_int;
///
/// let n = number_random_int(-3, 3);
/// assert!((-3..=3).contains(&n));
/// ```
pub fn number_random_int(min: i64, max: i64) -> i64 {
    random_int(&mut rand::thread_rng(), min, max)
}

/// Random number source with a reproducible sequence.
///
/// Uses the xoshiro256** PRNG. The same seed yields the same numbers.
///
/// # Examples
///
/// ```
/// use lightdash::NumberRng;
///
/// let mut a = NumberRng::seed_from_u64(42);
/// let mut b = NumberRng::seed_from_u64(42);
/// assert_eq!(a.random_int(0, 1000), b.random_int(0, 1000));
/// ```
pub struct NumberRng {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl NumberRng {
    /// Create a generator with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Create a generator from a small integer seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    /// See [`number_random_float`].
    pub fn random_float(&mut self, min: f64, max: f64) -> f64 {
        random_float(&mut self.rng, min, max)
    }

    /// See [`number_random_int`].
    pub fn random_int(&mut self, min: i64, max: i64) -> i64 {
        random_int(&mut self.rng, min, max)
    }
}

impl Default for NumberRng {
    fn default() -> Self {
        Self::new(None)
    }
}
