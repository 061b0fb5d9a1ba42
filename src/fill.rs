//! Random input generation with an explicit seeding policy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lower bound of generated values (inclusive).
pub const LO: f64 = 1.0;
/// Upper bound of generated values (exclusive).
pub const HI: f64 = 1000.0;

/// How the fill RNG is seeded.
///
/// The generator is reseeded once per fill. `Entropy` draws the seed
/// from the OS; `Fixed` makes the whole input sequence reproducible,
/// which is what the tests and benches use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedPolicy {
    Entropy,
    Fixed(u64),
}

/// Fill `vals` with doubles drawn uniformly from `[LO, HI)`.
pub fn fill(vals: &mut [f64], policy: SeedPolicy) {
    let mut rng = match policy {
        SeedPolicy::Entropy => ChaCha8Rng::from_os_rng(),
        SeedPolicy::Fixed(seed) => ChaCha8Rng::seed_from_u64(seed),
    };
    for v in vals.iter_mut() {
        *v = rng.random_range(LO..HI);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_seed_reproduces_the_sequence() {
        let mut a = [0.0; 32];
        let mut b = [0.0; 32];
        fill(&mut a, SeedPolicy::Fixed(42));
        fill(&mut b, SeedPolicy::Fixed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut a = [0.0; 32];
        let mut b = [0.0; 32];
        fill(&mut a, SeedPolicy::Fixed(1));
        fill(&mut b, SeedPolicy::Fixed(2));
        assert_ne!(a, b);
    }

    #[test]
    fn values_stay_in_range() {
        let mut vals = [0.0; 256];
        fill(&mut vals, SeedPolicy::Fixed(7));
        assert!(vals.iter().all(|v| (LO..HI).contains(v)));
    }
}
