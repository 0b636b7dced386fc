//! Gameplay randomness backed by a thread-local `fastrand` generator.
//!
//! Ranges are half-open: `min` inclusive, `max` exclusive. Passing an empty
//! range returns `min` instead of panicking.

/// Reseed the thread-local generator, making subsequent draws reproducible.
pub fn random_seed(seed: u64) {
    fastrand::seed(seed);
}

pub fn random_f32(min_inclusive: f32, max_exclusive: f32) -> f32 {
    if min_inclusive >= max_exclusive {
        return min_inclusive;
    }
    min_inclusive + fastrand::f32() * (max_exclusive - min_inclusive)
}

pub fn random_i32(min_inclusive: i32, max_exclusive: i32) -> i32 {
    if min_inclusive >= max_exclusive {
        return min_inclusive;
    }
    fastrand::i32(min_inclusive..max_exclusive)
}

/// Uniform value in `[0, 1)`.
pub fn random_unit() -> f32 {
    fastrand::f32()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_range() {
        random_seed(7);
        for _ in 0..1000 {
            let f = random_f32(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&f));
            let i = random_i32(1, 4);
            assert!((1..4).contains(&i));
        }
    }

    #[test]
    fn seeding_is_reproducible() {
        random_seed(42);
        let a: Vec<i32> = (0..8).map(|_| random_i32(0, 100)).collect();
        random_seed(42);
        let b: Vec<i32> = (0..8).map(|_| random_i32(0, 100)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_range_returns_min() {
        assert_eq!(random_i32(5, 5), 5);
        assert_eq!(random_f32(1.0, 1.0), 1.0);
    }
}
