//! Seeded random helpers
//!
//! Every draw goes through the state's `Pcg32`, so two runs with the same
//! seed and inputs make identical choices.

use rand::Rng;

/// Pick a bucket index with probability proportional to its weight.
///
/// Draws `u` in `[0, total)` and returns the first bucket with nonzero weight
/// whose cumulative weight is `>= u`. If rounding leaves `u` past every
/// bucket, the last nonzero bucket wins. Returns `None` when no weight is
/// positive.
pub fn weighted_choice<R: Rng + ?Sized>(rng: &mut R, weights: &[f32]) -> Option<usize> {
    let total: f32 = weights.iter().filter(|w| **w > 0.0).sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }
    let draw = rng.random::<f32>() * total;
    pick_bucket(weights, draw)
}

/// Bucket lookup for an already-drawn value
fn pick_bucket(weights: &[f32], draw: f32) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last = None;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last = Some(i);
        if cumulative >= draw {
            return Some(i);
        }
    }
    last
}

/// Choose `count` distinct indices from `0..len`, uniformly, in draw order
pub fn choose_distinct<R: Rng + ?Sized>(rng: &mut R, len: usize, count: usize) -> Vec<usize> {
    let mut pool: Vec<usize> = (0..len).collect();
    let count = count.min(len);
    // Partial Fisher-Yates
    for i in 0..count {
        let j = rng.random_range(i..len);
        pool.swap(i, j);
    }
    pool.truncate(count);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pick_bucket_boundaries() {
        let weights = [45.0, 45.0, 10.0];
        assert_eq!(pick_bucket(&weights, 0.0), Some(0));
        assert_eq!(pick_bucket(&weights, 45.0), Some(0));
        assert_eq!(pick_bucket(&weights, 45.5), Some(1));
        assert_eq!(pick_bucket(&weights, 99.9), Some(2));
    }

    #[test]
    fn test_pick_bucket_drift_falls_back_to_last() {
        let weights = [45.0, 45.0, 10.0];
        assert_eq!(pick_bucket(&weights, 100.5), Some(2));
    }

    #[test]
    fn test_zero_weights_are_never_chosen() {
        let weights = [0.0, 5.0, 0.0];
        assert_eq!(pick_bucket(&weights, 0.0), Some(1));
        assert_eq!(pick_bucket(&weights, 6.0), Some(1));
    }

    #[test]
    fn test_no_positive_weight() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert_eq!(weighted_choice(&mut rng, &[]), None);
        assert_eq!(weighted_choice(&mut rng, &[0.0, 0.0]), None);
        assert_eq!(weighted_choice(&mut rng, &[-1.0]), None);
    }

    #[test]
    fn test_weighted_choice_distribution() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut counts = [0u32; 3];
        for _ in 0..10_000 {
            let i = weighted_choice(&mut rng, &[45.0, 45.0, 10.0]).unwrap();
            counts[i] += 1;
        }
        // Loose bounds around 4500/4500/1000
        assert!((4000..5000).contains(&counts[0]), "{:?}", counts);
        assert!((4000..5000).contains(&counts[1]), "{:?}", counts);
        assert!((700..1300).contains(&counts[2]), "{:?}", counts);
    }

    #[test]
    fn test_choose_distinct() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            let picks = choose_distinct(&mut rng, 4, 2);
            assert_eq!(picks.len(), 2);
            assert_ne!(picks[0], picks[1]);
            assert!(picks.iter().all(|&i| i < 4));
        }
        assert_eq!(choose_distinct(&mut rng, 1, 2), vec![0]);
    }

    proptest! {
        #[test]
        fn weighted_choice_in_range(
            seed in any::<u64>(),
            weights in prop::collection::vec(0.0f32..100.0, 1..8),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            match weighted_choice(&mut rng, &weights) {
                Some(i) => {
                    prop_assert!(i < weights.len());
                    prop_assert!(weights[i] > 0.0);
                }
                None => prop_assert!(weights.iter().all(|w| *w <= 0.0)),
            }
        }
    }
}
